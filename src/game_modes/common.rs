//! Frame pacing shared by the menu and the game loop

use std::time::{Duration, Instant};

/// Keeps a loop at a fixed frame rate by sleeping off whatever is left of
/// each frame.
///
/// # Example
/// ```rust,ignore
/// let mut limiter = FrameLimiter::new(60);
/// loop {
///     // ... input, update, draw ...
///     limiter.tick();
/// }
/// ```
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u64) -> Self {
        Self {
            frame: frame_duration(fps),
            frame_start: Instant::now(),
        }
    }

    /// Sleep until the current frame is over and start the next one.
    pub fn tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

pub fn frame_duration(fps: u64) -> Duration {
    Duration::from_secs(1) / u32::try_from(fps.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_duration(1), Duration::from_secs(1));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_huge_frame_rate_does_not_divide_by_zero() {
        assert_eq!(frame_duration(1 << 32), Duration::ZERO);
        assert_eq!(frame_duration(u64::MAX), Duration::ZERO);
        FrameLimiter::new(1 << 32).tick();
    }

    #[test]
    fn test_tick_waits_out_the_frame() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.tick();
        limiter.tick();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
