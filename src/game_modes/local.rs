use std::time::Duration;

use anyhow::Result;
use tracing::{info, trace};

use crate::display::Display;
use crate::game::{Game, InputAction, KeyboardState};
use crate::ui;

use super::common::FrameLimiter;

impl Game {
    /// Local two-player loop. Returns how the player left: `Leave` goes back
    /// to the menu, `Quit` ends the program.
    pub fn run(&mut self, display: &mut Display, hold_timeout: Duration) -> Result<InputAction> {
        info!("game started");

        let mut keys = KeyboardState::new(display.reports_releases(), hold_timeout);
        let mut limiter = FrameLimiter::new(self.config.fps);

        loop {
            for event in display.poll_events(Duration::ZERO)? {
                if let Some(action) = self.handle_event(&mut keys, &event) {
                    info!(
                        ?action,
                        left = self.score.left,
                        right = self.score.right,
                        "game ended"
                    );
                    return Ok(action);
                }
            }

            self.handle_input(&keys);
            let events = self.update();
            if events.wall_collision || events.paddle_collision {
                trace!(vx = self.ball.vx, vy = self.ball.vy, "ball bounced");
            }
            self.draw(display)?;

            limiter.tick();
        }
    }

    pub fn draw(&self, display: &mut Display) -> Result<()> {
        display.draw(|f| ui::render(f, self))
    }
}
