use rand::Rng;
use tracing::debug;

use super::state::{Ball, Game, Paddle, Player};

/// What happened during one update step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub wall_collision: bool,
    pub paddle_collision: bool,
    pub scored: Option<Player>,
}

impl Game {
    /// Advance the ball one frame.
    ///
    /// Paddle collisions are resolved before scoring, so a ball that touches
    /// a paddle while crossing a side boundary in the same step still scores.
    /// That ordering is an implementation detail, not a rule of the game.
    pub fn update(&mut self) -> PhysicsEvents {
        let mut events = PhysicsEvents::default();
        let height = self.config.height;
        let width = self.config.width;

        self.ball.rect.x += self.ball.vx;
        self.ball.rect.y += self.ball.vy;

        // Top and bottom walls
        if self.ball.rect.top() <= 0.0 {
            self.ball.rect.y = 0.0;
            self.ball.vy = self.ball.vy.abs();
            events.wall_collision = true;
        } else if self.ball.rect.bottom() >= height {
            self.ball.rect.y = height - self.ball.rect.height;
            self.ball.vy = -self.ball.vy.abs();
            events.wall_collision = true;
        }

        // Paddles
        let hit_left = bounce_off_paddle(&mut self.ball, &self.left_paddle);
        let hit_right = !hit_left && bounce_off_paddle(&mut self.ball, &self.right_paddle);
        if hit_left || hit_right {
            self.ball.vy += self.rng.gen_range(-1.0f32..=1.0);
            events.paddle_collision = true;
        }

        // Goals
        if self.ball.rect.left() <= 0.0 {
            events.scored = Some(Player::Right);
        } else if self.ball.rect.right() >= width {
            events.scored = Some(Player::Left);
        }

        if let Some(player) = events.scored {
            match player {
                Player::Left => self.score.left += 1,
                Player::Right => self.score.right += 1,
            }
            debug!(
                ?player,
                left = self.score.left,
                right = self.score.right,
                "point scored"
            );
            self.reset_ball();
        }

        events
    }
}

/// Reflect the ball off `paddle` if they overlap, pushing the ball back out
/// on the side it came from so a single contact reverses it only once.
fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.overlaps(&paddle.rect) {
        return false;
    }

    ball.vx = -ball.vx;

    let (ball_cx, _) = ball.rect.center();
    let (paddle_cx, _) = paddle.rect.center();
    if ball_cx < paddle_cx {
        ball.rect.x = paddle.rect.left() - ball.rect.width;
    } else {
        ball.rect.x = paddle.rect.right();
    }

    true
}
