use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Controls, GameConfig};

/// Distance between each paddle and its side of the field.
pub const PADDLE_MARGIN: f32 = 50.0;

/// Axis-aligned rectangle in field pixels. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn set_center(&mut self, cx: f32, cy: f32) {
        self.x = cx - self.width / 2.0;
        self.y = cy - self.height / 2.0;
    }

    /// Strict overlap: rectangles sharing only an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Move by `dy`, staying inside `[0, field_height]`.
    pub fn shift(&mut self, dy: f32, field_height: f32) {
        let max_y = field_height - self.rect.height;
        self.rect.y = (self.rect.y + dy).clamp(0.0, max_y);
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, size, size),
            vx: 0.0,
            vy: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Left,
    Right,
}

/// Simulation state for one play session.
pub struct Game {
    pub config: GameConfig,
    pub controls: Controls,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub(super) rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig, controls: Controls) -> Self {
        Self::with_rng(config, controls, StdRng::from_entropy())
    }

    /// Deterministic serves and bounces, for tests and replays.
    pub fn with_seed(config: GameConfig, controls: Controls, seed: u64) -> Self {
        Self::with_rng(config, controls, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, controls: Controls, rng: StdRng) -> Self {
        let mut game = Self {
            left_paddle: Paddle::new(0.0, 0.0, config.paddle_width, config.paddle_height),
            right_paddle: Paddle::new(0.0, 0.0, config.paddle_width, config.paddle_height),
            ball: Ball::new(config.ball_size),
            score: Score::default(),
            config,
            controls,
            rng,
        };
        game.reset();
        game
    }

    /// Start a fresh session: paddles centered, ball served, scores zeroed.
    pub fn reset(&mut self) {
        let paddle_y = self.config.height / 2.0 - self.config.paddle_height / 2.0;
        self.left_paddle.rect.x = PADDLE_MARGIN;
        self.left_paddle.rect.y = paddle_y;
        self.right_paddle.rect.x = self.config.width - PADDLE_MARGIN - self.config.paddle_width;
        self.right_paddle.rect.y = paddle_y;

        self.reset_ball();
        self.score = Score::default();
    }

    /// Recenter the ball and serve it with a random horizontal component.
    /// The vertical component always starts at full speed, downwards.
    pub fn reset_ball(&mut self) {
        self.ball
            .rect
            .set_center(self.config.width / 2.0, self.config.height / 2.0);

        let angle: f32 = self.rng.gen_range(-0.5..=0.5);
        let direction = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vx = direction * self.config.ball_speed * angle.abs();
        self.ball.vy = self.config.ball_speed;
    }

    pub fn player_paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::Left => &self.left_paddle,
            Player::Right => &self.right_paddle,
        }
    }
}
