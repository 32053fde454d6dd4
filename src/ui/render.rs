use ratatui::{
    layout::Rect as Area,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use crate::game::state::Rect;
use crate::game::{Game, Player};

// Score glyphs are drawn roughly 50 field pixels tall (5 font rows)
const SCORE_PIXEL_SIZE: f32 = 10.0;
// Scores sit this far below the top of the field
const SCORE_TOP: f32 = 20.0;

/// Maps field pixels onto Braille dots
struct Projection {
    scale_x: f32,
    scale_y: f32,
}

impl Projection {
    fn new(canvas: &BrailleCanvas, field_width: f32, field_height: f32) -> Self {
        Self {
            scale_x: canvas.pixel_width() as f32 / field_width,
            scale_y: canvas.pixel_height() as f32 / field_height,
        }
    }

    fn x(&self, vx: f32) -> usize {
        (vx * self.scale_x).round().max(0.0) as usize
    }

    fn y(&self, vy: f32) -> usize {
        (vy * self.scale_y).round().max(0.0) as usize
    }

    fn fill(&self, canvas: &mut BrailleCanvas, rect: &Rect, color: Color) {
        let x = self.x(rect.left());
        let y = self.y(rect.top());
        let width = self.x(rect.right()).saturating_sub(x).max(1);
        let height = self.y(rect.bottom()).saturating_sub(y).max(1);
        canvas.fill_rect(x, y, width, height, color);
    }
}

/// Draw the whole field: paddles, ball, center line and scores.
pub fn render(frame: &mut Frame, game: &Game) {
    let area = frame.area();
    let config = &game.config;

    let bg = Block::default().style(Style::default().bg(config.background()));
    frame.render_widget(bg, area);

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let projection = Projection::new(&canvas, config.width, config.height);

    draw_center_line(&mut canvas, &projection, game);

    for player in [Player::Left, Player::Right] {
        projection.fill(&mut canvas, &game.player_paddle(player).rect, config.paddle());
    }
    projection.fill(&mut canvas, &game.ball.rect, config.ball());

    draw_scores(&mut canvas, &projection, game);

    render_braille_canvas(frame, &canvas, area, config.background());
}

fn draw_center_line(canvas: &mut BrailleCanvas, projection: &Projection, game: &Game) {
    let center_x = projection.x(game.config.width / 2.0);
    let color = game.config.paddle();

    // Dashed: two dots on, two off
    for y in (0..canvas.pixel_height()).step_by(4) {
        canvas.set_pixel(center_x, y, color);
        canvas.set_pixel(center_x, y + 1, color);
    }
}

fn draw_scores(canvas: &mut BrailleCanvas, projection: &Projection, game: &Game) {
    let config = &game.config;
    let scale = projection.y(SCORE_PIXEL_SIZE).max(1);
    let y = projection.y(SCORE_TOP);

    // Each score is centered on its quarter of the field
    let scores = [
        (game.score.left, config.width / 4.0),
        (game.score.right, 3.0 * config.width / 4.0),
    ];
    for (value, center) in scores {
        let half = BrailleCanvas::number_width(value, scale) / 2;
        let x = projection.x(center).saturating_sub(half);
        canvas.draw_number(value, x, y, scale, config.score());
    }
}

/// Emit one line per cell row, splitting spans where the color changes.
fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Area, background: Color) {
    let rows = canvas.pixel_height() / 4;
    let columns = canvas.pixel_width() / 2;

    let lines: Vec<Line> = (0..rows)
        .map(|y| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_color = None;

            for x in 0..columns {
                let color = canvas.color_at(x, y);
                if color != run_color && !run.is_empty() {
                    spans.push(styled(std::mem::take(&mut run), run_color, background));
                }
                run_color = color;
                run.push(canvas.to_char(x, y));
            }
            if !run.is_empty() {
                spans.push(styled(run, run_color, background));
            }

            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn styled(text: String, color: Option<Color>, background: Color) -> Span<'static> {
    let style = Style::default().bg(background);
    match color {
        Some(fg) => Span::styled(text, style.fg(fg)),
        None => Span::styled(text, style),
    }
}
