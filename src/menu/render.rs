// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::state::Menu;

/// Render the title and items, each centered on its field position.
pub fn render_menu(frame: &mut Frame, menu: &Menu) {
    let area = frame.area();
    let style = &menu.style;

    let bg = Block::default().style(Style::default().bg(style.background()));
    frame.render_widget(bg, area);

    let title = Span::styled(
        menu.title.as_str(),
        Style::default()
            .fg(style.unselected())
            .add_modifier(Modifier::BOLD),
    );
    draw_centered(frame, menu, area, menu.title_position, title);

    for item in &menu.items {
        let label = if item.is_selected {
            Span::styled(
                item.label.as_str(),
                Style::default()
                    .fg(style.selected())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(item.label.as_str(), Style::default().fg(style.unselected()))
        };
        draw_centered(frame, menu, area, item.position, label);
    }

    draw_controls(frame, area);
}

fn draw_centered(frame: &mut Frame, menu: &Menu, area: Rect, position: (f32, f32), text: Span) {
    let (field_width, field_height) = menu.field;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let center_col = (position.0 / field_width * area.width as f32) as u16;
    let row = ((position.1 / field_height * area.height as f32) as u16).min(area.height - 1);

    let width = (text.width() as u16).min(area.width);
    let x = center_col
        .saturating_sub(width / 2)
        .min(area.width - width);

    let label_area = Rect {
        x: area.x + x,
        y: area.y + row,
        width,
        height: 1,
    };

    frame.render_widget(Paragraph::new(Line::from(text)), label_area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    if area.height < 2 {
        return;
    }

    let controls = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Back", Style::default().fg(Color::DarkGray)),
    ]);

    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        hint_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, MenuConfig};
    use crate::menu::state::MenuEvent;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(menu: &Menu) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render_menu(f, menu)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn find(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        (0..buffer.area.height).find_map(|y| {
            row_text(buffer, y)
                .find(needle)
                .map(|x| (x as u16, y))
        })
    }

    #[test]
    fn test_title_and_items_are_drawn_at_their_rows() {
        let menu = Menu::main_menu(MenuConfig::default(), &GameConfig::default()).unwrap();
        let buffer = draw(&menu);

        // 24 rows: title at 1/4, start at 1/2, quit 100/600 of the height lower
        assert_eq!(find(&buffer, "PONG").map(|(_, y)| y), Some(6));
        assert_eq!(find(&buffer, "Start Game").map(|(_, y)| y), Some(12));
        assert_eq!(find(&buffer, "Quit").map(|(_, y)| y), Some(16));
    }

    #[test]
    fn test_selected_item_is_highlighted() {
        let mut menu = Menu::main_menu(MenuConfig::default(), &GameConfig::default()).unwrap();

        let buffer = draw(&menu);
        let (x, y) = find(&buffer, "Start Game").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(255, 255, 0));
        let (x, y) = find(&buffer, "Quit").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(255, 255, 255));

        menu.handle_event(MenuEvent::Down);
        let buffer = draw(&menu);
        let (x, y) = find(&buffer, "Quit").unwrap();
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(255, 255, 0));
    }
}
