//! Keypad layout, hit testing and rendering
//!
//! Rendering and mouse handling share [`button_rects`] so a click always
//! lands on the button drawn under the cursor.

use libfourcalc::Button;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;

/// Screen rectangle of every keypad button inside `area`
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let rows = Button::KEYPAD;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(area);

    let mut rects = Vec::with_capacity(18);
    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .split(*row_area);
        rects.extend(row.iter().copied().zip(cells.iter().copied()));
    }
    rects
}

/// The button drawn at a terminal cell, if any
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(button, _)| button)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn button_color(button: Button) -> Color {
    match button {
        Button::Operator(_) => Color::Yellow,
        Button::Equals => Color::Green,
        Button::Clear | Button::Backspace => Color::Red,
        Button::Digit(_) | Button::Decimal => Color::White,
    }
}

/// Draw the keypad
pub fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    for (button, rect) in button_rects(area) {
        let mut style = Style::default();
        if state.config.colors {
            style = style.fg(button_color(button));
        }
        if state.pressed == Some(button) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }

        let widget = Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));

        frame.render_widget(widget, rect);
    }
}
