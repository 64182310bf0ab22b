//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

pub mod keypad;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

/// Split the terminal into display, keypad and status bar
pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    AppLayout {
        display: chunks[0],
        keypad: chunks[1],
        status: chunks[2],
    }
}

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let regions = layout(area);

    render_display(frame, regions.display, state);
    keypad::render_keypad(frame, regions.keypad, state);
    render_status_bar(frame, regions.status, state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(error) = state.error() {
        render_error_overlay(frame, area, error, state);
    }
}

/// Title of the display block, showing the pending operation
fn display_title(state: &AppState) -> String {
    let session = state.calculator.session();
    match (session.pending_operand, session.pending_operator) {
        (Some(operand), Some(op)) => format!(" {} {} ", operand, op),
        _ => " fourcalc ".to_string(),
    }
}

fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.config.colors {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display = Paragraph::new(state.display_text())
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(display_title(state))
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(display, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.error().is_some() {
        "Esc/Enter: Dismiss | q: Quit"
    } else {
        "0-9 . + - * / | Enter: = | Backspace: DEL | c: Clear | F1: Help | q: Quit"
    };

    let hint_style = if state.config.colors {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    let status = Paragraph::new(Line::from(Span::styled(hints, hint_style)))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  0-9 .        - Enter a number"),
        Line::from("  + - * /      - Choose operator"),
        Line::from("  Enter or =   - Compute result"),
        Line::from("  Backspace    - Delete last digit"),
        Line::from("  c            - Clear everything"),
        Line::from(""),
        Line::from("  Mouse click  - Press a keypad button"),
        Line::from("  F1           - Toggle help"),
        Line::from("  q / Ctrl+C   - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let accent = if state.config.colors {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let error_text = vec![
        Line::from(Span::styled("Error", accent.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc or Enter to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(accent),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
