//! Layout components (header, status bar)

use crate::state::{AppState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title bar with the current language on the right
pub fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", state.t("Engineers Cell")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            match state.current_view {
                View::Form => "",
                View::Contact => "› ",
            },
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(match state.current_view {
            View::Form => "",
            View::Contact => state.t("Contact Us"),
        }),
    ]));
    frame.render_widget(title, chunks[0]);

    let language = Paragraph::new(Line::from(vec![
        Span::styled("🌐 ", Style::default().fg(Color::DarkGray)),
        Span::raw(state.language.display_name()),
    ]))
    .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(language, chunks[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![];

    if state.submitting {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            state.t("Submitting..."),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(" ○ ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            get_view_hints(state.current_view),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let errors = state.form.errors.len();
    if errors > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("✗ {errors}"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> &'static str {
    match view {
        View::Form => "Tab:next  Enter:choose/submit",
        View::Contact => "Esc:back",
    }
}
