//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What to show for one field box
pub struct FieldView<'a> {
    /// Translated label
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed when the value is empty
    pub placeholder: &'a str,
    /// Translated validation message
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Select fields open a picker instead of taking typed input
    pub is_select: bool,
}

/// Draw a form field, with its validation message on the bottom border
pub fn draw_field_with_value(frame: &mut Frame, area: Rect, field: FieldView) {
    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Typed fields get a cursor, select fields an arrow
    let cursor = match (field.is_active, field.is_select) {
        (true, false) => "▌",
        (_, true) => " ▾",
        (false, false) => "",
    };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.value.is_empty() {
        Paragraph::new(Line::from(vec![
            Span::styled(
                field.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            cursor_span,
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value, style),
            cursor_span,
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a dimmed line of key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
