//! Selection list overlay used for districts, talukas, branches and languages

use super::base::{centered_rect, key_hint, text_width};
use crate::i18n::Language;
use crate::state::Picker;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Rows the list may take before it scrolls
const MAX_VISIBLE_ROWS: u16 = 12;

pub fn render_picker_dialog(frame: &mut Frame, picker: &Picker, language: Language) {
    let title = language.translate(picker.kind.title_key());
    let widest = picker
        .options
        .iter()
        .map(|o| text_width(o))
        .max()
        .unwrap_or(0)
        .max(text_width(title));
    let rows = (picker.options.len() as u16).min(MAX_VISIBLE_ROWS);
    // borders + list + hint line
    let area = centered_rect(frame.area(), widest + 8, rows + 3);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {title} "))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = picker
        .options
        .iter()
        .map(|o| ListItem::new(format!(" {o} ")))
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let mut list_state = ListState::default().with_selected(Some(picker.selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let hint = Paragraph::new(Line::from(key_hint(language.translate("to choose / close"))))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[1]);
}
