//! Registration form rendering

use super::field_renderer::{draw_field_with_value, draw_help_text, FieldView};
use crate::platform::{CONTACT_SHORTCUT, LANGUAGE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, FieldName};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows for a single-line field box
const FIELD_HEIGHT: u16 = 3;
/// Rows for a multi-line field box
const MULTILINE_HEIGHT: u16 = 5;

const LEFT_COLUMN: [FieldName; 5] = [
    FieldName::ProfilePicture,
    FieldName::Name,
    FieldName::Email,
    FieldName::Phone,
    FieldName::Address,
];

const RIGHT_COLUMN: [FieldName; 4] = [
    FieldName::District,
    FieldName::Taluka,
    FieldName::Branch,
    FieldName::Message,
];

fn field_height(field: FieldName) -> u16 {
    if field.is_multiline() {
        MULTILINE_HEIGHT
    } else {
        FIELD_HEIGHT
    }
}

/// Draw the form in two columns with the submit button underneath
pub fn draw_registration_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.t("User Information Form")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_column(frame, columns[0], state, &LEFT_COLUMN);
    draw_column(frame, columns[1], state, &RIGHT_COLUMN);

    draw_submit_button(frame, rows[1], state);

    let help = format!(
        "Tab:next  Shift+Tab:prev  Enter:choose  {SUBMIT_SHORTCUT}:{}  {LANGUAGE_SHORTCUT}:{}  {CONTACT_SHORTCUT}:{}",
        state.t("Submit"),
        state.t("Language"),
        state.t("Contact Us"),
    );
    draw_help_text(frame, rows[2], &help);
}

fn draw_column(frame: &mut Frame, area: Rect, state: &AppState, fields: &[FieldName]) {
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(*f)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(area);

    let active = state.form.active_field_name();
    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        let field = *field;
        draw_field_with_value(
            frame,
            *chunk,
            FieldView {
                label: state.t(field.label_key()),
                value: state.form.value(field),
                placeholder: placeholder(state, field),
                error: state.form.errors.get(field).map(|key| state.t(key)),
                is_active: active == Some(field),
                is_multiline: field.is_multiline(),
                is_select: field.is_select(),
            },
        );
    }
}

fn placeholder(state: &AppState, field: FieldName) -> &'static str {
    match field {
        FieldName::ProfilePicture => state.t("Image path or URL"),
        FieldName::District => state.t("Select District"),
        FieldName::Taluka if state.form.district.is_empty() => state.t("Select District first"),
        FieldName::Taluka => state.t("Select Taluka"),
        FieldName::Branch => state.t("Select Engineering Branch"),
        FieldName::Message => state.t("Enter your message"),
        _ => "",
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(area);

    let label = if state.submitting {
        state.t("Submitting...")
    } else {
        state.t("Submit")
    };
    let is_selected = state.form.is_submit_row_active();
    render_button(frame, chunks[1], label, is_selected, !state.submitting);
}
