//! UI module for rendering the TUI

mod components;
mod contact;
mod forms;
mod layout;

use crate::state::{AppState, View};
use components::{render_notice_dialog, render_picker_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, state);

    match state.current_view {
        View::Form => forms::draw_registration_form(frame, main_area, state),
        View::Contact => contact::draw(frame, main_area, state),
    }

    layout::draw_status_bar(frame, status_area, state);

    // Overlays: an open picker, then the front notice on top
    if let Some(picker) = &state.picker {
        render_picker_dialog(frame, picker, state.language);
    }
    if let Some(notice) = state.current_notice() {
        render_notice_dialog(frame, notice, state.language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::state::reference::ReferenceData;
    use crate::state::{FieldName, PickerKind};
    use crate::submission::SubmitOutcome;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> AppState {
        AppState::new(ReferenceData::bundled().unwrap(), Language::En)
    }

    #[test]
    fn test_form_shows_labels_and_submit() {
        let text = render(&state());
        assert!(text.contains("Engineers Cell"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Submit"));
        assert!(text.contains("English"));
    }

    #[test]
    fn test_validation_errors_render_inline() {
        let mut state = state();
        state.form.phone.set_text("12345");
        state.apply_outcome(&SubmitOutcome::Invalid(
            crate::state::validation::validate(
                &state.form,
                crate::state::validation::MessagePolicy::Optional,
            ),
        ));
        assert!(state.form.errors.contains(FieldName::Phone));

        let text = render(&state);
        assert!(text.contains("Phone must be exactly 10 digits"));
    }

    #[test]
    fn test_submitting_disables_button_label() {
        let mut state = state();
        state.submitting = true;
        let text = render(&state);
        assert!(text.contains("Submitting..."));
    }

    #[test]
    fn test_picker_overlay_lists_options() {
        let mut state = state();
        state.open_picker(PickerKind::District);
        let text = render(&state);
        assert!(text.contains("Select District"));
        assert!(text.contains("Pune"));
    }

    #[test]
    fn test_notice_overlay() {
        let mut state = state();
        state.apply_outcome(&SubmitOutcome::Submitted {
            id: Some("P123".to_string()),
        });
        let text = render(&state);
        assert!(text.contains("Registration submitted"));
        assert!(text.contains("Reference: P123"));
    }

    #[test]
    fn test_contact_page() {
        let mut state = state();
        state.toggle_contact();
        let text = render(&state);
        assert!(text.contains("Contact Us"));
        assert!(text.contains("+91 7758026057"));
        assert!(text.contains("NPSP"));
    }
}
