//! Submission notice dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::i18n::Language;
use crate::state::{Notice, NoticeKind};
use ratatui::{style::Color, Frame};

/// Render the notice at the front of the queue, green for success and red
/// for failure
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice, language: Language) {
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
    };
    let message = format!(
        "{}\n\n{}",
        notice.body(language),
        notice.created_at.format("%H:%M:%S")
    );

    render_dialog(
        frame,
        DialogConfig {
            title: language.translate(notice.title_key),
            title_color: color,
            border_color: color,
            message: message.trim_start(),
            hint: Some(key_hint(language.translate("to dismiss"))),
            max_width: 60,
        },
    );
}
