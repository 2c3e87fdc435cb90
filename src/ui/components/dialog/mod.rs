//! Dialog components for TUI

mod base;
mod notice_dialog;
mod picker_dialog;

pub use notice_dialog::render_notice_dialog;
pub use picker_dialog::render_picker_dialog;
