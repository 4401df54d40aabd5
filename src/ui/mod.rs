//! UI layer: terminal rendering and input for the conversation screen.

mod event_source;
mod layout;
mod message_rendering;
mod overlays;
mod reply_input;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;
pub(crate) use message_rendering::format_time;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
