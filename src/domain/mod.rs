//! Domain layer: conversation model and screen state rules.

pub mod conversation;
pub mod events;
pub mod overlay_state;
pub mod regions;
pub mod reply_input_state;
pub mod screen_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
