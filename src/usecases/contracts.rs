use anyhow::Result;

use crate::domain::{events::AppEvent, screen_state::ChatScreenState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ChatScreenState;
    fn state_mut(&mut self) -> &mut ChatScreenState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
