use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput, ScrollDirection},
    regions::TapTarget,
    screen_state::ChatScreenState,
};

use super::contracts::ShellOrchestrator;

const CONVERSATION_COMPLETION_IGNORED: &str = "CONVERSATION_COMPLETION_IGNORED";

#[derive(Debug, Default)]
pub struct ChatScreenOrchestrator {
    state: ChatScreenState,
}

impl ChatScreenOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_key(&mut self, key: KeyInput) {
        if self.state.is_input_focused() {
            self.handle_input_key(key);
            return;
        }

        match key.key.as_str() {
            "q" => self.state.stop(),
            "o" => self.state.overlays_mut().open_options_menu(),
            "a" => self.state.overlays_mut().toggle_attachment_menu(),
            "esc" => {
                self.state.overlays_mut().close_topmost();
            }
            "i" => self.state.focus_input(),
            "j" | "down" => self.state.scroll_down(),
            "k" | "up" => self.state.scroll_up(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyInput) {
        let input = self.state.reply_input_mut();
        match key.key.as_str() {
            "esc" => self.state.blur_input(),
            "backspace" => input.backspace(),
            "delete" => input.delete(),
            "left" => input.move_left(),
            "right" => input.move_right(),
            "home" => input.move_home(),
            "end" => input.move_end(),
            "enter" => {
                tracing::debug!("reply send requested; sending is not supported");
            }
            _ => {
                if let Some(ch) = key.as_char() {
                    input.insert_char(ch);
                }
            }
        }
    }

    fn handle_tap(&mut self, column: u16, row: u16) {
        let target = self
            .state
            .regions()
            .tap_target(self.state.overlays(), column, row);
        tracing::trace!(column, row, tap = ?target, "tap routed");

        let overlays = self.state.overlays_mut();
        match target {
            TapTarget::AttachmentBackdrop => overlays.dismiss_attachment_menu(),
            TapTarget::OptionsBackdrop => overlays.close_options_menu(),
            TapTarget::OptionsButton => overlays.open_options_menu(),
            TapTarget::AttachmentButton => overlays.toggle_attachment_menu(),
            TapTarget::HeaderArea => overlays.dismiss_attachment_menu(),
            TapTarget::ReplyInput => self.state.focus_input(),
            TapTarget::AttachmentMenu | TapTarget::OptionsMenu => {
                tracing::debug!(tap = ?target, "menu entry has no action");
            }
            TapTarget::Elsewhere => {}
        }
    }
}

impl ShellOrchestrator for ChatScreenOrchestrator {
    fn state(&self) -> &ChatScreenState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ChatScreenState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Click { column, row } => self.handle_tap(column, row),
            AppEvent::Scroll(ScrollDirection::Up) => self.state.scroll_up(),
            AppEvent::Scroll(ScrollDirection::Down) => self.state.scroll_down(),
            AppEvent::ConversationLoaded(conversation) => {
                if !self.state.apply_conversation(conversation) {
                    tracing::warn!(
                        code = CONVERSATION_COMPLETION_IGNORED,
                        settled = self.state.fetch_status().as_label(),
                        "conversation already settled; ignoring late completion"
                    );
                }
            }
            AppEvent::ConversationFetchFailed => {
                if !self.state.apply_fetch_failure() {
                    tracing::warn!(
                        code = CONVERSATION_COMPLETION_IGNORED,
                        settled = self.state.fetch_status().as_label(),
                        "conversation already settled; ignoring late failure"
                    );
                }
            }
        }

        Ok(())
    }
}
