use anyhow::Result;

use crate::{
    domain::screen_state::ChatScreenState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        base_url = %context.config.api.base_url,
        "starting conversation screen"
    );

    let mut terminal = TerminalSession::new()?;
    event_loop(
        |state| terminal.draw(|frame| view::render(frame, state)),
        event_source,
        orchestrator,
    )
}

/// Draw, then apply at most one event, until the orchestrator stops.
fn event_loop<D>(
    mut draw: D,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()>
where
    D: FnMut(&mut ChatScreenState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::{
            conversation::ConversationResponse,
            events::{AppEvent, KeyInput},
        },
        ui::event_source::MockEventSource,
        usecases::shell::ChatScreenOrchestrator,
    };

    fn run(events: Vec<AppEvent>) -> (ChatScreenOrchestrator, usize) {
        let mut source = MockEventSource::from(events);
        let mut orchestrator = ChatScreenOrchestrator::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        let mut frames = 0;

        event_loop(
            |state| {
                frames += 1;
                terminal.draw(|frame| view::render(frame, state))?;
                Ok(())
            },
            &mut source,
            &mut orchestrator,
        )
        .expect("loop should finish");

        (orchestrator, frames)
    }

    #[test]
    fn loop_stops_on_quit_from_source() {
        let (orchestrator, frames) = run(vec![AppEvent::QuitRequested]);

        assert!(!orchestrator.state().is_running());
        assert_eq!(frames, 1);
    }

    #[test]
    fn loaded_conversation_and_overlay_keys_flow_through_the_loop() {
        let conversation = ConversationResponse {
            messages: Vec::new(),
            sender_range_from: "A".to_owned(),
            sender_range_to: "B".to_owned(),
            conversation_name: "Trip".to_owned(),
            status: "ok".to_owned(),
            status_message: String::new(),
        };

        let (orchestrator, frames) = run(vec![
            AppEvent::ConversationLoaded(conversation.clone()),
            AppEvent::InputKey(KeyInput::new("o", false)),
            AppEvent::InputKey(KeyInput::new("a", false)),
            AppEvent::QuitRequested,
        ]);

        assert_eq!(orchestrator.state().conversation(), Some(&conversation));
        assert!(orchestrator.state().overlays().options_visible());
        assert!(orchestrator.state().overlays().attachment_visible());
        assert_eq!(frames, 4);
    }

    #[test]
    fn click_uses_regions_from_the_previous_frame() {
        // Options button on a 60x20 screen sits at columns 55..58 of row 1.
        let (orchestrator, _) = run(vec![
            AppEvent::Click { column: 56, row: 1 },
            AppEvent::QuitRequested,
        ]);

        assert!(orchestrator.state().overlays().options_visible());
    }
}
