use std::{io::Write, sync::mpsc};

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::{self, conversation::ConversationResponse, events::AppEvent},
    infra,
    remote::{self, ChatApiClient, ConversationLoader},
    ui,
    usecases::{
        self, bootstrap, context::AppContext, load_conversation::load_conversation,
        shell::ChatScreenOrchestrator,
    },
};

const SELF_LABEL: &str = "you";
const MISSING_FIELD: &str = "-";

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        remote = remote::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );
    tracing::info!(
        file_logging = context.has_file_logging(),
        api = %context.config.api.base_url,
        "tripchat started"
    );

    match cli.command_or_default() {
        Command::Run => run_screen(&context),
        Command::Fetch => fetch_and_print(&context),
    }
}

/// Mounts the conversation screen: the fetch is fired once, then the UI loop
/// runs until the user quits.
fn run_screen(context: &AppContext) -> Result<()> {
    let runtime = bootstrap::build_runtime()?;
    let (event_tx, event_rx) = mpsc::channel();

    let loader = ConversationLoader::start(
        &runtime,
        ChatApiClient::new(context.config.api.base_url.clone()),
        event_tx,
    );

    let mut event_source = ui::CrosstermEventSource::new(event_rx);
    let mut orchestrator = ChatScreenOrchestrator::new();
    let outcome = ui::shell::start(context, &mut event_source, &mut orchestrator);

    tracing::info!(
        fetch_finished = loader.is_finished(),
        "conversation screen closed"
    );
    // A fetch still in flight is abandoned with the screen.
    runtime.shutdown_background();

    outcome
}

fn fetch_and_print(context: &AppContext) -> Result<()> {
    let runtime = bootstrap::build_runtime()?;
    let client = ChatApiClient::new(context.config.api.base_url.clone());

    let event = runtime.block_on(load_conversation(&client));

    let mut stdout = std::io::stdout().lock();
    for line in fetch_report_lines(&event) {
        writeln!(stdout, "{line}")?;
    }

    Ok(())
}

fn fetch_report_lines(event: &AppEvent) -> Vec<String> {
    match event {
        AppEvent::ConversationLoaded(conversation) => {
            let mut lines = vec![banner_line(Some(conversation))];
            lines.extend(conversation.messages.iter().map(|message| {
                let author = if message.sender.is_self {
                    SELF_LABEL
                } else {
                    message.sender.user_id.as_str()
                };
                format!(
                    "{}  {}: {}",
                    ui::format_time(&message.timestamp),
                    author,
                    message.text
                )
            }));
            lines
        }
        _ => vec![banner_line(None)],
    }
}

fn banner_line(conversation: Option<&ConversationResponse>) -> String {
    let field = |value: Option<&str>| {
        value
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(MISSING_FIELD)
            .to_owned()
    };

    format!(
        "{}: {} -> {}",
        field(conversation.map(|c| c.conversation_name.as_str())),
        field(conversation.map(|c| c.sender_range_from.as_str())),
        field(conversation.map(|c| c.sender_range_to.as_str())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{Message, SenderInfo};

    fn message(id: &str, text: &str, is_self: bool, time: &str) -> Message {
        Message {
            id: id.to_owned(),
            text: text.to_owned(),
            sender: SenderInfo {
                avatar_url: String::new(),
                is_verified: false,
                is_self,
                user_id: format!("user-{id}"),
            },
            timestamp: time.to_owned(),
        }
    }

    #[test]
    fn report_lists_banner_then_messages_in_order() {
        let conversation = ConversationResponse {
            messages: vec![
                message("1", "on my way", false, "2024-01-12 09:30:00"),
                message("2", "see you", true, "t"),
            ],
            sender_range_from: "IGI Airport, T3".to_owned(),
            sender_range_to: "Sector 28".to_owned(),
            conversation_name: "Trip 1".to_owned(),
            status: "success".to_owned(),
            status_message: String::new(),
        };

        let lines = fetch_report_lines(&AppEvent::ConversationLoaded(conversation));

        assert_eq!(
            lines,
            vec![
                "Trip 1: IGI Airport, T3 -> Sector 28".to_owned(),
                "09:30  user-1: on my way".to_owned(),
                "t  you: see you".to_owned(),
            ]
        );
    }

    #[test]
    fn failed_fetch_reports_only_placeholder_banner() {
        let lines = fetch_report_lines(&AppEvent::ConversationFetchFailed);

        assert_eq!(lines, vec!["-: - -> -".to_owned()]);
    }
}
