use std::sync::mpsc::Sender;

use tokio::{runtime::Runtime, task::JoinHandle};

use crate::{
    domain::events::AppEvent,
    usecases::load_conversation::{load_conversation, ConversationSource},
};

const CONVERSATION_LOADER_SPAWNED: &str = "CONVERSATION_LOADER_SPAWNED";
const CONVERSATION_LOADER_DELIVERY_FAILED: &str = "CONVERSATION_LOADER_DELIVERY_FAILED";

/// One-shot fetch task. It delivers exactly one completion event and then
/// drops its sender. Not cancellable.
#[derive(Debug)]
pub struct ConversationLoader {
    task: JoinHandle<()>,
}

impl ConversationLoader {
    pub fn start<S>(runtime: &Runtime, source: S, event_tx: Sender<AppEvent>) -> Self
    where
        S: ConversationSource + Send + Sync + 'static,
    {
        let task = runtime.spawn(async move {
            let event = load_conversation(&source).await;
            if let Err(error) = event_tx.send(event) {
                tracing::warn!(
                    code = CONVERSATION_LOADER_DELIVERY_FAILED,
                    error = %error,
                    "screen went away before the conversation fetch completed"
                );
            }
        });

        tracing::debug!(
            code = CONVERSATION_LOADER_SPAWNED,
            "conversation loader spawned"
        );

        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
