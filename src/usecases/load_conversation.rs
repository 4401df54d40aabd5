use std::future::Future;

use thiserror::Error;

use crate::domain::{conversation::ConversationResponse, events::AppEvent};

/// The only page ever requested.
pub const CONVERSATION_PAGE: u32 = 0;

const CONVERSATION_FETCH_STARTED: &str = "CONVERSATION_FETCH_STARTED";
const CONVERSATION_FETCH_SUCCEEDED: &str = "CONVERSATION_FETCH_SUCCEEDED";
const CONVERSATION_FETCH_FAILED: &str = "CONVERSATION_FETCH_FAILED";

/// Every way a fetch can fail. All variants are handled the same way: logged,
/// with the conversation left absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server answered with HTTP {0}")]
    HttpStatus(u16),
    #[error("malformed conversation payload: {0}")]
    Decode(String),
}

pub trait ConversationSource {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<ConversationResponse, FetchFailure>> + Send;
}

/// Runs the single fetch and turns its outcome into the completion event.
/// Never fails: a failure is reported to the log and mapped to
/// [`AppEvent::ConversationFetchFailed`].
pub async fn load_conversation<S>(source: &S) -> AppEvent
where
    S: ConversationSource + ?Sized,
{
    tracing::info!(
        code = CONVERSATION_FETCH_STARTED,
        page = CONVERSATION_PAGE,
        "fetching conversation page"
    );

    match source.fetch_page(CONVERSATION_PAGE).await {
        Ok(conversation) => {
            tracing::info!(
                code = CONVERSATION_FETCH_SUCCEEDED,
                messages = conversation.message_count(),
                status = %conversation.status,
                first_message_at = conversation.first_timestamp().unwrap_or("-"),
                "conversation page loaded"
            );
            AppEvent::ConversationLoaded(conversation)
        }
        Err(error) => {
            tracing::warn!(
                code = CONVERSATION_FETCH_FAILED,
                error = %error,
                "conversation fetch failed; leaving conversation empty"
            );
            AppEvent::ConversationFetchFailed
        }
    }
}
