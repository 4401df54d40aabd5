use std::future::Future;

use crate::{
    domain::conversation::ConversationResponse,
    usecases::load_conversation::{ConversationSource, FetchFailure},
};

const CHAT_PATH: &str = "assignment/chat";

/// HTTP client for the chat endpoint. No auth headers, no timeout.
#[derive(Debug, Clone)]
pub struct ChatApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/{CHAT_PATH}?page={page}",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn get_page(&self, page: u32) -> Result<ConversationResponse, FetchFailure> {
        let url = self.page_url(page);
        tracing::debug!(url = %url, "requesting conversation page");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|error| FetchFailure::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| FetchFailure::Network(error.to_string()))?;

        decode_conversation(&body)
    }
}

impl ConversationSource for ChatApiClient {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<ConversationResponse, FetchFailure>> + Send {
        self.get_page(page)
    }
}

pub fn decode_conversation(body: &[u8]) -> Result<ConversationResponse, FetchFailure> {
    serde_json::from_slice(body).map_err(|error| FetchFailure::Decode(error.to_string()))
}
