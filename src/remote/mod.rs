//! Remote layer: chat endpoint client and the one-shot conversation loader.

pub mod client;
pub mod loader;

pub use client::ChatApiClient;
pub use loader::ConversationLoader;

/// Returns the remote module name for smoke checks.
pub fn module_name() -> &'static str {
    "remote"
}
