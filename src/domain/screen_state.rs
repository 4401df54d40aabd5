use super::{
    conversation::{ConversationResponse, Message},
    overlay_state::OverlayState,
    regions::ScreenRegions,
    reply_input_state::ReplyInputState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Loaded,
    Failed,
}

impl FetchStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Pending => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "offline",
        }
    }
}

/// Everything the conversation screen owns for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatScreenState {
    running: bool,
    fetch_status: FetchStatus,
    conversation: Option<ConversationResponse>,
    overlays: OverlayState,
    reply_input: ReplyInputState,
    input_focused: bool,
    scroll_offset: usize,
    regions: ScreenRegions,
}

impl Default for ChatScreenState {
    fn default() -> Self {
        Self {
            running: true,
            fetch_status: FetchStatus::Pending,
            conversation: None,
            overlays: OverlayState::default(),
            reply_input: ReplyInputState::default(),
            input_focused: false,
            scroll_offset: 0,
            regions: ScreenRegions::default(),
        }
    }
}

impl ChatScreenState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch_status
    }

    pub fn conversation(&self) -> Option<&ConversationResponse> {
        self.conversation.as_ref()
    }

    /// Messages of the loaded conversation; empty while absent.
    pub fn messages(&self) -> &[Message] {
        self.conversation
            .as_ref()
            .map(|conversation| conversation.messages.as_slice())
            .unwrap_or(&[])
    }

    /// Applies a successful fetch. Only the first completion counts; returns
    /// false when the fetch had already settled.
    pub fn apply_conversation(&mut self, conversation: ConversationResponse) -> bool {
        if self.fetch_status != FetchStatus::Pending {
            return false;
        }

        self.conversation = Some(conversation);
        self.fetch_status = FetchStatus::Loaded;
        self.scroll_offset = 0;
        true
    }

    /// Records a failed fetch. The conversation stays absent.
    pub fn apply_fetch_failure(&mut self) -> bool {
        if self.fetch_status != FetchStatus::Pending {
            return false;
        }

        self.fetch_status = FetchStatus::Failed;
        true
    }

    pub fn overlays(&self) -> OverlayState {
        self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayState {
        &mut self.overlays
    }

    pub fn reply_input(&self) -> &ReplyInputState {
        &self.reply_input
    }

    pub fn reply_input_mut(&mut self) -> &mut ReplyInputState {
        &mut self.reply_input
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn focus_input(&mut self) {
        self.input_focused = true;
    }

    pub fn blur_input(&mut self) {
        self.input_focused = false;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Keeps the offset inside the rendered list. Called by the view.
    pub fn clamp_scroll_offset(&mut self, item_count: usize) {
        self.scroll_offset = self.scroll_offset.min(item_count.saturating_sub(1));
    }

    pub fn regions(&self) -> &ScreenRegions {
        &self.regions
    }

    pub fn set_regions(&mut self, regions: ScreenRegions) {
        self.regions = regions;
    }
}
