//! Screen regions recorded by the last render, used to route mouse taps.

use super::overlay_state::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// What a tap landed on, after overlay stacking has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    AttachmentMenu,
    AttachmentBackdrop,
    OptionsMenu,
    OptionsBackdrop,
    OptionsButton,
    AttachmentButton,
    HeaderArea,
    ReplyInput,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRegions {
    /// Header bar plus trip banner.
    pub header: Region,
    pub options_button: Region,
    pub reply_input: Region,
    pub attachment_button: Region,
    pub options_menu: Region,
    pub attachment_menu: Region,
}

impl ScreenRegions {
    /// The attachment overlay is drawn above the options overlay and both
    /// cover the whole screen, so an open overlay swallows every tap.
    pub fn tap_target(&self, overlays: OverlayState, column: u16, row: u16) -> TapTarget {
        if overlays.attachment_visible() {
            return if self.attachment_menu.contains(column, row) {
                TapTarget::AttachmentMenu
            } else {
                TapTarget::AttachmentBackdrop
            };
        }

        if overlays.options_visible() {
            return if self.options_menu.contains(column, row) {
                TapTarget::OptionsMenu
            } else {
                TapTarget::OptionsBackdrop
            };
        }

        if self.options_button.contains(column, row) {
            TapTarget::OptionsButton
        } else if self.attachment_button.contains(column, row) {
            TapTarget::AttachmentButton
        } else if self.header.contains(column, row) {
            TapTarget::HeaderArea
        } else if self.reply_input.contains(column, row) {
            TapTarget::ReplyInput
        } else {
            TapTarget::Elsewhere
        }
    }
}
