/// Visibility of the two overlay menus. The flags are independent: no
/// operation on one of them touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    options_visible: bool,
    attachment_visible: bool,
}

impl OverlayState {
    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    pub fn attachment_visible(&self) -> bool {
        self.attachment_visible
    }

    pub fn open_options_menu(&mut self) {
        self.options_visible = true;
    }

    pub fn close_options_menu(&mut self) {
        self.options_visible = false;
    }

    pub fn toggle_attachment_menu(&mut self) {
        self.attachment_visible = !self.attachment_visible;
    }

    /// Called for taps outside the attachment bubble and on the header region.
    pub fn dismiss_attachment_menu(&mut self) {
        self.attachment_visible = false;
    }

    /// Closes the overlay drawn on top: attachment first, then options.
    /// Returns false when nothing was open.
    pub fn close_topmost(&mut self) -> bool {
        if self.attachment_visible {
            self.dismiss_attachment_menu();
            true
        } else if self.options_visible {
            self.close_options_menu();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_overlays_start_hidden() {
        let state = OverlayState::default();

        assert!(!state.options_visible());
        assert!(!state.attachment_visible());
    }

    #[test]
    fn opening_options_keeps_attachment_visibility() {
        for attachment_open in [false, true] {
            let mut state = OverlayState::default();
            if attachment_open {
                state.toggle_attachment_menu();
            }

            state.open_options_menu();

            assert!(state.options_visible());
            assert_eq!(state.attachment_visible(), attachment_open);
        }
    }

    #[test]
    fn toggling_attachment_keeps_options_visibility() {
        for options_open in [false, true] {
            let mut state = OverlayState::default();
            if options_open {
                state.open_options_menu();
            }

            state.toggle_attachment_menu();

            assert!(state.attachment_visible());
            assert_eq!(state.options_visible(), options_open);
        }
    }

    #[test]
    fn toggling_attachment_twice_restores_visibility() {
        let mut state = OverlayState::default();

        state.toggle_attachment_menu();
        state.toggle_attachment_menu();
        assert!(!state.attachment_visible());

        state.toggle_attachment_menu();
        let before = state.attachment_visible();
        state.toggle_attachment_menu();
        state.toggle_attachment_menu();
        assert_eq!(state.attachment_visible(), before);
    }

    #[test]
    fn dismiss_attachment_leaves_options_open() {
        let mut state = OverlayState::default();
        state.open_options_menu();
        state.toggle_attachment_menu();

        state.dismiss_attachment_menu();

        assert!(!state.attachment_visible());
        assert!(state.options_visible());
    }

    #[test]
    fn dismiss_attachment_is_idempotent_when_hidden() {
        let mut state = OverlayState::default();

        state.dismiss_attachment_menu();

        assert_eq!(state, OverlayState::default());
    }

    #[test]
    fn close_options_leaves_attachment_open() {
        let mut state = OverlayState::default();
        state.toggle_attachment_menu();
        state.open_options_menu();

        state.close_options_menu();

        assert!(!state.options_visible());
        assert!(state.attachment_visible());
    }

    #[test]
    fn close_topmost_closes_attachment_before_options() {
        let mut state = OverlayState::default();
        state.open_options_menu();
        state.toggle_attachment_menu();

        assert!(state.close_topmost());
        assert!(!state.attachment_visible());
        assert!(state.options_visible());

        assert!(state.close_topmost());
        assert!(!state.options_visible());

        assert!(!state.close_topmost());
    }
}
