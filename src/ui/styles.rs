//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Header and trip banner
// =============================================================================

/// Conversation name in the header bar.
pub fn header_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn header_icon_style() -> Style {
    Style::default().fg(Color::White)
}

/// "From" / "To" labels in the trip banner.
pub fn trip_label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn trip_location_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn banner_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Message list
// =============================================================================

pub fn date_separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Bubble for messages written by the viewer.
pub fn self_bubble_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

/// Bubble for messages written by other riders.
pub fn other_bubble_style() -> Style {
    Style::default().fg(Color::Gray).bg(Color::Black)
}

pub fn avatar_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn verified_badge_style() -> Style {
    Style::default().fg(Color::Green)
}

// =============================================================================
// Reply input
// =============================================================================

pub fn input_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn input_button_style() -> Style {
    Style::default().fg(Color::Gray)
}

// =============================================================================
// Overlays
// =============================================================================

pub fn options_menu_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub fn options_separator_style() -> Style {
    Style::default().fg(Color::Gray).bg(Color::White)
}

/// Green attachment bubble.
pub fn attachment_menu_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Green)
}

pub fn status_line_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_and_other_bubbles_differ() {
        assert_ne!(self_bubble_style(), other_bubble_style());
        assert_eq!(self_bubble_style().bg, Some(Color::Blue));
    }

    #[test]
    fn focused_input_border_is_highlighted() {
        assert_eq!(input_border_style(true).fg, Some(Color::Cyan));
        assert_eq!(input_border_style(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn header_title_is_bold() {
        assert!(header_title_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn attachment_menu_is_green() {
        assert_eq!(attachment_menu_style().bg, Some(Color::Green));
    }
}
