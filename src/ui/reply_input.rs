//! Reply input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::reply_input_state::ReplyInputState;

use super::{layout::ScreenLayout, styles};

const ATTACHMENT_BUTTON: &str = "[+]";
const SEND_BUTTON: &str = "[>]";
const FALLBACK_PLACEHOLDER: &str = "Reply...";

/// Placeholder naming the conversation, e.g. "Reply to @Trip 1".
pub fn placeholder_for(conversation_name: Option<&str>) -> String {
    match conversation_name.filter(|name| !name.trim().is_empty()) {
        Some(name) => format!("Reply to @{name}"),
        None => FALLBACK_PLACEHOLDER.to_owned(),
    }
}

pub fn render_reply_input(
    frame: &mut Frame<'_>,
    layout: &ScreenLayout,
    input: &ReplyInputState,
    focused: bool,
    placeholder: &str,
) {
    let area = layout.reply_input;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::input_border_style(focused));
    let text_area = text_area(block.inner(area), layout.attachment_button);

    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(build_input_line(input, placeholder)),
        text_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(ATTACHMENT_BUTTON, styles::input_button_style())),
        layout.attachment_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SEND_BUTTON, styles::input_button_style())),
        layout.send_button,
    );

    if focused {
        let cursor_x = text_area
            .x
            .saturating_add(input.cursor_chars().min(u16::MAX as usize) as u16)
            .min(text_area.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, text_area.y));
    }
}

/// Inner input row, stopping one column before the attachment button.
fn text_area(inner: Rect, attachment_button: Rect) -> Rect {
    let width = attachment_button
        .x
        .saturating_sub(inner.x)
        .saturating_sub(1)
        .min(inner.width);
    Rect::new(inner.x, inner.y, width, inner.height.min(1))
}

fn build_input_line(input: &ReplyInputState, placeholder: &str) -> Line<'static> {
    if input.is_empty() {
        Line::from(Span::styled(
            placeholder.to_owned(),
            styles::input_placeholder_style(),
        ))
    } else {
        Line::from(Span::styled(
            input.text().to_owned(),
            styles::input_text_style(),
        ))
    }
}
