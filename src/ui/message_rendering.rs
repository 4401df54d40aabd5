//! Message list rendering logic.
//!
//! Handles visual formatting of messages:
//! - Self messages on the trailing edge without an avatar
//! - Other riders' messages on the leading edge with an avatar marker
//! - Bubble text wrapped to three quarters of the list width
//! - A date separator above the first message

use chrono::NaiveDateTime;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::conversation::Message;

use super::styles;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const AVATAR_MARKER: &str = "◉";
const VERIFIED_BADGE: &str = "✓";
/// Marker, badge slot and a space.
const AVATAR_PREFIX_WIDTH: usize = 3;
/// One space of padding on each side of the bubble text.
const BUBBLE_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Leading,
    Trailing,
}

/// Avatar source for a message. The terminal draws a marker in its place.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub url: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub side: Side,
    pub avatar: Option<Avatar>,
    pub lines: Vec<String>,
}

/// Represents a visual element in the messages list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageListElement {
    /// Date line above the first message (e.g., "12 JAN, 2024").
    DateSeparator(String),
    Message(RenderedMessage),
}

/// Builds the visual list for `messages` in payload order. Every message is
/// laid out on its own; nothing is grouped.
pub fn build_message_list_elements(
    messages: &[Message],
    list_width: usize,
) -> Vec<MessageListElement> {
    let mut elements = Vec::with_capacity(messages.len() + 1);

    if let Some(date) = messages
        .first()
        .and_then(|message| format_date_header(&message.timestamp))
    {
        elements.push(MessageListElement::DateSeparator(date));
    }

    elements.extend(
        messages
            .iter()
            .map(|message| MessageListElement::Message(render_message(message, list_width))),
    );

    elements
}

pub fn render_message(message: &Message, list_width: usize) -> RenderedMessage {
    let bubble_width = list_width * 3 / 4;

    if message.sender.is_self {
        RenderedMessage {
            side: Side::Trailing,
            avatar: None,
            lines: wrap_text(&message.text, bubble_width.saturating_sub(BUBBLE_PADDING)),
        }
    } else {
        RenderedMessage {
            side: Side::Leading,
            avatar: Some(Avatar {
                url: message.sender.avatar_url.clone(),
                verified: message.sender.is_verified,
            }),
            lines: wrap_text(
                &message.text,
                bubble_width.saturating_sub(BUBBLE_PADDING + AVATAR_PREFIX_WIDTH),
            ),
        }
    }
}

/// Converts a list element to a ListItem for ratatui rendering.
pub fn element_to_list_item(element: &MessageListElement) -> ListItem<'static> {
    match element {
        MessageListElement::DateSeparator(date) => date_separator_item(date),
        MessageListElement::Message(message) => message_item(message),
    }
}

fn date_separator_item(date: &str) -> ListItem<'static> {
    let line = Line::from(Span::styled(
        format!("──── {date} ────"),
        styles::date_separator_style(),
    ))
    .alignment(Alignment::Center);
    ListItem::new(vec![line, Line::default()])
}

fn message_item(message: &RenderedMessage) -> ListItem<'static> {
    ListItem::new(message_lines(message))
}

fn message_lines(message: &RenderedMessage) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = match (&message.avatar, message.side) {
        (None, _) | (_, Side::Trailing) => message
            .lines
            .iter()
            .map(|text| {
                Line::from(Span::styled(format!(" {text} "), styles::self_bubble_style()))
                    .alignment(Alignment::Right)
            })
            .collect(),
        (Some(avatar), Side::Leading) => message
            .lines
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let prefix = if idx == 0 {
                    avatar_prefix(avatar)
                } else {
                    vec![Span::raw(" ".repeat(AVATAR_PREFIX_WIDTH))]
                };
                let mut spans = prefix;
                spans.push(Span::styled(
                    format!(" {text} "),
                    styles::other_bubble_style(),
                ));
                Line::from(spans)
            })
            .collect(),
    };

    lines.push(Line::default());
    lines
}

fn avatar_prefix(avatar: &Avatar) -> Vec<Span<'static>> {
    let badge = if avatar.verified {
        Span::styled(VERIFIED_BADGE, styles::verified_badge_style())
    } else {
        Span::raw(" ")
    };

    vec![
        Span::styled(AVATAR_MARKER, styles::avatar_style()),
        badge,
        Span::raw(" "),
    ]
}

/// Wraps `text` into lines no wider than `width` display columns. Explicit
/// newlines are kept; words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// "2024-01-12 09:30:00" → "12 JAN, 2024".
pub fn format_date_header(timestamp: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .ok()
        .map(|datetime| datetime.format("%d %b, %Y").to_string().to_uppercase())
}

/// "2024-01-12 09:30:00" → "09:30"; unparseable values are shown as-is.
pub fn format_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map(|datetime| datetime.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_owned())
}
