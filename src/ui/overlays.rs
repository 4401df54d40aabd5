//! Options and attachment menus drawn above the conversation.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::styles;

pub const OPTIONS_ENTRIES: [&str; 3] = ["Members", "Share Number", "Report"];
pub const ATTACHMENT_ENTRIES: [&str; 3] = ["Camera", "Video", "File"];

pub fn render_options_menu(frame: &mut Frame<'_>, area: Rect) {
    if area.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(styles::options_menu_style());
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(options_lines(inner.width as usize)),
        inner,
    );
    frame.render_widget(block, area);
}

pub fn render_attachment_menu(frame: &mut Frame<'_>, area: Rect) {
    if area.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .style(styles::attachment_menu_style());
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(attachment_line()).alignment(Alignment::Center),
        inner,
    );
    frame.render_widget(block, area);
}

/// Entries separated by horizontal rules.
fn options_lines(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(OPTIONS_ENTRIES.len() * 2 - 1);

    for (idx, entry) in OPTIONS_ENTRIES.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(Span::styled(
                "─".repeat(width),
                styles::options_separator_style(),
            )));
        }
        lines.push(Line::from(format!(" {entry}")));
    }

    lines
}

fn attachment_line() -> Line<'static> {
    Line::from(ATTACHMENT_ENTRIES.join("  ·  "))
}
