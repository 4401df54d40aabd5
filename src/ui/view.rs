use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::screen_state::{ChatScreenState, FetchStatus};

use super::{
    layout::ScreenLayout,
    message_rendering::{build_message_list_elements, element_to_list_item},
    overlays::{render_attachment_menu, render_options_menu},
    reply_input::{placeholder_for, render_reply_input},
    styles,
};

const FALLBACK_TITLE: &str = "Trip";
const MISSING_LOCATION: &str = "-";
const BACK_ICON: &str = "←";
const EDIT_ICON: &str = "✎";
const OPTIONS_ICON: &str = "⋮";

pub fn render(frame: &mut Frame<'_>, state: &mut ChatScreenState) {
    let layout = ScreenLayout::compute(frame.area());
    state.set_regions(layout.regions());

    render_header(frame, layout.header, state);
    render_trip_banner(frame, &layout, state);
    render_messages(frame, layout.messages, state);

    let placeholder = placeholder_for(
        state
            .conversation()
            .map(|conversation| conversation.conversation_name.as_str()),
    );
    render_reply_input(
        frame,
        &layout,
        state.reply_input(),
        state.is_input_focused(),
        &placeholder,
    );

    frame.render_widget(
        Paragraph::new(status_line(state)).style(styles::status_line_style()),
        layout.status,
    );

    // Attachment overlay stacks above the options overlay.
    let overlays = state.overlays();
    if overlays.options_visible() {
        render_options_menu(frame, layout.options_menu);
    }
    if overlays.attachment_visible() {
        render_attachment_menu(frame, layout.attachment_menu);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &ChatScreenState) {
    frame.render_widget(Paragraph::new(header_line(state)), area);

    let icon_area = Rect::new(area.right().saturating_sub(2), area.y, 1, 1).intersection(area);
    frame.render_widget(
        Paragraph::new(Span::styled(EDIT_ICON, styles::header_icon_style())),
        icon_area,
    );
}

fn header_line(state: &ChatScreenState) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{BACK_ICON} "), styles::header_icon_style()),
        Span::styled(conversation_title(state), styles::header_title_style()),
    ])
}

fn conversation_title(state: &ChatScreenState) -> String {
    state
        .conversation()
        .map(|conversation| conversation.conversation_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_owned()
}

fn render_trip_banner(frame: &mut Frame<'_>, layout: &ScreenLayout, state: &ChatScreenState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::banner_border_style());
    let inner = block.inner(layout.trip_banner);

    frame.render_widget(block, layout.trip_banner);
    frame.render_widget(Paragraph::new(trip_lines(state)), inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {OPTIONS_ICON} "),
            styles::header_icon_style(),
        )),
        layout.options_button,
    );
}

fn trip_lines(state: &ChatScreenState) -> Vec<Line<'static>> {
    let (from, to) = state
        .conversation()
        .map(|conversation| {
            (
                location_or_dash(&conversation.sender_range_from),
                location_or_dash(&conversation.sender_range_to),
            )
        })
        .unwrap_or_else(|| (MISSING_LOCATION.to_owned(), MISSING_LOCATION.to_owned()));

    vec![
        Line::from(vec![
            Span::styled("From ", styles::trip_label_style()),
            Span::styled(from, styles::trip_location_style()),
        ]),
        Line::from(vec![
            Span::styled("To   ", styles::trip_label_style()),
            Span::styled(to, styles::trip_location_style()),
        ]),
    ]
}

fn location_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING_LOCATION.to_owned()
    } else {
        value.to_owned()
    }
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, state: &mut ChatScreenState) {
    let elements = build_message_list_elements(state.messages(), area.width as usize);

    // Pending and failed fetches both leave the list blank.
    if elements.is_empty() {
        return;
    }

    let items: Vec<ListItem<'static>> = elements.iter().map(element_to_list_item).collect();
    state.clamp_scroll_offset(items.len());

    let mut list_state = ListState::default().with_offset(state.scroll_offset());
    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn status_line(state: &ChatScreenState) -> String {
    let hints = if state.is_input_focused() {
        "Esc: leave input | type your reply"
    } else {
        "o: options | a: attach | i: reply | j/k: scroll | Esc: close | q: quit"
    };

    match state.fetch_status() {
        FetchStatus::Pending => format!("loading conversation... | {hints}"),
        FetchStatus::Loaded | FetchStatus::Failed => hints.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::conversation::{ConversationResponse, Message, SenderInfo};

    fn conversation() -> ConversationResponse {
        ConversationResponse {
            messages: vec![Message {
                id: "1".to_owned(),
                text: "hi".to_owned(),
                sender: SenderInfo {
                    avatar_url: String::new(),
                    is_verified: false,
                    is_self: true,
                    user_id: "u1".to_owned(),
                },
                timestamp: "t".to_owned(),
            }],
            sender_range_from: "A".to_owned(),
            sender_range_to: "B".to_owned(),
            conversation_name: "Trip".to_owned(),
            status: "ok".to_owned(),
            status_message: String::new(),
        }
    }

    fn draw(state: &mut ChatScreenState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("draw should succeed");
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_owned())
            .collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let height = terminal.backend().buffer().area.height;
        (0..height)
            .map(|row| row_text(terminal, row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn single_self_message_renders_right_aligned_without_avatar() {
        let mut state = ChatScreenState::default();
        assert!(state.apply_conversation(conversation()));

        let terminal = draw(&mut state);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 20));
        let first_row = row_text(&terminal, layout.messages.y);

        assert!(first_row.trim_end().ends_with("hi"));
        assert!(!first_row.contains('◉'));
        assert_eq!(screen_text(&terminal).matches(" hi ").count(), 1);
    }

    #[test]
    fn other_message_renders_with_avatar_on_the_left() {
        let mut conversation = conversation();
        conversation.messages[0].sender.is_self = false;
        conversation.messages[0].sender.avatar_url = "https://img.example/a.png".to_owned();
        let mut state = ChatScreenState::default();
        assert!(state.apply_conversation(conversation));

        let terminal = draw(&mut state);
        let layout = ScreenLayout::compute(Rect::new(0, 0, 60, 20));
        let first_row = row_text(&terminal, layout.messages.y);

        assert!(first_row.starts_with('◉'));
        assert!(first_row.contains("hi"));
    }

    #[test]
    fn header_and_banner_show_conversation_metadata() {
        let mut state = ChatScreenState::default();
        assert!(state.apply_conversation(conversation()));

        let text = screen_text(&draw(&mut state));

        assert!(row_text(&draw(&mut state), 0).contains("Trip"));
        assert!(text.contains("From A"));
        assert!(text.contains("To   B"));
        assert!(text.contains("Reply to @Trip"));
    }

    #[test]
    fn pending_fetch_shows_placeholders_and_loading_hint() {
        let mut state = ChatScreenState::default();

        let terminal = draw(&mut state);
        let text = screen_text(&terminal);

        assert!(text.contains("From -"));
        assert!(row_text(&terminal, 19).contains("loading conversation"));
    }

    #[test]
    fn failed_fetch_renders_empty_list_without_error_text() {
        let mut state = ChatScreenState::default();
        assert!(state.apply_fetch_failure());

        let text = screen_text(&draw(&mut state));

        assert!(!text.contains("loading"));
        assert!(!text.to_lowercase().contains("error"));
        assert!(!text.contains('◉'));
    }

    #[test]
    fn render_records_tap_regions() {
        let mut state = ChatScreenState::default();

        let _ = draw(&mut state);

        let expected = ScreenLayout::compute(Rect::new(0, 0, 60, 20)).regions();
        assert_eq!(*state.regions(), expected);
    }

    #[test]
    fn open_overlays_are_drawn() {
        let mut state = ChatScreenState::default();
        state.overlays_mut().open_options_menu();
        state.overlays_mut().toggle_attachment_menu();

        let text = screen_text(&draw(&mut state));

        assert!(text.contains("Members"));
        assert!(text.contains("Camera"));
    }

    #[test]
    fn status_line_switches_hints_with_input_focus() {
        let mut state = ChatScreenState::default();
        assert!(state.apply_fetch_failure());
        assert!(status_line(&state).contains("q: quit"));

        state.focus_input();
        assert!(status_line(&state).contains("Esc: leave input"));
    }
}
