//! Screen geometry shared by drawing and tap routing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::domain::regions::{Region, ScreenRegions};

const HEADER_HEIGHT: u16 = 1;
const TRIP_BANNER_HEIGHT: u16 = 3;
const REPLY_INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

const BUTTON_WIDTH: u16 = 3;
const EDGE_MARGIN: u16 = 2;

pub const OPTIONS_MENU_WIDTH: u16 = 22;
/// Three entries, two separators, two borders.
pub const OPTIONS_MENU_HEIGHT: u16 = 7;
pub const ATTACHMENT_MENU_WIDTH: u16 = 30;
pub const ATTACHMENT_MENU_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub trip_banner: Rect,
    pub messages: Rect,
    pub reply_input: Rect,
    pub status: Rect,
    pub options_button: Rect,
    pub attachment_button: Rect,
    pub send_button: Rect,
    pub options_menu: Rect,
    pub attachment_menu: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let [header, trip_banner, messages, reply_input, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(TRIP_BANNER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(REPLY_INPUT_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .areas(area);

        let options_button = Rect::new(
            trip_banner
                .right()
                .saturating_sub(BUTTON_WIDTH + EDGE_MARGIN),
            trip_banner.y,
            BUTTON_WIDTH,
            1,
        )
        .intersection(area);

        // Buttons sit on the text row inside the input border.
        let input_row = reply_input.y.saturating_add(1);
        let send_button = Rect::new(
            reply_input
                .right()
                .saturating_sub(BUTTON_WIDTH + EDGE_MARGIN),
            input_row,
            BUTTON_WIDTH,
            1,
        )
        .intersection(area);
        let attachment_button = Rect::new(
            send_button.x.saturating_sub(BUTTON_WIDTH + 1),
            input_row,
            BUTTON_WIDTH,
            1,
        )
        .intersection(area);

        let options_menu = anchored_right(
            area,
            trip_banner.bottom(),
            OPTIONS_MENU_WIDTH,
            OPTIONS_MENU_HEIGHT,
        );
        let attachment_menu = anchored_right(
            area,
            reply_input.y.saturating_sub(ATTACHMENT_MENU_HEIGHT),
            ATTACHMENT_MENU_WIDTH,
            ATTACHMENT_MENU_HEIGHT,
        );

        Self {
            header,
            trip_banner,
            messages,
            reply_input,
            status,
            options_button,
            attachment_button,
            send_button,
            options_menu,
            attachment_menu,
        }
    }

    pub fn regions(&self) -> ScreenRegions {
        ScreenRegions {
            header: region(self.header.union(self.trip_banner)),
            options_button: region(self.options_button),
            reply_input: region(self.reply_input),
            attachment_button: region(self.attachment_button),
            options_menu: region(self.options_menu),
            attachment_menu: region(self.attachment_menu),
        }
    }
}

fn anchored_right(area: Rect, y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.right().saturating_sub(width + EDGE_MARGIN).max(area.x);
    Rect::new(x, y, width, height).intersection(area)
}

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}
