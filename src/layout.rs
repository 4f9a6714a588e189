use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
};

use crate::target::TargetPosition;

pub const HORIZONTAL_MARGIN: u16 = 2;
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

pub const TARGET_WIDTH: u16 = 7;
pub const TARGET_HEIGHT: u16 = 3;

/// Header (progress track), play field and footer (legend)
pub fn screen_areas(frame: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .horizontal_margin(HORIZONTAL_MARGIN)
    .areas(frame)
}

/// Inside of the bordered play field, where targets live
pub fn play_area(frame: Rect) -> Rect {
    let [_, field, _] = screen_areas(frame);
    Block::bordered().inner(field)
}

/// Target box centred on the normalised position, kept inside `area`
pub fn target_rect(area: Rect, pos: TargetPosition) -> Rect {
    let width = TARGET_WIDTH.min(area.width);
    let height = TARGET_HEIGHT.min(area.height);

    let cx = area.x as f64 + pos.x * area.width as f64;
    let cy = area.y as f64 + pos.y * area.height as f64;

    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;

    let x = ((cx - width as f64 / 2.0).round().max(0.0) as u16).clamp(area.x, max_x);
    let y = ((cy - height as f64 / 2.0).round().max(0.0) as u16).clamp(area.y, max_y);

    Rect::new(x, y, width, height)
}

pub fn hit_test(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
