use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`, clipped to
/// `area` if it is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
