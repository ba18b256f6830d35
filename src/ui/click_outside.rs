// Click-outside detection for popups.
// A popup records its rendered area; a left-button press landing anywhere
// else counts as a dismissal.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Whether a terminal cell lies inside an area.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Guard over a popup's rendered area.
#[derive(Debug, Clone, Copy)]
pub struct ClickOutside {
    pub area: Rect,
}

impl ClickOutside {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// True when the event is a left-button press outside the area.
    pub fn triggered(&self, event: &MouseEvent) -> bool {
        matches!(event.kind, MouseEventKind::Down(MouseButton::Left))
            && !contains(self.area, event.column, event.row)
    }
}
