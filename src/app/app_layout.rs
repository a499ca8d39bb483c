use ratatui::layout::{Constraint, Layout, Rect};

use crate::carousel::strip_layout::CARD_HEIGHT;

/// Vertical split of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub carousel: Rect,
    pub hints: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [title, _, carousel, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            title,
            carousel,
            hints,
        }
    }
}
