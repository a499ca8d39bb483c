//! Mouse wheel handling
//!
//! The wheel moves the strip directly, like dragging a scrollbar. Both
//! vertical and horizontal wheel events scroll horizontally.

use super::app_state::App;
use crate::layout::Region;

/// Columns moved per wheel notch
const WHEEL_COLUMNS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Back,
    Forward,
}

/// Scroll the strip when the cursor is anywhere over the carousel
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: WheelDirection) {
    if region.is_none() {
        return;
    }

    let step = app.scale.to_units(WHEEL_COLUMNS);
    let delta = match direction {
        WheelDirection::Back => -step,
        WheelDirection::Forward => step,
    };
    app.user_scroll(delta);
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
