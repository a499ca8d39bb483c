//! Mouse click handling

use super::app_state::App;
use crate::carousel::ScrollDirection;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::ScrollLeft) => {
            app.activate_control(ScrollDirection::Left);
        }
        Some(Region::ScrollRight) => {
            app.activate_control(ScrollDirection::Right);
        }
        Some(Region::ApplyButton(index)) => {
            app.apply_coupon(index);
        }
        Some(Region::CouponStrip) | None => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
