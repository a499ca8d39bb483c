//! Mouse event dispatcher
//!
//! Routes mouse events to handlers based on the region under the cursor.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_click;
use super::mouse_scroll::{self, WheelDirection};
use crate::layout::region_at;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            mouse_click::handle_click(app, region);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            mouse_scroll::handle_scroll(app, region, WheelDirection::Forward);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            mouse_scroll::handle_scroll(app, region, WheelDirection::Back);
        }
        _ => {}
    }
}
