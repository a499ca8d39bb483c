use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area of `width` x `height` anchored to the top-right corner of `frame_area`,
/// `margin` cells in from both edges. Shrinks to fit small frames.
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(margin * 2));
    let popup_height = height.min(frame_area.height.saturating_sub(margin * 2));

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.y + margin,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
