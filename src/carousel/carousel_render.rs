//! Carousel rendering
//!
//! The strip is drawn into an off-screen buffer as wide as all cards, then the
//! columns under the current scroll offset are copied into the frame. Cards
//! that straddle the viewport edge are cut cleanly this way.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::carousel_metrics::ScrollDirection;
use super::carousel_view::CarouselView;
use super::strip_layout::{
    APPLY_LABEL, CarouselAreas, CardRows, CellScale, card_area, card_inner, card_slots,
    content_cols,
};
use crate::coupon::{Catalog, CouponRecord};
use crate::scroll::ScrollStrip;
use crate::theme;

/// Screen areas produced by one carousel render, for hit testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCarousel {
    pub strip: Rect,
    pub scroll_left: Option<Rect>,
    pub scroll_right: Option<Rect>,
    /// Visible part of each Apply button, keyed by catalog index
    pub apply_buttons: Vec<(usize, Rect)>,
}

/// Render cards and whichever arrow controls the view currently shows
pub fn render_carousel(
    frame: &mut Frame,
    areas: &CarouselAreas,
    catalog: &Catalog,
    view: &CarouselView,
    strip: &ScrollStrip,
    scale: &CellScale,
) -> RenderedCarousel {
    let mut rendered = RenderedCarousel {
        strip: areas.strip,
        ..Default::default()
    };

    if catalog.is_empty() {
        render_empty(frame, areas.strip);
        return rendered;
    }

    let offset_col = scale.to_cols(strip.offset());
    let strip_buf = render_strip(catalog, view, scale, areas.strip.height);
    blit_window(&strip_buf, offset_col, frame.buffer_mut(), areas.strip);
    rendered.apply_buttons = visible_apply_buttons(catalog, view, scale, areas.strip, offset_col);

    if view.can_scroll_left() {
        rendered.scroll_left = Some(render_control(
            frame,
            areas.left_control,
            ScrollDirection::Left,
        ));
    }
    if view.can_scroll_right() {
        rendered.scroll_right = Some(render_control(
            frame,
            areas.right_control,
            ScrollDirection::Right,
        ));
    }

    rendered
}

fn render_strip(catalog: &Catalog, view: &CarouselView, scale: &CellScale, height: u16) -> Buffer {
    let width = content_cols(view.metrics(), scale, catalog.len());
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));

    for slot in card_slots(view.metrics(), scale, catalog.len()) {
        if let Some(coupon) = catalog.get(slot.index) {
            render_card(coupon, card_area(&slot, height), &mut buf);
        }
    }

    buf
}

fn render_card(coupon: &CouponRecord, area: Rect, buf: &mut Buffer) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let accent = theme::carousel::accent(coupon.presentation.accent);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .render(area, buf);

    let rows = CardRows::new(card_inner(area));

    Paragraph::new(Line::from(Span::styled(
        format!(" {} ", coupon.presentation.label),
        theme::carousel::badge(coupon.presentation.accent),
    )))
    .render(rows.label, buf);

    Paragraph::new(Span::styled(
        coupon.code.as_str(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))
    .render(rows.code, buf);

    Paragraph::new(coupon.description.as_str())
        .style(Style::default().fg(theme::carousel::CARD_TEXT))
        .wrap(Wrap { trim: true })
        .render(rows.description, buf);

    Paragraph::new(coupon.bounds_line())
        .style(Style::default().fg(theme::carousel::CARD_TEXT_MUTED))
        .render(rows.bounds, buf);

    Paragraph::new("┄".repeat(rows.separator.width as usize))
        .style(Style::default().fg(accent).add_modifier(Modifier::DIM))
        .render(rows.separator, buf);

    Paragraph::new(coupon.expiry_line())
        .style(Style::default().fg(theme::carousel::CARD_TEXT))
        .render(rows.expiry, buf);

    Paragraph::new(Span::styled(APPLY_LABEL, theme::carousel::APPLY_BUTTON))
        .render(rows.apply_button(), buf);
}

/// Copy columns `[src_x, src_x + area.width)` of the strip into `area`
fn blit_window(src: &Buffer, src_x: u16, dst: &mut Buffer, area: Rect) {
    let height = area.height.min(src.area.height);
    for y in 0..height {
        for x in 0..area.width {
            let Some(sx) = src_x.checked_add(x) else {
                break;
            };
            if sx >= src.area.width {
                break;
            }
            dst[(area.x + x, area.y + y)] = src[(sx, y)].clone();
        }
    }
}

fn visible_apply_buttons(
    catalog: &Catalog,
    view: &CarouselView,
    scale: &CellScale,
    strip_area: Rect,
    offset_col: u16,
) -> Vec<(usize, Rect)> {
    let window_end = offset_col.saturating_add(strip_area.width);

    card_slots(view.metrics(), scale, catalog.len())
        .iter()
        .filter_map(|slot| {
            let card = card_area(slot, strip_area.height);
            let button = CardRows::new(card_inner(card)).apply_button();
            if button.width == 0 || button.height == 0 {
                return None;
            }

            let start = button.x.max(offset_col);
            let end = (button.x + button.width).min(window_end);
            if start >= end {
                return None;
            }

            Some((
                slot.index,
                Rect::new(
                    strip_area.x + (start - offset_col),
                    strip_area.y + button.y,
                    end - start,
                    button.height,
                ),
            ))
        })
        .collect()
}

fn render_control(frame: &mut Frame, gutter: Rect, direction: ScrollDirection) -> Rect {
    let height = 3.min(gutter.height);
    let area = Rect {
        y: gutter.y + (gutter.height - height) / 2,
        height,
        ..gutter
    };

    let symbol = match direction {
        ScrollDirection::Left => "◀",
        ScrollDirection::Right => "▶",
    };

    let control = Paragraph::new(Span::styled(symbol, theme::carousel::CONTROL_SYMBOL))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::carousel::CONTROL_BORDER)),
        );
    frame.render_widget(control, area);

    area
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("No coupons available")
        .style(Style::default().fg(theme::carousel::EMPTY_TEXT))
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

#[cfg(test)]
#[path = "carousel_render_tests.rs"]
mod carousel_render_tests;
