//! Mapping between carousel distance units and terminal cells
//!
//! Geometry is kept in units (208-wide cards, 300-unit steps). A cell scale
//! turns those into columns when the strip is drawn.

use ratatui::layout::{Constraint, Layout, Rect};

use super::carousel_metrics::CarouselMetrics;

/// Units per terminal column when the config does not say otherwise
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 10;

/// Columns reserved on each side of the strip for the arrow controls
pub const CONTROL_WIDTH: u16 = 5;

pub const APPLY_LABEL: &str = " Apply ";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    cell_width: f64,
}

impl CellScale {
    /// Widths below one unit per column fall back to the default
    pub fn new(cell_width: f64) -> Self {
        let cell_width = if cell_width.is_finite() && cell_width >= 1.0 {
            cell_width
        } else {
            DEFAULT_CELL_WIDTH
        };
        Self { cell_width }
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn to_units(&self, cols: u16) -> f64 {
        cols as f64 * self.cell_width
    }

    /// Nearest column for a unit position
    pub fn to_cols(&self, units: f64) -> u16 {
        (units / self.cell_width).round().clamp(0.0, u16::MAX as f64) as u16
    }

    /// Columns needed to hold `units` without cutting anything off
    pub fn to_cols_ceil(&self, units: f64) -> u16 {
        (units / self.cell_width).ceil().clamp(0.0, u16::MAX as f64) as u16
    }
}

impl Default for CellScale {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH)
    }
}

/// Horizontal placement of one card inside the strip, in columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

/// Column placement of every card, in catalog order
pub fn card_slots(metrics: &CarouselMetrics, scale: &CellScale, cards: usize) -> Vec<CardSlot> {
    let width = scale.to_cols(metrics.card_width);
    (0..cards)
        .map(|index| CardSlot {
            index,
            x: scale.to_cols(metrics.card_start(index)),
            width,
        })
        .collect()
}

/// Width of the whole strip in columns
pub fn content_cols(metrics: &CarouselMetrics, scale: &CellScale, cards: usize) -> u16 {
    scale.to_cols_ceil(metrics.content_width(cards))
}

/// The carousel row split into its control gutters and the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselAreas {
    pub left_control: Rect,
    pub strip: Rect,
    pub right_control: Rect,
}

impl CarouselAreas {
    pub fn new(row: Rect) -> Self {
        let [left_control, strip, right_control] = Layout::horizontal([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Min(0),
            Constraint::Length(CONTROL_WIDTH),
        ])
        .areas(row);

        Self {
            left_control,
            strip,
            right_control,
        }
    }
}

/// Rows inside a card border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRows {
    pub label: Rect,
    pub code: Rect,
    pub description: Rect,
    pub bounds: Rect,
    pub separator: Rect,
    pub expiry: Rect,
    pub apply: Rect,
}

impl CardRows {
    pub fn new(inner: Rect) -> Self {
        let [label, code, description, bounds, separator, expiry, apply] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Self {
            label,
            code,
            description,
            bounds,
            separator,
            expiry,
            apply,
        }
    }

    /// The clickable Apply button
    pub fn apply_button(&self) -> Rect {
        Rect {
            width: (APPLY_LABEL.len() as u16).min(self.apply.width),
            ..self.apply
        }
    }
}

/// Card area inside the off-screen strip buffer
pub fn card_area(slot: &CardSlot, height: u16) -> Rect {
    Rect::new(slot.x, 0, slot.width, CARD_HEIGHT.min(height))
}

/// Inner area of a card with a one-cell border
pub fn card_inner(card: Rect) -> Rect {
    Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    }
}
