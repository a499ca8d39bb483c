// Configuration type definitions

use serde::Deserialize;

use crate::carousel::strip_layout::{CellScale, DEFAULT_CELL_WIDTH};
use crate::carousel::{CARD_GAP, CARD_WIDTH, CarouselMetrics, SCROLL_BUFFER, SCROLL_STEP};
use crate::scroll::DEFAULT_ANIMATION_SPEED;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Carousel configuration section. Sizes are in distance units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub card_width: f64,
    pub card_gap: f64,
    pub scroll_step: f64,
    pub scroll_buffer: f64,
    /// Distance units per terminal column
    pub cell_width: f64,
    pub smooth_scroll: bool,
    /// Fraction of the remaining distance covered per animation frame
    pub animation_speed: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            card_width: CARD_WIDTH,
            card_gap: CARD_GAP,
            scroll_step: SCROLL_STEP,
            scroll_buffer: SCROLL_BUFFER,
            cell_width: DEFAULT_CELL_WIDTH,
            smooth_scroll: true,
            animation_speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl CarouselConfig {
    /// Reset out-of-range values to their defaults
    ///
    /// Returns a warning naming the reset fields, or `None` when everything
    /// was usable.
    pub fn validate(&mut self) -> Option<String> {
        let defaults = CarouselConfig::default();
        let mut reset = Vec::new();

        if !positive(self.card_width) {
            self.card_width = defaults.card_width;
            reset.push("card_width");
        }
        if !non_negative(self.card_gap) {
            self.card_gap = defaults.card_gap;
            reset.push("card_gap");
        }
        if !positive(self.scroll_step) {
            self.scroll_step = defaults.scroll_step;
            reset.push("scroll_step");
        }
        if !non_negative(self.scroll_buffer) {
            self.scroll_buffer = defaults.scroll_buffer;
            reset.push("scroll_buffer");
        }
        if !(self.cell_width.is_finite() && self.cell_width >= 1.0) {
            self.cell_width = defaults.cell_width;
            reset.push("cell_width");
        }
        if !(positive(self.animation_speed) && self.animation_speed < 1.0) {
            self.animation_speed = defaults.animation_speed;
            reset.push("animation_speed");
        }

        if reset.is_empty() {
            None
        } else {
            Some(format!(
                "Invalid carousel settings reset to defaults: {}",
                reset.join(", ")
            ))
        }
    }

    pub fn metrics(&self) -> CarouselMetrics {
        CarouselMetrics {
            card_width: self.card_width,
            card_gap: self.card_gap,
            scroll_step: self.scroll_step,
            scroll_buffer: self.scroll_buffer,
        }
    }

    pub fn cell_scale(&self) -> CellScale {
        CellScale::new(self.cell_width)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
