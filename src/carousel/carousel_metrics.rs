use super::view_state::SCROLL_BUFFER;

pub const CARD_WIDTH: f64 = 208.0;
pub const CARD_GAP: f64 = 12.0;
/// Distance covered by one arrow activation
pub const SCROLL_STEP: f64 = 300.0;

/// Arrow control direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Signed offset change for one step
    pub fn delta(self, step: f64) -> f64 {
        match self {
            ScrollDirection::Left => -step,
            ScrollDirection::Right => step,
        }
    }
}

/// Sizes that drive carousel layout and scrolling, in distance units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMetrics {
    pub card_width: f64,
    pub card_gap: f64,
    pub scroll_step: f64,
    pub scroll_buffer: f64,
}

impl Default for CarouselMetrics {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_gap: CARD_GAP,
            scroll_step: SCROLL_STEP,
            scroll_buffer: SCROLL_BUFFER,
        }
    }
}

impl CarouselMetrics {
    /// Total width of `cards` cards laid out with gaps between them
    pub fn content_width(&self, cards: usize) -> f64 {
        if cards == 0 {
            return 0.0;
        }
        cards as f64 * self.card_width + (cards - 1) as f64 * self.card_gap
    }

    /// Left edge of the card at `index`
    pub fn card_start(&self, index: usize) -> f64 {
        index as f64 * (self.card_width + self.card_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_three_cards() {
        assert_eq!(CarouselMetrics::default().content_width(3), 648.0);
    }

    #[test]
    fn test_content_width_edge_counts() {
        let metrics = CarouselMetrics::default();
        assert_eq!(metrics.content_width(0), 0.0);
        assert_eq!(metrics.content_width(1), 208.0);
    }

    #[test]
    fn test_card_start() {
        let metrics = CarouselMetrics::default();
        assert_eq!(metrics.card_start(0), 0.0);
        assert_eq!(metrics.card_start(2), 440.0);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(ScrollDirection::Left.delta(SCROLL_STEP), -300.0);
        assert_eq!(ScrollDirection::Right.delta(SCROLL_STEP), 300.0);
    }
}
