//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_carousel_defaults_match_widget_constants() {
    let config = CarouselConfig::default();

    assert_eq!(config.card_width, 208.0);
    assert_eq!(config.card_gap, 12.0);
    assert_eq!(config.scroll_step, 300.0);
    assert_eq!(config.scroll_buffer, 10.0);
    assert_eq!(config.cell_width, 8.0);
    assert!(config.smooth_scroll);
    assert_eq!(config.metrics(), CarouselMetrics::default());
}

#[test]
fn test_parse_carousel_section() {
    let toml = r#"
[carousel]
card_width = 160.0
scroll_step = 200.0
smooth_scroll = false
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.carousel.card_width, 160.0);
    assert_eq!(config.carousel.scroll_step, 200.0);
    assert!(!config.carousel.smooth_scroll);
    assert_eq!(config.carousel.card_gap, 12.0);
}

#[test]
fn test_integer_values_are_accepted() {
    let toml = r#"
[carousel]
card_width = 160
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.carousel.card_width, 160.0);
}

#[test]
fn test_missing_carousel_section_uses_defaults() {
    let toml = r#"
[clipboard]
backend = "osc52"
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.carousel, CarouselConfig::default());
    assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
}

#[test]
fn test_validate_accepts_defaults() {
    let mut config = CarouselConfig::default();
    assert_eq!(config.validate(), None);
    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn test_validate_resets_bad_values() {
    let mut config = CarouselConfig {
        card_width: 0.0,
        scroll_step: -300.0,
        cell_width: 0.5,
        ..CarouselConfig::default()
    };

    let warning = config.validate().unwrap();

    assert_eq!(
        warning,
        "Invalid carousel settings reset to defaults: card_width, scroll_step, cell_width"
    );
    assert_eq!(config, CarouselConfig::default());
}

#[test]
fn test_validate_allows_zero_gap_and_buffer() {
    let mut config = CarouselConfig {
        card_gap: 0.0,
        scroll_buffer: 0.0,
        ..CarouselConfig::default()
    };

    assert_eq!(config.validate(), None);
    assert_eq!(config.metrics().scroll_buffer, 0.0);
}

#[test]
fn test_validate_rejects_animation_speed_of_one() {
    let mut config = CarouselConfig {
        animation_speed: 1.0,
        ..CarouselConfig::default()
    };

    assert!(config.validate().unwrap().contains("animation_speed"));
    assert_eq!(config.animation_speed, DEFAULT_ANIMATION_SPEED);
}

#[test]
fn test_cell_scale_from_config() {
    let config = CarouselConfig {
        cell_width: 4.0,
        ..CarouselConfig::default()
    };
    assert_eq!(config.cell_scale().to_cols(208.0), 52);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Valid backends always parse to the matching variant
    #[test]
    fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
        let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);

        let config: Config = toml::from_str(&toml_content).unwrap();

        let expected = match backend {
            "auto" => ClipboardBackend::Auto,
            "system" => ClipboardBackend::System,
            "osc52" => ClipboardBackend::Osc52,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.clipboard.backend, expected);
    }

    // Whatever is configured, validated metrics are usable
    #[test]
    fn prop_validated_metrics_are_usable(
        card_width in prop::num::f64::ANY,
        card_gap in prop::num::f64::ANY,
        scroll_step in prop::num::f64::ANY,
        scroll_buffer in prop::num::f64::ANY,
    ) {
        let mut config = CarouselConfig {
            card_width,
            card_gap,
            scroll_step,
            scroll_buffer,
            ..CarouselConfig::default()
        };

        config.validate();
        let metrics = config.metrics();

        prop_assert!(metrics.card_width.is_finite() && metrics.card_width > 0.0);
        prop_assert!(metrics.card_gap.is_finite() && metrics.card_gap >= 0.0);
        prop_assert!(metrics.scroll_step.is_finite() && metrics.scroll_step > 0.0);
        prop_assert!(metrics.scroll_buffer.is_finite() && metrics.scroll_buffer >= 0.0);
    }

    // Values already in range survive validation untouched
    #[test]
    fn prop_valid_values_are_kept(
        card_width in 1.0f64..1000.0,
        scroll_step in 1.0f64..1000.0,
        speed in 0.01f64..0.99,
    ) {
        let mut config = CarouselConfig {
            card_width,
            scroll_step,
            animation_speed: speed,
            ..CarouselConfig::default()
        };

        prop_assert_eq!(config.validate(), None);
        prop_assert_eq!(config.card_width, card_width);
        prop_assert_eq!(config.scroll_step, scroll_step);
    }
}
