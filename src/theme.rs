//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Card accents
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Screen title
pub mod title {
    use super::*;

    pub const TEXT: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
}

/// Coupon cards and arrow controls
pub mod carousel {
    use super::*;
    use crate::coupon::Accent;

    pub fn accent(accent: Accent) -> Color {
        match accent {
            Accent::Purple => palette::PURPLE,
            Accent::Amber => palette::ORANGE,
            Accent::Teal => palette::GREEN,
            Accent::Pink => palette::PINK,
            Accent::Cyan => palette::CYAN,
        }
    }

    /// Label badge drawn as dark text on the accent color
    pub fn badge(accent: Accent) -> Style {
        Style::new()
            .fg(palette::BG_DARK)
            .bg(self::accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    pub const CARD_TEXT: Color = palette::TEXT;
    pub const CARD_TEXT_MUTED: Color = palette::TEXT_MUTED;

    pub const APPLY_BUTTON: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    pub const CONTROL_SYMBOL: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const CONTROL_BORDER: Color = palette::TEXT_MUTED;

    pub const EMPTY_TEXT: Color = palette::TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
