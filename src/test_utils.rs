//! Shared test fixtures and helpers

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::{ClipboardBackend, Config};
    use crate::coupon::{BuiltinCatalog, Catalog, CatalogProvider};

    /// Standard terminal: 70 strip columns = 560 units against 648 of content
    pub const TERMINAL: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Wide enough that the built-in cards fit without scrolling
    pub const WIDE_TERMINAL: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 24,
    };

    /// Config that never touches the system clipboard
    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Osc52;
        config
    }

    pub fn app_with(catalog: Catalog, area: Rect) -> App {
        App::new(catalog, &test_config(), area)
    }

    /// Built-in coupons on a standard terminal
    pub fn test_app() -> App {
        app_with(builtin(), TERMINAL)
    }

    pub fn builtin() -> Catalog {
        BuiltinCatalog.load().unwrap()
    }

    /// Run the smooth scroll to completion
    pub fn settle(app: &mut App) {
        let mut frames = 0;
        while app.strip.is_animating() {
            app.tick();
            frames += 1;
            assert!(frames < 200, "animation never settled");
        }
    }

    /// Draw one frame at the size of `area` and return the screen text
    pub fn render(app: &mut App, area: Rect) -> String {
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        app.clear_dirty();
        terminal.backend().to_string()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}
