use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_layout::ScreenLayout;
use super::app_state::App;
use crate::carousel::carousel_render::render_carousel;
use crate::carousel::strip_layout::CarouselAreas;
use crate::notification::render_notification;
use crate::theme;

const TITLE: &str = "Available Coupons";

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let screen = ScreenLayout::new(frame.area());
        let areas = CarouselAreas::new(screen.carousel);

        // Geometry must match what is drawn before the arrows are decided
        self.fit_viewport(areas.strip.width);

        render_title(self, frame, screen.title);

        let rendered = render_carousel(
            frame,
            &areas,
            &self.catalog,
            &self.carousel,
            &self.strip,
            &self.scale,
        );
        self.layout_regions.record_carousel(rendered);

        render_hints(self, frame, screen.hints);
        render_notification(frame, &mut self.notification);
    }
}

fn render_title(app: &App, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", TITLE), theme::title::TEXT)),
        area,
    );

    if let Some(code) = app.applied() {
        let applied = Line::from(vec![
            Span::styled("Applied: ", Style::default().fg(theme::help_line::KEY)),
            Span::styled(format!("{} ", code), theme::title::TEXT),
        ]);
        frame.render_widget(Paragraph::new(applied).alignment(Alignment::Right), area);
    }
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.catalog.is_empty() {
        hints!["q" => "Quit"]
    } else if app.carousel.can_scroll_left() || app.carousel.can_scroll_right() {
        hints!["←/→" => "Scroll", "1-9" => "Apply", "Click" => "Apply/Scroll", "q" => "Quit"]
    } else {
        hints!["1-9" => "Apply", "Click" => "Apply", "q" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

fn render_hints(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    frame.render_widget(Paragraph::new(Line::from(build_styled_spans(&hints))), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
