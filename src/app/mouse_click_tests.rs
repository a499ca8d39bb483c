//! Tests for mouse_click

use ratatui::crossterm::event::Event;

use crate::test_utils::test_helpers::{TERMINAL, click, render, settle, test_app};

#[test]
fn test_click_visible_right_control() {
    let mut app = test_app();
    render(&mut app, TERMINAL);

    app.handle_event(Event::Mouse(click(77, 6)));
    settle(&mut app);

    assert_eq!(app.strip.offset(), 88.0);
    assert!(app.carousel.can_scroll_left());
    assert!(!app.carousel.can_scroll_right());
}

#[test]
fn test_click_where_hidden_control_would_be() {
    let mut app = test_app();
    render(&mut app, TERMINAL);

    app.handle_event(Event::Mouse(click(2, 6)));

    assert!(!app.strip.is_animating());
    assert_eq!(app.strip.offset(), 0.0);
}

#[test]
fn test_left_control_appears_after_scroll() {
    let mut app = test_app();
    render(&mut app, TERMINAL);
    app.handle_event(Event::Mouse(click(77, 6)));
    settle(&mut app);
    render(&mut app, TERMINAL);

    app.handle_event(Event::Mouse(click(2, 6)));
    settle(&mut app);

    assert_eq!(app.strip.offset(), 0.0);
    assert!(!app.carousel.can_scroll_left());
}

#[test]
fn test_click_apply_button() {
    let mut app = test_app();
    render(&mut app, TERMINAL);

    // Second card's Apply button starts at column 34 on row 10
    app.handle_event(Event::Mouse(click(36, 10)));

    assert_eq!(app.applied(), Some("FLASH30"));
}

#[test]
fn test_click_card_body_does_nothing() {
    let mut app = test_app();
    render(&mut app, TERMINAL);

    app.handle_event(Event::Mouse(click(36, 5)));

    assert_eq!(app.applied(), None);
    assert!(!app.strip.is_animating());
}

#[test]
fn test_click_before_first_render_does_nothing() {
    let mut app = test_app();

    app.handle_event(Event::Mouse(click(77, 6)));

    assert!(!app.strip.is_animating());
}
