//! Tests for notification_state

use super::*;
use crate::theme;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_info_notification() {
    let notif = Notification::new("Copied WELCOME50!");
    assert_eq!(notif.message, "Copied WELCOME50!");
    assert_eq!(notif.notification_type, NotificationType::Info);
    assert_eq!(notif.duration, Some(Duration::from_millis(1500)));
    assert_eq!(notif.style, theme::notification::INFO);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification() {
    let notif = Notification::with_type("Warning!", NotificationType::Warning);
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.duration, Some(Duration::from_secs(10)));
    assert_eq!(notif.style, theme::notification::WARNING);
}

#[test]
fn test_error_notification_never_expires() {
    let mut state = NotificationState::new();
    state.show_error("Clipboard unavailable");

    let notif = state.current().unwrap();
    assert_eq!(notif.notification_type, NotificationType::Error);
    assert_eq!(notif.duration, None);
    assert_eq!(notif.style, theme::notification::ERROR);
    assert!(!state.clear_if_expired());
    assert!(state.current().is_some());
}

#[test]
fn test_notification_expiration() {
    let mut notif = Notification::new("Expiring");
    notif.duration = Some(Duration::from_millis(10));
    assert!(!notif.is_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(notif.is_expired());
}

#[test]
fn test_clear_if_expired() {
    let mut state = NotificationState::new();
    state.show("Test");

    if let Some(ref mut notif) = state.current {
        notif.duration = Some(Duration::from_millis(10));
    }

    assert!(!state.clear_if_expired());
    thread::sleep(Duration::from_millis(20));
    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
}

#[test]
fn test_show_warning() {
    let mut state = NotificationState::new();
    state.show_warning("Config invalid");

    assert_eq!(state.current_message(), Some("Config invalid"));
    assert_eq!(
        state.current().unwrap().notification_type,
        NotificationType::Warning
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Only the most recent notification is visible
    #[test]
    fn prop_notification_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
        let mut state = NotificationState::new();

        for msg in &messages {
            state.show(msg);
        }

        let last_message = messages.last().unwrap();
        prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
    }
}
