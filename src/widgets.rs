//! Shared widget geometry helpers

pub mod popup;
