use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    #[cfg(debug_assertions)]
    log::debug!("Copying {} bytes via {:?}", text.len(), backend);

    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}
