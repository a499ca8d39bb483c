//! OSC 52 clipboard backend, for SSH and tmux sessions

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Ask the terminal to set its clipboard by writing an OSC 52 sequence to stdout
pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);
    let mut stdout = io::stdout();

    stdout
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
