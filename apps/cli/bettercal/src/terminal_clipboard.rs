//! Clipboard writes through the terminal (OSC 52).
//!
//! Most terminal emulators, tmux and SSH sessions included, copy the payload
//! of an OSC 52 escape sequence into the system clipboard.

use client_core::clipboard::Clipboard;
use client_core::error::clipboard::ClipboardError;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_TERMINATOR: &str = "\x07";

/// Escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("{OSC52_PREFIX}{}{OSC52_TERMINATOR}", STANDARD.encode(text))
}

pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| ClipboardError::Write {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
