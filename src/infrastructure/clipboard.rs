use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::domain::errors::ClipboardError;
use crate::domain::services::Clipboard;

/// Terminal clipboard that emits an OSC 52 "set selection" escape sequence.
///
/// Most modern terminal emulators (and tmux with `set-clipboard on`) forward
/// the payload to the system clipboard.
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
}

impl Osc52Clipboard<std::io::Stderr> {
    /// Write to stderr so stdout stays clean for piped output.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[async_trait]
impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text);
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Write("clipboard writer poisoned".to_string()))?;

        out.write_all(sequence.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|err| ClipboardError::Write(err.to_string()))?;

        debug!(bytes = text.len(), "wrote OSC 52 clipboard sequence");
        Ok(())
    }
}

/// Clipboard for contexts where copying happens elsewhere (e.g. in the browser).
pub struct UnavailableClipboard;

#[async_trait]
impl Clipboard for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
