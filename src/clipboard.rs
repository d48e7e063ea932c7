//! Clipboard access behind a small service trait.
//!
//! The core pipeline is pure string-in/string-out; this module is the one
//! place that touches the system clipboard, so everything else stays
//! testable against [`test_fixtures::TestClipboard`].
//!
//! Uses `copypasta-ext` with the `x11_fork` context: on Linux/X11 it forks a
//! helper that keeps the selection alive after this short-lived process
//! exits, and on other platforms the same type aliases to the plain system
//! context.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard read failed: {0}")]
    Read(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Read/write access to a clipboard-like destination.
pub trait ClipboardService {
    fn read_text(&mut self) -> ClipboardResult<String>;
    fn write_text(&mut self, content: String) -> ClipboardResult<()>;
}

/// The real system clipboard.
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn read_text(&mut self) -> ClipboardResult<String> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        ctx.get_contents()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn write_text(&mut self, content: String) -> ClipboardResult<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        ctx.set_contents(content)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

pub mod test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    /// In-memory clipboard for tests.
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn read_text(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }

        fn write_text(&mut self, content: String) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }
    }
}
