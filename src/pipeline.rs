//! End-to-end orchestration: classify → transform → (optionally) round-trip
//! through the clipboard.
//!
//! The core stays pure — [`transform`] is a function of its input string and
//! the config. [`format_clipboard`] layers the sequential read → transform →
//! write flow on top, against the [`ClipboardService`] trait so tests run on
//! the in-memory fixture.
//!
//! Per-entry malformations never surface here (extraction degrades by
//! omission); the only error conditions are an entirely empty result and
//! clipboard I/O faults.

use crate::clipboard::{ClipboardError, ClipboardService};
use crate::config::ToolConfig;
use crate::extract::{self, InputKind};
use crate::grouping;
use crate::render;
use crate::title;
use crate::types::ImageRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("no images found in the snippet")]
    NoImages,
    #[error("could not parse a title from the input")]
    EmptyTitle,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// What a transformation produced, so callers can word their notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    /// A bracketed PR title.
    Title(String),
    /// An HTML comparison table built from `images` records.
    Table { html: String, images: usize },
}

impl Formatted {
    /// The text that goes back to the clipboard / stdout.
    pub fn text(&self) -> &str {
        match self {
            Formatted::Title(title) => title,
            Formatted::Table { html, .. } => html,
        }
    }
}

/// Transform one clipboard payload into its canonical form.
pub fn transform(input: &str, config: &ToolConfig) -> Result<Formatted, PipelineError> {
    match extract::classify(input) {
        InputKind::TagImages => table_from(extract::extract_tag_images(input), config),
        InputKind::LinkImages => table_from(extract::extract_link_images(input), config),
        InputKind::Title => {
            let formatted = title::format_title(input);
            if formatted.is_empty() {
                Err(PipelineError::EmptyTitle)
            } else {
                Ok(Formatted::Title(formatted))
            }
        }
    }
}

fn table_from(records: Vec<ImageRecord>, config: &ToolConfig) -> Result<Formatted, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::NoImages);
    }
    let images = records.len();
    let html = render::render_table(&grouping::group(records), &config.table);
    Ok(Formatted::Table { html, images })
}

/// Clipboard round trip: read, transform, write the result back.
///
/// Each step must complete before the next; any failure aborts the flow and
/// leaves the clipboard with whatever it held at that point.
pub fn format_clipboard(
    clipboard: &mut dyn ClipboardService,
    config: &ToolConfig,
) -> Result<Formatted, PipelineError> {
    let input = clipboard.read_text()?;
    let formatted = transform(&input, config)?;
    clipboard.write_text(formatted.text().to_string())?;
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::test_fixtures::TestClipboard;

    fn config() -> ToolConfig {
        ToolConfig::default()
    }

    #[test]
    fn title_input_round_trips_through_clipboard() {
        let mut clip = TestClipboard {
            content: "mb 80 fix the sidebar".to_string(),
        };
        let formatted = format_clipboard(&mut clip, &config()).unwrap();
        assert_eq!(formatted, Formatted::Title("[MB-80] Fix the sidebar".to_string()));
        assert_eq!(clip.content, "[MB-80] Fix the sidebar");
    }

    #[test]
    fn image_input_writes_table_back() {
        let mut clip = TestClipboard {
            content: r#"<img alt="card before" src="b.png"><img alt="card after" src="a.png">"#
                .to_string(),
        };
        let formatted = format_clipboard(&mut clip, &config()).unwrap();
        match formatted {
            Formatted::Table { images, .. } => assert_eq!(images, 2),
            other => panic!("expected a table, got {other:?}"),
        }
        assert!(clip.content.starts_with("<details>"));
    }

    #[test]
    fn markdown_input_takes_the_link_path() {
        let formatted = transform("![1. a](u)", &config()).unwrap();
        assert!(matches!(formatted, Formatted::Table { images: 1, .. }));
    }

    #[test]
    fn snippet_without_usable_images_is_no_images() {
        let result = transform(r#"<img src="missing-alt.png">"#, &config());
        assert!(matches!(result, Err(PipelineError::NoImages)));
    }

    #[test]
    fn blank_input_is_empty_title() {
        let result = transform("   ", &config());
        assert!(matches!(result, Err(PipelineError::EmptyTitle)));
    }

    #[test]
    fn failed_transform_leaves_clipboard_untouched() {
        let mut clip = TestClipboard {
            content: "   ".to_string(),
        };
        let _ = format_clipboard(&mut clip, &config());
        assert_eq!(clip.content, "   ");
    }
}
