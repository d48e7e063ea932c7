//! # clipform
//!
//! A clipboard normalizer for pull-request workflows. Copy loosely formatted
//! text, run `clipform format`, paste the canonical result:
//!
//! - A free-text title draft becomes `[TICKET] [PART-N] Feature name`:
//!   `"mb 80 part 2 fix the sidebar"` → `"[MB-80] [PART-2] Fix the sidebar"`.
//! - A pasted block of `<img>` tags or Markdown `![...](...)` images becomes
//!   a collapsible HTML table that pairs `before`/`after` screenshots by
//!   name and lines standalone shots up two per row.
//!
//! # Architecture: One Pure Pipeline
//!
//! The whole transformation is a pure function of the input string. A
//! classification step sniffs the trimmed input's prefix and picks a path:
//!
//! ```text
//! <img …   →  extract (tag)  →  group  →  render   (HTML table)
//! ![…      →  extract (link) →  group  →  render   (HTML table)
//! else     →  title                                (bracketed title)
//! ```
//!
//! Clipboard access, desktop notifications, and config loading sit outside
//! that pipeline, behind their own modules, so every parsing rule is unit
//! tested without touching the system.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`filename`] | Alt-text grammar: order prefix, underscore normalization, before/after suffix |
//! | [`title`] | Free-text draft → `[TICKET] [PART-N] Feature name` |
//! | [`extract`] | Input classification plus the `<img>` and `![…](…)` scanners |
//! | [`grouping`] | Partitions records into standalone images and before/after pairs |
//! | [`render`] | Maud templates for the comparison table |
//! | [`pipeline`] | classify → transform → clipboard round trip |
//! | [`config`] | `config.toml` loading, validation, stock config generation |
//! | [`clipboard`] | `ClipboardService` trait, system impl, test fixture |
//! | [`notify`] | Best-effort desktop notifications |
//! | [`types`] | Shared value types (`ImageRecord`, `Timing`, `Group`) |
//!
//! # Design Decisions
//!
//! ## Hand-Written Scanners Over Regex
//!
//! The alt-text and snippet grammars have hard anchor points (order prefix
//! at start of string, timing word at end) and one rule — balanced-paren
//! tracking in Markdown targets — that a single pattern cannot express.
//! Small explicit scanners keep every anchor visible and make the edge
//! cases unit-testable one rule at a time.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed table structure is a build error, template
//! variables are Rust expressions, and all interpolation is auto-escaped —
//! which matters when alt text straight off the clipboard lands in
//! attributes.
//!
//! ## Degrade By Omission
//!
//! A malformed tag or link is skipped, never fatal: clipboard snippets are
//! messy, and half a table beats an error dialog. Only a fully empty result
//! is reported to the user, and it is reported as a condition ("no images
//! found"), not a crash.
//!
//! ## Silent Overwrite On Duplicate Pairs
//!
//! Two `before` images under one category keep only the later one. That
//! mirrors long-standing behavior and is documented in [`grouping`] rather
//! than "fixed" silently.

pub mod clipboard;
pub mod config;
pub mod extract;
pub mod filename;
pub mod grouping;
pub mod notify;
pub mod pipeline;
pub mod render;
pub mod title;
pub mod types;
