//! HTML comparison-table rendering.
//!
//! Takes the grouping output and serializes it to the fixed layout expected
//! in PR descriptions: a collapsible `<details>` container wrapping a single
//! table. Standalone images come first, two per row as header/image row
//! pairs; before/after groups follow in ascending group order, each as a
//! category header spanning both columns, a Before/After header row, and an
//! image row. An incomplete pair renders with an empty cell.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/) — the same
//! reasons as everywhere else: compile-time checked structure and escaped
//! interpolation by default, so a hostile alt text cannot break out of the
//! table.

use crate::config::TableConfig;
use crate::grouping::{Grouped, sorted_groups};
use crate::types::ImageRecord;
use maud::{Markup, html};

/// Render the grouped records as the final HTML fragment.
pub fn render_table(grouped: &Grouped, config: &TableConfig) -> String {
    let markup = html! {
        details {
            summary { (config.summary_label) }
            table {
                tbody {
                    @for pair in grouped.standalone.chunks(2) {
                        (standalone_rows(pair, config.image_width))
                    }
                    @for (category, group) in sorted_groups(grouped) {
                        tr { th colspan="2" { (category_title(category)) } }
                        tr { th { "Before" } th { "After" } }
                        tr {
                            td { @if let Some(before) = &group.before { (image(before, config.image_width)) } }
                            td { @if let Some(after) = &group.after { (image(after, config.image_width)) } }
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

/// One header row plus one image row for up to two standalone records.
fn standalone_rows(pair: &[ImageRecord], width: u32) -> Markup {
    html! {
        tr { @for record in pair { th { (category_title(&record.category)) } } }
        tr { @for record in pair { td { (image(record, width)) } } }
    }
}

fn image(record: &ImageRecord, width: u32) -> Markup {
    html! {
        img src=(record.src) alt=(record.alt) width=(width);
    }
}

/// Category display title: split on `_`, capitalize each segment's first
/// character, join with spaces.
///
/// Underscores were already converted upstream by the filename parser, so
/// the split is a no-op in practice; it is kept so a category that somehow
/// retains underscores still renders the same way it always did.
pub fn category_title(category: &str) -> String {
    category
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
