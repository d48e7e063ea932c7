//! Partitioning extracted records into standalone images and before/after
//! pairs.
//!
//! Records arrive already order-sorted from extraction. Standalone records
//! keep their relative order in a flat list. Before/after records fold into
//! a group per category, with the group's order tracking the minimum order of
//! every contribution so a pair sorts where its earliest member appeared.
//!
//! Groups are stored in first-seen category order; sorting by group order is
//! deliberately left to [`sorted_groups`] at render time rather than baked
//! into the structure.
//!
//! Quirk, kept on purpose: when two records with the same category and the
//! same timing arrive, the later one silently overwrites the earlier — no
//! merge, no error. Whether that is intended upstream is unclear, so it is
//! documented here rather than changed.

use crate::types::{Group, ImageRecord, Timing};

/// Output of the grouping pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Grouped {
    /// Standalone records in their incoming (order-sorted) sequence.
    pub standalone: Vec<ImageRecord>,
    /// Before/after groups keyed by category, in first-seen order.
    pub paired: Vec<(String, Group)>,
}

impl Grouped {
    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.paired.is_empty()
    }
}

/// Partition a record sequence into standalone entries and paired groups.
pub fn group(records: Vec<ImageRecord>) -> Grouped {
    let mut grouped = Grouped::default();
    for record in records {
        match record.timing {
            Timing::Standalone => grouped.standalone.push(record),
            Timing::Before | Timing::After => insert_paired(&mut grouped.paired, record),
        }
    }
    grouped
}

fn insert_paired(paired: &mut Vec<(String, Group)>, record: ImageRecord) {
    let idx = match paired.iter().position(|(key, _)| *key == record.category) {
        Some(idx) => {
            paired[idx].1.order = paired[idx].1.order.min(record.order);
            idx
        }
        None => {
            paired.push((
                record.category.clone(),
                Group {
                    before: None,
                    after: None,
                    order: record.order,
                },
            ));
            paired.len() - 1
        }
    };
    let group = &mut paired[idx].1;
    match record.timing {
        Timing::Before => group.before = Some(record),
        Timing::After => group.after = Some(record),
        Timing::Standalone => unreachable!("standalone records never reach a group"),
    }
}

/// Paired groups in ascending group order, ties keeping first-seen order.
pub fn sorted_groups(grouped: &Grouped) -> Vec<(&str, &Group)> {
    let mut groups: Vec<(&str, &Group)> = grouped
        .paired
        .iter()
        .map(|(key, group)| (key.as_str(), group))
        .collect();
    groups.sort_by_key(|(_, group)| group.order);
    groups
}
