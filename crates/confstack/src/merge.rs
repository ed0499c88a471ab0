//! Asymmetric overlay merge between two stores.
//!
//! Responsibilities:
//! - Overwrite base values for keys the overlay also defines, in place.
//! - Append deep copies of overlay-only entries after the base entries.
//! - Combine section comments (`" | "`-joined) when both stores carry a
//!   marker for the same section and comments are enabled.
//!
//! Invariants:
//! - The base's order is preserved for pre-existing keys; overlay-only
//!   entries arrive at the end in overlay order.
//! - Value entries match by key (first match), section markers by section
//!   name; a marker never matches a value entry.
//! - Nothing is shared between the stores; appended entries are rebuilt
//!   against the base's dot depth.

use crate::options::Options;
use crate::store::Store;
use crate::Entry;

pub(crate) fn merge(base: &mut Store, overlay: &Store, options: Options) {
    for entry in overlay.iter() {
        match entry.key() {
            Some(key) => merge_value(base, entry, key, options),
            None => merge_marker(base, entry, options),
        }
    }
}

fn merge_value(base: &mut Store, entry: &Entry, key: &str, options: Options) {
    match base.find_mut(key) {
        Some(existing) => {
            existing.value = entry.value.clone();
            if options.comments() && entry.comment.is_some() {
                existing.comment = entry.comment.clone();
            }
        }
        None => {
            // Re-derive the parent so the copy honors the base's depth.
            base.push_value(
                key.to_string(),
                entry.value.clone().unwrap_or_default(),
                entry.comment.clone(),
            );
        }
    }
}

fn merge_marker(base: &mut Store, entry: &Entry, options: Options) {
    match base.find_marker_mut(entry.parent()) {
        Some(existing) => {
            if options.comments() {
                if let Some(addition) = entry.comment() {
                    existing.comment = Some(match existing.comment.take() {
                        Some(current) => format!("{current} | {addition}"),
                        None => addition.to_string(),
                    });
                }
            }
            if existing.subsection.is_none() {
                existing.subsection = entry.subsection.clone();
            }
        }
        None => base.push(entry.clone()),
    }
}
