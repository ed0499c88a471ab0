//! Serializer for the three output dialects.
//!
//! Responsibilities:
//! - Walk the store in order and emit section headers on parent changes.
//! - Render child key names with the section prefix removed.
//! - Emit comments (when enabled) as `; ` lines preceding the line they
//!   annotate, so re-parsing attaches them to the same entry.
//!
//! Does NOT handle:
//! - Mutation or grouping of the store itself; entries are rendered in
//!   insertion order, adjacency decides where headers go.
//!
//! Invariants:
//! - Output re-parses to an equivalent store under the same options
//!   (idempotent under repeated read/write).
//! - With comments enabled, `;` and `#` inside values are written
//!   backslash-escaped so the re-parse does not shear them off.
//! - Values the re-parse would alter (surrounding whitespace, or an exact
//!   pair of surrounding quotes) are written quoted so unwrapping restores
//!   them.

use crate::entry::Entry;
use crate::options::{Options, Style};
use crate::store::Store;

pub(crate) fn render(store: &Store, options: Options) -> String {
    let mut out = String::new();
    let mut prev_parent: Option<&str> = None;
    let mut printed_groups = 0usize;

    for entry in store.iter() {
        let parent = entry.parent();

        if prev_parent != Some(parent) {
            if printed_groups > 0 {
                out.push('\n');
            }
            if entry.is_section_marker() && options.comments() {
                push_comment_lines(&mut out, entry.comment());
            }
            push_header(&mut out, parent, store.subsection_of(parent), options.style);
            printed_groups += 1;
            prev_parent = Some(parent);
            if entry.is_section_marker() {
                continue;
            }
        } else if entry.is_section_marker() {
            if options.comments() {
                push_comment_lines(&mut out, entry.comment());
            }
            continue;
        }

        push_key_value(&mut out, entry, options);
    }

    out
}

fn push_header(out: &mut String, parent: &str, subsection: Option<&str>, style: Style) {
    if parent.is_empty() {
        return;
    }
    if style == Style::Git {
        if let Some(sub) = subsection {
            if let Some(base) = parent
                .strip_suffix(sub)
                .and_then(|prefix| prefix.strip_suffix('.'))
            {
                out.push('[');
                out.push_str(base);
                out.push_str(" \"");
                out.push_str(sub);
                out.push_str("\"]\n");
                return;
            }
        }
    }
    out.push('[');
    out.push_str(parent);
    out.push_str("]\n");
}

fn push_key_value(out: &mut String, entry: &Entry, options: Options) {
    if options.comments() {
        push_comment_lines(out, entry.comment());
    }

    // `child` and `value` are present on every non-marker entry.
    let child = entry.child().unwrap_or_default();
    let value = entry.value().unwrap_or_default();

    if options.style == Style::Git {
        out.push('\t');
    }
    out.push_str(child);
    out.push_str(" = ");
    let quote = needs_quoting(value);
    if quote {
        out.push('"');
    }
    if options.comments() {
        out.push_str(&escape_markers(value));
    } else {
        out.push_str(value);
    }
    if quote {
        out.push('"');
    }
    out.push('\n');
}

/// Whether re-parsing would alter the raw value: surrounding whitespace is
/// trimmed away, and an exact pair of surrounding quotes is unwrapped.
fn needs_quoting(value: &str) -> bool {
    value.trim() != value
        || (value.len() >= 2 && value.starts_with('"') && value.ends_with('"'))
}

fn push_comment_lines(out: &mut String, comment: Option<&str>) {
    let Some(comment) = comment else { return };
    for line in comment.split('\n') {
        out.push_str("; ");
        out.push_str(line);
        out.push('\n');
    }
}

fn escape_markers(value: &str) -> String {
    value.replace(';', "\\;").replace('#', "\\#")
}
