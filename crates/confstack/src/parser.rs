//! Line-oriented parser for the INI dialect family.
//!
//! Responsibilities:
//! - Classify each trimmed line (blank, comment, section header, key/value)
//!   and append the resulting entries to a `Store`.
//! - Accumulate pending comment lines and attach them to the next entry.
//! - Track the current section context across lines.
//!
//! Does NOT handle:
//! - File I/O (see `loader`); input arrives as already-read text.
//! - Serialization (see `writer`).
//!
//! Invariants:
//! - Parsing never fails: malformed constructs (headers without `]`, lines
//!   without `=`) are skipped, never surfaced.
//! - Blank lines clear the pending comment; comment blocks do not span them.
//! - A `[base "sub"]` header sets the section context to `base.sub` and
//!   records `sub` on the marker entry.

use crate::options::Options;
use crate::store::Store;
use crate::value::{expand, VarSource};
use crate::Entry;

pub(crate) fn parse_into(store: &mut Store, text: &str, options: Options, vars: &dyn VarSource) {
    let mut section = String::new();
    let mut pending: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            pending = None;
            continue;
        }

        if let Some(rest) = line.strip_prefix([';', '#']) {
            append_comment(&mut pending, rest.trim());
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let Some(end) = rest.find(']') else {
                tracing::trace!(line = raw, "ignoring section header with no closing bracket");
                continue;
            };
            let (name, subsection) = parse_header(rest[..end].trim());
            section = name;
            store.push(Entry::section_marker(
                section.clone(),
                subsection,
                pending.take(),
            ));
            continue;
        }

        let Some(eq) = line.find('=') else {
            tracing::trace!(line = raw, "skipping line without '='");
            continue;
        };

        // Empty keys are tolerated; whatever precedes the '=' is the key.
        let key = line[..eq].trim();
        let mut value = line[eq + 1..].trim().to_string();

        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = value[1..value.len() - 1].to_string();
        }

        if options.comments() {
            match split_inline_comment(&value) {
                Some((kept, comment)) => {
                    value = kept;
                    append_comment(&mut pending, &comment);
                }
                None => value = unescape_markers(&value),
            }
        }

        if !options.keep_vars() {
            value = expand(&value, vars).into_owned();
        }

        let full_key = if section.is_empty() {
            key.to_string()
        } else {
            format!("{section}.{key}")
        };
        store.push_value(full_key, value, pending.take());
    }
}

fn append_comment(pending: &mut Option<String>, text: &str) {
    match pending {
        Some(buffer) => {
            buffer.push('\n');
            buffer.push_str(text);
        }
        None => *pending = Some(text.to_string()),
    }
}

/// Split a trimmed header body into section context and optional subsection.
///
/// `base "sub"` becomes (`base.sub`, `Some(sub)`); anything else is used
/// verbatim as the section name.
fn parse_header(header: &str) -> (String, Option<String>) {
    if let Some(body) = header.strip_suffix('"') {
        if let Some((base, sub)) = body.split_once('"') {
            let base = base.trim_end();
            if !base.is_empty() && !sub.is_empty() && !base.contains('"') {
                return (format!("{base}.{sub}"), Some(sub.to_string()));
            }
        }
    }
    (header.to_string(), None)
}

/// Split off an inline comment at the first unescaped `;`, falling back to
/// the first unescaped `#`. The kept value has its escapes removed.
fn split_inline_comment(value: &str) -> Option<(String, String)> {
    let at = find_unescaped(value, ';').or_else(|| find_unescaped(value, '#'))?;
    let comment = value[at + 1..].trim().to_string();
    let kept = unescape_markers(value[..at].trim_end());
    Some((kept, comment))
}

fn find_unescaped(value: &str, marker: char) -> Option<usize> {
    value
        .match_indices(marker)
        .map(|(i, _)| i)
        .find(|&i| i == 0 || value.as_bytes()[i - 1] != b'\\')
}

fn unescape_markers(value: &str) -> String {
    value.replace("\\;", ";").replace("\\#", "#")
}
