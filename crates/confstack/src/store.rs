//! Ordered entry store and the typed accessor surface.
//!
//! Responsibilities:
//! - Hold entries in insertion order (iteration and serialization order).
//! - Provide first-match key lookup and the get/set/remove accessor family.
//!
//! Does NOT handle:
//! - Text parsing and rendering (delegated to `parser` and `writer`).
//! - File I/O (see `loader`).
//!
//! Invariants:
//! - Key lookup returns the first matching entry; duplicate keys are
//!   representable but only the first is observable through accessors.
//! - The dot depth is fixed per store; every value entry's `parent` matches
//!   recomputation from its key at that depth.
//! - No internal synchronization: concurrent mutation is ruled out by `&mut`
//!   borrows, and sharing across threads requires external locking.

use crate::constants::DEFAULT_DOT_DEPTH;
use crate::entry::Entry;
use crate::options::Options;
use crate::value::{join_list, split_list, ProcessEnv, VarSource};
use crate::{merge, parser, writer};

/// Ordered collection of configuration entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    entries: Vec<Entry>,
    dot_depth: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with the default dot depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DOT_DEPTH)
    }

    /// Create an empty store grouping keys into sections of `depth` segments.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            dot_depth: depth,
        }
    }

    pub fn dot_depth(&self) -> usize {
        self.dot_depth
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Parse configuration text into this store, expanding `${VAR}`
    /// references against the process environment.
    pub fn parse_str(&mut self, text: &str, options: Options) {
        self.parse_str_with(text, options, &ProcessEnv);
    }

    /// Parse configuration text, resolving `${VAR}` references against a
    /// caller-supplied source.
    pub fn parse_str_with(&mut self, text: &str, options: Options, vars: &dyn VarSource) {
        parser::parse_into(self, text, options, vars);
    }

    /// Render the store as configuration text in the requested style.
    pub fn render(&self, options: Options) -> String {
        writer::render(self, options)
    }

    /// Render the store into any `io::Write` target.
    ///
    /// # Errors
    ///
    /// Propagates the underlying writer's I/O error.
    pub fn write_to<W: std::io::Write>(&self, writer: &mut W, options: Options) -> std::io::Result<()> {
        writer.write_all(self.render(options).as_bytes())
    }

    /// Overlay another store onto this one. Matching keys keep their
    /// position and take the overlay's value; unmatched overlay entries are
    /// appended in overlay order.
    pub fn merge_from(&mut self, overlay: &Store, options: Options) {
        merge::merge(self, overlay, options);
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub(crate) fn push_value(&mut self, key: String, value: String, comment: Option<String>) {
        let entry = Entry::value_entry(key, value, comment, self.dot_depth);
        self.entries.push(entry);
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key.as_deref() == Some(key))
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.key.as_deref() == Some(key))
    }

    pub(crate) fn find_marker_mut(&mut self, section: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.is_section_marker() && e.parent == section)
    }

    /// Subsection recorded for a section, from its first marker that has one.
    pub(crate) fn subsection_of(&self, section: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is_section_marker() && e.parent == section && e.subsection.is_some())
            .and_then(Entry::subsection)
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.find(key)
            .and_then(Entry::value)
            .unwrap_or(default)
    }

    /// Integer value for `key`; `default` when absent or not a number.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.find(key)
            .and_then(Entry::value)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Floating-point value for `key`; `default` when absent or not a number.
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.find(key)
            .and_then(Entry::value)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Boolean value for `key`; `default` when absent or unrecognized.
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.find(key).and_then(Entry::value) {
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => default,
            },
            None => default,
        }
    }

    /// Comma-separated value for `key` parsed into trimmed tokens; empty
    /// when the key is absent. Recomputed from the raw value on every call.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.find(key)
            .and_then(Entry::value)
            .map(split_list)
            .unwrap_or_default()
    }

    /// `true` when `key` exists and its value equals `expected` exactly.
    pub fn is_value(&self, key: &str, expected: &str) -> bool {
        self.find(key).and_then(Entry::value) == Some(expected)
    }

    /// Immediate child names under `section`, or the distinct section names
    /// in insertion order when `section` is empty.
    pub fn children(&self, section: &str) -> Vec<String> {
        let mut out = Vec::new();
        if section.is_empty() {
            for entry in &self.entries {
                if entry.parent.is_empty() {
                    continue;
                }
                if !out.iter().any(|known| known == &entry.parent) {
                    out.push(entry.parent.clone());
                }
            }
        } else {
            for entry in &self.entries {
                if let Some(leaf) = entry
                    .key
                    .as_deref()
                    .and_then(|key| key.strip_prefix(section))
                    .and_then(|rest| rest.strip_prefix('.'))
                {
                    out.push(leaf.to_string());
                }
            }
        }
        out
    }

    /// Insert a value or replace the first entry with the same key.
    pub fn set_str(&mut self, key: &str, value: &str) {
        match self.find_mut(key) {
            Some(entry) => entry.value = Some(value.to_string()),
            None => self.push_value(key.to_string(), value.to_string(), None),
        }
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set_str(key, &value.to_string());
    }

    pub fn set_float(&mut self, key: &str, value: f64) {
        self.set_str(key, &value.to_string());
    }

    /// Store a list as a comma-separated value.
    pub fn set_list<S: AsRef<str>>(&mut self, key: &str, tokens: &[S]) {
        self.set_str(key, &join_list(tokens));
    }

    /// Attach a comment to the first entry with this key. Returns `false`
    /// when the key is absent.
    pub fn set_comment(&mut self, key: &str, comment: &str) -> bool {
        match self.find_mut(key) {
            Some(entry) => {
                entry.comment = Some(comment.to_string());
                true
            }
            None => false,
        }
    }

    /// Remove the first entry with this key. Returns `false` when absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.key.as_deref() == Some(key))
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every entry, keeping the configured dot depth.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
