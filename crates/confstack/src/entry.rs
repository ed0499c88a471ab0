//! Configuration entries and the flat-key depth rule.
//!
//! Responsibilities:
//! - Define `Entry`: one key/value line or one section marker.
//! - Derive the section (`parent`) and display name (`child`) of a flat key
//!   from the store's dot depth.
//!
//! Invariants:
//! - A value entry's `parent` is a pure function of its key and depth; it is
//!   recomputed on construction and never settable independently.
//! - A section marker (`key == None`) carries the literal section name in
//!   `parent`, unconstrained by the depth rule.
//! - `parent` + `.` + `child(key)` reassembles the full key (the parent is
//!   simply dropped when empty), which is what makes serialization
//!   invertible.

/// One configuration line's worth of state.
///
/// Either a key/value entry (`key` and `value` present) or a section marker
/// (`key` absent, `parent` holding the section name declared by a `[...]`
/// header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) parent: String,
    pub(crate) subsection: Option<String>,
}

impl Entry {
    pub(crate) fn value_entry(
        key: String,
        value: String,
        comment: Option<String>,
        depth: usize,
    ) -> Self {
        let parent = parent_of(&key, depth).to_string();
        Self {
            key: Some(key),
            value: Some(value),
            comment,
            parent,
            subsection: None,
        }
    }

    pub(crate) fn section_marker(
        name: String,
        subsection: Option<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            key: None,
            value: None,
            comment,
            parent: name,
            subsection,
        }
    }

    /// Full flat key, or `None` for a section marker.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Raw string value, present exactly when `key` is present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Comment attached to this entry or section.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Section this entry belongs to; empty for top-level keys.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Subsection name recorded from a `[base "sub"]` header.
    pub fn subsection(&self) -> Option<&str> {
        self.subsection.as_deref()
    }

    pub fn is_section_marker(&self) -> bool {
        self.key.is_none()
    }

    /// Key portion not already covered by the section header.
    pub(crate) fn child(&self) -> Option<&str> {
        let key = self.key.as_deref()?;
        if self.parent.is_empty() {
            Some(key)
        } else {
            Some(&key[self.parent.len() + 1..])
        }
    }
}

/// Section of `key` at the given depth: the leading `min(depth, segments -
/// 1)` dot-separated segments. Single-segment keys have no section.
pub(crate) fn parent_of(key: &str, depth: usize) -> &str {
    let dots: Vec<usize> = key.match_indices('.').map(|(i, _)| i).collect();
    let take = depth.min(dots.len());
    if take == 0 {
        ""
    } else {
        &key[..dots[take - 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_takes_leading_segments_up_to_depth() {
        assert_eq!(parent_of("a.b.c.d", 2), "a.b");
        assert_eq!(parent_of("a.b.c", 2), "a.b");
        assert_eq!(parent_of("a.b.c.d", 3), "a.b.c");
    }

    #[test]
    fn parent_keeps_last_segment_as_child() {
        assert_eq!(parent_of("server.url", 2), "server");
        assert_eq!(parent_of("flag", 2), "");
    }

    #[test]
    fn parent_depth_zero_groups_everything_top_level() {
        assert_eq!(parent_of("a.b.c", 0), "");
    }

    #[test]
    fn child_is_key_minus_parent_prefix() {
        let entry = Entry::value_entry("a.b.c.d".into(), "v".into(), None, 2);
        assert_eq!(entry.parent(), "a.b");
        assert_eq!(entry.child(), Some("c.d"));

        let top = Entry::value_entry("flag".into(), "v".into(), None, 2);
        assert_eq!(top.parent(), "");
        assert_eq!(top.child(), Some("flag"));
    }

    #[test]
    fn parent_and_child_reassemble_the_key() {
        for key in ["a", "a.b", "a.b.c", "a.b.c.d.e"] {
            for depth in 1..4 {
                let entry = Entry::value_entry(key.into(), "v".into(), None, depth);
                let rebuilt = if entry.parent().is_empty() {
                    entry.child().unwrap().to_string()
                } else {
                    format!("{}.{}", entry.parent(), entry.child().unwrap())
                };
                assert_eq!(rebuilt, key);
            }
        }
    }

    #[test]
    fn section_marker_keeps_literal_name() {
        let marker = Entry::section_marker("remote.origin".into(), Some("origin".into()), None);
        assert!(marker.is_section_marker());
        assert_eq!(marker.parent(), "remote.origin");
        assert_eq!(marker.subsection(), Some("origin"));
        assert_eq!(marker.child(), None);
    }
}
