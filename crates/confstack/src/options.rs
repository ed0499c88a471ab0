//! Parse/serialize options shared by every engine entry point.
//!
//! Responsibilities:
//! - Define the output `Style` and the content `Flags` bitset.
//! - Bundle both into `Options`, passed to parse, merge, and write calls.
//!
//! Does NOT handle:
//! - The dot depth, which is carried by the `Store` itself (it affects the
//!   stored `parent` of every entry, not just one call).

use bitflags::bitflags;

bitflags! {
    /// Content flags controlling what the parser keeps and the writer emits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u32 {
        /// Preserve `${VAR}` references verbatim instead of expanding them.
        const KEEP_VARS = 1 << 0;
        /// Track comments on read and re-emit them on write. Without this
        /// flag comments are discarded during parsing and never written.
        const COMMENTS = 1 << 1;
    }
}

/// Output dialect. Affects serialization only; the in-memory model is flat
/// regardless of style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Classic INI: `[section]` with `key = value` children.
    #[default]
    Ini,
    /// Git config: `[section "sub"]` headers, tab-indented children.
    Git,
    /// Dotted subsections: `[a.b]` headers, same shape as INI.
    Sub,
}

/// Style and flags for one parse/merge/write call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub style: Style,
    pub flags: Flags,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    pub(crate) fn comments(self) -> bool {
        self.flags.contains(Flags::COMMENTS)
    }

    pub(crate) fn keep_vars(self) -> bool {
        self.flags.contains(Flags::KEEP_VARS)
    }
}
