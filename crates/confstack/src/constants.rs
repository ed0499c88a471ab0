//! Shared constants for the configuration engine.

/// Default number of key segments grouped into a section name.
///
/// With depth 2, `a.b.c.d` belongs to section `a.b`. Keys with fewer
/// segments keep their final segment as the child name, so `server.url`
/// belongs to section `server`.
pub const DEFAULT_DOT_DEPTH: usize = 2;

/// Default file-name suffix used by the stacked-path provider.
pub const DEFAULT_SUFFIX: &str = "conf";
