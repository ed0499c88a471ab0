//! Layered key/value configuration for the INI family of formats.
//!
//! This crate parses, mutates, merges, and serializes hierarchical
//! configuration text in three dialects: classic INI (`[section] key =
//! value`), Git-style (`[section "name"]` with tab-indented children), and
//! dotted subsections (`[a.b] c.d = value`). Entries are stored flat under
//! dot-joined keys (`server.url`); the section grouping used for display is
//! re-derived from each key and the store's dot depth.
//!
//! Typical lifecycle:
//!
//! ```no_run
//! use confstack::{load_stacked, Flags, Options, StackPaths, Store};
//!
//! let mut store = Store::new();
//! let options = Options::new().with_flags(Flags::COMMENTS);
//! load_stacked(&mut store, &StackPaths::for_program("myapp"), options);
//!
//! let url = store.get_str("server.url", "http://localhost");
//! let timeout = store.get_int("network.timeout", 30);
//! ```

mod constants;
mod entry;
mod loader;
mod merge;
mod options;
mod parser;
mod store;
pub mod value;
mod writer;

pub use constants::{DEFAULT_DOT_DEPTH, DEFAULT_SUFFIX};
pub use entry::Entry;
pub use loader::{load_stacked, read_file, write_file, ConfigError, StackPaths};
pub use options::{Flags, Options, Style};
pub use store::Store;
pub use value::{ProcessEnv, VarSource};
