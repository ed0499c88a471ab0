//! File loading for single paths and the stacked system/user/local order.
//!
//! Responsibilities:
//! - Read one file into a store, surfacing only the open/read failure.
//! - Load the three stacked scopes in precedence order, overlaying each
//!   successfully read layer onto the target store.
//! - Provide the default platform path triple (`StackPaths::for_program`).
//!
//! Does NOT handle:
//! - Parsing rules (see `parser`) or merge semantics (see `merge`).

mod error;
mod paths;
mod stack;

pub use error::ConfigError;
pub use paths::StackPaths;
pub use stack::{load_stacked, read_file, write_file};
