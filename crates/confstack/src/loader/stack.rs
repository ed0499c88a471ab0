//! Single-file and stacked reading, plus file writing.
//!
//! Responsibilities:
//! - `read_file` / `write_file`: one-path operations with path-carrying
//!   errors.
//! - `load_stacked`: system → user → local precedence; each readable layer
//!   is parsed into a scratch store and overlaid onto the target, so later
//!   scopes override earlier keys instead of appending shadowed duplicates.
//!
//! Invariants:
//! - A missing stacked file is not an error; the return value counts the
//!   layers actually loaded (0 to 3).
//! - Each file is fully read and closed before the call returns, on every
//!   path.

use std::fs;
use std::path::Path;

use super::error::ConfigError;
use super::paths::StackPaths;
use crate::options::Options;
use crate::store::Store;

/// Parse one file into `store`.
///
/// # Errors
///
/// Returns `ConfigError::Read` when the file cannot be opened or read; the
/// store is left untouched in that case. A readable file always parses.
pub fn read_file(
    store: &mut Store,
    path: impl AsRef<Path>,
    options: Options,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    store.parse_str(&text, options);
    Ok(())
}

/// Render `store` in the requested style and write it to `path`.
///
/// # Errors
///
/// Returns `ConfigError::Write` when the file cannot be created or written.
pub fn write_file(
    store: &Store,
    path: impl AsRef<Path>,
    options: Options,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    fs::write(path, store.render(options)).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the stacked scopes into `store`, lowest precedence first, and
/// return how many layers were read.
///
/// Each readable layer is parsed into a scratch store and merged onto
/// `store`, so a key defined in several scopes ends up with the value from
/// the last one. Unreadable or missing layers are skipped.
pub fn load_stacked(store: &mut Store, paths: &StackPaths, options: Options) -> usize {
    let mut loaded = 0;

    for path in paths.ordered() {
        let mut layer = Store::with_depth(store.dot_depth());
        match read_file(&mut layer, path, options) {
            Ok(()) => {
                store.merge_from(&layer, options);
                loaded += 1;
                tracing::debug!(path = %path.display(), "loaded config layer");
            }
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "skipping config layer");
            }
        }
    }

    loaded
}
