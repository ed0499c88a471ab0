//! Default file locations for stacked configuration loading.
//!
//! Responsibilities:
//! - Resolve the platform-conventional system, user, and local paths for a
//!   program name, using the `directories` crate for the user scope.
//!
//! Does NOT handle:
//! - Opening or parsing the files (see `stack.rs`).
//!
//! Invariants:
//! - Path resolution is a collaborator seam: the loader only consumes a
//!   `StackPaths` value, so applications with their own conventions can
//!   build one directly.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::DEFAULT_SUFFIX;

/// Resolved file locations for one stacked load, lowest precedence first.
///
/// Any scope can be left as `None` to skip it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackPaths {
    /// System scope, e.g. `/etc/<name>/<name>.conf`.
    pub system: Option<PathBuf>,
    /// User scope, e.g. `~/.config/<name>/<name>.conf`.
    pub user: Option<PathBuf>,
    /// Local scope: a dotfile in the current directory.
    pub local: Option<PathBuf>,
}

impl StackPaths {
    /// The platform-conventional path triple for `program`.
    ///
    /// Scopes whose directory cannot be determined are skipped rather than
    /// failing the whole triple.
    pub fn for_program(program: &str) -> Self {
        let user = match Self::user_config_path(program) {
            Ok(path) => Some(path),
            Err(error) => {
                tracing::debug!(%error, "no user config directory, skipping user scope");
                None
            }
        };

        Self {
            system: Some(system_config_path(program)),
            user,
            local: Some(PathBuf::from(format!("./.{program}.{DEFAULT_SUFFIX}"))),
        }
    }

    /// The user-scope path for `program` on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirUnavailable` when the platform config
    /// directory cannot be determined (e.g. no home directory).
    pub fn user_config_path(program: &str) -> Result<PathBuf, ConfigError> {
        let proj_dirs = directories::ProjectDirs::from("", "", program).ok_or_else(|| {
            ConfigError::ConfigDirUnavailable("failed to determine project directories".into())
        })?;

        Ok(proj_dirs
            .config_dir()
            .join(format!("{program}.{DEFAULT_SUFFIX}")))
    }

    /// Paths in precedence order, lowest first, skipping unset scopes.
    pub(crate) fn ordered(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.system, &self.user, &self.local]
            .into_iter()
            .flatten()
    }
}

fn system_config_path(program: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(format!("C:/ProgramData/{program}/{program}.{DEFAULT_SUFFIX}"))
    } else {
        PathBuf::from(format!("/etc/{program}/{program}.{DEFAULT_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_program_fills_system_and_local_scopes() {
        let paths = StackPaths::for_program("myapp");

        let system = paths.system.unwrap();
        assert!(system.to_string_lossy().ends_with("myapp/myapp.conf"));
        assert_eq!(paths.local.unwrap(), PathBuf::from("./.myapp.conf"));
    }

    #[test]
    fn ordered_skips_unset_scopes() {
        let paths = StackPaths {
            system: None,
            user: None,
            local: Some(PathBuf::from("./.x.conf")),
        };
        let ordered: Vec<_> = paths.ordered().collect();
        assert_eq!(ordered, vec![&PathBuf::from("./.x.conf")]);
    }

    #[test]
    fn user_scope_matches_project_dirs_when_available() {
        match directories::ProjectDirs::from("", "", "myapp") {
            Some(proj_dirs) => {
                let expected = proj_dirs.config_dir().join("myapp.conf");
                assert_eq!(
                    StackPaths::user_config_path("myapp").unwrap(),
                    expected.clone()
                );
                assert_eq!(StackPaths::for_program("myapp").user, Some(expected));
            }
            None => {
                assert!(matches!(
                    StackPaths::user_config_path("myapp"),
                    Err(ConfigError::ConfigDirUnavailable(_))
                ));
                assert_eq!(StackPaths::for_program("myapp").user, None);
            }
        }
    }
}
