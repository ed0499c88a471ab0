//! Value coercion helpers: variable expansion and list handling.
//!
//! Responsibilities:
//! - Expand `${NAME}` references against a `VarSource`.
//! - Split and join comma-separated list values.
//!
//! Does NOT handle:
//! - Reading the process environment eagerly: callers choose the source,
//!   and `ProcessEnv` is only the default implementation.
//! - Caching: list splitting is recomputed from the raw value on every call.
//!
//! Invariants:
//! - Expansion is a single left-to-right pass; expanded values are never
//!   re-scanned, so `${}` nesting cannot recurse.
//! - Input with no `${` occurrence is returned borrowed, without allocating.
//! - Whitespace trimming throughout the crate is `str::trim`: a borrowed
//!   view, allocation-free on already-trimmed input.

use std::borrow::Cow;
use std::collections::HashMap;

/// Source of variable values for `${NAME}` expansion.
///
/// Process-environment access is a collaborator seam: the engine only ever
/// consumes resolved strings through this trait.
pub trait VarSource {
    /// Resolve `name`, returning `None` when the variable is unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// `VarSource` backed by `std::env::var`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Expand every `${NAME}` occurrence in `input` using `vars`.
///
/// Unset names expand to the empty string. The first unterminated `${` and
/// everything after it is passed through literally, and scanning stops
/// there. Text with no occurrences is returned unchanged.
pub fn expand<'a>(input: &'a str, vars: &dyn VarSource) -> Cow<'a, str> {
    let Some(first) = input.find("${") else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len());
    out.push_str(&input[..first]);
    let mut rest = &input[first..];

    loop {
        // `rest` starts at a "${" here.
        let Some(close) = rest[2..].find('}') else {
            out.push_str(rest);
            break;
        };
        let name = &rest[2..2 + close];
        if let Some(value) = vars.lookup(name) {
            out.push_str(&value);
        }
        rest = &rest[2 + close + 1..];

        match rest.find("${") {
            Some(next) => {
                out.push_str(&rest[..next]);
                rest = &rest[next..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    Cow::Owned(out)
}

/// Split a comma-separated value into trimmed, non-empty tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join tokens into a comma-separated value, the inverse of `split_list`.
pub fn join_list<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
