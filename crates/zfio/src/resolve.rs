//! Format resolution from path and mode suffixes.

use crate::backend::{Backend, BACKENDS};
use crate::error::{ZfError, ZfResult};

/// A backend choice together with the mode to open it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The selected backend.
    pub backend: Backend,
    /// The mode with any backend suffix removed.
    pub mode: String,
}

/// Picks a backend for `path` opened with `mode` using [`BACKENDS`].
///
/// # Errors
///
/// Returns [`ZfError::Configuration`] if either argument is empty.
pub fn resolve(path: &str, mode: &str) -> ZfResult<Resolution> {
    resolve_in(&BACKENDS, path, mode)
}

/// Picks a backend from `table`.
///
/// Entries are tried in order. An entry matches when `path` ends with its
/// suffix, or failing that when `mode` does, in which case the suffix is
/// stripped from the returned mode. The first matching entry wins. With no
/// match the first suffix-less entry (the raw backend) is used and the mode
/// is kept verbatim.
///
/// Resolving to a backend that cannot open is not an error here; opening
/// it is.
///
/// # Errors
///
/// Returns [`ZfError::Configuration`] if either argument is empty.
pub fn resolve_in(table: &[Backend], path: &str, mode: &str) -> ZfResult<Resolution> {
    if path.is_empty() {
        return Err(ZfError::Configuration("path is empty".into()));
    }
    if mode.is_empty() {
        return Err(ZfError::Configuration("mode is empty".into()));
    }

    for &backend in table {
        let Some(suffix) = backend.suffix() else {
            continue;
        };
        if path.ends_with(suffix) {
            return Ok(Resolution {
                backend,
                mode: mode.to_string(),
            });
        }
        if let Some(stripped) = mode.strip_suffix(suffix) {
            return Ok(Resolution {
                backend,
                mode: stripped.to_string(),
            });
        }
    }

    let fallback = table
        .iter()
        .copied()
        .find(|b| b.suffix().is_none())
        .unwrap_or(Backend::Raw);
    Ok(Resolution {
        backend: fallback,
        mode: mode.to_string(),
    })
}
