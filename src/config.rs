//! Logger configuration.
//!
//! All formatting behavior is fixed at construction time: the logger takes
//! an immutable [`LogConfig`] instead of reading process-global flags, so
//! two loggers with different settings can coexist and tests never mutate
//! shared state.

use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::color::ColorMode;

/// Formatting configuration for a [`Logger`](crate::Logger).
///
/// The defaults match the common case: short timestamps, abbreviated
/// caller paths, color when stdout is a terminal.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Prefix timestamps with the date (`YYYY-MM-DD`).
    pub long_time: bool,
    /// Print caller paths in full instead of stripping known roots.
    pub long_path: bool,
    /// Color handling for emitted lines.
    pub color: ColorMode,
}

/// Known source-path roots stripped from caller locations.
///
/// Roots are checked in order: toolchain, library, home. A missing root is
/// skipped; a path under none of them is left unmodified.
#[derive(Debug, Clone)]
pub struct PathRoots {
    /// Toolchain source root (stdlib sources live under it).
    pub toolchain: Option<PathBuf>,
    /// Library search root (registry sources live under it).
    pub library: Option<PathBuf>,
    /// The invoking user's home directory.
    pub home: Option<PathBuf>,
}

impl PathRoots {
    /// Resolve roots from the environment: `RUSTUP_HOME` for toolchain
    /// sources, `CARGO_HOME` for registry sources, and the user's home
    /// directory.
    pub fn from_env() -> Self {
        Self {
            toolchain: std::env::var_os("RUSTUP_HOME").map(PathBuf::from),
            library: std::env::var_os("CARGO_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }

    /// No roots: every path passes through unmodified.
    pub fn none() -> Self {
        Self {
            toolchain: None,
            library: None,
            home: None,
        }
    }

    /// Strip the first matching root prefix, plus its separator, from
    /// `path`.
    pub(crate) fn simplify<'a>(&self, path: &'a str) -> &'a str {
        for root in [&self.toolchain, &self.library, &self.home]
            .into_iter()
            .flatten()
        {
            let root = root.to_string_lossy();
            if !root.is_empty()
                && let Some(rest) = path.strip_prefix(root.as_ref())
                && let Some(rest) = rest.strip_prefix(MAIN_SEPARATOR)
            {
                return rest;
            }
        }
        path
    }
}

impl Default for PathRoots {
    fn default() -> Self {
        Self::from_env()
    }
}
