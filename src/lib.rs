//! Colorized console logging with caller attribution.
//!
//! `conlog` formats diagnostic messages with a timestamp, the caller's
//! source location (file, line, function), and a fixed ANSI color per
//! severity, and prints them to standard output. It provides:
//!
//! - Three severities (warn / info / important), each with a fixed
//!   `mode;background;foreground` style triple
//! - Space-joined and format-string entry points, with and without the
//!   caller prefix (the `echo_*` family)
//! - Frame helpers: [`Logger::print_func`] attributes a line to a frame
//!   further up the stack, [`Logger::print_func_set`] dumps the call chain
//!   as a bordered block
//! - Caller-path abbreviation against the toolchain, registry, and home
//!   roots
//!
//! Everything is fire-and-forget: no operation returns an error, and
//! degraded conditions (unresolvable frames, missing environment roots)
//! render empty or unmodified fields instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use conlog::{LogConfig, Logger};
//!
//! let log = Logger::new(LogConfig::default());
//! conlog::info!(log, "cache warmed,", 1024, "entries");
//! conlog::warnf!(log, "{} retries left", 2);
//! conlog::echo_important!(log, "shutting down");
//! log.print_func_set(0);
//! ```

pub mod color;
pub mod config;
pub mod logger;
pub mod stack;

pub use color::ColorMode;
pub use config::{LogConfig, PathRoots};
pub use logger::{Logger, SharedSink};
pub use stack::{BacktraceWalker, FrameInfo, StackWalker};

use std::fmt::{Display, Write};

/// Space-join a slice of displayable values. Support for the variadic
/// entry macros; not part of the public surface.
#[doc(hidden)]
pub fn __join(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{part}");
    }
    out
}

/// Emit a warning with caller attribution, space-joining the values.
///
/// ```no_run
/// # let log = conlog::Logger::default();
/// conlog::warn!(log, "disk usage at", 91, "percent");
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warn($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit an info line with caller attribution, space-joining the values.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit an important line with caller attribution, space-joining the
/// values.
#[macro_export]
macro_rules! important {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.important($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit a warning with caller attribution from a format string.
///
/// ```no_run
/// # let log = conlog::Logger::default();
/// conlog::warnf!(log, "{} items pending", 5);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.warnf(::std::format_args!($($fmt)+))
    };
}

/// Emit an info line with caller attribution from a format string.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.infof(::std::format_args!($($fmt)+))
    };
}

/// Emit an important line with caller attribution from a format string.
#[macro_export]
macro_rules! importantf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.importantf(::std::format_args!($($fmt)+))
    };
}

/// Emit a warning without the caller prefix, space-joining the values.
#[macro_export]
macro_rules! echo_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.echo_warn($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit an info line without the caller prefix, space-joining the values.
#[macro_export]
macro_rules! echo_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.echo_info($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit an important line without the caller prefix, space-joining the
/// values.
#[macro_export]
macro_rules! echo_important {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.echo_important($crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]))
    };
}

/// Emit a warning without the caller prefix from a format string.
#[macro_export]
macro_rules! echo_warnf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.echo_warnf(::std::format_args!($($fmt)+))
    };
}

/// Emit an info line without the caller prefix from a format string.
#[macro_export]
macro_rules! echo_infof {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.echo_infof(::std::format_args!($($fmt)+))
    };
}

/// Emit an important line without the caller prefix from a format string.
#[macro_export]
macro_rules! echo_importantf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.echo_importantf(::std::format_args!($($fmt)+))
    };
}

/// Print a line attributed to the frame `level` calls above the caller,
/// space-joining the values. See [`Logger::print_func`].
#[macro_export]
macro_rules! print_func {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.print_func(
            $level,
            $crate::__join(&[$(&$value as &dyn ::std::fmt::Display),*]),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::__join;

    #[test]
    fn test_join_spaces_between_values() {
        assert_eq!(__join(&[&"a", &1, &2.5]), "a 1 2.5");
        assert_eq!(__join(&[&"only"]), "only");
        assert_eq!(__join(&[]), "");
    }
}
