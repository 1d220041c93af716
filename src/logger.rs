//! The console logger: twelve message operations and two frame operations.
//!
//! Every operation is fire-and-forget: it renders one line, paints it,
//! writes it to the sink, and returns. There is no error channel; a frame
//! that fails to resolve renders empty fields, and a failed write is
//! ignored.

use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;

use crate::color::{COMMON, Severity, Style, stdout_is_terminal};
use crate::config::{LogConfig, PathRoots};
use crate::stack::{BacktraceWalker, StackWalker, is_walk_sentinel, simple_func};

const SHORT_TIME: &str = "%H:%M:%S%.3f";
const LONG_TIME: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Frame cap when [`Logger::print_func_set`] is called with `level == 0`.
/// The sentinel check ends the walk long before this in practice.
const WALK_CAP: usize = 99_999;

const DUMP_BEGIN: &str = "\n ------------------------begin------------------------";
const DUMP_END: &str = "-------------------------end-------------------------\n";

/// A shared, redirectable output target.
pub type SharedSink = Arc<Mutex<dyn Write + Send>>;

enum Sink {
    Stdout,
    Shared(SharedSink),
}

/// Colorized console logger with caller attribution.
///
/// Construct one with [`Logger::new`] and share it freely; all
/// configuration is immutable after construction and every operation
/// takes `&self`.
///
/// # Example
///
/// ```no_run
/// use conlog::{LogConfig, Logger};
///
/// let log = Logger::new(LogConfig::default());
/// conlog::info!(log, "listening on", "127.0.0.1:8080");
/// conlog::warnf!(log, "{} slow queries", 3);
/// ```
pub struct Logger {
    config: LogConfig,
    roots: PathRoots,
    walker: Box<dyn StackWalker>,
    sink: Sink,
}

impl Logger {
    /// Logger with the given formatting, environment-derived path roots,
    /// the production stack walker, and stdout as the sink.
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            roots: PathRoots::from_env(),
            walker: Box::new(BacktraceWalker),
            sink: Sink::Stdout,
        }
    }

    /// Replace the environment-derived path roots.
    pub fn with_roots(mut self, roots: PathRoots) -> Self {
        self.roots = roots;
        self
    }

    /// Replace the production stack walker, e.g. with a fake for tests.
    pub fn with_walker(mut self, walker: impl StackWalker + 'static) -> Self {
        self.walker = Box::new(walker);
        self
    }

    /// Redirect output away from stdout. Redirected sinks count as
    /// non-terminals for [`ColorMode::Auto`](crate::ColorMode::Auto).
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = Sink::Shared(sink);
        self
    }

    // === Message operations, caller-attributed ===

    /// Emit a warning line prefixed with timestamp and caller location.
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.emit(Severity::Warn, Location::caller(), &message);
    }

    /// Emit an info line prefixed with timestamp and caller location.
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.emit(Severity::Info, Location::caller(), &message);
    }

    /// Emit an important line prefixed with timestamp and caller location.
    #[track_caller]
    pub fn important(&self, message: impl Display) {
        self.emit(Severity::Important, Location::caller(), &message);
    }

    /// Format-string variant of [`Logger::warn`].
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Location::caller(), &args);
    }

    /// Format-string variant of [`Logger::info`].
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Location::caller(), &args);
    }

    /// Format-string variant of [`Logger::important`].
    #[track_caller]
    pub fn importantf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Important, Location::caller(), &args);
    }

    // === Message operations, echo (no caller prefix) ===

    /// Emit a warning line with a timestamp but no caller location.
    pub fn echo_warn(&self, message: impl Display) {
        self.emit_echo(Severity::Warn, &message);
    }

    /// Emit an info line with a timestamp but no caller location.
    pub fn echo_info(&self, message: impl Display) {
        self.emit_echo(Severity::Info, &message);
    }

    /// Emit an important line with a timestamp but no caller location.
    pub fn echo_important(&self, message: impl Display) {
        self.emit_echo(Severity::Important, &message);
    }

    /// Format-string variant of [`Logger::echo_warn`].
    pub fn echo_warnf(&self, args: fmt::Arguments<'_>) {
        self.emit_echo(Severity::Warn, &args);
    }

    /// Format-string variant of [`Logger::echo_info`].
    pub fn echo_infof(&self, args: fmt::Arguments<'_>) {
        self.emit_echo(Severity::Info, &args);
    }

    /// Format-string variant of [`Logger::echo_important`].
    pub fn echo_importantf(&self, args: fmt::Arguments<'_>) {
        self.emit_echo(Severity::Important, &args);
    }

    // === Frame operations ===

    /// Print the call chain leading to this call as a bordered block in
    /// the common (cyan) style.
    ///
    /// `level` caps the number of frames collected; `0` walks until the
    /// stack is exhausted. The walk also stops, without including the
    /// frame, at the program entry point or the runtime's thread-start
    /// trampoline, or at the first frame that fails to resolve. Collected
    /// frames print in reverse collection order between a begin and an
    /// end marker.
    pub fn print_func_set(&self, level: usize) {
        let cap = if level == 0 { WALK_CAP } else { level };
        let mut frames = Vec::new();
        for depth in 0..cap {
            let Some(frame) = self.walker.resolve(depth) else {
                break;
            };
            if is_walk_sentinel(&frame.function) {
                break;
            }
            frames.push(format!(
                "{}:{} [{}]\n",
                self.display_path(&frame.path),
                frame.line,
                simple_func(&frame.function),
            ));
        }

        let mut block = String::new();
        block.push_str(&self.colorize(COMMON, DUMP_BEGIN));
        block.push('\n');
        for entry in frames.iter().rev() {
            block.push_str(&self.colorize(COMMON, entry));
        }
        block.push_str(&self.colorize(COMMON, DUMP_END));
        block.push('\n');
        self.write_raw(&block);
    }

    /// Print one line in the common (cyan) style attributed to the frame
    /// `level` calls above the immediate caller (`0` = immediate caller).
    ///
    /// Always uses the short timestamp. An unresolvable frame renders an
    /// empty function name.
    pub fn print_func(&self, level: usize, message: impl Display) {
        let function = self
            .walker
            .resolve(level)
            .map(|frame| simple_func(&frame.function).to_owned())
            .unwrap_or_default();
        let line = format!(
            "{} [{}] {}\n",
            Local::now().format(SHORT_TIME),
            function,
            message,
        );
        self.write_raw(&self.colorize(COMMON, &line));
    }

    // === Rendering ===

    fn emit(&self, severity: Severity, caller: &Location<'_>, message: &dyn Display) {
        let line = format!("{}: {}\n", self.caller_prefix(caller), message);
        self.write_raw(&self.colorize(severity.style(), &line));
    }

    fn emit_echo(&self, severity: Severity, message: &dyn Display) {
        let line = format!("{} {}\n", self.timestamp(), message);
        self.write_raw(&self.colorize(severity.style(), &line));
    }

    /// `<timestamp> <path>:<line> [<function>]` for the call site.
    ///
    /// File and line come from the call-site location; the function name
    /// comes from the walker and degrades to an empty string when the
    /// frame does not resolve.
    fn caller_prefix(&self, caller: &Location<'_>) -> String {
        let function = self
            .walker
            .resolve(0)
            .map(|frame| simple_func(&frame.function).to_owned())
            .unwrap_or_default();
        format!(
            "{} {}:{} [{}]",
            self.timestamp(),
            self.display_path(caller.file()),
            caller.line(),
            function,
        )
    }

    fn timestamp(&self) -> String {
        let format = if self.config.long_time {
            LONG_TIME
        } else {
            SHORT_TIME
        };
        Local::now().format(format).to_string()
    }

    fn display_path<'a>(&self, path: &'a str) -> &'a str {
        if self.config.long_path {
            path
        } else {
            self.roots.simplify(path)
        }
    }

    fn colorize(&self, style: Style, text: &str) -> String {
        if self.color_enabled() {
            style.paint(text)
        } else {
            text.to_owned()
        }
    }

    fn color_enabled(&self) -> bool {
        let to_terminal = matches!(self.sink, Sink::Stdout) && stdout_is_terminal();
        self.config.color.enabled(to_terminal)
    }

    fn write_raw(&self, text: &str) {
        match &self.sink {
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                let _ = stdout.write_all(text.as_bytes());
            }
            Sink::Shared(sink) => {
                let _ = sink.lock().write_all(text.as_bytes());
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}
