//! Stack-frame introspection behind a narrow trait.
//!
//! The logger needs exactly one capability: resolve the frame `depth`
//! levels above the application code that called into this crate. Keeping
//! that behind [`StackWalker`] makes the rest of the crate
//! introspection-agnostic and unit-testable with a fake walker.

/// A resolved stack frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// Source file of the frame, as reported by debug info. Empty when
    /// unavailable.
    pub path: String,
    /// Line number within the source file. Zero when unavailable.
    pub line: u32,
    /// Fully-qualified function name.
    pub function: String,
}

/// Resolves stack frames by depth.
///
/// Depth 0 is the first frame outside this crate, i.e. the application
/// code that invoked the logging operation.
pub trait StackWalker: Send + Sync {
    /// Resolve the frame `depth` levels above the caller, or `None` when
    /// the stack does not reach that deep or debug info is unavailable.
    fn resolve(&self, depth: usize) -> Option<FrameInfo>;
}

/// Production walker backed by the `backtrace` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceWalker;

impl StackWalker for BacktraceWalker {
    fn resolve(&self, depth: usize) -> Option<FrameInfo> {
        let trace = backtrace::Backtrace::new();
        trace
            .frames()
            .iter()
            .flat_map(|frame| frame.symbols())
            .filter_map(|symbol| {
                // Alternate formatting drops the trailing symbol hash.
                let function = format!("{:#}", symbol.name()?);
                if is_capture_machinery(&function) {
                    return None;
                }
                Some(FrameInfo {
                    path: symbol
                        .filename()
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    line: symbol.lineno().unwrap_or(0),
                    function,
                })
            })
            .nth(depth)
    }
}

/// Frames belonging to the capture machinery or this crate itself are not
/// application frames and never count toward `depth`.
fn is_capture_machinery(function: &str) -> bool {
    function.starts_with("backtrace::") || function.starts_with("conlog::")
}

/// Whether a frame ends the multi-frame walk: the program entry point or
/// the runtime's thread-start trampoline.
pub(crate) fn is_walk_sentinel(function: &str) -> bool {
    function.ends_with("main") || function.ends_with("__rust_begin_short_backtrace")
}

/// Keep only the last `/`-delimited segment of a qualified function name.
/// Empty names stay empty.
pub(crate) fn simple_func(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
