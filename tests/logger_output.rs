//! Integration tests through the public macro surface.

use std::sync::Arc;

use conlog::{ColorMode, FrameInfo, LogConfig, Logger, PathRoots, SharedSink, StackWalker};
use parking_lot::Mutex;

struct FakeWalker {
    frames: Vec<FrameInfo>,
}

impl StackWalker for FakeWalker {
    fn resolve(&self, depth: usize) -> Option<FrameInfo> {
        self.frames.get(depth).cloned()
    }
}

fn fake_frames() -> Vec<FrameInfo> {
    vec![
        FrameInfo {
            path: "/srv/app/src/handler.rs".into(),
            line: 42,
            function: "app::handler::serve".into(),
        },
        FrameInfo {
            path: "/srv/app/src/main.rs".into(),
            line: 7,
            function: "app::main".into(),
        },
    ]
}

fn plain_logger(frames: Vec<FrameInfo>) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: SharedSink = buffer.clone();
    let config = LogConfig {
        color: ColorMode::Never,
        ..LogConfig::default()
    };
    let logger = Logger::new(config)
        .with_roots(PathRoots::none())
        .with_walker(FakeWalker { frames })
        .with_sink(sink);
    (logger, buffer)
}

fn take(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(std::mem::take(&mut *buffer.lock())).unwrap()
}

#[test]
fn variadic_macros_space_join_values() {
    let (logger, buffer) = plain_logger(fake_frames());

    conlog::info!(logger, "served", 17, "requests in", 1.5, "seconds");
    let out = take(&buffer);
    assert!(out.contains("served 17 requests in 1.5 seconds"), "{out:?}");
    assert!(out.contains("tests/logger_output.rs:"), "{out:?}");
    assert!(out.contains("[app::handler::serve]"), "{out:?}");

    // Trailing comma and zero values are accepted.
    conlog::warn!(logger, "solo",);
    assert!(take(&buffer).contains("solo"));
    conlog::important!(logger);
    assert!(take(&buffer).ends_with("[app::handler::serve]: \n"));
}

#[test]
fn format_macros_render_templates() {
    let (logger, buffer) = plain_logger(fake_frames());

    conlog::warnf!(logger, "{} items", 5);
    assert!(take(&buffer).contains("5 items"));

    conlog::infof!(logger, "{name} = {value:04}", name = "count", value = 9);
    assert!(take(&buffer).contains("count = 0009"));
}

#[test]
fn echo_macros_omit_caller_location() {
    let (logger, buffer) = plain_logger(fake_frames());

    conlog::echo_warn!(logger, "no", "prefix");
    let out = take(&buffer);
    assert!(out.contains("no prefix"));
    assert!(!out.contains("logger_output.rs"), "{out:?}");

    conlog::echo_infof!(logger, "{}%", 80);
    let out = take(&buffer);
    assert!(out.contains("80%"));
    assert!(!out.contains('['), "{out:?}");

    conlog::echo_importantf!(logger, "down in {}s", 3);
    assert!(take(&buffer).contains("down in 3s"));

    conlog::echo_important!(logger, "bye");
    assert!(take(&buffer).contains("bye"));
}

#[test]
fn print_func_macro_targets_outer_frame() {
    let (logger, buffer) = plain_logger(fake_frames());

    conlog::print_func!(logger, 0, "inner", "frame");
    assert!(take(&buffer).contains("[app::handler::serve] inner frame"));

    conlog::print_func!(logger, 1, "outer");
    assert!(take(&buffer).contains("[app::main] outer"));
}

#[test]
fn colored_output_brackets_each_line() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: SharedSink = buffer.clone();
    let config = LogConfig {
        color: ColorMode::Always,
        ..LogConfig::default()
    };
    let logger = Logger::new(config)
        .with_roots(PathRoots::none())
        .with_walker(FakeWalker {
            frames: fake_frames(),
        })
        .with_sink(sink);

    conlog::echo_info!(logger, "green line");
    let out = take(&buffer);
    assert!(out.starts_with(" \x1b[1;48;32m"), "{out:?}");
    assert!(out.contains("green line\n\x1b[0m"), "{out:?}");
}

#[test]
fn real_walker_attributes_caller() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: SharedSink = buffer.clone();
    let config = LogConfig {
        color: ColorMode::Never,
        ..LogConfig::default()
    };
    let logger = Logger::new(config)
        .with_roots(PathRoots::none())
        .with_sink(sink);

    conlog::warn!(logger, "captured");
    let out = take(&buffer);
    assert!(out.contains("captured"));
    assert!(out.contains("tests/logger_output.rs:"), "{out:?}");
    assert!(out.contains("logger_output"), "{out:?}");
}

#[test]
fn real_walker_dump_terminates_with_markers() {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink: SharedSink = buffer.clone();
    let config = LogConfig {
        color: ColorMode::Never,
        ..LogConfig::default()
    };
    let logger = Logger::new(config)
        .with_roots(PathRoots::none())
        .with_sink(sink);

    logger.print_func_set(0);
    let out = take(&buffer);
    let begin = "------------------------begin------------------------";
    let end = "-------------------------end-------------------------";
    assert_eq!(out.matches(begin).count(), 1, "{out:?}");
    assert_eq!(out.matches(end).count(), 1, "{out:?}");

    logger.print_func_set(1);
    let out = take(&buffer);
    // At most one frame line between the markers.
    let frame_lines = out
        .lines()
        .filter(|line| line.contains('[') && line.contains(']'))
        .count();
    assert!(frame_lines <= 1, "{out:?}");
}
