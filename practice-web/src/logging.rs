//! `log` backend that writes to the browser console.
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            emit(
                record.level(),
                &format_line(record.level(), record.target(), record.args()),
            );
        }
    }

    fn flush(&self) {}
}

/// Console line layout: `[LEVEL] target: message`.
#[must_use]
pub fn format_line(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{level}] {target}: {args}")
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Level baked in at build time through `SITE_LOG_LEVEL`, `Info` otherwise.
#[must_use]
pub fn compile_time_level() -> LevelFilter {
    option_env!("SITE_LOG_LEVEL")
        .and_then(|level| practice_core::settings::parse_log_level(level).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the console logger (once) and set the max level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
