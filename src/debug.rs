//! Debug logging to stderr.
//!
//! Disabled by default. Enabled with the CLI `--debug` flag, the
//! `RASTER_TOOLS_DEBUG=1` environment variable, or [`enable`].

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// Environment variable that turns logging on.
pub const DEBUG_ENV: &str = "RASTER_TOOLS_DEBUG";

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Set the first time logging is enabled; timestamps count from here.
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Turns logging on for the whole process.
pub fn enable() {
    EPOCH.get_or_init(Instant::now);
    ENABLED.store(true, Ordering::SeqCst);
}

/// Turns logging off.
pub fn disable() {
    ENABLED.store(false, Ordering::SeqCst);
}

/// Enables debug mode if [`DEBUG_ENV`] is set to `1` or `true`.
pub fn init_from_env() {
    if std::env::var(DEBUG_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")) {
        enable();
    }
}

/// Returns true if logging is on.
#[inline]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

fn elapsed_ms() -> u64 {
    EPOCH.get().map_or(0, |epoch| epoch.elapsed().as_millis() as u64)
}

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Scope entry and exit.
    Trace,
    /// Per-operation detail (fill sizes, tool dispatch).
    Debug,
    /// Coarse progress.
    Info,
    /// A request was refused but the session continues.
    Warn,
}

impl Level {
    /// Label and ANSI color of the level tag.
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Trace => ("TRACE", "\x1b[90m"),
            Level::Debug => ("DEBUG", "\x1b[36m"),
            Level::Info => ("INFO", "\x1b[32m"),
            Level::Warn => ("WARN", "\x1b[33m"),
        }
    }
}

/// Format one log line: `[+0000ms] [LEVEL] [component] message`.
fn format_line(elapsed: u64, level: Level, component: &str, message: &str) -> String {
    let (label, color) = level.style();
    format!("[+{elapsed:04}ms] {color}[{label:5}]\x1b[0m [{component}] {message}")
}

/// Writes one line to stderr when logging is on.
pub fn log(level: Level, component: &str, message: &str) {
    if !is_enabled() {
        return;
    }

    let _ = writeln!(io::stderr(), "{}", format_line(elapsed_ms(), level, component, message));
}

/// Logs with format arguments.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for debug level.
#[macro_export]
macro_rules! debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Debug, $component, $($arg)*)
    };
}

/// Convenience macro for info level.
#[macro_export]
macro_rules! info {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Info, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}

/// RAII guard for timing a scope.
pub struct TimingGuard {
    component: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Creates a new timing guard.
    pub fn new(component: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        if is_enabled() {
            log(Level::Trace, component, &format!("-> {operation}"));
        }
        Self { component, operation, start: Instant::now() }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed = self.start.elapsed();
            log(
                Level::Trace,
                self.component,
                &format!("<- {} ({:.2}ms)", self.operation, elapsed.as_secs_f64() * 1000.0),
            );
        }
    }
}

/// Creates a timing guard for a scope.
#[macro_export]
macro_rules! time_scope {
    ($component:expr, $operation:expr) => {
        let _guard = $crate::debug::TimingGuard::new($component, $operation);
    };
}
