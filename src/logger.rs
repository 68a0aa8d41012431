//! Timestamped, colour-tagged log lines on stderr.
//!
//! Stdout is left to the binaries' own reports and `-` artifact output.

use chrono::Local;

/// Environment variable that enables per-body `event!` lines.
pub const EVENTS_ENV: &str = "KERNEL_LOG_EVENTS";

#[doc(hidden)]
pub fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[doc(hidden)]
pub fn events_enabled() -> bool {
    std::env::var_os(EVENTS_ENV).is_some()
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!("\x1b[32m[INFO] [{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("\x1b[35m[WARN] [{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("\x1b[31m[ERROR][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            eprintln!("\x1b[36m[EVENT][{}]\x1b[0m {}", $crate::logger::timestamp(), format!($($arg)*))
        }
    };
}
