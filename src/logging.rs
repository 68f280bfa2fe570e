//! Opt-in diagnostic logging to stderr.
//!
//! The engine stays silent unless a binary flips the verbose flag, so library
//! users and tests see no output by default.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose logging flag.
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Enables verbose logging.
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// Disables verbose logging.
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// Returns whether verbose logging is enabled.
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Writes a line to stderr when verbose logging is enabled.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!("[shisen] {}", format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_verbose() {
        enable_verbose_logging();
        assert!(is_verbose());
        disable_verbose_logging();
        assert!(!is_verbose());
    }
}
