use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide debug logger, written to stderr.
///
/// Library code logs unconditionally through [`debug_log!`]; nothing is
/// printed until a binary calls [`Logger::init`] with debugging enabled.
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    pub fn enabled() -> bool {
        LOGGER.get().is_some_and(|logger| logger.debug)
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::enabled() {
            eprintln!("{args}");
        }
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_usable_before_init() {
        Logger::debug_fmt(format_args!("Formatted: {}", "test"));
    }

    #[test]
    fn test_logger_init_is_idempotent() {
        Logger::init(false);
        let first = Logger::enabled();
        Logger::init(true);
        assert_eq!(Logger::enabled(), first);
    }
}
