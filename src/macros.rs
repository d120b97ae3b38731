//! Level macros with automatic call-site capture
//!
//! ```ignore
//! log_warning!(logger, "retrying in {}s", delay);
//! log_error!(logger, tags: ["db", "pool"], "pool exhausted");
//! ```
//!
//! Format arguments are passed lazily and only rendered if the gate admits
//! the call.

/// Log at an explicit severity
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, tags: [$($tag:expr),* $(,)?], $($arg:tt)+) => {{
        let __tags: &[&str] = &[$($tag),*];
        $logger.log(
            $severity,
            ::std::format_args!($($arg)+),
            ::std::option::Option::Some(__tags),
            $crate::call_site!(),
        )
    }};
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            $severity,
            ::std::format_args!($($arg)+),
            ::std::option::Option::None,
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}
