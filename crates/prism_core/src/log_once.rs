//! Logging macros that fire at most once per call site.
//!
//! Hot loops (one call per ray) use these to report a bad input without
//! flooding the log.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: ::std::sync::Once = ::std::sync::Once::new();
        ONCE.call_once(|| {
            ::log::log!(target: $target, $lvl, $($arg)+);
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => ($crate::log_once!(::log::Level::Warn, $($arg)+));
}
