//! Log macros gated on the `logging` feature.
//!
//! With the feature off these expand to nothing and `log` is not linked.

macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    }};
}

macro_rules! trace_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
    }};
}

pub(crate) use {debug_log, trace_log};
