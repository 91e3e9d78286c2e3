/// Conditional console logging for development builds
///
/// The `log!` macro writes informational messages to the browser console and
/// is compiled out of release builds unless the `console_logging` feature is
/// enabled. Failures that the user never sees (a station lookup that errored,
/// page data that could not be decoded) go through `leptos::logging::error!`
/// instead, which is always compiled in.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::logging::log;
///
/// log!("Seat map: selected row {}", row);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
