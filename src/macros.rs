//! Small crate-wide convenience macros.

/// Write a formatted line to the browser console in debug builds.
///
/// The call is skipped in release builds and on non-wasm targets, so the
/// controller can log freely while its unit tests run natively.
///
/// ```rust,ignore
/// debug_log!("rag queries in flight: {}", count);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(all(target_arch = "wasm32", debug_assertions)) {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Like `debug_log!` but emitted at warning level in every wasm build.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
    };
}
