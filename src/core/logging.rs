//! Engine logging
//!
//! In the browser: straight to `console.log`.
//! Natively (tests, tools): through the `log` facade, so nothing touches
//! JS imports outside wasm32.
//!
//! Usage:
//! ```rust
//! use polybounce_engine::engine_log;
//!
//! let sides = 7;
//! engine_log!("world grew to {} sides", sides);
//! ```

/// Format and emit one log line
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            $crate::__log::debug!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn log_macro_is_usable_natively() {
        let depth = 2;
        engine_log!("depth set to {}", depth);
    }
}
