//! Console logging
//!
//! On wasm32 these forward to the browser console through web-sys.
//! Native builds (unit tests, tooling) type-check the format arguments
//! and drop them, so nothing calls a JS import outside the browser.

/// `console.log` with `format!` syntax
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` syntax
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_noops_off_wasm() {
        let points = 2500;
        console_log!("activated with {} points", points);
        console_warn!("canvas '{}' not found", "bg");
    }
}
