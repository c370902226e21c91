#![recursion_limit = "256"]

//! WASM entry point that hydrates the server-rendered header.
//!
//! Hydration attaches the intersection observer, the theme listener and the
//! click handlers that the server cannot run.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates `app::component` over the server-rendered body.
///
/// Client-side logging goes to the browser console at `Debug` so the header's
/// fallback and observer warnings are visible during development.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating blog header");
    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// Installing the console logger twice must not panic.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
