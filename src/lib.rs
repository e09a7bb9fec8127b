#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod assets;
#[cfg(feature = "ssr")]
pub mod logging;
pub mod page;
pub mod profile;
pub mod rotation;
pub mod selection;
pub mod structured_data;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
