#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod charts;
pub mod config;
pub mod contact;
pub mod content;
#[cfg(any(feature = "ssr", feature = "rss"))]
mod highlight;
pub mod lightbox;
#[cfg(any(feature = "ssr", feature = "rss"))]
pub mod logging;
pub mod navigation;
#[cfg(feature = "rss")]
pub mod rss;
pub mod seo;
pub mod theme;
pub mod typing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(App);
}
