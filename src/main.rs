use dioxus::prelude::*;

mod api;
mod app;
mod charts;
mod components;
mod pages;
mod routes;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        match backend::CONFIG.base_url() {
            Ok(url) => dioxus::logger::tracing::info!(
                "[boot] forwarding chart calls to {url} (timeout {:?})",
                backend::CONFIG.timeout
            ),
            Err(e) => dioxus::logger::tracing::warn!(
                "[boot] {e}; chart pages will report fetch failures"
            ),
        }
    }
    dioxus::launch(app::App);
}
