mod app;
mod components;
mod config;
mod models;
mod pages;
mod utils;

use app::App;
use gamedesk_core::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("gamedesk using backend {}", config.api_base_url);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
