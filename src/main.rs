//! Local Todos Frontend Entry Point

mod models;
mod config;
mod local_storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use todo_core::TodoConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::read_page_config();
    let level = config.as_ref().map(TodoConfig::level_filter).unwrap_or(LevelFilter::Info);
    if let Err(e) = console_logger::init_logger(level) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("ignoring page config: {}", e);
        TodoConfig::default()
    });
    log::info!("starting with slot {}", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
