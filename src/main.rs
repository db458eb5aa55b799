//! Camera Table Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = AppConfig::from_window();
    log::set_max_level(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
