#![allow(warnings)]
//! Todo List Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod store;
mod todo_list;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
