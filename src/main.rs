//! Shopping List Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use shopping_core::Config;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(Config::default().log_level);
    mount_to_body(App);
}
