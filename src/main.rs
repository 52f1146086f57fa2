//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_ui::{config, App};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(console_logger::parse_level(config::LOG_LEVEL)) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    log::info!("todo frontend starting, backend={}", config::BASE_URL);
    mount_to_body(App);
}
