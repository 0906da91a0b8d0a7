#![allow(warnings)]
//! GanttRoll Frontend Entry Point

mod app;
mod components;
mod context;
mod export;
mod storage;
mod store;
mod theme;

use app::App;
use gantt_core::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::default();
    if let Err(e) = rolling_logger::init_logger(log::LevelFilter::Debug, config.log_buffer_lines) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
