//! Taskdeck Entry Point

mod api;
mod app;
mod components;
mod models;
mod pages;
mod storage;
mod tasks;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
