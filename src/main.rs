//! Task Manager frontend entry point.

mod api;
mod app;
mod components;
mod context;
mod hooks;
mod models;
mod services;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
