mod components;
mod config;
mod hooks;
mod models;
mod routes;
mod services;
mod stores;
mod views;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Portfolio Admin starting...");

    yew::Renderer::<App>::new().render();
}
