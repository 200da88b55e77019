mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod forms;
mod guard;
mod http;
mod listing;
mod load;
mod models;
mod month;
mod pages;
mod routes;
mod session;
mod theme;
mod trend;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    yew::Renderer::<app::App>::new().render();
}
