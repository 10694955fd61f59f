mod api;
mod app;
mod components;
mod server;

pub use api::{handle_panic, routes as api_routes};
pub use server::{router, start_server};
