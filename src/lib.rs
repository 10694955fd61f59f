pub mod config;
pub mod frontend;
pub mod study_core;

pub use config::ServerConfig;
pub use frontend::start_server;
