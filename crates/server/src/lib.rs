pub mod api;
pub mod config;
pub mod page;

pub use api::{AppState, build_router};
pub use config::ServerConfig;
