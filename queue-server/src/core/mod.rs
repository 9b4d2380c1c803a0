//! Core server composition: configuration, shared state, HTTP runner

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
