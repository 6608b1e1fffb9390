pub use config::*;
pub use server::*;

/// Entry point for starting a server.
mod server;
/// Config for a server.
mod config;
/// Request handling for accepted connections.
mod handler;
