/// Command-line argument parser
pub mod args;
/// The directory of static pages served to clients.
pub mod assets;
/// HTTP data types.
pub mod common;
/// Components for running an HTTP server and handling requests.
pub mod server;
/// Shared store of user records.
pub mod store;
/// A user record and its form bindings.
pub mod user;

/// Utility components.
pub mod util;

/// Components for parsing HTTP requests.
pub(crate) mod parse;
