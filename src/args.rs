use clap::Parser;

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// The HTTP server for the user webapp. Point it at a directory of pages to get started!
#[derive(Parser)]
#[command(author = AUTHORS, version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to serve from.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[arg(short, long, default_value_t = 8080)]
    /// (Optional) Port number to open on host.
    pub port: usize,
    /// (Optional) Directory holding the static pages to serve.
    #[arg(long, default_value_t = String::from("./webapp"))]
    pub webapp: String,
    /// (Optional) Log every request and parsed body.
    #[arg(short, long)]
    pub verbose: bool,
}
