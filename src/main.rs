use std::io::Error;
use std::sync::Arc;

use clap::Parser;
use log::info;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use webapp_server::args::Args;
use webapp_server::server;
use webapp_server::server::Config;
use webapp_server::store::UserStore;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("logger was already initialized");

    let addr = format!("{}:{}", args.host, args.port);
    let store = Arc::new(UserStore::new());

    info!("Serving {} on {}", args.webapp, addr);
    server::listen_http(
        Config {
            addr,
            asset_root: args.webapp,
        },
        store,
    )
}
