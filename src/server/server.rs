use std::io::{BufReader, BufWriter};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

use log::{debug, error, warn};

use crate::assets::AssetRoot;
use crate::server::config::Config;
use crate::server::handler::handle_connection;
use crate::server::handler::HandleError::{AssetErr, UnknownUser};
use crate::store::UserStore;

/// Starts an HTTP server. This function blocks.
pub fn listen_http(config: Config, store: Arc<UserStore>) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.addr)?;
    let assets = Arc::new(AssetRoot::new(config.asset_root));

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let store = Arc::clone(&store);
                let assets = Arc::clone(&assets);
                thread::spawn(move || serve_connection(stream, &store, &assets));
            }
            Err(err) => error!("Could not accept connection: {:?}", err),
        }
    }

    Ok(())
}

/// Serves one request on its own thread. The stream drops when this returns,
/// which is the only place the connection gets closed.
fn serve_connection(stream: TcpStream, store: &UserStore, assets: &AssetRoot) {
    let addr = match stream.peer_addr() {
        Ok(addr) => addr,
        Err(err) => {
            debug!("Connection lost before it could be served: {:?}", err);
            return;
        }
    };
    debug!("New connection from {}", addr);

    let mut reader = BufReader::new(&stream);
    let mut writer = BufWriter::new(&stream);

    match handle_connection(&mut reader, &mut writer, addr, store, assets) {
        Ok(()) => {}
        Err(UnknownUser(user_id)) => warn!("{} tried to log in as unknown user {:?}", addr, user_id),
        Err(AssetErr { path, err }) => warn!("{} requested unreadable file {}: {:?}", addr, path, err),
        Err(err) => error!("Could not serve {}: {:?}", addr, err),
    }
}
