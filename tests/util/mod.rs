use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::thread::{sleep, spawn};
use std::time::Duration;

use webapp_server::server;
use webapp_server::server::Config;
use webapp_server::store::UserStore;

/// Starts a server on the given address serving the test pages, and returns a
/// handle to its user store.
pub fn start_server(addr: &str) -> Arc<UserStore> {
    let store = Arc::new(UserStore::new());
    let config = Config {
        addr: String::from(addr),
        asset_root: String::from("./tests/webapp"),
    };

    let server_store = Arc::clone(&store);
    spawn(|| server::listen_http(config, server_store).unwrap());
    sleep(Duration::from_millis(100));

    store
}

/// Writes the given raw request on a fresh connection and reads until the
/// server hangs up.
pub fn send_request(addr: &str, request: &str) -> String {
    let mut client = TcpStream::connect(addr).unwrap();
    client.write_all(request.as_bytes()).unwrap();

    let mut response = String::new();
    client.read_to_string(&mut response).unwrap_or_default();
    response
}

/// Formats a form POST with its content length filled in.
pub fn form_request(path: &str, body: &str) -> String {
    format!(
        "POST {} HTTP/1.1\r\nContent-Length: {}\r\n\r\n{}",
        path,
        body.len(),
        body
    )
}
