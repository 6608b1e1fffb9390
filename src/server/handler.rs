use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::net::SocketAddr;

use log::debug;

use crate::assets::AssetRoot;
use crate::common::response::{Response, LOGIN_COOKIE_MARKER};
use crate::parse::body::{content_length, read_body};
use crate::parse::error::ParseError;
use crate::parse::headers::read_headers;
use crate::parse::line::read_line;
use crate::parse::params::parse_params;
use crate::parse::request_line::{normalize_path, request_path};
use crate::server::handler::HandleError::{AssetErr, IoErr, ParseErr, UnknownUser};
use crate::store::UserStore;
use crate::user::User;

/// Path prefix that routes a request to the create-user action.
const CREATE_PATH_PREFIX: &str = "/user/create";

/// Path that routes a request to the login action. Exact match only.
const LOGIN_PATH: &str = "/user/login";

/// Error for when a request can not be handled. No response goes out on any
/// of these; the caller decides per kind what to log.
#[derive(Debug)]
pub enum HandleError {
    /// The request could not be parsed.
    ParseErr(ParseError),
    /// An IO error on the connection.
    IoErr(std::io::Error),
    /// A login named a user id with no stored record.
    UnknownUser(String),
    /// A static asset could not be read.
    AssetErr {
        path: String,
        err: std::io::Error,
    },
}

/// Handles one request on an accepted connection: reads the request line,
/// dispatches on the path, and writes exactly one response. A connection
/// that closes before sending anything is not an error. Headers and body are
/// only read by the actions that need them; a static-asset request leaves
/// everything after the request line unconsumed.
pub fn handle_connection(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    addr: SocketAddr,
    store: &UserStore,
    assets: &AssetRoot,
) -> Result<(), HandleError> {
    let line = match read_line(reader).map_err(IoErr)? {
        Some(line) => line,
        None => {
            debug!("{} disconnected before sending a request", addr);
            return Ok(());
        }
    };

    let path = request_path(&line).map_err(ParseErr)?;
    let path = normalize_path(path);
    debug!("{} requested {}", addr, path);

    if path.starts_with(CREATE_PATH_PREFIX) {
        create_user(reader, writer, store)
    } else if path == LOGIN_PATH {
        login(reader, writer, store)
    } else {
        serve_asset(writer, assets, path)
    }
}

/// Builds a user record from the request body and adds it to the store,
/// overwriting any record with the same id. Responds with a plain redirect
/// either way.
fn create_user(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    store: &UserStore,
) -> Result<(), HandleError> {
    let params = read_form_params(reader)?;
    let user = User::from_params(&params);
    debug!("creating user: {:?}", user);

    store.insert(user);
    write_response(writer, &Response::Redirect).map_err(IoErr)
}

/// Checks the credentials in the request body against the stored record with
/// the same id. A match redirects with the login cookie marker; a mismatch
/// redirects plainly, which is indistinguishable on the wire from a
/// create-user response.
fn login(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    store: &UserStore,
) -> Result<(), HandleError> {
    let params = read_form_params(reader)?;
    let input = User::new(
        params.get("userId").cloned().unwrap_or_default(),
        params.get("password").cloned().unwrap_or_default(),
    );

    let stored = store
        .find_by_id(&input.user_id)
        .ok_or_else(|| UnknownUser(input.user_id.clone()))?;

    let response = if stored.matches_credentials(&input) {
        debug!("login succeeded for {:?}", input.user_id);
        Response::RedirectLoggedIn
    } else {
        debug!("login failed for {:?}", input.user_id);
        Response::Redirect
    };
    write_response(writer, &response).map_err(IoErr)
}

/// Reads the asset at the given path and serves it, typed by the path suffix.
fn serve_asset(
    writer: &mut impl Write,
    assets: &AssetRoot,
    path: &str,
) -> Result<(), HandleError> {
    let contents = assets.read(path).map_err(|err| AssetErr {
        path: path.to_string(),
        err,
    })?;
    write_response(writer, &Response::file(path, contents)).map_err(IoErr)
}

/// Accumulates the headers, then reads the declared number of body bytes and
/// parses them as form parameters.
fn read_form_params(reader: &mut impl BufRead) -> Result<HashMap<String, String>, HandleError> {
    let headers = read_headers(reader).map_err(IoErr)?;
    let length = content_length(&headers).map_err(ParseErr)?;
    let body = read_body(reader, length).map_err(IoErr)?;
    debug!("body: {}", String::from_utf8_lossy(&body));

    Ok(parse_params(&body))
}

/// Writes the response as bytes to the given writer and flushes it.
fn write_response(writer: &mut impl Write, response: &Response) -> std::io::Result<()> {
    // write! will call write multiple times and does not flush
    match response {
        Response::Redirect => {
            write!(writer, "HTTP/1.1 302 Found \r\n")?;
            write!(writer, "Location: /\r\n")?;
            write!(writer, "\r\n")?;
        }
        Response::RedirectLoggedIn => {
            write!(writer, "HTTP/1.1 302 Found \r\n")?;
            write!(writer, "Location: /\r\n")?;
            write!(writer, "{}\r\n", LOGIN_COOKIE_MARKER)?;
            write!(writer, "\r\n")?;
        }
        Response::Html(contents) => write_file(writer, "text/html", contents)?,
        Response::Css(contents) => write_file(writer, "text/css", contents)?,
    }
    writer.flush()
}

/// Writes a 200 response carrying the given bytes.
fn write_file(writer: &mut impl Write, content_type: &str, contents: &[u8]) -> std::io::Result<()> {
    write!(writer, "HTTP/1.1 200 OK \r\n")?;
    write!(writer, "Content-Type: {};charset=utf-8\r\n", content_type)?;
    write!(writer, "Content-Length: {}\r\n", contents.len())?;
    write!(writer, "\r\n")?;
    writer.write_all(contents)
}
