/// The cookie marker line sent on a successful login. Not a standard
/// `Set-Cookie` directive; clients of this system look for this exact line.
pub const LOGIN_COOKIE_MARKER: &str = "setCookie:loggedIn= true/";

/// An HTTP response. Exactly these four shapes can go out on the wire, so a
/// handler that returns one of them can never write two responses to the
/// same connection.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Response {
    /// A plain 302 redirect to the site root.
    Redirect,
    /// A 302 redirect to the site root carrying the login cookie marker.
    RedirectLoggedIn,
    /// A 200 response serving the given bytes as HTML.
    Html(Vec<u8>),
    /// A 200 response serving the given bytes as CSS.
    Css(Vec<u8>),
}

impl Response {
    /// Creates the response for a served file, typed by the requested path:
    /// css for a `.css` path, html for anything else.
    pub fn file(path: &str, contents: Vec<u8>) -> Response {
        if path.ends_with(".css") {
            Response::Css(contents)
        } else {
            Response::Html(contents)
        }
    }
}
