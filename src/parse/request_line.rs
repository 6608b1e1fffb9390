use crate::parse::error::ParseError;

/// Extracts the request path from a request line: the second
/// whitespace-delimited token. The method and protocol version tokens are
/// not validated.
pub fn request_path(line: &str) -> Result<&str, ParseError> {
    line.split_whitespace().nth(1).ok_or(ParseError::BadSyntax)
}

/// Rewrites the bare root path to the index page. Any other path is
/// returned unchanged.
pub fn normalize_path(path: &str) -> &str {
    if path == "/" {
        "/index.html"
    } else {
        path
    }
}
