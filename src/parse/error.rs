/// Error for when a request can't be parsed.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has too few tokens to hold a path.
    BadSyntax,
    /// The request needs a body but declares no content length.
    MissingContentLength,
    /// The declared content length can not be parsed as a number.
    InvalidContentLength,
}
