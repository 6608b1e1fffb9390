use std::io::BufRead;

use crate::common::header::{self, HeaderMap};
use crate::parse::error::ParseError;

/// Gets the declared body length from the given header map. The value is
/// trusted as authoritative; missing and unparseable values are distinct
/// errors, never a default of zero.
pub fn content_length(headers: &HeaderMap) -> Result<usize, ParseError> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(ParseError::MissingContentLength)?;
    value.parse().map_err(|_| ParseError::InvalidContentLength)
}

/// Reads exactly `length` body bytes from the given reader, blocking until
/// they all arrive. A stream that ends early is an `UnexpectedEof` error.
pub fn read_body(reader: &mut impl BufRead, length: usize) -> std::io::Result<Vec<u8>> {
    let mut body = vec![0; length];
    reader.read_exact(&mut body)?;
    Ok(body)
}
