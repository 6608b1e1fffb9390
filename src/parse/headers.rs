use std::io::{BufRead, Error, ErrorKind};

use log::debug;

use crate::common::header::HeaderMap;
use crate::parse::line::read_line;

/// Accumulates headers from the given reader until the blank line that ends
/// them, leaving the reader positioned at the first body byte. A line is kept
/// only if splitting it on `": "` yields exactly a name and a value; any
/// other line is skipped. Reaching the end of the stream before the blank
/// line is an `UnexpectedEof` error.
pub fn read_headers(reader: &mut impl BufRead) -> std::io::Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    loop {
        let line = match read_line(reader)? {
            Some(line) => line,
            None => return Err(Error::from(ErrorKind::UnexpectedEof)),
        };

        if line.is_empty() {
            return Ok(headers);
        }

        debug!("header line: {}", line);

        let tokens: Vec<&str> = line.split(": ").collect();
        if tokens.len() == 2 {
            headers.insert(tokens[0].to_string(), tokens[1].to_string());
        }
    }
}
