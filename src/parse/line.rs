use std::io::BufRead;

/// Reads one line from the given reader, blocking until the line terminator
/// or the end of the stream. The terminator (`\r\n` or a bare `\n`) is
/// stripped; a final unterminated line still counts as a line. Returns `None`
/// if the stream ended before any bytes were read.
pub fn read_line(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Some(line))
}
