use std::cell::RefCell;
use std::cmp::min;
use std::io::{Read, Write};
use std::rc::Rc;

/// A reader that hands out its canned fragments one `read` call at a time,
/// then reports end of stream.
pub struct MockReader {
    fragments: Vec<Vec<u8>>,
}

impl MockReader {
    pub fn from_strs(fragments: Vec<&str>) -> MockReader {
        MockReader {
            fragments: fragments.into_iter().map(|s| s.as_bytes().to_vec()).collect(),
        }
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let next = match self.fragments.first_mut() {
            Some(next) => next,
            None => return Ok(0),
        };

        let amount = min(buf.len(), next.len());
        buf[..amount].copy_from_slice(&next[..amount]);
        next.drain(..amount);

        if next.is_empty() {
            self.fragments.remove(0);
        }

        Ok(amount)
    }
}

/// A writer that records everything written to it, keeping bytes that were
/// only written separate from bytes that were also flushed. Tests read the
/// `flushed` handle, so a missing flush shows up as missing output.
pub struct MockWriter {
    pending: Vec<u8>,
    pub flushed: Rc<RefCell<Vec<u8>>>,
}

impl MockWriter {
    pub fn new() -> MockWriter {
        MockWriter {
            pending: vec![],
            flushed: Rc::new(RefCell::new(vec![])),
        }
    }
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushed.borrow_mut().append(&mut self.pending);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::rc::Rc;

    use crate::util::mock::{MockReader, MockWriter};

    #[test]
    fn reader_yields_one_fragment_per_call() {
        let mut reader = MockReader::from_strs(vec!["hello", "world"]);
        let mut buf = [0u8; 16];

        assert_eq!(reader.read(&mut buf).unwrap(), 5);
        assert_eq!(&buf[..5], b"hello");
        assert_eq!(reader.read(&mut buf).unwrap(), 5);
        assert_eq!(&buf[..5], b"world");
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn reader_splits_fragment_larger_than_buffer() {
        let mut reader = MockReader::from_strs(vec!["hello"]);
        let mut buf = [0u8; 3];

        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"lo");
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn writer_exposes_only_flushed_bytes() {
        let mut writer = MockWriter::new();
        let flushed = Rc::clone(&writer.flushed);

        writer.write_all(b"hello ").unwrap();
        assert!(flushed.borrow().is_empty());

        writer.flush().unwrap();
        writer.write_all(b"world").unwrap();
        assert_eq!(*flushed.borrow(), b"hello ");

        writer.flush().unwrap();
        assert_eq!(*flushed.borrow(), b"hello world");
    }
}
