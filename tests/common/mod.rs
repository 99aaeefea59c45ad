//! Shared test support.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Clonable in-memory sink so tests can inspect display output after the
/// display has been moved into a station.
#[derive(Clone, Default)]
pub struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .expect("display output is utf-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
