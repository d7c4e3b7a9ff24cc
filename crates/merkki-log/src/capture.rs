//! In-memory sink.
//!
//! [`Capture`] collects whatever a [`Logger`](crate::Logger) writes so it can be
//! inspected later, e.g. by an in-app log console or by tests. Clones share the
//! same buffer.

use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

use termcolor::{ColorSpec, WriteColor};

#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for Capture {

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteColor for Capture {

    #[inline(always)]
    fn supports_color(&self) -> bool {
        false
    }

    #[inline(always)]
    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}
