//! Sink writing newline-terminated lines to any `io::Write`.

use cemiuiler_log_core::LogSink;
use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

/// A sink that appends each line, plus a newline, to a writer.
///
/// Writes are serialized through a mutex so lines from concurrent hooks never
/// interleave. I/O errors are dropped: the facade treats sinks as infallible.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stderr> {
    /// A sink writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{line}").and_then(|()| writer.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_newline_terminated() {
        let sink = WriterSink::new(Vec::new());
        sink.emit("[Cemiuiler][W][A]: first");
        sink.emit("[Cemiuiler][D]: second");

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "[Cemiuiler][W][A]: first\n[Cemiuiler][D]: second\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let sink = WriterSink::new(Broken);
        sink.emit("[Cemiuiler][E][A]: ");
    }
}
