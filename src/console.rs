// console.rs — Buffered console output
//
// All listing output accumulates in one pre-allocated String and is written
// to stdout in a single call on flush (and on drop).  Diagnostics go to the
// error writer immediately so they appear ahead of the listing.

use std::io::{self, Write};

use crate::ehm::AppError;

/// Initial buffer capacity: 1 MB
const INITIAL_BUFFER_SIZE: usize = 1024 * 1024;

/// Prefix on every diagnostic line.
pub const PROGRAM_NAME: &str = "rls";

pub struct Console {
    buffer:       String,
    writer:       Box<dyn Write>,
    error_writer: Box<dyn Write>,
    error_count:  usize,
}

impl Console {
    /// Console bound to the process's stdout and stderr.
    pub fn new() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Console bound to arbitrary writers (tests capture output this way).
    pub fn with_writers(writer: Box<dyn Write>, error_writer: Box<dyn Write>) -> Self {
        Console {
            buffer: String::with_capacity(INITIAL_BUFFER_SIZE),
            writer,
            error_writer,
            error_count: 0,
        }
    }

    /// Append one line of output.
    pub fn puts(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Text buffered since the last flush.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Write a diagnostic line ("rls: <message>") straight to the error writer.
    pub fn report_error(&mut self, error: &AppError) {
        self.error_count += 1;
        let _ = writeln!(self.error_writer, "{}: {}", PROGRAM_NAME, error);
    }

    /// Write a non-fatal warning; does not count as an error.
    pub fn report_warning(&mut self, message: &str) {
        let _ = writeln!(self.error_writer, "{}: warning: {}", PROGRAM_NAME, message);
    }

    /// Number of report_error calls so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Write the buffer to the output writer in one call.
    pub fn flush(&mut self) -> Result<(), AppError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        self.writer.write_all(self.buffer.as_bytes())?;
        self.writer.flush()?;

        self.buffer.clear();
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::ehm::DecodeError;

    /// Write sink tests can read back after the Console is done with it.
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    #[test]
    fn puts_buffers_until_flush() {
        let out = SharedBuffer::default();
        let mut console = Console::with_writers(Box::new(out.clone()), Box::new(io::sink()));

        console.puts("one");
        console.puts("two");
        assert_eq!(console.contents(), "one\ntwo\n");
        assert_eq!(out.text(), "");

        console.flush().unwrap();
        assert_eq!(out.text(), "one\ntwo\n");
        assert_eq!(console.contents(), "");
    }

    #[test]
    fn drop_flushes() {
        let out = SharedBuffer::default();
        {
            let mut console = Console::with_writers(Box::new(out.clone()), Box::new(io::sink()));
            console.puts("tail");
        }
        assert_eq!(out.text(), "tail\n");
    }

    #[test]
    fn errors_go_to_error_writer() {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let mut console = Console::with_writers(Box::new(out.clone()), Box::new(err.clone()));

        console.report_error(&AppError::Decode {
            path:   "x".into(),
            source: DecodeError::UnknownGroup(7),
        });
        console.report_warning("odd setting");

        assert_eq!(err.text(), "rls: cannot decode 'x': no group name for gid 7\nrls: warning: odd setting\n");
        assert_eq!(console.error_count(), 1);
        assert_eq!(console.contents(), "");
    }
}
