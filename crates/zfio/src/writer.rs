//! Buffered writes.

use crate::error::{ZfError, ZfResult};
use crate::native::Transfer;
use crate::reader::into_io;
use crate::stream::ZfStream;
use std::fmt;
use std::io::{self, Write};

/// Writes formatted text to a [`ZfStream`], returning the bytes written.
///
/// ```no_run
/// use zfio::{zprintf, ZfStream};
///
/// let mut out = ZfStream::open("counts.tsv.gz", "w")?;
/// zprintf!(out, "{}\t{}\n", "reads", 42);
/// out.close()?;
/// # Ok::<(), zfio::ZfError>(())
/// ```
#[macro_export]
macro_rules! zprintf {
    ($stream:expr, $($arg:tt)*) => {
        $stream.write_formatted(::std::format_args!($($arg)*))
    };
}

impl ZfStream {
    /// Hands `src` to the backend and returns how many bytes it took.
    ///
    /// The buffer is not used for bulk writes, but bytes still pending from
    /// [`ZfStream::put_byte`] are written first so output keeps its order.
    /// A short count is not retried.
    pub fn write(&mut self, src: &[u8]) -> usize {
        if !self.access.is_write() {
            self.record(not_writable());
            return 0;
        }
        if self.window.cursor() > 0 && !self.flush_pending_or_keep() {
            return 0;
        }
        self.write_through(src)
    }

    /// Appends one byte to the buffer, flushing it when full.
    ///
    /// Always returns `byte`. A failed flush is kept as
    /// [`ZfStream::last_error`] and the buffer is reset regardless.
    pub fn put_byte(&mut self, byte: u8) -> u8 {
        if let Err(e) = self.push_byte(byte) {
            self.record(e);
        }
        byte
    }

    /// Writes `text` followed by a newline through [`ZfStream::put_byte`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ZfError::ShortWrite`] hit by a buffer flush
    /// triggered during this call. The remaining bytes are still queued.
    pub fn put_line(&mut self, text: &str) -> ZfResult<()> {
        let mut outcome = Ok(());
        for byte in text.bytes().chain(std::iter::once(b'\n')) {
            if let Err(e) = self.push_byte(byte) {
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }

    /// Writes formatted text and returns the number of bytes written.
    ///
    /// Pending buffered bytes are flushed first; if that flush is short,
    /// the unwritten bytes stay buffered and nothing is formatted (returns
    /// 0). The text is rendered into a scratch buffer that grows as needed
    /// and written in full; a short write is recorded and the unwritten
    /// remainder is dropped. A scratch buffer grown past the stream buffer
    /// is shrunk back afterwards.
    pub fn write_formatted(&mut self, args: fmt::Arguments<'_>) -> usize {
        if !self.access.is_write() {
            self.record(not_writable());
            return 0;
        }
        if self.window.cursor() > 0 && !self.flush_pending_or_keep() {
            return 0;
        }

        self.scratch.clear();
        if let Err(e) = self.scratch.write_fmt(args) {
            self.record(ZfError::Io(e));
            return 0;
        }

        let expected = self.scratch.len();
        let transfer = match self.native.as_mut() {
            Some(native) => native.write_full(&self.scratch),
            None => Transfer::default(),
        };
        let written = self.settle(transfer);
        if written < expected {
            self.record(ZfError::ShortWrite { expected, written });
        }

        // One oversized line should not pin its allocation for the stream's life.
        let limit = self.window.capacity();
        if self.scratch.capacity() > limit {
            self.scratch.clear();
            self.scratch.shrink_to(limit);
        }
        written
    }

    /// Writes pending bytes and flushes the backend without ending it.
    ///
    /// # Errors
    ///
    /// Returns [`ZfError::ShortWrite`] if pending bytes could not all be
    /// written (they stay buffered), or the backend flush error.
    pub fn flush(&mut self) -> ZfResult<()> {
        if !self.access.is_write() {
            return Ok(());
        }
        let pending = self.window.cursor();
        if pending > 0 && !self.flush_pending_or_keep() {
            let written = pending - self.window.cursor();
            return Err(ZfError::ShortWrite {
                expected: pending,
                written,
            });
        }
        match self.native.as_mut() {
            Some(native) => native.flush().map_err(ZfError::Io),
            None => Ok(()),
        }
    }

    fn push_byte(&mut self, byte: u8) -> ZfResult<()> {
        if !self.access.is_write() {
            return Err(not_writable());
        }
        // A write window is flushed as soon as it fills, so a slot is free.
        let Some(slot) = self.window.push() else {
            return Err(not_writable());
        };
        self.buf[slot] = byte;

        if self.window.cursor() < self.window.capacity() {
            return Ok(());
        }
        let expected = self.window.cursor();
        let written = self.drain_buffer();
        self.window.set_pending(0);
        if written < expected {
            return Err(ZfError::ShortWrite { expected, written });
        }
        Ok(())
    }

    /// Writes the pending region and returns how much the backend took.
    fn drain_buffer(&mut self) -> usize {
        let pending = self.window.pending();
        let transfer = match self.native.as_mut() {
            Some(native) => native.write_full(&self.buf[pending]),
            None => Transfer::default(),
        };
        self.settle(transfer)
    }

    /// Flushes pending bytes. On a short flush the unwritten tail is moved
    /// to the front of the buffer, a short write is recorded and `false` is
    /// returned.
    fn flush_pending_or_keep(&mut self) -> bool {
        let expected = self.window.cursor();
        let written = self.drain_buffer();
        if written < expected {
            self.buf.copy_within(written..expected, 0);
            self.window.set_pending(expected - written);
            self.record(ZfError::ShortWrite { expected, written });
            return false;
        }
        self.window.set_pending(0);
        true
    }

    fn write_through(&mut self, src: &[u8]) -> usize {
        let transfer = match self.native.as_mut() {
            Some(native) => native.write_full(src),
            None => Transfer::default(),
        };
        self.settle(transfer)
    }
}

impl io::Write for ZfStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = ZfStream::write(self, buf);
        if n == 0 && !buf.is_empty() {
            let error = self
                .last_error
                .take()
                .map_or_else(|| io::Error::from(io::ErrorKind::WriteZero), into_io);
            return Err(error);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        ZfStream::flush(self).map_err(into_io)
    }
}

fn not_writable() -> ZfError {
    ZfError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        "stream is not open for writing",
    ))
}
