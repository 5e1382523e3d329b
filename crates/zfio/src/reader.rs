//! Buffered reads.

use crate::error::ZfError;
use crate::native::Transfer;
use crate::stream::ZfStream;
use crate::window::EofState;
use std::io;

impl ZfStream {
    /// Reads up to `dest.len()` bytes and returns how many were copied.
    ///
    /// Buffered bytes left over from [`ZfStream::get_byte`] are returned
    /// first; the rest comes from a single backend read straight into
    /// `dest`. A count below `dest.len()` means the backend ran dry (or
    /// failed, see [`ZfStream::last_error`]); the call after that returns 0,
    /// as does every call from then on.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        if !self.is_reading() {
            self.record(not_readable());
            return 0;
        }
        if self.eof == EofState::Drained {
            return 0;
        }

        let range = self.window.take(dest.len());
        let copied = range.len();
        dest[..copied].copy_from_slice(&self.buf[range]);

        if self.eof == EofState::BackendExhausted {
            // A request larger than what is buffered has now seen the end.
            if self.window.is_exhausted() {
                self.eof.escalate(EofState::Drained);
            }
            return copied;
        }

        let rest = &mut dest[copied..];
        if rest.is_empty() {
            return copied;
        }
        let wanted = rest.len();
        let transfer = match self.native.as_mut() {
            Some(native) => native.read_full(rest),
            None => Transfer::default(),
        };
        let fetched = self.settle(transfer);
        if fetched < wanted {
            self.eof.escalate(EofState::BackendExhausted);
        }
        copied + fetched
    }

    /// Returns the next byte, or `None` at end of stream.
    ///
    /// When the buffer is used up it is refilled with one backend read of
    /// the full capacity. Once `None` is returned it is returned forever.
    pub fn get_byte(&mut self) -> Option<u8> {
        if !self.is_reading() {
            self.record(not_readable());
            return None;
        }

        if self.window.is_exhausted() {
            let filled = if self.eof == EofState::Open {
                let transfer = match self.native.as_mut() {
                    Some(native) => native.read_full(&mut self.buf),
                    None => Transfer::default(),
                };
                self.settle(transfer)
            } else {
                0
            };
            self.window.refill(filled);
            self.eof
                .escalate(EofState::after_refill(filled, self.window.capacity()));
        }

        if self.eof == EofState::Drained {
            return None;
        }
        let range = self.window.take(1);
        self.buf[range].first().copied()
    }
}

impl io::Read for ZfStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = ZfStream::read(self, buf);
        if n == 0 && !buf.is_empty() {
            if let Some(error) = self.last_error.take() {
                return Err(into_io(error));
            }
        }
        Ok(n)
    }
}

fn not_readable() -> ZfError {
    ZfError::Io(io::Error::new(
        io::ErrorKind::Unsupported,
        "stream is not open for reading",
    ))
}

pub(crate) fn into_io(error: ZfError) -> io::Error {
    match error {
        ZfError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
