//! Concrete reader and writer handles behind a stream.

use crate::source::{Source, SourceKind};
use std::fs::File;
use std::io::{self, Read, Write};

#[cfg(feature = "gzip")]
use flate2::{bufread::MultiGzDecoder, write::GzEncoder};
#[cfg(feature = "gzip")]
use std::io::{BufReader, BufWriter};

#[cfg(feature = "bzip2")]
use bzip2::{read::MultiBzDecoder, write::BzEncoder};

/// The backend-specific handle owned by an open stream.
///
/// Each variant pairs a backend with a direction, so a stream never has to
/// reinterpret what it holds.
pub(crate) enum NativeHandle {
    RawReader(Source),
    RawWriter(File),
    Stdout(io::Stdout),
    #[cfg(feature = "gzip")]
    GzipReader(MultiGzDecoder<BufReader<Source>>),
    #[cfg(feature = "gzip")]
    GzipWriter(GzEncoder<BufWriter<File>>),
    #[cfg(feature = "bzip2")]
    Bzip2Reader(MultiBzDecoder<Source>),
    #[cfg(feature = "bzip2")]
    Bzip2Writer(BzEncoder<File>),
}

/// Outcome of a transfer that keeps going until done or stopped.
#[derive(Debug, Default)]
pub(crate) struct Transfer {
    /// Bytes moved before stopping.
    pub count: usize,
    /// The error that stopped the transfer early, if any.
    pub error: Option<io::Error>,
}

impl std::fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NativeHandle::RawReader(_) => "RawReader",
            NativeHandle::RawWriter(_) => "RawWriter",
            NativeHandle::Stdout(_) => "Stdout",
            #[cfg(feature = "gzip")]
            NativeHandle::GzipReader(_) => "GzipReader",
            #[cfg(feature = "gzip")]
            NativeHandle::GzipWriter(_) => "GzipWriter",
            #[cfg(feature = "bzip2")]
            NativeHandle::Bzip2Reader(_) => "Bzip2Reader",
            #[cfg(feature = "bzip2")]
            NativeHandle::Bzip2Writer(_) => "Bzip2Writer",
        };
        f.debug_tuple(name).finish_non_exhaustive()
    }
}

impl NativeHandle {
    /// Kind of the source being read, `None` for writers.
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self {
            Self::RawReader(source) => Some(source.kind()),
            #[cfg(feature = "gzip")]
            Self::GzipReader(decoder) => Some(decoder.get_ref().get_ref().kind()),
            #[cfg(feature = "bzip2")]
            Self::Bzip2Reader(decoder) => Some(decoder.get_ref().kind()),
            _ => None,
        }
    }

    fn read_once(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::RawReader(source) => source.read(buf),
            #[cfg(feature = "gzip")]
            Self::GzipReader(decoder) => decoder.read(buf),
            #[cfg(feature = "bzip2")]
            Self::Bzip2Reader(decoder) => decoder.read(buf),
            _ => Err(wrong_direction("reading")),
        }
    }

    fn write_once(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::RawWriter(file) => file.write(buf),
            Self::Stdout(stdout) => stdout.write(buf),
            #[cfg(feature = "gzip")]
            Self::GzipWriter(encoder) => encoder.write(buf),
            #[cfg(feature = "bzip2")]
            Self::Bzip2Writer(encoder) => encoder.write(buf),
            _ => Err(wrong_direction("writing")),
        }
    }

    /// Reads until `buf` is full, the backend reports end of data, or an
    /// error occurs. A short count means one of the latter two.
    pub fn read_full(&mut self, buf: &mut [u8]) -> Transfer {
        let mut transfer = Transfer::default();
        while transfer.count < buf.len() {
            match self.read_once(&mut buf[transfer.count..]) {
                Ok(0) => break,
                Ok(n) => transfer.count += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    transfer.error = Some(e);
                    break;
                }
            }
        }
        transfer
    }

    /// Writes all of `buf` unless the backend fails part way.
    pub fn write_full(&mut self, buf: &[u8]) -> Transfer {
        let mut transfer = Transfer::default();
        while transfer.count < buf.len() {
            match self.write_once(&buf[transfer.count..]) {
                Ok(0) => {
                    transfer.error = Some(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "backend accepted no bytes",
                    ));
                    break;
                }
                Ok(n) => transfer.count += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    transfer.error = Some(e);
                    break;
                }
            }
        }
        transfer
    }

    /// Pushes codec and OS buffers downstream without ending the stream.
    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::RawWriter(file) => file.flush(),
            Self::Stdout(stdout) => stdout.flush(),
            #[cfg(feature = "gzip")]
            Self::GzipWriter(encoder) => encoder.flush(),
            #[cfg(feature = "bzip2")]
            Self::Bzip2Writer(encoder) => encoder.flush(),
            _ => Ok(()),
        }
    }

    /// Finishes any compressed stream and releases the handle.
    pub fn close(self) -> io::Result<()> {
        match self {
            Self::RawWriter(mut file) => file.flush(),
            Self::Stdout(mut stdout) => stdout.flush(),
            #[cfg(feature = "gzip")]
            Self::GzipWriter(encoder) => encoder.finish()?.flush(),
            #[cfg(feature = "bzip2")]
            Self::Bzip2Writer(encoder) => encoder.finish()?.flush(),
            // Readers release their source (and reap a fetcher) on drop.
            _ => Ok(()),
        }
    }
}

fn wrong_direction(op: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("stream is not open for {op}"),
    )
}
