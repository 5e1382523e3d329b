//! Backend table.
//!
//! Every format a stream can speak is one [`Backend`] variant. The table in
//! [`BACKENDS`] fixes the order in which suffixes are tried by the resolver:
//! the default raw entry first, usable codecs next, and the placeholders for
//! formats that are recognized but have no implementation last.

use crate::config::ZfConfig;
use crate::mode::{Access, Mode};
use crate::native::NativeHandle;
use crate::source::Source;
use std::fs::{File, OpenOptions};
use std::io;

/// An I/O implementation selected for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Uncompressed bytes.
    Raw,
    /// gzip streams (RFC 1952), multi-member on read.
    Gzip,
    /// bzip2 streams, multi-stream on read.
    Bzip2,
    /// A recognized suffix without an implementation. Opening always fails.
    Unsupported(&'static str),
}

/// The immutable backend registry, in resolution order.
pub static BACKENDS: [Backend; 7] = [
    Backend::Raw,
    Backend::Gzip,
    Backend::Bzip2,
    Backend::Unsupported(".lz"),
    Backend::Unsupported(".lzma"),
    Backend::Unsupported(".xz"),
    Backend::Unsupported(".z"),
];

impl Backend {
    /// The path or mode suffix that selects this backend.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Raw => None,
            Self::Gzip => Some(".gz"),
            Self::Bzip2 => Some(".bz2"),
            Self::Unsupported(suffix) => Some(suffix),
        }
    }

    /// Short human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Unsupported(_) => "unsupported",
        }
    }

    /// Whether this build can open streams with this backend.
    ///
    /// Codecs disabled through Cargo features report `false`.
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Raw => true,
            Self::Gzip => cfg!(feature = "gzip"),
            Self::Bzip2 => cfg!(feature = "bzip2"),
            Self::Unsupported(_) => false,
        }
    }

    /// Size of the extra buffer placed between the codec and the file.
    ///
    /// Only gzip takes a hint; the other backends use their defaults.
    #[must_use]
    pub fn buffer_hint(self, config: &ZfConfig) -> Option<usize> {
        match self {
            Self::Gzip => Some(config.gzip_buffer_size.max(1)),
            _ => None,
        }
    }

    /// Opens `path` for writing or appending.
    pub(crate) fn open_path(
        self,
        path: &str,
        mode: &Mode,
        config: &ZfConfig,
    ) -> io::Result<NativeHandle> {
        if !self.is_available() {
            return Err(self.unavailable());
        }
        let file = create_file(path, mode.access())?;
        let level = mode.level().or(config.compression_level);

        match self {
            Self::Raw => Ok(NativeHandle::RawWriter(file)),
            #[cfg(feature = "gzip")]
            Self::Gzip => {
                use flate2::write::GzEncoder;
                use flate2::Compression;
                use std::io::BufWriter;

                let capacity = self.buffer_hint(config).unwrap_or(config.gzip_buffer_size);
                let level = level.map_or(Compression::default(), Compression::new);
                Ok(NativeHandle::GzipWriter(GzEncoder::new(
                    BufWriter::with_capacity(capacity, file),
                    level,
                )))
            }
            #[cfg(feature = "bzip2")]
            Self::Bzip2 => {
                use bzip2::write::BzEncoder;
                use bzip2::Compression;

                let level = level.map_or(Compression::default(), |l| {
                    Compression::new(l.clamp(1, 9))
                });
                Ok(NativeHandle::Bzip2Writer(BzEncoder::new(file, level)))
            }
            _ => Err(self.unavailable()),
        }
    }

    /// Wraps an opened source for reading.
    pub(crate) fn open_source(self, source: Source, config: &ZfConfig) -> io::Result<NativeHandle> {
        match self {
            Self::Raw => Ok(NativeHandle::RawReader(source)),
            #[cfg(feature = "gzip")]
            Self::Gzip => {
                use flate2::bufread::MultiGzDecoder;
                use std::io::BufReader;

                let capacity = self.buffer_hint(config).unwrap_or(config.gzip_buffer_size);
                Ok(NativeHandle::GzipReader(MultiGzDecoder::new(
                    BufReader::with_capacity(capacity, source),
                )))
            }
            #[cfg(feature = "bzip2")]
            Self::Bzip2 => {
                use bzip2::read::MultiBzDecoder;

                Ok(NativeHandle::Bzip2Reader(MultiBzDecoder::new(source)))
            }
            _ => {
                let _ = config;
                Err(self.unavailable())
            }
        }
    }

    fn unavailable(self) -> io::Error {
        io::Error::new(
            io::ErrorKind::Unsupported,
            format!("{} backend is not available", self.name()),
        )
    }
}

fn create_file(path: &str, access: Access) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true);
    if access == Access::Append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    options.open(path)
}
