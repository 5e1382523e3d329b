//! CLI command implementations.

pub mod cat;
pub mod convert;
pub mod info;

use thiserror::Error;
use zfio::{ZfError, ZfStream, BACKENDS};

/// Size of the chunks moved between streams.
const CHUNK_SIZE: usize = 64 * 1024;

/// Errors raised while moving data between streams.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The format name matches no backend suffix.
    #[error("unknown format {0:?} (expected one of: gz, bz2, lz, lzma, xz, z)")]
    UnknownFormat(String),

    /// Reading the input stopped on an error.
    #[error("failed reading {path}: {source}")]
    Read {
        /// Input path.
        path: String,
        /// Error kept by the stream.
        #[source]
        source: ZfError,
    },

    /// The output took fewer bytes than it was given.
    #[error("short write to {path}: {written} of {expected} bytes")]
    ShortWrite {
        /// Output path.
        path: String,
        /// Bytes handed over.
        expected: usize,
        /// Bytes accepted.
        written: usize,
    },
}

/// Appends the suffix for `format` to `base` so it selects that backend.
///
/// Accepts a bare suffix (`gz`), a dotted one (`.gz`) or a backend name
/// (`gzip`).
pub fn mode_for(base: &str, format: Option<&str>) -> Result<String, CommandError> {
    let Some(format) = format else {
        return Ok(base.to_string());
    };
    let wanted = format.trim_start_matches('.');
    BACKENDS
        .iter()
        .find_map(|backend| {
            let suffix = backend.suffix()?;
            let matches = suffix.trim_start_matches('.') == wanted
                || (backend.is_available() && backend.name() == wanted);
            matches.then(|| format!("{base}{suffix}"))
        })
        .ok_or_else(|| CommandError::UnknownFormat(format.to_string()))
}

/// Copies everything from `input` to `output`, returning the byte count.
pub fn pump(input: &mut ZfStream, output: &mut ZfStream) -> Result<u64, CommandError> {
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = input.read(&mut chunk);
        if n > 0 {
            let written = output.write(&chunk[..n]);
            if written < n {
                return Err(CommandError::ShortWrite {
                    path: output.path().to_string(),
                    expected: n,
                    written,
                });
            }
            total += n as u64;
        }
        if n < chunk.len() {
            break;
        }
    }
    if let Some(source) = input.take_error() {
        return Err(CommandError::Read {
            path: input.path().to_string(),
            source,
        });
    }
    Ok(total)
}
