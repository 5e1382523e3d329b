//! # zfio
//!
//! Format-transparent buffered file streams.
//!
//! A [`ZfStream`] reads or writes a file that may be plain, gzip-compressed
//! or bzip2-compressed without the caller having to know which. The format
//! comes from the path suffix (`.gz`, `.bz2`) or from a suffix appended to
//! the open mode (`"w.gz"`, `"r.bz2"`).
//!
//! ## Design Principles
//!
//! - Backends form a closed set ([`Backend`]) resolved once at open time
//! - Byte-wise access is served from a fixed buffer owned by the stream
//! - Reads and writes report failures as short counts, never panics
//! - End of stream moves through [`EofState`] and never goes back
//!
//! ## Modes
//!
//! | mode      | meaning                                        |
//! |-----------|------------------------------------------------|
//! | `r`       | read (`-` reads standard input)                |
//! | `w`       | create or truncate (`-` writes standard output)|
//! | `a`       | append; compressed files gain a new member     |
//! | `w9`      | a digit sets the compression level             |
//! | `w.gz`    | a trailing suffix forces the backend           |
//!
//! The suffixes `.lz`, `.lzma`, `.xz` and `.z` are recognized but have no
//! backend; opening them fails with [`ZfError::UnsupportedFormat`].
//!
//! ## Example
//!
//! ```rust
//! use zfio::ZfStream;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("greeting.txt.bz2");
//! let path = path.to_str().unwrap();
//!
//! let mut out = ZfStream::open(path, "w")?;
//! out.put_line("hello")?;
//! out.close()?;
//!
//! let mut input = ZfStream::open(path, "r")?;
//! let mut line = Vec::new();
//! while let Some(b) = input.get_byte() {
//!     line.push(b);
//! }
//! assert_eq!(line, b"hello\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod mode;
mod native;
mod reader;
mod resolve;
mod source;
mod stream;
mod window;
mod writer;

pub use backend::{Backend, BACKENDS};
pub use config::{ZfConfig, DEFAULT_BUFFER_CAPACITY, DEFAULT_GZIP_BUFFER_SIZE};
pub use error::{ZfError, ZfResult};
pub use mode::{Access, Mode};
pub use resolve::{resolve, resolve_in, Resolution};
pub use source::{is_remote, Source, SourceKind, STDIO_PATH};
pub use stream::ZfStream;
pub use window::{EofState, Window};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
