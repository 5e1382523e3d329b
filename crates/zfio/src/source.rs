//! Readable sources for streams opened in read mode.
//!
//! A [`Source`] turns a path into something the read backends can decode
//! from. Three kinds of path are understood:
//!
//! - `-` reads the process standard input
//! - `http://`, `https://` and `ftp://` URLs are fetched by an external
//!   program whose standard output is piped back
//! - anything else is opened as a local file

use std::fs::File;
use std::io::{self, Read};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::debug;

/// Path that names the standard streams.
pub const STDIO_PATH: &str = "-";

const REMOTE_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Where a [`Source`] gets its bytes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A local file.
    Local,
    /// The process standard input.
    Stdin,
    /// Output of a fetcher process.
    Remote,
}

/// A readable resource obtained from a path.
#[derive(Debug)]
pub struct Source {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    File(File),
    Stdin(io::Stdin),
    Remote(Fetch),
}

/// A running fetcher process. Dropping it reaps the child.
#[derive(Debug)]
struct Fetch {
    child: Child,
    stdout: ChildStdout,
}

impl Drop for Fetch {
    fn drop(&mut self) {
        // The child may already have exited; kill only matters if the
        // caller stopped reading early.
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Returns true if `path` is fetched through the remote fetcher.
#[must_use]
pub fn is_remote(path: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| path.starts_with(scheme))
}

impl Source {
    /// Opens `path` for reading.
    ///
    /// `fetcher` is a whitespace-separated command line; the URL is appended
    /// as its last argument when `path` is remote.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the fetcher cannot
    /// be started.
    pub fn open(path: &str, fetcher: &str) -> io::Result<Self> {
        let inner = if path == STDIO_PATH {
            Inner::Stdin(io::stdin())
        } else if is_remote(path) {
            Inner::Remote(spawn_fetcher(path, fetcher)?)
        } else {
            Inner::File(File::open(path)?)
        };
        let source = Self { inner };
        debug!(path, kind = ?source.kind(), "opened source");
        Ok(source)
    }

    /// Returns what this source reads from.
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self.inner {
            Inner::File(_) => SourceKind::Local,
            Inner::Stdin(_) => SourceKind::Stdin,
            Inner::Remote(_) => SourceKind::Remote,
        }
    }
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::File(f) => f.read(buf),
            Inner::Stdin(s) => s.read(buf),
            Inner::Remote(fetch) => fetch.stdout.read(buf),
        }
    }
}

fn spawn_fetcher(url: &str, fetcher: &str) -> io::Result<Fetch> {
    let mut words = fetcher.split_whitespace();
    let program = words.next().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "remote fetcher is empty")
    })?;

    let mut child = Command::new(program)
        .args(words)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()?;

    match child.stdout.take() {
        Some(stdout) => Ok(Fetch { child, stdout }),
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "fetcher stdout was not captured",
            ))
        }
    }
}
