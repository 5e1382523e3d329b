//! Stream context: open, close and handle state.

use crate::backend::Backend;
use crate::config::ZfConfig;
use crate::error::{ZfError, ZfResult};
use crate::mode::{Access, Mode};
use crate::native::{NativeHandle, Transfer};
use crate::resolve::resolve;
use crate::source::{Source, SourceKind, STDIO_PATH};
use crate::window::{EofState, Window};
use std::fmt;
use std::io;
use tracing::{debug, warn};

/// A buffered stream over a plain, gzip or bzip2 file.
///
/// The backend is picked from the path suffix or a suffix appended to the
/// mode (`"w.gz"`, `"r.bz2"`). Byte-wise reads and writes go through an
/// owned buffer of [`ZfConfig::buffer_capacity`] bytes; bulk reads drain that
/// buffer and then go straight to the backend.
///
/// Every operation takes `&mut self`, so a stream has exactly one user at a
/// time. Errors from the backend during reads and writes show up as short
/// counts; the error itself is kept and can be inspected with
/// [`ZfStream::last_error`].
///
/// # Example
///
/// ```no_run
/// use zfio::ZfStream;
///
/// let mut out = ZfStream::open("sample.txt.gz", "w")?;
/// out.write(b"hello\n");
/// out.close()?;
///
/// let mut input = ZfStream::open("sample.txt.gz", "r")?;
/// let mut buf = [0u8; 6];
/// assert_eq!(input.read(&mut buf), 6);
/// assert_eq!(input.get_byte(), None);
/// # Ok::<(), zfio::ZfError>(())
/// ```
pub struct ZfStream {
    pub(crate) path: String,
    pub(crate) mode: String,
    pub(crate) access: Access,
    pub(crate) backend: Backend,
    pub(crate) native: Option<NativeHandle>,
    pub(crate) buf: Box<[u8]>,
    pub(crate) window: Window,
    pub(crate) eof: EofState,
    pub(crate) scratch: Vec<u8>,
    pub(crate) last_error: Option<ZfError>,
}

impl ZfStream {
    /// Opens `path` with `mode` and the default configuration.
    ///
    /// # Errors
    ///
    /// See [`ZfStream::open_with_config`].
    pub fn open(path: &str, mode: &str) -> ZfResult<Self> {
        Self::open_with_config(path, mode, &ZfConfig::default())
    }

    /// Opens `path` with `mode`.
    ///
    /// In read mode the path may be a local file, `-` for standard input, or
    /// a remote URL. In write and append mode `-` writes to standard output
    /// as plain bytes; any other path is created through the backend.
    ///
    /// # Errors
    ///
    /// - [`ZfError::Configuration`] if path or mode is empty
    /// - [`ZfError::UnsupportedFormat`] if the resolved backend cannot open
    /// - [`ZfError::Open`] if the source, file or codec fails to open
    pub fn open_with_config(path: &str, mode: &str, config: &ZfConfig) -> ZfResult<Self> {
        let resolution = resolve(path, mode)?;
        let backend = resolution.backend;
        if !backend.is_available() {
            return Err(ZfError::UnsupportedFormat {
                suffix: backend.suffix().unwrap_or_default(),
            });
        }

        let parsed = Mode::parse(&resolution.mode)?;
        let access = parsed.access();
        let native = match access {
            Access::Read => {
                let source = Source::open(path, &config.remote_fetcher)
                    .map_err(|e| ZfError::open(path, e))?;
                backend
                    .open_source(source, config)
                    .map_err(|e| ZfError::open(path, e))?
            }
            _ if path == STDIO_PATH => NativeHandle::Stdout(io::stdout()),
            _ => backend
                .open_path(path, &parsed, config)
                .map_err(|e| ZfError::open(path, e))?,
        };

        let capacity = config.buffer_capacity.max(1);
        let window = if access.is_write() {
            Window::writable(capacity)
        } else {
            Window::readable(capacity)
        };

        debug!(
            path,
            mode = %resolution.mode,
            backend = backend.name(),
            capacity,
            "opened stream"
        );

        Ok(Self {
            path: path.to_string(),
            mode: resolution.mode,
            access,
            backend,
            native: Some(native),
            buf: vec![0u8; capacity].into_boxed_slice(),
            window,
            eof: EofState::Open,
            scratch: Vec::new(),
            last_error: None,
        })
    }

    /// Flushes pending bytes, finishes the backend stream and releases it.
    ///
    /// Dropping a stream does the same but can only log failures.
    ///
    /// # Errors
    ///
    /// Returns an error if pending bytes could not be written or the backend
    /// failed to finish.
    pub fn close(mut self) -> ZfResult<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> ZfResult<()> {
        let Some(mut native) = self.native.take() else {
            return Ok(());
        };

        let mut result = Ok(());
        if self.access.is_write() {
            let pending = self.window.pending();
            let expected = pending.len();
            if expected > 0 {
                let transfer = native.write_full(&self.buf[pending]);
                self.window.set_pending(0);
                if transfer.count < expected {
                    if let Some(e) = transfer.error {
                        warn!(path = %self.path, error = %e, "final flush failed");
                    }
                    result = Err(ZfError::ShortWrite {
                        expected,
                        written: transfer.count,
                    });
                }
            }
        }

        if let Err(e) = native.close() {
            warn!(path = %self.path, error = %e, "backend close failed");
            if result.is_ok() {
                result = Err(ZfError::Io(e));
            }
        }

        debug!(path = %self.path, backend = self.backend.name(), "closed stream");
        result
    }

    /// The path the stream was opened with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The effective mode, without any backend suffix.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// The backend in use.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Whether the stream was opened for reading.
    #[must_use]
    pub fn is_reading(&self) -> bool {
        self.access == Access::Read
    }

    /// Whether writes go to the process standard output.
    #[must_use]
    pub fn is_stdout(&self) -> bool {
        matches!(self.native, Some(NativeHandle::Stdout(_)))
    }

    /// What the stream reads from. `None` for streams opened for writing.
    #[must_use]
    pub fn source_kind(&self) -> Option<SourceKind> {
        self.native.as_ref().and_then(NativeHandle::source_kind)
    }

    /// Current end-of-stream state.
    #[must_use]
    pub fn eof_state(&self) -> EofState {
        self.eof
    }

    /// Cursor and fill-end offsets into the buffer.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// The most recent backend error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&ZfError> {
        self.last_error.as_ref()
    }

    /// Takes the most recent backend error, clearing it.
    pub fn take_error(&mut self) -> Option<ZfError> {
        self.last_error.take()
    }

    /// Keeps `error` as the latest backend error.
    pub(crate) fn record(&mut self, error: ZfError) {
        warn!(path = %self.path, error = %error, "stream error");
        self.last_error = Some(error);
    }

    /// Records the error carried by a transfer, if any, and returns its count.
    pub(crate) fn settle(&mut self, transfer: Transfer) -> usize {
        if let Some(e) = transfer.error {
            self.record(ZfError::Io(e));
        }
        transfer.count
    }
}

impl Drop for ZfStream {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!(path = %self.path, error = %e, "stream dropped with errors");
        }
    }
}

impl fmt::Debug for ZfStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZfStream")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("backend", &self.backend)
            .field("open", &self.native.is_some())
            .field("window", &self.window)
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}
