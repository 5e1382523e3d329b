//! Stream configuration.

/// Default capacity of the per-handle buffer (512 KiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 512 * 1024;

/// Default size of the internal gzip buffer (512 KiB).
pub const DEFAULT_GZIP_BUFFER_SIZE: usize = 512 * 1024;

/// Configuration for opening a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZfConfig {
    /// Capacity of the handle's own buffer used by byte-wise access.
    pub buffer_capacity: usize,

    /// Size of the buffer placed between the gzip codec and the file.
    pub gzip_buffer_size: usize,

    /// Compression level for gzip and bzip2 writers.
    ///
    /// A level digit in the mode string takes precedence.
    pub compression_level: Option<u32>,

    /// Command line used to fetch `http://`, `https://` and `ftp://` paths.
    ///
    /// The URL is appended as the last argument.
    pub remote_fetcher: String,
}

impl Default for ZfConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            gzip_buffer_size: DEFAULT_GZIP_BUFFER_SIZE,
            compression_level: None,
            remote_fetcher: "curl -sfL".to_string(),
        }
    }
}

impl ZfConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handle buffer capacity. Zero is raised to one.
    #[must_use]
    pub const fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Sets the gzip buffer size hint.
    #[must_use]
    pub const fn gzip_buffer_size(mut self, size: usize) -> Self {
        self.gzip_buffer_size = size;
        self
    }

    /// Sets the default compression level (clamped to 0-9).
    #[must_use]
    pub const fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = Some(if level > 9 { 9 } else { level });
        self
    }

    /// Sets the command line used to fetch remote paths.
    #[must_use]
    pub fn remote_fetcher(mut self, command: impl Into<String>) -> Self {
        self.remote_fetcher = command.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ZfConfig::default();
        assert_eq!(config.buffer_capacity, 512 * 1024);
        assert_eq!(config.gzip_buffer_size, 512 * 1024);
        assert!(config.compression_level.is_none());
        assert_eq!(config.remote_fetcher, "curl -sfL");
    }

    #[test]
    fn builder_pattern() {
        let config = ZfConfig::new()
            .buffer_capacity(64)
            .compression_level(12)
            .remote_fetcher("wget -qO-");

        assert_eq!(config.buffer_capacity, 64);
        assert_eq!(config.compression_level, Some(9));
        assert_eq!(config.remote_fetcher, "wget -qO-");
    }

    #[test]
    fn zero_capacity_is_raised() {
        let config = ZfConfig::new().buffer_capacity(0);
        assert_eq!(config.buffer_capacity, 1);
    }
}
