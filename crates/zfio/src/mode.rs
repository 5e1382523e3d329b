//! Open mode parsing.

use crate::error::{ZfError, ZfResult};

/// What a stream was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read from an existing resource.
    Read,
    /// Create or truncate, then write.
    Write,
    /// Write after any existing content.
    Append,
}

impl Access {
    /// Whether bytes flow towards the backend.
    #[must_use]
    pub const fn is_write(self) -> bool {
        !matches!(self, Self::Read)
    }
}

/// A parsed effective mode.
///
/// The first character selects the access: `r` reads, `a` appends and any
/// other character writes. Within the flags that follow, a digit sets the
/// compression level; `b` and `+` are accepted and ignored. Parsing stops
/// at the first `.` so a suffix the resolver did not strip never leaks a
/// level digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    access: Access,
    level: Option<u32>,
}

impl Mode {
    /// Parses an effective mode string.
    ///
    /// # Errors
    ///
    /// Returns [`ZfError::Configuration`] if the mode is empty.
    pub fn parse(mode: &str) -> ZfResult<Self> {
        let flags = mode.split('.').next().unwrap_or_default();
        let mut chars = flags.chars();
        let access = match chars.next() {
            Some('r') => Access::Read,
            Some('a') => Access::Append,
            Some(_) => Access::Write,
            None => {
                return Err(ZfError::Configuration(format!(
                    "mode {mode:?} has no access indicator"
                )))
            }
        };
        let level = chars.filter_map(|c| c.to_digit(10)).last();
        Ok(Self { access, level })
    }

    /// The access this mode asks for.
    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    /// Compression level digit, if the mode carried one.
    #[must_use]
    pub const fn level(&self) -> Option<u32> {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_indicators() {
        assert_eq!(Mode::parse("r").unwrap().access(), Access::Read);
        assert_eq!(Mode::parse("rb").unwrap().access(), Access::Read);
        assert_eq!(Mode::parse("w").unwrap().access(), Access::Write);
        assert_eq!(Mode::parse("w+").unwrap().access(), Access::Write);
        assert_eq!(Mode::parse("a").unwrap().access(), Access::Append);
        assert_eq!(Mode::parse("x").unwrap().access(), Access::Write);
    }

    #[test]
    fn level_digit() {
        assert_eq!(Mode::parse("wb9").unwrap().level(), Some(9));
        assert_eq!(Mode::parse("w1").unwrap().level(), Some(1));
        assert_eq!(Mode::parse("w").unwrap().level(), None);
    }

    #[test]
    fn suffix_digits_are_ignored() {
        let mode = Mode::parse("w.bz2").unwrap();
        assert_eq!(mode.access(), Access::Write);
        assert_eq!(mode.level(), None);
    }

    #[test]
    fn empty_mode_fails() {
        assert!(matches!(Mode::parse(""), Err(ZfError::Configuration(_))));
        assert!(matches!(Mode::parse(".gz"), Err(ZfError::Configuration(_))));
    }

    #[test]
    fn write_and_append_are_writes() {
        assert!(Access::Write.is_write());
        assert!(Access::Append.is_write());
        assert!(!Access::Read.is_write());
    }
}
