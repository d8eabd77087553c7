use thiserror::Error;

/// The closed set of failures a scanning call can report.
///
/// Every engine operation returns one of these as a value; malformed input
/// never panics. The two end tags differ by source kind: in-memory ranges
/// report [`EndOfRange`] when exhausted, stream sources (stdin, byte
/// readers) report [`EndOfStream`].
///
/// [`EndOfRange`]: ScanError::EndOfRange
/// [`EndOfStream`]: ScanError::EndOfStream
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Unmatched brace, stray `}`, unknown specifier character, or a field
    /// count that does not agree with the arguments.
    #[error("invalid format string")]
    InvalidFormatString,
    /// The input did not contain a value of the requested type, or did not
    /// match a literal in the format string.
    #[error("invalid scanned value")]
    InvalidScannedValue,
    /// A stream source reached end-of-file.
    #[error("end of stream")]
    EndOfStream,
    /// An in-memory range has no characters left.
    #[error("end of range")]
    EndOfRange,
    /// A byte stream produced a sequence that is not UTF-8.
    #[error("invalid encoding in source")]
    InvalidEncoding,
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("source error: {0}")]
    Io(std::io::ErrorKind),
}

impl ScanError {
    /// Returns `true` for either end tag.
    #[must_use]
    pub fn is_eof(self) -> bool {
        matches!(self, Self::EndOfStream | Self::EndOfRange)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.kind())
    }
}
