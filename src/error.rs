/// Error type for different decoding failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input ended before the current field or sub-block was fully read
    TruncatedInput,
    /// No RIFF chunk tag found (strict validation only)
    NoRiffChunkFound,
    /// No WAVE tag found (strict validation only)
    NoWaveTagFound,
    /// No fmt/header chunk tag found (strict validation only)
    NoFmtChunkFound,
    /// No data chunk tag found (strict validation only)
    NoDataChunkFound,
}

/// Error type for reader-based decoding
#[cfg(feature = "io")]
#[derive(Debug, PartialEq)]
pub enum ReadError<E> {
    /// Error from the underlying reader
    Reader(E),
    /// Error from the decoder
    Parser(Error),
}

#[cfg(feature = "io")]
impl<E> From<Error> for ReadError<E> {
    fn from(e: Error) -> Self {
        ReadError::Parser(e)
    }
}
