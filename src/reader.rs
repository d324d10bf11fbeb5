//! Reader-based decode entry points.
//!
//! The header region is at most 80 bytes, so both the sync and async paths
//! read into a fixed stack buffer and hand the result to the slice decoder.
//! On success the reader has advanced by exactly
//! [`WaveHeader::encoded_len`] bytes; on failure its position is
//! unspecified and callers must not resume reading from it.

use crate::error::{Error, ReadError};
use crate::extension::RiffKind;
use crate::header::WaveHeader;

/// Fixed reads before the extension block: RIFF/WAVE/fmt_ preamble plus the
/// canonical fmt body.
const PREAMBLE_LEN: usize = 36;

/// Largest possible header region: preamble, extensible payload, data
/// preamble.
const MAX_HEADER_LEN: usize = 80;

/// Offset of the declared fmt chunk size within the preamble.
const FMT_SIZE_OFFSET: usize = 16;

fn fmt_size(preamble: &[u8]) -> u32 {
    u32::from_le_bytes([
        preamble[FMT_SIZE_OFFSET],
        preamble[FMT_SIZE_OFFSET + 1],
        preamble[FMT_SIZE_OFFSET + 2],
        preamble[FMT_SIZE_OFFSET + 3],
    ])
}

impl WaveHeader {
    /// Decode a header from an [`embedded_io::Read`] source.
    ///
    /// Reads the fixed 36-byte preamble first, then exactly the extension
    /// and `data`-preamble bytes the declared fmt size implies. A source
    /// that runs dry mid-field fails with
    /// [`ReadError::Parser`]`(`[`Error::TruncatedInput`]`)`; transport
    /// failures surface as [`ReadError::Reader`].
    pub fn from_reader<R: embedded_io::Read>(reader: &mut R) -> Result<Self, ReadError<R::Error>> {
        let mut buf = [0; MAX_HEADER_LEN];

        read_exact(reader, &mut buf[..PREAMBLE_LEN])?;

        let kind = RiffKind::from_fmt_size(fmt_size(&buf));
        let rest = kind.extension_len() + 8;
        read_exact(reader, &mut buf[PREAMBLE_LEN..PREAMBLE_LEN + rest])?;

        Ok(Self::from_bytes(&buf[..PREAMBLE_LEN + rest])?)
    }
}

fn read_exact<R: embedded_io::Read>(
    reader: &mut R,
    buf: &mut [u8],
) -> Result<(), ReadError<R::Error>> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(embedded_io::ReadExactError::UnexpectedEof) => {
            Err(ReadError::Parser(Error::TruncatedInput))
        }
        Err(embedded_io::ReadExactError::Other(e)) => Err(ReadError::Reader(e)),
    }
}

#[cfg(feature = "std")]
impl WaveHeader {
    /// Decode a header straight from a file path.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ReadError<FileError>> {
        let file = std::fs::File::open(path).map_err(|e| ReadError::Reader(FileError(e)))?;
        Self::from_reader(&mut File(file))
    }
}

#[cfg(feature = "std")]
mod file_wrapper {
    use std::fs;
    use std::io::Read;

    /// Wrapper adapting [`std::fs::File`] to [`embedded_io::Read`]
    pub struct File(pub fs::File);

    /// Error produced by the [`File`] wrapper
    #[derive(Debug)]
    pub struct FileError(pub std::io::Error);

    impl embedded_io::Error for FileError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    impl embedded_io::ErrorType for File {
        type Error = FileError;
    }

    impl embedded_io::Read for File {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            self.0.read(buf).map_err(FileError)
        }
    }
}

#[cfg(feature = "std")]
pub use file_wrapper::{File, FileError};

/// Total byte length of a file, for callers cross-checking the declared
/// `chunk_size`/`sub_chunk_2_size` fields against reality. The decoder
/// itself never does this.
#[cfg(feature = "std")]
pub fn file_size(path: impl AsRef<std::path::Path>) -> std::io::Result<u64> {
    std::fs::metadata(path).map(|m| m.len())
}

//-----------------------------------
// MARK: Async

/// Async versions of the reader entry points
pub mod asynch {
    use super::*;

    /// Decode a header from an [`embedded_io_async::Read`] source.
    ///
    /// Same contract as [`WaveHeader::from_reader`], awaiting each read.
    pub async fn from_reader<R: embedded_io_async::Read>(
        reader: &mut R,
    ) -> Result<WaveHeader, ReadError<R::Error>> {
        let mut buf = [0; MAX_HEADER_LEN];

        read_exact(reader, &mut buf[..PREAMBLE_LEN]).await?;

        let kind = RiffKind::from_fmt_size(fmt_size(&buf));
        let rest = kind.extension_len() + 8;
        read_exact(reader, &mut buf[PREAMBLE_LEN..PREAMBLE_LEN + rest]).await?;

        Ok(WaveHeader::from_bytes(&buf[..PREAMBLE_LEN + rest])?)
    }

    async fn read_exact<R: embedded_io_async::Read>(
        reader: &mut R,
        buf: &mut [u8],
    ) -> Result<(), ReadError<R::Error>> {
        match reader.read_exact(buf).await {
            Ok(()) => Ok(()),
            Err(embedded_io_async::ReadExactError::UnexpectedEof) => {
                Err(ReadError::Parser(Error::TruncatedInput))
            }
            Err(embedded_io_async::ReadExactError::Other(e)) => Err(ReadError::Reader(e)),
        }
    }

    /// Decode a header straight from a file path.
    #[cfg(feature = "std")]
    pub async fn from_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<WaveHeader, ReadError<AsyncFileError>> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| ReadError::Reader(AsyncFileError(e)))?;
        from_reader(&mut AsyncFile(file)).await
    }

    /// Wrapper adapting [`tokio::fs::File`] to [`embedded_io_async::Read`]
    #[cfg(feature = "std")]
    pub struct AsyncFile(pub tokio::fs::File);

    /// Error produced by the [`AsyncFile`] wrapper
    #[cfg(feature = "std")]
    #[derive(Debug)]
    pub struct AsyncFileError(pub std::io::Error);

    #[cfg(feature = "std")]
    impl embedded_io::Error for AsyncFileError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    #[cfg(feature = "std")]
    impl embedded_io::ErrorType for AsyncFile {
        type Error = AsyncFileError;
    }

    #[cfg(feature = "std")]
    impl embedded_io_async::Read for AsyncFile {
        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            use tokio::io::AsyncReadExt;
            self.0.read(buf).await.map_err(AsyncFileError)
        }
    }
}
