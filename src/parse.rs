use crate::error::Error;
use crate::fourcc::FourCC;

/// Cursor over a byte slice with fixed-width little-endian reads.
///
/// Every multi-byte integer is assembled explicitly from its bytes, so the
/// decode owns endianness instead of relying on a memory overlay. A short
/// read fails with [`Error::TruncatedInput`] and consumes nothing.
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, pos: 0 }
    }

    /// Number of bytes consumed so far
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let end = self.pos + N;
        if end > self.bytes.len() {
            return Err(Error::TruncatedInput);
        }
        let bytes = self.bytes[self.pos..end]
            .try_into()
            .map_err(|_| Error::TruncatedInput)?;
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, Error> {
        self.take().map(u16::from_le_bytes)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, Error> {
        self.take().map(u32::from_le_bytes)
    }

    pub(crate) fn read_fourcc(&mut self) -> Result<FourCC, Error> {
        self.take().map(FourCC)
    }
}
