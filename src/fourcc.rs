use core::fmt;

/// Four-byte chunk tag as stored in a RIFF file.
///
/// Tags are usually printable ASCII (`"RIFF"`, `"fmt "`) but nothing
/// guarantees it, so the raw bytes are kept as-is and only escaped for
/// display. Equality is plain byte equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// The outer RIFF container tag
    pub const RIFF: FourCC = FourCC(*b"RIFF");
    /// The WAVE form tag
    pub const WAVE: FourCC = FourCC(*b"WAVE");
    /// The format chunk tag (note the trailing space)
    pub const FMT: FourCC = FourCC(*b"fmt ");
    /// The data chunk tag
    pub const DATA: FourCC = FourCC(*b"data");

    /// Raw tag bytes
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl PartialEq<[u8; 4]> for FourCC {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&[u8; 4]> for FourCC {
    fn eq(&self, other: &&[u8; 4]) -> bool {
        &self.0 == *other
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{}", byte.escape_ascii())?;
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC(b\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_against_byte_literals() {
        assert_eq!(FourCC::RIFF, *b"RIFF");
        assert_eq!(FourCC::FMT, b"fmt ");
        assert_ne!(FourCC::DATA, FourCC::WAVE);
    }

    #[test]
    fn display_escapes_non_ascii_tags() {
        assert_eq!(format!("{}", FourCC::WAVE), "WAVE");
        assert_eq!(format!("{}", FourCC([0x66, 0x6d, 0x74, 0x00])), "fmt\\x00");
        assert_eq!(format!("{:?}", FourCC::RIFF), "FourCC(b\"RIFF\")");
    }
}
