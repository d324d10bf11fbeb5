use crate::error::Error;
use crate::fourcc::FourCC;
use crate::parse::Cursor;

/// Shape of the data trailing the 16-byte canonical `fmt ` body.
///
/// Which shape applies is decided purely by the declared `fmt ` chunk size,
/// see [`RiffKind::from_fmt_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiffKind {
    /// Canonical minimal `fmt ` chunk, no trailing extension
    Pcm,
    /// `fmt ` chunk with the 2-byte extension size field, signalling a
    /// compressed / non-PCM codec
    NonPcm,
    /// WAVE_FORMAT_EXTENSIBLE layout with sub-format GUID and channel mask
    Extensible,
    /// Unrecognized `fmt ` chunk size, header should be treated as
    /// non-standard
    Undefined,
}

impl RiffKind {
    /// Map a declared `fmt ` chunk size to the extension shape it implies.
    ///
    /// The rule keys on the size field alone, never on `audio_format` or on
    /// how many bytes actually remain. A file that lies about its size is
    /// misparsed rather than rejected; that is by RIFF convention, see the
    /// crate docs.
    pub const fn from_fmt_size(sub_chunk_1_size: u32) -> Self {
        match sub_chunk_1_size {
            16 => RiffKind::Pcm,
            18 => RiffKind::NonPcm,
            40 => RiffKind::Extensible,
            _ => RiffKind::Undefined,
        }
    }

    /// Number of extension bytes following the canonical `fmt ` body for
    /// this shape
    pub const fn extension_len(self) -> usize {
        match self {
            RiffKind::Pcm | RiffKind::Undefined => 0,
            RiffKind::NonPcm => 14,
            RiffKind::Extensible => 36,
        }
    }
}

/// Decoded format-extension block.
///
/// A tagged sum type constructed once per decode; payload fields exist only
/// for the variant they belong to, so a stale payload under a different tag
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatExtension {
    /// PCM headers carry no extension data
    Pcm,
    /// Non-PCM extension block (14 bytes)
    NonPcm {
        /// Size of the extension as declared in the file
        extension_size: u16,
        /// Tag of the extension sub-chunk (typically `fact`)
        chunk_id: FourCC,
        /// Declared size of the extension sub-chunk
        chunk_size: u32,
        /// Number of sample frames per channel
        sample_length: u32,
    },
    /// WAVE_FORMAT_EXTENSIBLE block (36 bytes)
    Extensible {
        /// Size of the extension as declared in the file
        extension_size: u16,
        /// Valid bits in each sample, at most `bits_per_sample`
        valid_bits_per_sample: u16,
        /// Speaker position mask
        channel_mask: u32,
        /// Sub-format GUID, left uninterpreted
        sub_format: [u8; 16],
        /// Tag of the extension sub-chunk
        chunk_id: FourCC,
        /// Declared size of the extension sub-chunk
        chunk_size: u32,
        /// Number of sample frames per channel
        sample_length: u32,
    },
    /// Unrecognized `fmt ` chunk size; no extension bytes were consumed
    Undefined,
}

impl FormatExtension {
    /// Decode the extension block for the given shape.
    ///
    /// `Pcm` and `Undefined` consume zero bytes. `NonPcm` reads exactly 14
    /// bytes, `Extensible` exactly 36, in fixed field order. Fails with
    /// [`Error::TruncatedInput`] if the input ends early; no partially read
    /// value is returned.
    pub(crate) fn decode(kind: RiffKind, cursor: &mut Cursor<'_>) -> Result<Self, Error> {
        match kind {
            RiffKind::Pcm => Ok(FormatExtension::Pcm),
            RiffKind::Undefined => Ok(FormatExtension::Undefined),
            RiffKind::NonPcm => Ok(FormatExtension::NonPcm {
                extension_size: cursor.read_u16()?,
                chunk_id: cursor.read_fourcc()?,
                chunk_size: cursor.read_u32()?,
                sample_length: cursor.read_u32()?,
            }),
            RiffKind::Extensible => Ok(FormatExtension::Extensible {
                extension_size: cursor.read_u16()?,
                valid_bits_per_sample: cursor.read_u16()?,
                channel_mask: cursor.read_u32()?,
                sub_format: cursor.take()?,
                chunk_id: cursor.read_fourcc()?,
                chunk_size: cursor.read_u32()?,
                sample_length: cursor.read_u32()?,
            }),
        }
    }

    /// The shape this extension was decoded as
    pub const fn kind(&self) -> RiffKind {
        match self {
            FormatExtension::Pcm => RiffKind::Pcm,
            FormatExtension::NonPcm { .. } => RiffKind::NonPcm,
            FormatExtension::Extensible { .. } => RiffKind::Extensible,
            FormatExtension::Undefined => RiffKind::Undefined,
        }
    }

    /// Number of bytes this extension occupied in the file
    pub const fn encoded_len(&self) -> usize {
        self.kind().extension_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_rule_keys_on_size_alone() {
        assert_eq!(RiffKind::from_fmt_size(16), RiffKind::Pcm);
        assert_eq!(RiffKind::from_fmt_size(18), RiffKind::NonPcm);
        assert_eq!(RiffKind::from_fmt_size(40), RiffKind::Extensible);

        for size in [0, 14, 17, 20, 38, 41, 255, u32::MAX] {
            assert_eq!(RiffKind::from_fmt_size(size), RiffKind::Undefined);
        }
    }

    #[test]
    fn pcm_and_undefined_consume_nothing() {
        let bytes = [0xff; 8];

        for kind in [RiffKind::Pcm, RiffKind::Undefined] {
            let mut cursor = Cursor::new(&bytes);
            let ext = FormatExtension::decode(kind, &mut cursor).unwrap();

            assert_eq!(ext.kind(), kind);
            assert_eq!(ext.encoded_len(), 0);
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn decode_non_pcm() {
        let bytes = [
            0x02, 0x00, // extension size
            0x66, 0x61, 0x63, 0x74, // fact
            0x04, 0x00, 0x00, 0x00, // chunk size
            0x10, 0x27, 0x00, 0x00, // sample length
        ];
        let mut cursor = Cursor::new(&bytes);

        let ext = FormatExtension::decode(RiffKind::NonPcm, &mut cursor).unwrap();

        assert_eq!(cursor.position(), 14);
        assert_eq!(
            ext,
            FormatExtension::NonPcm {
                extension_size: 2,
                chunk_id: FourCC(*b"fact"),
                chunk_size: 4,
                sample_length: 10_000,
            }
        );
    }

    #[test]
    fn decode_extensible() {
        let sub_format = [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, //
            0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
        ];
        let mut bytes = vec![
            0x16, 0x00, // extension size
            0x18, 0x00, // valid bits per sample
            0x3f, 0x00, 0x00, 0x00, // channel mask
        ];
        bytes.extend_from_slice(&sub_format);
        bytes.extend_from_slice(&[
            0x66, 0x61, 0x63, 0x74, // fact
            0x04, 0x00, 0x00, 0x00, // chunk size
            0x00, 0xee, 0x02, 0x00, // sample length
        ]);
        let mut cursor = Cursor::new(&bytes);

        let ext = FormatExtension::decode(RiffKind::Extensible, &mut cursor).unwrap();

        assert_eq!(cursor.position(), 36);
        assert_eq!(
            ext,
            FormatExtension::Extensible {
                extension_size: 22,
                valid_bits_per_sample: 24,
                channel_mask: 0x3f,
                sub_format,
                chunk_id: FourCC(*b"fact"),
                chunk_size: 4,
                sample_length: 192_000,
            }
        );
    }

    #[test]
    fn truncated_extension_fails() {
        // 10 of the 14 NonPcm bytes
        let bytes = [0x02, 0x00, 0x66, 0x61, 0x63, 0x74, 0x04, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&bytes);

        assert_eq!(
            FormatExtension::decode(RiffKind::NonPcm, &mut cursor),
            Err(Error::TruncatedInput)
        );
    }
}
