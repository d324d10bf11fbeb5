use crate::error::Error;
use crate::extension::{FormatExtension, RiffKind};
use crate::fourcc::FourCC;
use crate::parse::Cursor;

/// Byte length of the RIFF/WAVE/`fmt ` preamble plus the canonical 16-byte
/// `fmt ` body and the trailing `data` preamble, i.e. the minimal header.
pub const MIN_HEADER_LEN: usize = 44;

/// Decoded header region of a RIFF/WAVE file.
///
/// All fields are public and exactly mirror the on-disk layout; the decode
/// performs no chunk-ID validation, so callers wanting strict conformance
/// use [`WaveHeader::validate`] or [`WaveHeader::from_bytes_strict`].
///
/// for more information on the layout see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    /// Outer container tag, `RIFF` in a conformant file
    pub chunk_id: FourCC,
    /// Declared size of everything following this field
    pub chunk_size: u32,
    /// Form tag, `WAVE` in a conformant file
    pub format: FourCC,
    /// First sub-chunk tag, `fmt ` in a conformant file
    pub sub_chunk_1_id: FourCC,
    /// Declared size of the `fmt ` chunk; decides the extension shape
    pub sub_chunk_1_size: u32,
    /// Audio format code, 1 for uncompressed PCM
    pub audio_format: u16,
    /// Number of interleaved audio channels
    pub num_channels: u16,
    /// Sample rate in Hz, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate: u32,
    /// Bytes of audio data per second
    pub byte_rate: u32,
    /// Bytes per sample frame across all channels
    pub block_align: u16,
    /// Bit depth of each sample, typical values are `16`, `24`, or `32`
    pub bits_per_sample: u16,
    /// Extension block following the canonical `fmt ` body
    pub extended_data: FormatExtension,
    /// Second sub-chunk tag, `data` in a conformant file
    pub sub_chunk_2_id: FourCC,
    /// Declared size of the audio payload
    pub sub_chunk_2_size: u32,
}

impl WaveHeader {
    /// Decode a header from the leading bytes of a WAV file.
    ///
    /// Performs a single linear pass of fixed-width little-endian reads: the
    /// RIFF/WAVE/`fmt ` preamble, the nine canonical `fmt ` body fields, the
    /// extension block implied by `sub_chunk_1_size` (see
    /// [`RiffKind::from_fmt_size`]) and the `data` preamble. Decoding is
    /// all-or-nothing; a truncated input yields [`Error::TruncatedInput`]
    /// and no header.
    ///
    /// ```
    /// use wavhead::{RiffKind, WaveHeader};
    ///
    /// let bytes = [
    ///     0x52, 0x49, 0x46, 0x46, // RIFF
    ///     0x24, 0x00, 0x00, 0x00, // chunk size
    ///     0x57, 0x41, 0x56, 0x45, // WAVE
    ///     0x66, 0x6d, 0x74, 0x20, // fmt_
    ///     0x10, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, // audio format
    ///     0x02, 0x00, // num channels
    ///     0x44, 0xac, 0x00, 0x00, // sample rate
    ///     0x10, 0xb1, 0x02, 0x00, // byte rate
    ///     0x04, 0x00, // block align
    ///     0x10, 0x00, // bits per sample
    ///     0x64, 0x61, 0x74, 0x61, // data
    ///     0x00, 0x00, 0x00, 0x00, // chunk size
    /// ];
    ///
    /// let header = WaveHeader::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(header.num_channels, 2);
    /// assert_eq!(header.sample_rate, 44_100);
    /// assert_eq!(header.extended_data.kind(), RiffKind::Pcm);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = Cursor::new(bytes);
        Self::decode(&mut cursor)
    }

    /// Decode and then [`validate`](WaveHeader::validate) in one step.
    pub fn from_bytes_strict(bytes: &[u8]) -> Result<Self, Error> {
        let header = Self::from_bytes(bytes)?;
        header.validate()?;
        Ok(header)
    }

    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, Error> {
        let chunk_id = cursor.read_fourcc()?;
        let chunk_size = cursor.read_u32()?;
        let format = cursor.read_fourcc()?;
        let sub_chunk_1_id = cursor.read_fourcc()?;
        let sub_chunk_1_size = cursor.read_u32()?;

        let audio_format = cursor.read_u16()?;
        let num_channels = cursor.read_u16()?;
        let sample_rate = cursor.read_u32()?;
        let byte_rate = cursor.read_u32()?;
        let block_align = cursor.read_u16()?;
        let bits_per_sample = cursor.read_u16()?;

        // The declared fmt size alone decides the extension shape; neither
        // audio_format nor the remaining byte count participates.
        let kind = RiffKind::from_fmt_size(sub_chunk_1_size);
        let extended_data = FormatExtension::decode(kind, cursor)?;

        let sub_chunk_2_id = cursor.read_fourcc()?;
        let sub_chunk_2_size = cursor.read_u32()?;

        Ok(WaveHeader {
            chunk_id,
            chunk_size,
            format,
            sub_chunk_1_id,
            sub_chunk_1_size,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            extended_data,
            sub_chunk_2_id,
            sub_chunk_2_size,
        })
    }

    /// Check the four chunk tags against their conventional values.
    ///
    /// [`from_bytes`](WaveHeader::from_bytes) deliberately skips this, since
    /// plenty of real-world files carry unusual tags yet decode fine. The
    /// first mismatch wins, checked in file order.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_id != FourCC::RIFF {
            return Err(Error::NoRiffChunkFound);
        }
        if self.format != FourCC::WAVE {
            return Err(Error::NoWaveTagFound);
        }
        if self.sub_chunk_1_id != FourCC::FMT {
            return Err(Error::NoFmtChunkFound);
        }
        if self.sub_chunk_2_id != FourCC::DATA {
            return Err(Error::NoDataChunkFound);
        }
        Ok(())
    }

    /// Number of bytes a successful decode of this header consumed: 44 for
    /// PCM and undefined shapes, 58 for non-PCM, 80 for extensible.
    pub const fn encoded_len(&self) -> usize {
        MIN_HEADER_LEN + self.extended_data.encoded_len()
    }
}
