//! Basic `no_std` library for decoding the header region of RIFF/WAVE files.
//!
//! The decoder reads the `RIFF`/`WAVE`/`fmt ` preamble, the canonical 16-byte
//! `fmt ` body, whatever format-extension block the declared `fmt ` chunk
//! size implies, and the leading `data` chunk fields. It stops there: audio
//! samples are never touched, and chunks are expected in this canonical
//! order.
//!
//! Decoding a header from bytes:
//! ```
//! use wavhead::{RiffKind, WaveHeader};
//!
//! let bytes = [
//!     0x52, 0x49, 0x46, 0x46, // RIFF
//!     0x24, 0x00, 0x00, 0x00, // chunk size
//!     0x57, 0x41, 0x56, 0x45, // WAVE
//!     0x66, 0x6d, 0x74, 0x20, // fmt_
//!     0x10, 0x00, 0x00, 0x00, // chunk size
//!     0x01, 0x00, // audio format
//!     0x02, 0x00, // num channels
//!     0x80, 0xbb, 0x00, 0x00, // sample rate
//!     0x00, 0xee, 0x02, 0x00, // byte rate
//!     0x04, 0x00, // block align
//!     0x10, 0x00, // bits per sample
//!     0x64, 0x61, 0x74, 0x61, // data
//!     0x00, 0x00, 0x00, 0x00, // chunk size
//! ];
//!
//! let header = WaveHeader::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(header.num_channels, 2);
//! assert_eq!(header.sample_rate, 48_000);
//! assert_eq!(header.bits_per_sample, 16);
//! assert_eq!(header.extended_data.kind(), RiffKind::Pcm);
//! ```
//!
//! The chunk tags are decoded but not checked, since plenty of real-world
//! files bend the rules. Strict callers opt in:
//! ```
//! use wavhead::{FourCC, WaveHeader};
//! # let bytes = [
//! #     0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45,
//! #     0x66, 0x6d, 0x74, 0x20, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00,
//! #     0x80, 0xbb, 0x00, 0x00, 0x00, 0xee, 0x02, 0x00, 0x04, 0x00, 0x10, 0x00,
//! #     0x64, 0x61, 0x74, 0x61, 0x00, 0x00, 0x00, 0x00,
//! # ];
//!
//! let header = WaveHeader::from_bytes_strict(&bytes).unwrap();
//! assert_eq!(header.chunk_id, FourCC::RIFF);
//! ```
//!
//! Decoding from a reader (requires the "io" feature):
//! ```
//! # #[cfg(feature = "io")]
//! # {
//! use wavhead::WaveHeader;
//!
//! # let bytes = [
//! #     0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45,
//! #     0x66, 0x6d, 0x74, 0x20, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x02, 0x00,
//! #     0x80, 0xbb, 0x00, 0x00, 0x00, 0xee, 0x02, 0x00, 0x04, 0x00, 0x10, 0x00,
//! #     0x64, 0x61, 0x74, 0x61, 0x00, 0x00, 0x00, 0x00,
//! # ];
//! let mut reader: &[u8] = &bytes;
//! let header = WaveHeader::from_reader(&mut reader).unwrap();
//!
//! assert_eq!(header.sample_rate, 48_000);
//! # }
//! ```
//!
//! All multi-byte fields are read as stored in the file, little-endian;
//! callers on big-endian hosts can correct individual fields with the
//! [`endian`] module after decoding.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]

pub mod endian;
mod error;
mod extension;
mod fourcc;
mod header;
mod parse;

pub use error::Error;
pub use extension::{FormatExtension, RiffKind};
pub use fourcc::FourCC;
pub use header::{MIN_HEADER_LEN, WaveHeader};

#[cfg(feature = "io")]
mod reader;
#[cfg(feature = "io")]
pub use error::ReadError;
#[cfg(feature = "io")]
pub use reader::asynch;
#[cfg(feature = "std")]
pub use reader::{File, FileError, file_size};
