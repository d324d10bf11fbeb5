//! Byte-order correction for decoded header fields.
//!
//! The decoder always reads fields as stored on disk, i.e. little-endian.
//! Callers on big-endian hosts can run individual fields through
//! [`SwapEndian`] after decoding; the core itself never does.

/// Reverse the byte representation of a fixed-width value.
pub trait SwapEndian {
    /// Returns the value with its bytes in reverse order
    fn swap_endian(self) -> Self;
}

macro_rules! impl_swap_endian_int {
    ($($ty:ty),*) => {
        $(
            impl SwapEndian for $ty {
                fn swap_endian(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_swap_endian_int!(u16, i16, u32, i32, u64, i64);

impl SwapEndian for f32 {
    fn swap_endian(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl SwapEndian for f64 {
    fn swap_endian(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Free-function form of [`SwapEndian::swap_endian`]
pub fn swap_endian<T: SwapEndian>(value: T) -> T {
    value.swap_endian()
}
