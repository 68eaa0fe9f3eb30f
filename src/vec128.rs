//! 128-bit vector value with aliasing lane views
//!
//! [`V128`] is the value every emulated operation consumes and produces: a
//! plain 16-byte container read either as four packed `f32` lanes or as two
//! packed `f64` lanes. Both views address the same storage, so writing
//! through one width and reading through the other reinterprets bits rather
//! than converting numbers. That is the point: the hardware registers these
//! operations mirror behave the same way.
//!
//! Lanes are numbered low-to-high in little-endian byte order. 32-bit lane
//! `i` occupies bytes `4*i..4*i+4`; 64-bit lane `i` occupies bytes
//! `8*i..8*i+8` and therefore aliases 32-bit lanes `2*i` and `2*i+1`.

use std::fmt;

use crate::error::{EspejoError, Result};

/// A 128-bit packed floating-point value.
///
/// Copyable and cheap to pass by value. Equality is bitwise over the 16
/// bytes, not float equality: two values holding the same NaN pattern
/// compare equal, while `+0.0` and `-0.0` lanes compare unequal. Callers
/// that want numeric comparison convert to `[f32; 4]` or `[f64; 2]` first.
///
/// # Examples
///
/// ```
/// use espejo::V128;
///
/// let v = V128::from_f32x4([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(v.to_f32x4(), [1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(v.f32_lane(2), 3.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct V128 {
    bytes: [u8; 16],
}

impl V128 {
    /// The all-zero value, which reads as `0.0` through both lane views.
    pub const ZERO: Self = Self { bytes: [0; 16] };

    /// Constructs a value from 16 bytes in little-endian lane order.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// Returns the 16 bytes in little-endian lane order.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.bytes
    }

    /// Reinterprets a 128-bit integer as a vector value.
    ///
    /// Bit `0..64` of `bits` becomes 64-bit lane 0, bit `64..128` lane 1.
    pub const fn from_bits(bits: u128) -> Self {
        Self::from_le_bytes(bits.to_le_bytes())
    }

    /// Returns the raw 128-bit pattern of this value.
    pub const fn to_bits(self) -> u128 {
        u128::from_le_bytes(self.bytes)
    }

    /// Packs four `f32` lanes, low-to-high.
    ///
    /// # Examples
    ///
    /// ```
    /// use espejo::V128;
    ///
    /// let v = V128::from_f32x4([1.0, -2.5, 0.0, f32::INFINITY]);
    /// assert_eq!(v.f32_lane(1), -2.5);
    /// ```
    pub fn from_f32x4(lanes: [f32; 4]) -> Self {
        let mut out = Self::ZERO;
        for (lane, value) in lanes.into_iter().enumerate() {
            out.set_f32_lane(lane, value);
        }
        out
    }

    /// Unpacks the four `f32` lanes, low-to-high.
    pub fn to_f32x4(self) -> [f32; 4] {
        [
            self.f32_lane(0),
            self.f32_lane(1),
            self.f32_lane(2),
            self.f32_lane(3),
        ]
    }

    /// Packs two `f64` lanes, low-to-high.
    pub fn from_f64x2(lanes: [f64; 2]) -> Self {
        let mut out = Self::ZERO;
        for (lane, value) in lanes.into_iter().enumerate() {
            out.set_f64_lane(lane, value);
        }
        out
    }

    /// Unpacks the two `f64` lanes, low-to-high.
    pub fn to_f64x2(self) -> [f64; 2] {
        [self.f64_lane(0), self.f64_lane(1)]
    }

    /// Reads 32-bit lane `lane` (0-3) as an `f32`.
    ///
    /// # Panics
    ///
    /// Panics if `lane > 3`, like out-of-range slice indexing.
    pub fn f32_lane(self, lane: usize) -> f32 {
        assert!(lane < 4, "f32 lane index out of range: {lane}");
        let at = lane * 4;
        f32::from_le_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
        ])
    }

    /// Reads 64-bit lane `lane` (0-1) as an `f64`.
    ///
    /// 64-bit lane `i` aliases 32-bit lanes `2*i` and `2*i+1`; reading a
    /// lane written through the other view reinterprets its bits.
    ///
    /// # Panics
    ///
    /// Panics if `lane > 1`, like out-of-range slice indexing.
    pub fn f64_lane(self, lane: usize) -> f64 {
        assert!(lane < 2, "f64 lane index out of range: {lane}");
        let at = lane * 8;
        f64::from_le_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
            self.bytes[at + 4],
            self.bytes[at + 5],
            self.bytes[at + 6],
            self.bytes[at + 7],
        ])
    }

    /// Writes `value` into 32-bit lane `lane` (0-3), leaving the other
    /// twelve bytes untouched.
    ///
    /// # Panics
    ///
    /// Panics if `lane > 3`.
    pub fn set_f32_lane(&mut self, lane: usize, value: f32) {
        assert!(lane < 4, "f32 lane index out of range: {lane}");
        let at = lane * 4;
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Writes `value` into 64-bit lane `lane` (0-1), leaving the other
    /// eight bytes untouched.
    ///
    /// # Panics
    ///
    /// Panics if `lane > 1`.
    pub fn set_f64_lane(&mut self, lane: usize, value: f64) {
        assert!(lane < 2, "f64 lane index out of range: {lane}");
        let at = lane * 8;
        self.bytes[at..at + 8].copy_from_slice(&value.to_le_bytes());
    }

    /// Broadcasts one `f32` into all four 32-bit lanes.
    ///
    /// # Examples
    ///
    /// ```
    /// use espejo::V128;
    ///
    /// assert_eq!(V128::splat_f32(7.5).to_f32x4(), [7.5; 4]);
    /// ```
    pub fn splat_f32(value: f32) -> Self {
        Self::from_f32x4([value; 4])
    }

    /// Broadcasts one `f64` into both 64-bit lanes.
    pub fn splat_f64(value: f64) -> Self {
        Self::from_f64x2([value; 2])
    }
}

impl Default for V128 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::UpperHex for V128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034X}", self.to_bits())
    }
}

impl fmt::LowerHex for V128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.to_bits())
    }
}

impl fmt::Debug for V128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl From<[f32; 4]> for V128 {
    fn from(lanes: [f32; 4]) -> Self {
        Self::from_f32x4(lanes)
    }
}

impl From<V128> for [f32; 4] {
    fn from(v: V128) -> Self {
        v.to_f32x4()
    }
}

impl From<[f64; 2]> for V128 {
    fn from(lanes: [f64; 2]) -> Self {
        Self::from_f64x2(lanes)
    }
}

impl From<V128> for [f64; 2] {
    fn from(v: V128) -> Self {
        v.to_f64x2()
    }
}

impl From<u128> for V128 {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<V128> for u128 {
    fn from(v: V128) -> Self {
        v.to_bits()
    }
}

impl TryFrom<&[u8]> for V128 {
    type Error = EspejoError;

    /// Builds a value from exactly 16 bytes in little-endian lane order.
    ///
    /// # Errors
    ///
    /// Returns [`EspejoError::SizeMismatch`] for any other slice length.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 {
            return Err(EspejoError::SizeMismatch {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; 16];
        out.copy_from_slice(bytes);
        Ok(Self::from_le_bytes(out))
    }
}
