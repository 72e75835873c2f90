use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not};

const MAX_DATA_SIZE: usize = 16;

const FULL_SEGMENT_MASK: u8 = 0xFF;

/// A vector of `N` boolean values, e.g. the result of a component-wise comparison.
///
/// The values are stored as bits in [BoolVector::DATA_SIZE] bytes: value `i` is bit `i % 8` of
/// byte `i / 8`. Bits past `N` in the last byte have no meaning; they never affect equality or
/// [all](BoolVector::all), [none](BoolVector::none) and [any](BoolVector::any).
///
/// `N` must be in the range `1..=128`, other sizes fail to compile.
///
/// # Example
///
/// ```rust
/// use shader_glitz::math::BoolVector;
///
/// let mut a = BoolVector::<10>::new();
///
/// a.set(0, true).set(9, true);
///
/// assert!(a.any());
/// assert!(!a.all());
/// assert_eq!(a.data(), &[0b0000_0001, 0b0000_0010]);
/// assert_eq!(format!("{:?}", a), "BoolVector(10000000 01)");
/// ```
#[derive(Clone, Copy)]
pub struct BoolVector<const N: usize> {
    data: [u8; MAX_DATA_SIZE],
}

impl<const N: usize> BoolVector<N> {
    const VALID_SIZE: () = assert!(
        N != 0 && N <= MAX_DATA_SIZE * 8,
        "BoolVector must have between 1 and 128 elements"
    );

    /// The number of values.
    pub const SIZE: usize = N;

    /// The number of bytes the values are stored in.
    pub const DATA_SIZE: usize = (N + 7) / 8;

    // Mask of the bits of the last byte that hold values.
    const LAST_SEGMENT_MASK: u8 = if N % 8 == 0 {
        FULL_SEGMENT_MASK
    } else {
        (1u8 << (N % 8)) - 1
    };

    /// Creates a vector with all values `false`.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SIZE;

        BoolVector {
            data: [0; MAX_DATA_SIZE],
        }
    }

    /// Creates a vector from its raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is not exactly [BoolVector::DATA_SIZE] bytes long.
    pub fn from_segments(segments: &[u8]) -> Self {
        assert_eq!(
            segments.len(),
            Self::DATA_SIZE,
            "BoolVector<{}> expects {} segments",
            N,
            Self::DATA_SIZE
        );

        let mut vector = BoolVector::new();

        vector.data[..Self::DATA_SIZE].copy_from_slice(segments);

        vector
    }

    /// Creates a vector with all values set to `value`.
    pub fn splat(value: bool) -> Self {
        let mut vector = BoolVector::new();

        if value {
            for segment in vector.data_mut() {
                *segment = FULL_SEGMENT_MASK;
            }
        }

        vector
    }

    /// The raw bytes of this vector.
    pub fn data(&self) -> &[u8] {
        &self.data[..Self::DATA_SIZE]
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data[..Self::DATA_SIZE]
    }

    /// Returns the value at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not smaller than `N`.
    pub fn get(&self, i: usize) -> bool {
        assert!(i < N, "index {} out of bounds for BoolVector<{}>", i, N);

        (self.data[i / 8] >> (i % 8)) & 0x01 != 0
    }

    /// Sets the value at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not smaller than `N`.
    pub fn set(&mut self, i: usize, value: bool) -> &mut Self {
        assert!(i < N, "index {} out of bounds for BoolVector<{}>", i, N);

        let bit = 1u8 << (i % 8);

        if value {
            self.data[i / 8] |= bit;
        } else {
            self.data[i / 8] &= !bit;
        }

        self
    }

    /// Whether all values are `true`.
    pub fn all(&self) -> bool {
        let full = N / 8;

        if self.data[..full].iter().any(|s| *s != FULL_SEGMENT_MASK) {
            return false;
        }

        N % 8 == 0 || self.data[full] & Self::LAST_SEGMENT_MASK == Self::LAST_SEGMENT_MASK
    }

    /// Whether no value is `true`.
    pub fn none(&self) -> bool {
        let full = N / 8;

        if self.data[..full].iter().any(|s| *s != 0) {
            return false;
        }

        N % 8 == 0 || self.data[full] & Self::LAST_SEGMENT_MASK == 0
    }

    /// Whether any value is `true`.
    pub fn any(&self) -> bool {
        !self.none()
    }

    fn zip_assign<F>(&mut self, other: &Self, f: F)
    where
        F: Fn(u8, u8) -> u8,
    {
        for (a, b) in self.data_mut().iter_mut().zip(other.data()) {
            *a = f(*a, *b);
        }
    }
}

impl<const N: usize> Default for BoolVector<N> {
    fn default() -> Self {
        BoolVector::new()
    }
}

impl<const N: usize> PartialEq for BoolVector<N> {
    fn eq(&self, other: &Self) -> bool {
        let full = N / 8;

        if self.data[..full] != other.data[..full] {
            return false;
        }

        N % 8 == 0
            || self.data[full] & Self::LAST_SEGMENT_MASK
                == other.data[full] & Self::LAST_SEGMENT_MASK
    }
}

impl<const N: usize> Eq for BoolVector<N> {}

impl<const N: usize> Index<usize> for BoolVector<N> {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        if self.get(i) {
            &true
        } else {
            &false
        }
    }
}

impl<const N: usize> Not for BoolVector<N> {
    type Output = Self;

    fn not(mut self) -> Self {
        for segment in self.data_mut() {
            *segment = !*segment;
        }

        self
    }
}

impl<const N: usize> BitAndAssign for BoolVector<N> {
    fn bitand_assign(&mut self, other: Self) {
        self.zip_assign(&other, |a, b| a & b);
    }
}

impl<const N: usize> BitAnd for BoolVector<N> {
    type Output = Self;

    fn bitand(mut self, other: Self) -> Self {
        self &= other;

        self
    }
}

impl<const N: usize> BitOrAssign for BoolVector<N> {
    fn bitor_assign(&mut self, other: Self) {
        self.zip_assign(&other, |a, b| a | b);
    }
}

impl<const N: usize> BitOr for BoolVector<N> {
    type Output = Self;

    fn bitor(mut self, other: Self) -> Self {
        self |= other;

        self
    }
}

impl<const N: usize> BitXorAssign for BoolVector<N> {
    fn bitxor_assign(&mut self, other: Self) {
        self.zip_assign(&other, |a, b| a ^ b);
    }
}

impl<const N: usize> BitXor for BoolVector<N> {
    type Output = Self;

    fn bitxor(mut self, other: Self) -> Self {
        self ^= other;

        self
    }
}

impl<const N: usize> fmt::Debug for BoolVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("BoolVector(")?;

        for i in 0..N {
            if i != 0 && i % 8 == 0 {
                f.write_str(" ")?;
            }

            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }

        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(BoolVector::<1>::DATA_SIZE, 1);
        assert_eq!(BoolVector::<8>::DATA_SIZE, 1);
        assert_eq!(BoolVector::<9>::DATA_SIZE, 2);
        assert_eq!(BoolVector::<19>::DATA_SIZE, 3);
        assert_eq!(BoolVector::<19>::SIZE, 19);
    }

    #[test]
    fn test_construct() {
        assert!(BoolVector::<19>::new().none());
        assert_eq!(
            BoolVector::<19>::from_segments(&[0xa5, 0x5f, 0x07]).data(),
            &[0xa5, 0x5f, 0x07]
        );
        assert_eq!(BoolVector::<19>::splat(true).data(), &[0xff, 0xff, 0xff]);
        assert_eq!(BoolVector::<19>::splat(false).data(), &[0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn test_from_segments_wrong_length() {
        BoolVector::<19>::from_segments(&[0xa5, 0x5f]);
    }

    #[test]
    fn test_get_set() {
        let mut a = BoolVector::<19>::from_segments(&[0x08, 0x03, 0x04]);

        assert!(!a.get(0));
        assert!(a.get(3));
        assert!(a[8]);
        assert!(a[9]);
        assert!(a[18]);
        assert!(!a[17]);

        a.set(15, true).set(3, false);

        assert_eq!(a.data(), &[0x00, 0x83, 0x04]);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        BoolVector::<4>::new().get(4);
    }

    #[test]
    fn test_compare_ignores_unused_bits() {
        let a = BoolVector::<19>::from_segments(&[0xa5, 0x5f, 0x07]);
        let b = BoolVector::<19>::from_segments(&[0xa5, 0x5f, 0xff]);
        let c = BoolVector::<19>::from_segments(&[0xa5, 0x5f, 0x03]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_all() {
        assert!(BoolVector::<19>::from_segments(&[0xff, 0xff, 0x07]).all());
        assert!(BoolVector::<19>::from_segments(&[0xff, 0xff, 0xff]).all());
        assert!(!BoolVector::<19>::from_segments(&[0xff, 0xff, 0x04]).all());
        assert!(!BoolVector::<19>::from_segments(&[0xff, 0xfe, 0x07]).all());
        assert!(BoolVector::<16>::splat(true).all());
    }

    #[test]
    fn test_none_any() {
        assert!(BoolVector::<19>::from_segments(&[0x00, 0x00, 0xf8]).none());
        assert!(!BoolVector::<19>::from_segments(&[0x00, 0x00, 0x04]).none());
        assert!(BoolVector::<19>::from_segments(&[0x00, 0x01, 0x00]).any());
        assert!(!BoolVector::<19>::from_segments(&[0x00, 0x00, 0xf8]).any());
    }

    #[test]
    fn test_bitwise() {
        let a = BoolVector::<19>::from_segments(&[0xa5, 0x5f, 0x03]);
        let b = BoolVector::<19>::from_segments(&[0x37, 0xf9, 0x06]);

        assert_eq!((a & b).data(), &[0x25, 0x59, 0x02]);
        assert_eq!((a | b).data(), &[0xb7, 0xff, 0x07]);
        assert_eq!((a ^ b).data(), &[0x92, 0xa6, 0x05]);
        assert_eq!(!a, BoolVector::<19>::from_segments(&[0x5a, 0xa0, 0x04]));

        let mut c = a;

        c &= b;
        c |= BoolVector::from_segments(&[0x00, 0x00, 0x04]);
        c ^= BoolVector::splat(true);

        assert_eq!(c, BoolVector::<19>::from_segments(&[0xda, 0xa6, 0x01]));
    }

    #[test]
    fn test_debug() {
        let a = BoolVector::<19>::from_segments(&[0x25, 0x5f, 0x02]);

        assert_eq!(format!("{:?}", a), "BoolVector(10100100 11111010 010)");
    }
}
