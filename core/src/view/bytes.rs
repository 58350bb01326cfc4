//! Endian-aware integer access on byte views.
//!
//! Fixed-width accessors come in `_be`, `_le` and `_ne` (native) flavors.
//! The variable-width `int_*_at` / `long_*_at` accessors read or write the
//! low `byte_count` bytes of a `u32` (1..=4) or `u64` (1..=8).

use core::ops::{ShlAssign, ShrAssign};

use super::{ArrayRef, View, ViewMut, check_range};

fn read_array<const N: usize>(bytes: &[u8], pos: usize) -> [u8; N] {
    check_range(bytes.len(), pos, N);
    let mut out = [0; N];
    out.copy_from_slice(&bytes[pos..pos + N]);
    out
}

fn read_be(bytes: &[u8], pos: usize, byte_count: usize) -> u64 {
    check_range(bytes.len(), pos, byte_count);
    bytes[pos..pos + byte_count]
        .iter()
        .fold(0, |acc, &b| acc << 8 | u64::from(b))
}

fn read_le(bytes: &[u8], pos: usize, byte_count: usize) -> u64 {
    check_range(bytes.len(), pos, byte_count);
    bytes[pos..pos + byte_count]
        .iter()
        .rev()
        .fold(0, |acc, &b| acc << 8 | u64::from(b))
}

fn write_be(bytes: &mut [u8], pos: usize, value: u64, byte_count: usize) {
    check_range(bytes.len(), pos, byte_count);
    bytes[pos..pos + byte_count].copy_from_slice(&value.to_be_bytes()[8 - byte_count..]);
}

fn write_le(bytes: &mut [u8], pos: usize, value: u64, byte_count: usize) {
    check_range(bytes.len(), pos, byte_count);
    bytes[pos..pos + byte_count].copy_from_slice(&value.to_le_bytes()[..byte_count]);
}

#[inline(always)]
pub(crate) fn check_int_width(byte_count: usize) {
    debug_assert!((1..=4).contains(&byte_count), "byte count {byte_count} not in 1..=4");
}

#[inline(always)]
pub(crate) fn check_long_width(byte_count: usize) {
    debug_assert!((1..=8).contains(&byte_count), "byte count {byte_count} not in 1..=8");
}

macro_rules! fixed_width_reads {
    ($($be:ident, $le:ident, $ne:ident => $ty:ty;)*) => {
        $(
            fn $be(&self, pos: usize) -> $ty {
                <$ty>::from_be_bytes(read_array(self.as_slice(), pos))
            }

            fn $le(&self, pos: usize) -> $ty {
                <$ty>::from_le_bytes(read_array(self.as_slice(), pos))
            }

            fn $ne(&self, pos: usize) -> $ty {
                <$ty>::from_ne_bytes(read_array(self.as_slice(), pos))
            }
        )*
    };
}

macro_rules! fixed_width_writes {
    ($($be:ident, $le:ident, $ne:ident => $ty:ty;)*) => {
        $(
            fn $be(&mut self, pos: usize, value: $ty) {
                self.copy(pos, &value.to_be_bytes());
            }

            fn $le(&mut self, pos: usize, value: $ty) {
                self.copy(pos, &value.to_le_bytes());
            }

            fn $ne(&mut self, pos: usize, value: $ty) {
                self.copy(pos, &value.to_ne_bytes());
            }
        )*
    };
}

/// Integer reads from a byte view.
pub trait ByteView: View<u8> {
    fn int8_at(&self, pos: usize) -> u8 {
        *self.at(pos)
    }

    fixed_width_reads! {
        int16_be_at, int16_le_at, int16_ne_at => u16;
        int32_be_at, int32_le_at, int32_ne_at => u32;
        int64_be_at, int64_le_at, int64_ne_at => u64;
    }

    /// Big-endian unsigned integer made of `byte_count` (1..=4) bytes.
    fn int_be_at(&self, pos: usize, byte_count: usize) -> u32 {
        check_int_width(byte_count);
        read_be(self.as_slice(), pos, byte_count) as u32
    }

    fn int_le_at(&self, pos: usize, byte_count: usize) -> u32 {
        check_int_width(byte_count);
        read_le(self.as_slice(), pos, byte_count) as u32
    }

    /// Big-endian unsigned integer made of `byte_count` (1..=8) bytes.
    fn long_be_at(&self, pos: usize, byte_count: usize) -> u64 {
        check_long_width(byte_count);
        read_be(self.as_slice(), pos, byte_count)
    }

    fn long_le_at(&self, pos: usize, byte_count: usize) -> u64 {
        check_long_width(byte_count);
        read_le(self.as_slice(), pos, byte_count)
    }
}

impl<V: View<u8> + ?Sized> ByteView for V {}

/// Integer writes into a mutable byte view.
pub trait ByteViewMut: ViewMut<u8> {
    fn set_int8_at(&mut self, pos: usize, value: u8) {
        *self.at_mut(pos) = value;
    }

    fixed_width_writes! {
        set_int16_be_at, set_int16_le_at, set_int16_ne_at => u16;
        set_int32_be_at, set_int32_le_at, set_int32_ne_at => u32;
        set_int64_be_at, set_int64_le_at, set_int64_ne_at => u64;
    }

    /// Writes the low `byte_count` (1..=4) bytes of `value`, big-endian.
    fn set_int_be_at(&mut self, pos: usize, value: u32, byte_count: usize) {
        check_int_width(byte_count);
        write_be(self.as_mut_slice(), pos, u64::from(value), byte_count);
    }

    fn set_int_le_at(&mut self, pos: usize, value: u32, byte_count: usize) {
        check_int_width(byte_count);
        write_le(self.as_mut_slice(), pos, u64::from(value), byte_count);
    }

    /// Writes the low `byte_count` (1..=8) bytes of `value`, big-endian.
    fn set_long_be_at(&mut self, pos: usize, value: u64, byte_count: usize) {
        check_long_width(byte_count);
        write_be(self.as_mut_slice(), pos, value, byte_count);
    }

    fn set_long_le_at(&mut self, pos: usize, value: u64, byte_count: usize) {
        check_long_width(byte_count);
        write_le(self.as_mut_slice(), pos, value, byte_count);
    }

    /// Shifts the whole view, read as one big-endian bit string, `n` bits
    /// towards the front. Vacated bits are zero.
    fn logical_shift_left(&mut self, n: usize) {
        shift_left(self.as_mut_slice(), n);
    }

    /// Shifts the whole view `n` bits towards the back.
    fn logical_shift_right(&mut self, n: usize) {
        shift_right(self.as_mut_slice(), n);
    }

    /// Adds one to the view read as a big-endian integer of any width.
    /// Returns the carry out of the most significant byte.
    fn increment_be(&mut self) -> bool {
        increment(self.as_mut_slice().iter_mut().rev())
    }

    /// Adds one to the view read as a little-endian integer of any width.
    fn increment_le(&mut self) -> bool {
        increment(self.as_mut_slice().iter_mut())
    }
}

impl<V: ViewMut<u8> + ?Sized> ByteViewMut for V {}

impl ShlAssign<usize> for ArrayRef<'_, u8> {
    fn shl_assign(&mut self, n: usize) {
        self.logical_shift_left(n);
    }
}

impl ShrAssign<usize> for ArrayRef<'_, u8> {
    fn shr_assign(&mut self, n: usize) {
        self.logical_shift_right(n);
    }
}

fn shift_left(bytes: &mut [u8], n: usize) {
    let (skip, bits) = (n / 8, (n % 8) as u32);
    // Ascending, every byte read sits at or after the one being written.
    for i in 0..bytes.len() {
        let high = i.checked_add(skip).and_then(|j| bytes.get(j)).copied().unwrap_or(0);
        let low = i.checked_add(skip + 1).and_then(|j| bytes.get(j)).copied().unwrap_or(0);
        bytes[i] = if bits == 0 { high } else { high << bits | low >> (8 - bits) };
    }
}

fn shift_right(bytes: &mut [u8], n: usize) {
    let (skip, bits) = (n / 8, (n % 8) as u32);
    // Descending, every byte read sits at or before the one being written.
    for i in (0..bytes.len()).rev() {
        let low = i.checked_sub(skip).map_or(0, |j| bytes[j]);
        let high = i.checked_sub(skip).and_then(|j| j.checked_sub(1)).map_or(0, |j| bytes[j]);
        bytes[i] = if bits == 0 { low } else { low >> bits | high << (8 - bits) };
    }
}

fn increment<'a>(bytes: impl Iterator<Item = &'a mut u8>) -> bool {
    for b in bytes {
        *b = b.wrapping_add(1);
        if *b != 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ArrayConstRef, ArrayRef};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_little_endian_write_reads_back_reversed_big_endian() {
        let mut buf = [0u8; 4];
        ArrayRef::new(&mut buf).set_int32_le_at(0, 0x01020304);
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(ArrayConstRef::new(&buf).int32_be_at(0), 0x04030201);
        assert_eq!(ArrayConstRef::new(&buf).int32_le_at(0), 0x01020304);
    }

    #[test]
    fn test_fixed_width_at_offset() {
        let buf = [0xff, 0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x00];
        let view = ArrayConstRef::new(&buf);
        assert_eq!(view.int8_at(0), 0xff);
        assert_eq!(view.int16_be_at(1), 0x1234);
        assert_eq!(view.int16_le_at(1), 0x3412);
        assert_eq!(view.int64_be_at(1), 0x123456789abcdef0);
        assert_eq!(view.int64_ne_at(2), u64::from_ne_bytes([0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x00]));
    }

    #[test]
    fn test_variable_width_reads() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05];
        let view = ArrayConstRef::new(&buf);
        assert_eq!(view.int_be_at(0, 1), 0x01);
        assert_eq!(view.int_be_at(0, 3), 0x010203);
        assert_eq!(view.int_le_at(0, 3), 0x030201);
        assert_eq!(view.int_be_at(1, 4), 0x02030405);
        assert_eq!(view.long_be_at(0, 5), 0x0102030405);
        assert_eq!(view.long_le_at(0, 5), 0x0504030201);
    }

    #[test]
    fn test_variable_width_writes_keep_neighbors() {
        let mut buf = [0xaau8; 6];
        let mut view = ArrayRef::new(&mut buf);
        view.set_int_be_at(1, 0x00abcdef, 3);
        view.set_long_le_at(4, 0x1122, 2);
        assert_eq!(buf, [0xaa, 0xab, 0xcd, 0xef, 0x22, 0x11]);
    }

    #[test]
    fn test_shift_crosses_byte_boundaries() {
        let mut buf = [0x01, 0x80, 0x0f];
        ArrayRef::new(&mut buf).logical_shift_left(1);
        assert_eq!(buf, [0x03, 0x00, 0x1e]);

        let mut buf = [0x81, 0x00, 0xff];
        ArrayRef::new(&mut buf).logical_shift_right(9);
        assert_eq!(buf, [0x00, 0x40, 0x80]);

        let mut buf = [0x12, 0x34, 0x56];
        ArrayRef::new(&mut buf).logical_shift_left(12);
        assert_eq!(buf, [0x45, 0x60, 0x00]);
    }

    #[test]
    fn test_shift_whole_bytes_and_beyond() {
        let mut buf = [0x12, 0x34, 0x56];
        let mut view = ArrayRef::new(&mut buf);
        view <<= 8;
        assert_eq!(view.as_slice(), &[0x34, 0x56, 0x00]);
        view >>= 16;
        assert_eq!(view.as_slice(), &[0x00, 0x00, 0x34]);
        view >>= 0;
        assert_eq!(view.as_slice(), &[0x00, 0x00, 0x34]);
        view <<= 24;
        assert_eq!(view.as_slice(), &[0x00, 0x00, 0x00]);

        let mut buf = [0xffu8; 2];
        ArrayRef::new(&mut buf).logical_shift_right(usize::MAX);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn test_shift_matches_integer_shift() {
        for n in 0..=40 {
            let mut buf = 0xdead_beef_u32.to_be_bytes();
            ArrayRef::new(&mut buf).logical_shift_left(n);
            let expected = 0xdead_beef_u64.checked_shl(n as u32).unwrap_or(0) as u32;
            assert_eq!(u32::from_be_bytes(buf), expected, "left by {n}");

            let mut buf = 0xdead_beef_u32.to_be_bytes();
            ArrayRef::new(&mut buf).logical_shift_right(n);
            let expected = 0xdead_beef_u64.checked_shr(n as u32).unwrap_or(0) as u32;
            assert_eq!(u32::from_be_bytes(buf), expected, "right by {n}");
        }
    }

    #[test]
    fn test_increment_carries() {
        let mut buf = [0x00, 0xff, 0xff];
        assert!(!ArrayRef::new(&mut buf).increment_be());
        assert_eq!(buf, [0x01, 0x00, 0x00]);

        let mut buf = [0xff, 0xff];
        assert!(ArrayRef::new(&mut buf).increment_le());
        assert_eq!(buf, [0x00, 0x00]);

        let mut buf = [0xff, 0x07];
        assert!(!ArrayRef::new(&mut buf).increment_le());
        assert_eq!(buf, [0x00, 0x08]);
    }
}
