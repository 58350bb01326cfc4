//! Endian-aware integer appends and inserts on byte arrays.
//!
//! Reads and in-place writes come from [`ByteView`](crate::ByteView) and
//! [`ByteViewMut`](crate::ByteViewMut); this module adds the operations
//! that change the length.

use super::ArrayCommon;
use crate::{
    error::Result,
    storage::Storage,
    view::{check_int_width, check_long_width},
};

macro_rules! fixed_width_appends {
    ($($be:ident, $le:ident, $ne:ident => $ty:ty;)*) => {
        $(
            #[track_caller]
            pub fn $be(&mut self, value: $ty) -> Result<&mut Self> {
                self.append(&value.to_be_bytes())
            }

            #[track_caller]
            pub fn $le(&mut self, value: $ty) -> Result<&mut Self> {
                self.append(&value.to_le_bytes())
            }

            #[track_caller]
            pub fn $ne(&mut self, value: $ty) -> Result<&mut Self> {
                self.append(&value.to_ne_bytes())
            }
        )*
    };
}

macro_rules! fixed_width_inserts {
    ($($be:ident, $le:ident, $ne:ident => $ty:ty;)*) => {
        $(
            #[track_caller]
            pub fn $be(&mut self, pos: usize, value: $ty) -> Result<&mut Self> {
                self.insert_slice(pos, &value.to_be_bytes())
            }

            #[track_caller]
            pub fn $le(&mut self, pos: usize, value: $ty) -> Result<&mut Self> {
                self.insert_slice(pos, &value.to_le_bytes())
            }

            #[track_caller]
            pub fn $ne(&mut self, pos: usize, value: $ty) -> Result<&mut Self> {
                self.insert_slice(pos, &value.to_ne_bytes())
            }
        )*
    };
}

impl<S: Storage<u8>> ArrayCommon<u8, S> {
    #[track_caller]
    pub fn append_int8(&mut self, value: u8) -> Result<&mut Self> {
        self.push_back(value)
    }

    /// Appends `n` copies of `value`.
    #[track_caller]
    pub fn append_int8_fill(&mut self, value: u8, n: usize) -> Result<&mut Self> {
        self.push_back_fill(&value, n)
    }

    fixed_width_appends! {
        append_int16_be, append_int16_le, append_int16_ne => u16;
        append_int32_be, append_int32_le, append_int32_ne => u32;
        append_int64_be, append_int64_le, append_int64_ne => u64;
    }

    /// Appends the low `byte_count` (1..=4) bytes of `value`, big-endian.
    ///
    /// ```
    /// use ali_core::Blob;
    ///
    /// let mut blob = Blob::new();
    /// blob.append_int_be(0x00abcdef, 3).unwrap();
    /// blob.append_int_le(0x1234, 2).unwrap();
    /// assert_eq!(blob, [0xab, 0xcd, 0xef, 0x34, 0x12]);
    /// ```
    #[track_caller]
    pub fn append_int_be(&mut self, value: u32, byte_count: usize) -> Result<&mut Self> {
        check_int_width(byte_count);
        self.append(&value.to_be_bytes()[4 - byte_count..])
    }

    #[track_caller]
    pub fn append_int_le(&mut self, value: u32, byte_count: usize) -> Result<&mut Self> {
        check_int_width(byte_count);
        self.append(&value.to_le_bytes()[..byte_count])
    }

    /// Appends the low `byte_count` (1..=8) bytes of `value`, big-endian.
    #[track_caller]
    pub fn append_long_be(&mut self, value: u64, byte_count: usize) -> Result<&mut Self> {
        check_long_width(byte_count);
        self.append(&value.to_be_bytes()[8 - byte_count..])
    }

    #[track_caller]
    pub fn append_long_le(&mut self, value: u64, byte_count: usize) -> Result<&mut Self> {
        check_long_width(byte_count);
        self.append(&value.to_le_bytes()[..byte_count])
    }

    #[track_caller]
    pub fn insert_int8(&mut self, pos: usize, value: u8) -> Result<&mut Self> {
        self.insert(pos, value)
    }

    #[track_caller]
    pub fn insert_int8_fill(&mut self, pos: usize, value: u8, n: usize) -> Result<&mut Self> {
        self.insert_fill(pos, &value, n)
    }

    fixed_width_inserts! {
        insert_int16_be, insert_int16_le, insert_int16_ne => u16;
        insert_int32_be, insert_int32_le, insert_int32_ne => u32;
        insert_int64_be, insert_int64_le, insert_int64_ne => u64;
    }

    #[track_caller]
    pub fn insert_int_be(&mut self, pos: usize, value: u32, byte_count: usize) -> Result<&mut Self> {
        check_int_width(byte_count);
        self.insert_slice(pos, &value.to_be_bytes()[4 - byte_count..])
    }

    #[track_caller]
    pub fn insert_int_le(&mut self, pos: usize, value: u32, byte_count: usize) -> Result<&mut Self> {
        check_int_width(byte_count);
        self.insert_slice(pos, &value.to_le_bytes()[..byte_count])
    }

    #[track_caller]
    pub fn insert_long_be(&mut self, pos: usize, value: u64, byte_count: usize) -> Result<&mut Self> {
        check_long_width(byte_count);
        self.insert_slice(pos, &value.to_be_bytes()[8 - byte_count..])
    }

    #[track_caller]
    pub fn insert_long_le(&mut self, pos: usize, value: u64, byte_count: usize) -> Result<&mut Self> {
        check_long_width(byte_count);
        self.insert_slice(pos, &value.to_le_bytes()[..byte_count])
    }
}
