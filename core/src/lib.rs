#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Allocator-aware growable arrays and the view types layered over them.
//!
//! The crate is organised leaf-first:
//!
//! - [`storage`]: where elements live, either inline with a compile-time
//!   capacity ([`InlineStorage`]) or in an allocation obtained from an
//!   [`allocator_api2`] allocator ([`HeapStorage`]).
//! - [`view`]: non-owning windows over a contiguous run of elements
//!   ([`ArrayConstRef`], [`ArrayRef`]) and cursors over them
//!   ([`ArrayConstPtr`], [`ArrayPtr`]). Searching, comparison, trimming and
//!   the in-place algorithms are provided by the [`View`] and [`ViewMut`]
//!   traits; byte and text views get [`ByteView`] and [`TextView`] on top.
//! - [`array`]: the growable container [`ArrayCommon`] and its aliases
//!   [`Array`], [`FixedArray`] and [`Blob`].
//! - [`algo`]: sort, partition, heap and permutation algorithms over
//!   mutable slices.
//!
//! ```
//! use ali_core::{Array, View, ViewMut};
//!
//! let mut a: Array<i32> = Array::from_slice(&[3, 1, 2]).unwrap();
//! a.push_back_from_self(0).unwrap();
//! a.sort();
//! assert_eq!(a, [1, 2, 3, 3]);
//! assert_eq!(a.index_of_first(&2), Some(1));
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod algo;
pub mod array;
pub mod config;
pub mod error;
pub mod storage;
pub mod view;

pub use array::{Array, ArrayCommon, Blob, FixedArray, FixedBlob};
pub use error::{Error, Result};
pub use storage::{HeapStorage, InlineStorage, Storage};
pub use view::{
    ArrayConstPtr, ArrayConstRef, ArrayPtr, ArrayRef, ByteView, ByteViewMut, TextChar, TextView,
    View, ViewMut,
};

/// Everything needed to work with arrays and views through method syntax.
pub mod prelude {
    pub use crate::array::{Array, ArrayCommon, Blob, FixedArray, FixedBlob};
    pub use crate::view::{
        ArrayConstPtr, ArrayConstRef, ArrayPtr, ArrayRef, ByteView, ByteViewMut, TextView, View,
        ViewMut,
    };
}
