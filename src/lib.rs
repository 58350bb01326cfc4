#![cfg_attr(not(feature = "std"), no_std)]

//! Ali - Allocator-aware growable arrays and views
//!
//! # Overview
//!
//! Ali provides a growable array whose storage strategy is chosen at the
//! type level, plus a family of non-owning views over contiguous elements.
//! Common use cases include:
//!
//! - Protocol buffers built and parsed in place ([`Blob`], [`ByteView`])
//! - Fixed-capacity scratch arrays that never touch the heap ([`FixedArray`])
//! - Per-request arrays allocated from an arena ([`Array::new_in`])
//! - Case-insensitive, quote-aware scanning of text headers ([`TextView`])
//!
//! # Quick Start
//!
//! ```
//! use ali::prelude::*;
//!
//! let mut a: Array<i32> = Array::from_slice(&[3, 1, 2]).unwrap();
//!
//! // Sources may alias the array, even when it has to reallocate.
//! a.append_within(0, 2).unwrap();
//! assert_eq!(a, [3, 1, 2, 3, 1]);
//!
//! a.sort();
//! assert_eq!(a.ref_back(2).as_slice(), &[3, 3]);
//! assert_eq!(a.index_of_first(&2), Some(2));
//! ```
//!
//! # Fallible Growth
//!
//! Every operation that may need capacity returns a [`Result`]. A failed
//! request leaves the array exactly as it was:
//!
//! ```
//! use ali::{Error, FixedArray};
//!
//! let mut a = FixedArray::<u8, 2>::from_slice(&[1, 2]).unwrap();
//! let err = a.push_back(3).unwrap_err();
//! assert!(matches!(err, Error::RequestedCapacityTooLarge { .. }));
//! assert_eq!(a, [1, 2]);
//! ```
//!
//! # Custom Allocators
//!
//! Heap arrays take any [`allocator_api2`] allocator:
//!
//! ```
//! use ali::Array;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let mut a = Array::new_in(&arena);
//! a.push_back_fill(&0u64, 16).unwrap();
//! assert!(arena.allocated_bytes() >= 16 * 8);
//! ```

pub use ali_core::{algo, config, storage, view};

// Containers
pub use ali_core::{Array, ArrayCommon, Blob, FixedArray, FixedBlob};

// Views
pub use ali_core::{
    ArrayConstPtr, ArrayConstRef, ArrayPtr, ArrayRef, ByteView, ByteViewMut, TextChar, TextView,
    View, ViewMut,
};

// Storage strategies
pub use ali_core::{HeapStorage, InlineStorage, Storage};

// Errors
pub use ali_core::{Error, Result};

pub use ali_core::prelude;

pub use allocator_api2::alloc::{Allocator, Global};
