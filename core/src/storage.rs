#![allow(unsafe_code)]

//! Storage strategies: where an array's elements live.
//!
//! A storage owns a buffer of possibly uninitialized slots and a length
//! counter. It never constructs or destroys elements itself; that is the
//! job of the owning [`ArrayCommon`](crate::ArrayCommon), which must erase
//! every element before the storage is dropped.
//!
//! Two strategies are provided, chosen at the type level:
//!
//! | Strategy | Capacity | Max size |
//! |----------|----------|----------|
//! | [`InlineStorage<T, N>`] | `N` | `N` |
//! | [`HeapStorage<T, A>`] | runtime, starts at 0 | `isize::MAX / size_of::<T>()` |

use core::{alloc::Layout, marker::PhantomData, mem::MaybeUninit, ptr::NonNull};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{Error, Result};

/// Raw buffer management behind an [`ArrayCommon`](crate::ArrayCommon).
///
/// # Safety
///
/// `as_ptr()` must point to `capacity()` slots suitably aligned for `T`,
/// stable for as long as the storage is not moved (heap storage) or not
/// moved and not dropped (inline storage). The first `len()` slots are
/// owned by the container and are initialized whenever the container hands
/// out references to them.
pub unsafe trait Storage<T> {
    /// Whether the capacity is fixed at compile time.
    const FIXED_CAPACITY: bool;

    fn capacity(&self) -> usize;

    fn max_size(&self) -> usize;

    fn len(&self) -> usize;

    /// # Safety
    ///
    /// `len <= capacity()`, and the caller takes responsibility for the
    /// initialization state of the slots it adds or removes.
    unsafe fn set_len(&mut self, len: usize);

    fn as_ptr(&self) -> *const T;

    fn as_mut_ptr(&mut self) -> *mut T;

    /// Creates an empty storage of the same kind with room for at least
    /// `capacity` elements.
    fn allocate_like(&self, capacity: usize) -> Result<Self>
    where
        Self: Sized;
}

const fn is_zst<T>() -> bool {
    size_of::<T>() == 0
}

// ============================================================================
// Inline storage
// ============================================================================

/// Inline buffer with capacity fixed at compile time. Never reallocates.
pub struct InlineStorage<T, const N: usize> {
    len: usize,
    data: [MaybeUninit<T>; N],
}

impl<T, const N: usize> InlineStorage<T, N> {
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [const { MaybeUninit::uninit() }; N],
        }
    }
}

impl<T, const N: usize> Default for InlineStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T, const N: usize> Storage<T> for InlineStorage<T, N> {
    const FIXED_CAPACITY: bool = true;

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    fn max_size(&self) -> usize {
        N
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N);
        self.len = len;
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr().cast()
    }

    #[track_caller]
    fn allocate_like(&self, capacity: usize) -> Result<Self> {
        if capacity > N {
            return Err(Error::capacity_too_large(capacity, N));
        }
        Ok(Self::new())
    }
}

impl<T, const N: usize> Drop for InlineStorage<T, N> {
    fn drop(&mut self) {
        debug_assert_eq!(self.len, 0, "storage dropped with live elements");
    }
}

// ============================================================================
// Heap storage
// ============================================================================

/// Heap buffer obtained from an [`Allocator`].
///
/// A capacity of zero owns no allocation; the pointer is dangling and never
/// dereferenced. Zero-sized element types never allocate either.
pub struct HeapStorage<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    len: usize,
    capacity: usize,
    alloc: A,
    marker: PhantomData<T>,
}

// SAFETY: HeapStorage uniquely owns its buffer, like `Vec<T, A>`.
unsafe impl<T: Send, A: Allocator + Send> Send for HeapStorage<T, A> {}
// SAFETY: shared access only hands out shared pointers.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for HeapStorage<T, A> {}

impl<T, A: Allocator> HeapStorage<T, A> {
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            capacity: 0,
            alloc,
            marker: PhantomData,
        }
    }

    #[track_caller]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self> {
        let mut storage = Self::new_in(alloc);
        if capacity == 0 || is_zst::<T>() {
            return Ok(storage);
        }
        let max_size = Self::max_size_of();
        if capacity > max_size {
            return Err(Error::capacity_too_large(capacity, max_size));
        }
        let Ok(layout) = Layout::array::<T>(capacity) else {
            return Err(Error::capacity_too_large(capacity, max_size));
        };
        let Ok(block) = storage.alloc.allocate(layout) else {
            return Err(Error::out_of_memory(layout.size()));
        };
        storage.ptr = block.cast::<T>();
        storage.capacity = capacity;
        Ok(storage)
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    const fn max_size_of() -> usize {
        if is_zst::<T>() {
            usize::MAX
        } else {
            isize::MAX as usize / size_of::<T>()
        }
    }
}

impl<T, A: Allocator + Default> Default for HeapStorage<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

unsafe impl<T, A: Allocator + Clone> Storage<T> for HeapStorage<T, A> {
    const FIXED_CAPACITY: bool = false;

    #[inline(always)]
    fn capacity(&self) -> usize {
        if is_zst::<T>() {
            usize::MAX
        } else {
            self.capacity
        }
    }

    #[inline(always)]
    fn max_size(&self) -> usize {
        Self::max_size_of()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[track_caller]
    fn allocate_like(&self, capacity: usize) -> Result<Self> {
        Self::with_capacity_in(capacity, self.alloc.clone())
    }
}

impl<T, A: Allocator> Drop for HeapStorage<T, A> {
    fn drop(&mut self) {
        debug_assert_eq!(self.len, 0, "storage dropped with live elements");
        if self.capacity == 0 || is_zst::<T>() {
            return;
        }
        // SAFETY: the layout was valid when the block was allocated.
        unsafe {
            let layout = Layout::from_size_align_unchecked(
                size_of::<T>() * self.capacity,
                align_of::<T>(),
            );
            self.alloc.deallocate(self.ptr.cast(), layout);
        }
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(HeapStorage<u64>, [usize; 3]);
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(InlineStorage<u8, 8>, [usize; 2]);
