#![allow(unsafe_code)]

//! Growable arrays parameterized by a storage strategy.
//!
//! [`ArrayCommon<T, S>`] owns its elements and keeps them contiguous in the
//! storage `S`. The two strategies give the two user-facing types:
//!
//! - [`Array<T, A>`]: heap storage from allocator `A`, grows automatically.
//! - [`FixedArray<T, N>`]: inline storage of exactly `N` slots.
//!
//! Every operation that may need more capacity returns a [`Result`]; a
//! failed request leaves the array exactly as it was.
//!
//! Growth is geometric: when an insertion of `k` elements does not fit, the
//! new capacity is `len + max(len / 2, k)` (at least
//! [`MIN_AUTO_CAPACITY`]), clamped to the storage's max size. Explicit
//! [`reserve`](ArrayCommon::reserve) requests are exact.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr, slice,
};

use allocator_api2::alloc::{Allocator, Global};

use crate::{
    config::MIN_AUTO_CAPACITY,
    error::{Error, Result},
    storage::{HeapStorage, InlineStorage, Storage},
    view::{ArrayConstRef, ArrayRef, View, ViewMut, check_range},
};

mod bytes;
mod replace;

/// A contiguous, growable sequence of `T` stored in `S`.
pub struct ArrayCommon<T, S: Storage<T>> {
    storage: S,
    marker: PhantomData<T>,
}

/// Heap-backed array.
pub type Array<T, A = Global> = ArrayCommon<T, HeapStorage<T, A>>;

/// Array with `N` inline slots. Requests beyond `N` fail.
pub type FixedArray<T, const N: usize> = ArrayCommon<T, InlineStorage<T, N>>;

/// Heap-backed byte array.
pub type Blob<A = Global> = Array<u8, A>;

pub type FixedBlob<const N: usize> = FixedArray<u8, N>;

/// Drops `n` elements starting at `first`. Compiles to nothing for element
/// types without drop glue.
///
/// # Safety
///
/// The range must hold initialized elements no longer reachable through
/// the array's length.
#[inline(always)]
unsafe fn drop_range<T>(first: *mut T, n: usize) {
    if mem::needs_drop::<T>() {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, n)) }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T, S: Storage<T>> ArrayCommon<T, S> {
    /// Wraps an empty storage.
    pub fn from_storage(storage: S) -> Self {
        debug_assert_eq!(storage.len(), 0, "storage must start empty");
        Self {
            storage,
            marker: PhantomData,
        }
    }
}

/// Constructors for storages that need no allocator argument.
macro_rules! default_storage_constructors {
    ($(impl[$($gen:tt)*] $storage:ty => $make:expr;)*) => {
        $(
            impl<T, $($gen)*> ArrayCommon<T, $storage> {
                pub const fn new() -> Self {
                    Self {
                        storage: $make,
                        marker: PhantomData,
                    }
                }

                #[track_caller]
                pub fn with_capacity(capacity: usize) -> Result<Self> {
                    let mut array = Self::new();
                    array.reserve(capacity)?;
                    Ok(array)
                }

                #[track_caller]
                pub fn from_slice(src: &[T]) -> Result<Self>
                where
                    T: Clone,
                {
                    let mut array = Self::new();
                    array.append(src)?;
                    Ok(array)
                }

                /// `n` clones of `value`.
                #[track_caller]
                pub fn from_elem(value: &T, n: usize) -> Result<Self>
                where
                    T: Clone,
                {
                    let mut array = Self::new();
                    array.push_back_fill(value, n)?;
                    Ok(array)
                }

                /// `n` default-constructed elements.
                #[track_caller]
                pub fn with_len(n: usize) -> Result<Self>
                where
                    T: Default,
                {
                    let mut array = Self::new();
                    array.resize(n)?;
                    Ok(array)
                }

                #[track_caller]
                pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
                    let mut array = Self::new();
                    array.try_extend(iter)?;
                    Ok(array)
                }
            }
        )*
    };
}

default_storage_constructors! {
    impl[] HeapStorage<T> => HeapStorage::new_in(Global);
    impl[const N: usize] InlineStorage<T, N> => InlineStorage::new();
}

impl<T, A: Allocator + Clone> ArrayCommon<T, HeapStorage<T, A>> {
    pub const fn new_in(alloc: A) -> Self {
        Self {
            storage: HeapStorage::new_in(alloc),
            marker: PhantomData,
        }
    }

    #[track_caller]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self> {
        Ok(Self::from_storage(HeapStorage::with_capacity_in(
            capacity, alloc,
        )?))
    }

    #[track_caller]
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity_in(src.len(), alloc)?;
        array.append(src)?;
        Ok(array)
    }

    #[track_caller]
    pub fn from_elem_in(value: &T, n: usize, alloc: A) -> Result<Self>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity_in(n, alloc)?;
        array.push_back_fill(value, n)?;
        Ok(array)
    }

    #[track_caller]
    pub fn with_len_in(n: usize, alloc: A) -> Result<Self>
    where
        T: Default,
    {
        let mut array = Self::with_capacity_in(n, alloc)?;
        array.resize(n)?;
        Ok(array)
    }

    #[track_caller]
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self> {
        let mut array = Self::new_in(alloc);
        array.try_extend(iter)?;
        Ok(array)
    }

    pub fn allocator(&self) -> &A {
        self.storage.allocator()
    }
}

// ============================================================================
// Size and capacity
// ============================================================================

impl<T, S: Storage<T>> ArrayCommon<T, S> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Unused slots after the last element.
    #[inline(always)]
    pub fn back_capacity(&self) -> usize {
        self.capacity() - self.len()
    }

    #[inline(always)]
    pub fn max_size(&self) -> usize {
        self.storage.max_size()
    }

    pub fn is_fixed_capacity(&self) -> bool {
        S::FIXED_CAPACITY
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len()) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: the first `len` slots are initialized and uniquely borrowed.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr(), len) }
    }

    /// Makes room for at least `min_capacity` elements. Allocates exactly
    /// `min_capacity` slots when growing.
    #[track_caller]
    pub fn reserve(&mut self, min_capacity: usize) -> Result<&mut Self> {
        let max_size = self.max_size();
        if min_capacity > max_size {
            return Err(Error::capacity_too_large(min_capacity, max_size));
        }
        if min_capacity > self.capacity() {
            self.relocate(min_capacity)?;
        }
        Ok(self)
    }

    /// Makes room for at least `n` more elements.
    #[track_caller]
    pub fn reserve_back(&mut self, n: usize) -> Result<&mut Self> {
        let (len, max_size) = (self.len(), self.max_size());
        if n > max_size - len {
            return Err(Error::capacity_too_large(len.saturating_add(n), max_size));
        }
        self.reserve(len + n)
    }

    /// Capacity to grow to so that `n` more elements fit.
    #[track_caller]
    pub(crate) fn calculate_auto_capacity(&self, n: usize) -> Result<usize> {
        let (len, max_size) = (self.len(), self.max_size());
        let room = max_size - len;
        if n > room {
            return Err(Error::capacity_too_large(len.saturating_add(n), max_size));
        }
        let grown = len + (len / 2).min(room).max(n);
        Ok(grown.max(MIN_AUTO_CAPACITY).min(max_size))
    }

    /// Ensures `n` more elements fit, growing geometrically.
    #[track_caller]
    fn grow_back(&mut self, n: usize) -> Result<()> {
        if n > self.back_capacity() {
            let capacity = self.calculate_auto_capacity(n)?;
            self.relocate(capacity)?;
        }
        Ok(())
    }

    /// Moves every element into a fresh storage of `new_capacity` slots.
    #[track_caller]
    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        let len = self.len();
        debug_assert!(new_capacity >= len);
        let mut fresh = self.storage.allocate_like(new_capacity)?;
        tracing::debug!(
            old_capacity = self.capacity(),
            new_capacity,
            len,
            "relocating array storage"
        );
        // SAFETY: `fresh` has room for `len` elements and is a distinct
        // buffer. The elements are moved bitwise, so the old storage must
        // forget them before it is dropped.
        unsafe {
            self.storage.set_len(0);
            ptr::copy_nonoverlapping(self.storage.as_ptr(), fresh.as_mut_ptr(), len);
            fresh.set_len(len);
        }
        drop(mem::replace(&mut self.storage, fresh));
        Ok(())
    }

    /// Exchanges the contents of two arrays.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// ============================================================================
// Owned insertions
// ============================================================================

impl<T, S: Storage<T>> ArrayCommon<T, S> {
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> Result<&mut Self> {
        self.grow_back(1)?;
        let len = self.len();
        // SAFETY: there is room for one more element at `len`.
        unsafe {
            ptr::write(self.storage.as_mut_ptr().add(len), value);
            self.storage.set_len(len + 1);
        }
        Ok(self)
    }

    #[track_caller]
    pub fn push_front(&mut self, value: T) -> Result<&mut Self> {
        self.insert(0, value)
    }

    /// Inserts `value` before the element at `pos`.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut Self> {
        let len = self.len();
        check_range(len, pos, 0);
        self.grow_back(1)?;
        // SAFETY: there is room for one more element; the tail is shifted
        // up by one and the hole is filled before the length is published.
        unsafe {
            let at = self.storage.as_mut_ptr().add(pos);
            ptr::copy(at, at.add(1), len - pos);
            ptr::write(at, value);
            self.storage.set_len(len + 1);
        }
        Ok(self)
    }

    /// Replaces the `n1` elements at `pos1` with the single `value`.
    #[track_caller]
    pub fn replace_with(&mut self, pos1: usize, n1: usize, value: T) -> Result<&mut Self> {
        check_range(self.len(), pos1, n1);
        if n1 == 0 {
            return self.insert(pos1, value);
        }
        self.as_mut_slice()[pos1] = value;
        Ok(self.erase(pos1 + 1, n1 - 1))
    }

    /// Appends every item of `iter`. Items already appended stay when
    /// growing fails partway.
    #[track_caller]
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<&mut Self> {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_back(lower)?;
        for item in iter {
            self.push_back(item)?;
        }
        Ok(self)
    }

    /// Grows or shrinks to `n` elements, filling with `T::default()`.
    #[track_caller]
    pub fn resize(&mut self, n: usize) -> Result<&mut Self>
    where
        T: Default,
    {
        let len = self.len();
        if n <= len {
            return Ok(self.erase_back(len - n));
        }
        self.reserve(n)?;
        for i in len..n {
            // SAFETY: capacity is at least `n`; the length tracks every
            // written slot so a panicking `default()` leaks nothing.
            unsafe {
                ptr::write(self.storage.as_mut_ptr().add(i), T::default());
                self.storage.set_len(i + 1);
            }
        }
        Ok(self)
    }
}

// ============================================================================
// Removal
// ============================================================================

impl<T, S: Storage<T>> ArrayCommon<T, S> {
    pub fn pop_back(&mut self) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        // SAFETY: the last slot is initialized and is forgotten by the
        // length update before being read out.
        unsafe {
            self.storage.set_len(len - 1);
            Some(ptr::read(self.storage.as_ptr().add(len - 1)))
        }
    }

    /// Removes the `n` elements at `pos`, closing the gap.
    pub fn erase(&mut self, pos: usize, n: usize) -> &mut Self {
        let len = self.len();
        check_range(len, pos, n);
        if n == 0 {
            return self;
        }
        // SAFETY: the length is cut to `pos` first, so a panicking drop
        // leaks the tail instead of dropping it twice.
        unsafe {
            self.storage.set_len(pos);
            let base = self.storage.as_mut_ptr();
            drop_range(base.add(pos), n);
            ptr::copy(base.add(pos + n), base.add(pos), len - pos - n);
            self.storage.set_len(len - n);
        }
        self
    }

    pub fn erase_front(&mut self, n: usize) -> &mut Self {
        self.erase(0, n)
    }

    pub fn erase_back(&mut self, n: usize) -> &mut Self {
        let len = self.len();
        check_range(len, 0, n);
        // SAFETY: the removed slots are initialized and cut off first.
        unsafe {
            self.storage.set_len(len - n);
            drop_range(self.storage.as_mut_ptr().add(len - n), n);
        }
        self
    }

    /// Removes everything before `pos`.
    pub fn erase_left(&mut self, pos: usize) -> &mut Self {
        self.erase(0, pos)
    }

    /// Removes everything from `pos` on.
    pub fn erase_right(&mut self, pos: usize) -> &mut Self {
        check_range(self.len(), pos, 0);
        self.erase_back(self.len() - pos)
    }

    pub fn erase_all(&mut self) -> &mut Self {
        self.erase_back(self.len())
    }

    pub fn clear(&mut self) {
        self.erase_all();
    }

    /// Removes the elements matching `pred`, keeping the others in order.
    /// Returns how many were removed.
    pub fn erase_if<P: FnMut(&T) -> bool>(&mut self, mut pred: P) -> usize {
        let kept = crate::algo::stable_partition_left_only(self.as_mut_slice(), |x| !pred(x));
        let removed = self.len() - kept;
        self.erase_back(removed);
        removed
    }
}

impl<T: Clone, S: Storage<T>> ArrayCommon<T, S> {
    /// Clones into a storage of the same kind, sized to fit.
    #[track_caller]
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::from_storage(self.storage.allocate_like(self.len())?);
        copy.append(self.as_slice())?;
        Ok(copy)
    }
}

impl<T, S: Storage<T>> Drop for ArrayCommon<T, S> {
    fn drop(&mut self) {
        self.erase_all();
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T, S: Storage<T>> View<T> for ArrayCommon<T, S> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        ArrayCommon::as_slice(self)
    }
}

impl<T, S: Storage<T>> ViewMut<T> for ArrayCommon<T, S> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        ArrayCommon::as_mut_slice(self)
    }
}

impl<T, S: Storage<T>> Deref for ArrayCommon<T, S> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: Storage<T>> DerefMut for ArrayCommon<T, S> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: Storage<T>> AsRef<[T]> for ArrayCommon<T, S> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: Storage<T>> AsMut<[T]> for ArrayCommon<T, S> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, S: Storage<T>> From<&'a ArrayCommon<T, S>> for ArrayConstRef<'a, T> {
    fn from(array: &'a ArrayCommon<T, S>) -> Self {
        ArrayConstRef::new(array.as_slice())
    }
}

impl<'a, T, S: Storage<T>> From<&'a mut ArrayCommon<T, S>> for ArrayRef<'a, T> {
    fn from(array: &'a mut ArrayCommon<T, S>) -> Self {
        ArrayRef::new(array.as_mut_slice())
    }
}

impl<T, S: Storage<T> + Default> Default for ArrayCommon<T, S> {
    fn default() -> Self {
        Self::from_storage(S::default())
    }
}

impl<T: Clone, S: Storage<T>> Clone for ArrayCommon<T, S> {
    /// Panics if the copy cannot be allocated; see [`ArrayCommon::try_clone`].
    #[track_caller]
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => err.raise(),
        }
    }
}

impl<T: fmt::Debug, S: Storage<T>> fmt::Debug for ArrayCommon<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, S: Storage<T>, S2: Storage<T>> PartialEq<ArrayCommon<T, S2>>
    for ArrayCommon<T, S>
{
    fn eq(&self, other: &ArrayCommon<T, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, S: Storage<T>> PartialEq<[T]> for ArrayCommon<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, S: Storage<T>> PartialEq<&[T]> for ArrayCommon<T, S> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, S: Storage<T>, const M: usize> PartialEq<[T; M]> for ArrayCommon<T, S> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: Storage<T>> Eq for ArrayCommon<T, S> {}

impl<T: PartialOrd, S: Storage<T>> PartialOrd for ArrayCommon<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, S: Storage<T>> Ord for ArrayCommon<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, S: Storage<T>> Hash for ArrayCommon<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a ArrayCommon<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a mut ArrayCommon<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, S: Storage<T>> Extend<T> for ArrayCommon<T, S> {
    /// Panics if the array cannot grow; see [`ArrayCommon::try_extend`].
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(err) = self.try_extend(iter) {
            err.raise()
        }
    }
}

impl<T, S: Storage<T> + Default> FromIterator<T> for ArrayCommon<T, S> {
    /// Panics if the array cannot grow; see [`ArrayCommon::try_extend`].
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        if let Err(err) = array.try_extend(iter) {
            err.raise()
        }
        array
    }
}

impl<T: Clone, S: Storage<T> + Default> TryFrom<&[T]> for ArrayCommon<T, S> {
    type Error = Error;

    #[track_caller]
    fn try_from(src: &[T]) -> Result<Self> {
        let mut array = Self::default();
        array.append(src)?;
        Ok(array)
    }
}

impl<T, S: Storage<T> + Default, const M: usize> TryFrom<[T; M]> for ArrayCommon<T, S> {
    type Error = Error;

    #[track_caller]
    fn try_from(src: [T; M]) -> Result<Self> {
        let mut array = Self::default();
        array.reserve(M)?.try_extend(src)?;
        Ok(array)
    }
}
