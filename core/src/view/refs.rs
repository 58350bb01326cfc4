#![allow(unsafe_code)]

use core::{fmt, hash, ops::Deref, ops::DerefMut};

use super::{View, ViewMut, check_range};
use crate::view::{ArrayConstPtr, ArrayPtr};

/// A shared window over a contiguous run of elements.
///
/// `Copy`, so sub-views taken from it keep the lifetime of the underlying
/// data rather than of the view value itself.
pub struct ArrayConstRef<'a, T> {
    slice: &'a [T],
}

impl<'a, T> ArrayConstRef<'a, T> {
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice }
    }

    pub const fn empty() -> Self {
        Self { slice: &[] }
    }

    /// # Safety
    ///
    /// Same contract as [`core::slice::from_raw_parts`].
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        Self::new(unsafe { core::slice::from_raw_parts(ptr, len) })
    }

    pub const fn into_slice(self) -> &'a [T] {
        self.slice
    }

    pub fn ref_range(self, pos: usize, n: usize) -> ArrayConstRef<'a, T> {
        check_range(self.slice.len(), pos, n);
        Self::new(&self.slice[pos..pos + n])
    }

    pub fn ref_left(self, pos: usize) -> ArrayConstRef<'a, T> {
        self.ref_range(0, pos)
    }

    pub fn ref_right(self, pos: usize) -> ArrayConstRef<'a, T> {
        check_range(self.slice.len(), pos, 0);
        self.ref_range(pos, self.slice.len() - pos)
    }

    pub fn ref_front(self, n: usize) -> ArrayConstRef<'a, T> {
        self.ref_range(0, n)
    }

    pub fn ref_back(self, n: usize) -> ArrayConstRef<'a, T> {
        check_range(self.slice.len(), 0, n);
        self.ref_range(self.slice.len() - n, n)
    }

    pub fn ref_not_front(self, n: usize) -> ArrayConstRef<'a, T> {
        self.ref_right(n)
    }

    pub fn ref_not_back(self, n: usize) -> ArrayConstRef<'a, T> {
        check_range(self.slice.len(), 0, n);
        self.ref_left(self.slice.len() - n)
    }

    pub fn pointer(self) -> ArrayConstPtr<'a, T> {
        ArrayConstPtr::new(self.slice)
    }
}

impl<T> Clone for ArrayConstRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayConstRef<'_, T> {}

impl<T> Default for ArrayConstRef<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> View<T> for ArrayConstRef<'_, T> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self.slice
    }
}

impl<T> Deref for ArrayConstRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.slice
    }
}

impl<'a, T> From<&'a [T]> for ArrayConstRef<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArrayConstRef<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a> From<&'a str> for ArrayConstRef<'a, u8> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'a, T> From<ArrayRef<'a, T>> for ArrayConstRef<'a, T> {
    fn from(view: ArrayRef<'a, T>) -> Self {
        Self::new(view.into_mut_slice())
    }
}

impl<'a, T> IntoIterator for ArrayConstRef<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayConstRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice).finish()
    }
}

impl<T: PartialEq, U: View<T> + ?Sized> PartialEq<U> for ArrayConstRef<'_, T> {
    fn eq(&self, other: &U) -> bool {
        self.slice == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayConstRef<'_, T> {}

impl<T: hash::Hash> hash::Hash for ArrayConstRef<'_, T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.slice.hash(state);
    }
}

// ============================================================================
// Mutable view
// ============================================================================

/// A unique window over a contiguous run of elements.
pub struct ArrayRef<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> ArrayRef<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice }
    }

    pub fn empty() -> Self {
        Self { slice: &mut [] }
    }

    /// # Safety
    ///
    /// Same contract as [`core::slice::from_raw_parts_mut`].
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        Self::new(unsafe { core::slice::from_raw_parts_mut(ptr, len) })
    }

    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.slice
    }

    /// Shorter-lived copy of this view.
    pub fn reborrow(&mut self) -> ArrayRef<'_, T> {
        ArrayRef::new(&mut *self.slice)
    }

    /// Splits into the first `pos` elements and the rest.
    pub fn split_at(self, pos: usize) -> (ArrayRef<'a, T>, ArrayRef<'a, T>) {
        check_range(self.slice.len(), pos, 0);
        let (left, right) = self.slice.split_at_mut(pos);
        (ArrayRef::new(left), ArrayRef::new(right))
    }

    pub fn into_pointer(self) -> ArrayPtr<'a, T> {
        ArrayPtr::new(self.slice)
    }
}

impl<T> Default for ArrayRef<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> View<T> for ArrayRef<'_, T> {
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        &*self.slice
    }
}

impl<T> ViewMut<T> for ArrayRef<'_, T> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.slice
    }
}

impl<T> Deref for ArrayRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.slice
    }
}

impl<T> DerefMut for ArrayRef<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.slice
    }
}

impl<'a, T> From<&'a mut [T]> for ArrayRef<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for ArrayRef<'a, T> {
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T> IntoIterator for ArrayRef<'a, T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice.iter()).finish()
    }
}

impl<T: PartialEq, U: View<T> + ?Sized> PartialEq<U> for ArrayRef<'_, T> {
    fn eq(&self, other: &U) -> bool {
        *self.slice == *other.as_slice()
    }
}
