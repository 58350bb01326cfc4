use core::{
    fmt,
    ops::{AddAssign, Deref, DerefMut},
};

use super::{View, ViewMut, check_range};
use crate::view::{ArrayConstRef, ArrayRef};

/// A cursor over a shared view: the elements not yet consumed.
///
/// Advancing drops elements from the front, so the remaining length is
/// always known. A null pointer behaves as an empty view.
///
/// ```
/// use ali_core::{ArrayConstPtr, View};
///
/// let data = [1, 2, 3, 4];
/// let mut p = ArrayConstPtr::new(&data);
/// p += 1;
/// assert_eq!(*p.front(), 2);
/// p.advance(2);
/// assert_eq!(p.len(), 1);
/// ```
pub struct ArrayConstPtr<'a, T> {
    slice: Option<&'a [T]>,
}

impl<'a, T> ArrayConstPtr<'a, T> {
    pub const fn new(slice: &'a [T]) -> Self {
        Self { slice: Some(slice) }
    }

    pub const fn null() -> Self {
        Self { slice: None }
    }

    pub const fn is_null(&self) -> bool {
        self.slice.is_none()
    }

    /// Skips the next element.
    pub fn inc(&mut self) {
        self.advance(1);
    }

    /// Skips the next `n` elements.
    pub fn advance(&mut self, n: usize) {
        if let Some(slice) = self.slice {
            check_range(slice.len(), n, 0);
            self.slice = Some(&slice[n..]);
        } else {
            debug_assert_eq!(n, 0, "advancing a null pointer");
        }
    }

    pub fn into_ref(self) -> ArrayConstRef<'a, T> {
        ArrayConstRef::new(self.slice.unwrap_or(&[]))
    }
}

impl<T> Clone for ArrayConstPtr<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayConstPtr<'_, T> {}

impl<T> Default for ArrayConstPtr<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> AddAssign<usize> for ArrayConstPtr<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> View<T> for ArrayConstPtr<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.slice.unwrap_or(&[])
    }
}

impl<T> Deref for ArrayConstPtr<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayConstPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slice {
            Some(slice) => f.debug_tuple("ArrayConstPtr").field(&slice).finish(),
            None => f.write_str("ArrayConstPtr(null)"),
        }
    }
}

// ============================================================================
// Mutable cursor
// ============================================================================

/// A cursor over a unique view.
pub struct ArrayPtr<'a, T> {
    slice: Option<&'a mut [T]>,
}

impl<'a, T> ArrayPtr<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice: Some(slice) }
    }

    pub const fn null() -> Self {
        Self { slice: None }
    }

    pub const fn is_null(&self) -> bool {
        self.slice.is_none()
    }

    pub fn inc(&mut self) {
        self.advance(1);
    }

    pub fn advance(&mut self, n: usize) {
        match self.slice.take() {
            Some(slice) => {
                check_range(slice.len(), n, 0);
                self.slice = Some(&mut slice[n..]);
            }
            None => debug_assert_eq!(n, 0, "advancing a null pointer"),
        }
    }

    /// Takes the next element and advances past it.
    pub fn next_mut(&mut self) -> Option<&'a mut T> {
        let slice = self.slice.take()?;
        if slice.is_empty() {
            self.slice = Some(slice);
            return None;
        }
        let (first, rest) = slice.split_first_mut()?;
        self.slice = Some(rest);
        Some(first)
    }

    pub fn into_ref(self) -> ArrayRef<'a, T> {
        ArrayRef::new(self.slice.unwrap_or_default())
    }
}

impl<T> Default for ArrayPtr<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> AddAssign<usize> for ArrayPtr<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance(n);
    }
}

impl<T> View<T> for ArrayPtr<'_, T> {
    fn as_slice(&self) -> &[T] {
        match &self.slice {
            Some(slice) => &**slice,
            None => &[],
        }
    }
}

impl<T> ViewMut<T> for ArrayPtr<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.slice {
            Some(slice) => &mut **slice,
            None => &mut [],
        }
    }
}

impl<T> Deref for ArrayPtr<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayPtr<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slice {
            Some(slice) => f.debug_tuple("ArrayPtr").field(slice).finish(),
            None => f.write_str("ArrayPtr(null)"),
        }
    }
}

static_assertions::assert_eq_size!(ArrayConstPtr<'static, u8>, &'static [u8]);
