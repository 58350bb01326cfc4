#![allow(unsafe_code)]

//! Replacing a range of an array with clones of other elements.
//!
//! Every operation that copies borrowed elements into the array ends up in
//! [`ArrayCommon::replace_raw`] or its single-value counterpart. The source
//! may live inside the array itself. Such sources are tracked by index
//! rather than by pointer from the moment they are recognized, so moving
//! elements around never leaves them dangling.
//!
//! The strategy depends on how the length changes:
//!
//! - shrinking (`n2 <= n1`): assign in place, then erase the surplus.
//! - growing in place (the extra elements fit in the back capacity).
//! - reallocating: move everything into a larger storage, then grow.

use core::{ptr, slice};

use super::ArrayCommon;
use crate::{
    error::Result,
    storage::Storage,
    view::{check_range, internal_offset},
};

/// Where replacement elements are cloned from.
enum Source<T> {
    /// The array's own elements, starting at this index.
    Internal(usize),
    /// Elements outside the array.
    External(*const T),
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Source<T> {}

/// Clones `s[from]` onto `s[to]`.
fn clone_between<T: Clone>(s: &mut [T], from: usize, to: usize) {
    debug_assert_ne!(from, to);
    if from < to {
        let (head, tail) = s.split_at_mut(to);
        tail[0].clone_from(&head[from]);
    } else {
        let (head, tail) = s.split_at_mut(from);
        head[to].clone_from(&tail[0]);
    }
}

/// Clone-assigns `s[from..from + n]` onto `s[to..to + n]`. The ranges may
/// overlap; the copy runs in the direction that reads every source element
/// before overwriting it.
fn assign_within<T: Clone>(s: &mut [T], to: usize, from: usize, n: usize) {
    if to < from {
        for i in 0..n {
            clone_between(s, from + i, to + i);
        }
    } else if to > from {
        for i in (0..n).rev() {
            clone_between(s, from + i, to + i);
        }
    }
}

impl<T: Clone, S: Storage<T>> ArrayCommon<T, S> {
    /// Replaces the `n1` elements at `pos1` with clones of `src`.
    ///
    /// ```
    /// use ali_core::Array;
    ///
    /// let mut a = Array::from_slice(&[1, 2, 3, 4]).unwrap();
    /// a.replace(1, 2, &[7, 8, 9]).unwrap();
    /// assert_eq!(a, [1, 7, 8, 9, 4]);
    /// ```
    #[track_caller]
    pub fn replace(&mut self, pos1: usize, n1: usize, src: &[T]) -> Result<&mut Self> {
        // SAFETY: a shared borrow cannot overlap the uniquely borrowed array.
        unsafe { self.replace_raw(pos1, n1, src.as_ptr(), src.len()) }
    }

    /// Replaces the `n1` elements at `pos1` with clones of the `n2`
    /// elements at `pos2` of the same array.
    #[track_caller]
    pub fn replace_within(
        &mut self,
        pos1: usize,
        n1: usize,
        pos2: usize,
        n2: usize,
    ) -> Result<&mut Self> {
        check_range(self.len(), pos2, n2);
        let src = self.storage.as_ptr().wrapping_add(pos2);
        // SAFETY: `src` addresses `n2` live elements of this array.
        unsafe { self.replace_raw(pos1, n1, src, n2) }
    }

    /// Replaces the `n1` elements at `pos1` with clones of the `n2`
    /// elements at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reading `n2` initialized elements. It may
    /// point into this array, in which case the whole range must lie within
    /// `[0, len)`.
    #[track_caller]
    pub unsafe fn replace_raw(
        &mut self,
        pos1: usize,
        n1: usize,
        src: *const T,
        n2: usize,
    ) -> Result<&mut Self> {
        check_range(self.len(), pos1, n1);
        if n2 <= n1 {
            let source = self.source_of(src);
            self.shrinking_replace(pos1, n1, source, n2);
            return Ok(self);
        }
        let delta = n2 - n1;
        let source = if delta <= self.back_capacity() {
            self.source_of(src)
        } else {
            self.relocate_for(delta, src)?
        };
        // SAFETY: `delta` more elements fit and `source` is resolved
        // against the current buffer.
        unsafe { self.growing_replace(pos1, n1, source, n2) };
        Ok(self)
    }

    /// Replaces the `n1` elements at `pos1` with `n2` clones of `value`.
    #[track_caller]
    pub fn replace_fill(
        &mut self,
        pos1: usize,
        n1: usize,
        value: &T,
        n2: usize,
    ) -> Result<&mut Self> {
        // SAFETY: `value` is a live reference.
        unsafe { self.replace_fill_raw(pos1, n1, value, n2) }
    }

    /// Replaces the `n1` elements at `pos1` with `n2` clones of the
    /// element at `index`.
    #[track_caller]
    pub fn replace_fill_within(
        &mut self,
        pos1: usize,
        n1: usize,
        index: usize,
        n2: usize,
    ) -> Result<&mut Self> {
        debug_assert!(index < self.len(), "index {index} out of range for length {}", self.len());
        let value = self.storage.as_ptr().wrapping_add(index);
        // SAFETY: `value` addresses a live element of this array.
        unsafe { self.replace_fill_raw(pos1, n1, value, n2) }
    }

    /// # Safety
    ///
    /// `value` must point to an initialized element, possibly one of this
    /// array's.
    #[track_caller]
    unsafe fn replace_fill_raw(
        &mut self,
        pos1: usize,
        n1: usize,
        value: *const T,
        n2: usize,
    ) -> Result<&mut Self> {
        check_range(self.len(), pos1, n1);
        if n2 <= n1 {
            let source = self.source_of(value);
            self.fill_slots(pos1, n2, source);
            return Ok(self.erase(pos1 + n2, n1 - n2));
        }
        let delta = n2 - n1;
        let source = if delta <= self.back_capacity() {
            self.source_of(value)
        } else {
            self.relocate_for(delta, value)?
        };
        // SAFETY: `delta` more elements fit and `source` is resolved
        // against the current buffer.
        unsafe { self.growing_fill(pos1, n1, source, n2) };
        Ok(self)
    }

    // ========================================================================
    // Convenience forms
    // ========================================================================

    #[track_caller]
    pub fn append(&mut self, src: &[T]) -> Result<&mut Self> {
        self.replace(self.len(), 0, src)
    }

    /// Appends clones of the `n` elements at `pos`.
    #[track_caller]
    pub fn append_within(&mut self, pos: usize, n: usize) -> Result<&mut Self> {
        self.replace_within(self.len(), 0, pos, n)
    }

    #[track_caller]
    pub fn push_back_fill(&mut self, value: &T, n: usize) -> Result<&mut Self> {
        self.replace_fill(self.len(), 0, value, n)
    }

    /// Appends a clone of the element at `index`.
    ///
    /// ```
    /// use ali_core::FixedArray;
    ///
    /// let mut a = FixedArray::<String, 4>::new();
    /// a.push_back("x".to_string()).unwrap();
    /// a.push_back_from_self(0).unwrap();
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(a[1], "x");
    /// ```
    #[track_caller]
    pub fn push_back_from_self(&mut self, index: usize) -> Result<&mut Self> {
        self.replace_fill_within(self.len(), 0, index, 1)
    }

    #[track_caller]
    pub fn push_front_fill(&mut self, value: &T, n: usize) -> Result<&mut Self> {
        self.replace_fill(0, 0, value, n)
    }

    #[track_caller]
    pub fn push_front_slice(&mut self, src: &[T]) -> Result<&mut Self> {
        self.replace(0, 0, src)
    }

    #[track_caller]
    pub fn insert_fill(&mut self, pos: usize, value: &T, n: usize) -> Result<&mut Self> {
        self.replace_fill(pos, 0, value, n)
    }

    #[track_caller]
    pub fn insert_slice(&mut self, pos: usize, src: &[T]) -> Result<&mut Self> {
        self.replace(pos, 0, src)
    }

    /// Inserts before `pos1` clones of the `n2` elements at `pos2`.
    #[track_caller]
    pub fn insert_within(&mut self, pos1: usize, pos2: usize, n2: usize) -> Result<&mut Self> {
        self.replace_within(pos1, 0, pos2, n2)
    }

    /// Replaces the whole content with clones of `src`.
    #[track_caller]
    pub fn assign(&mut self, src: &[T]) -> Result<&mut Self> {
        self.replace(0, self.len(), src)
    }

    #[track_caller]
    pub fn assign_fill(&mut self, value: &T, n: usize) -> Result<&mut Self> {
        self.replace_fill(0, self.len(), value, n)
    }

    /// Grows or shrinks to `n` elements, filling with clones of `value`.
    #[track_caller]
    pub fn resize_with_value(&mut self, n: usize, value: &T) -> Result<&mut Self> {
        let len = self.len();
        if n <= len {
            return Ok(self.erase_back(len - n));
        }
        self.push_back_fill(value, n - len)
    }

    // ========================================================================
    // Strategies
    // ========================================================================

    fn source_of(&self, src: *const T) -> Source<T> {
        if size_of::<T>() == 0 {
            return Source::External(src);
        }
        let len = self.len();
        match internal_offset(self.storage.as_ptr(), len, src) {
            Some(from) if from < len => Source::Internal(from),
            _ => Source::External(src),
        }
    }

    /// Moves the elements into a storage with room for `delta` more, then
    /// resolves `src` against the buffer they moved out of.
    #[track_caller]
    fn relocate_for(&mut self, delta: usize, src: *const T) -> Result<Source<T>> {
        let capacity = self.calculate_auto_capacity(delta)?;
        let (old_base, old_len) = (self.storage.as_ptr(), self.len());
        self.relocate(capacity)?;
        // `old_base` is released by now; only its address is compared.
        match internal_offset(old_base, old_len, src) {
            Some(from) if from < old_len && size_of::<T>() != 0 => {
                tracing::trace!(from, "replacement source moved with the array");
                Ok(Source::Internal(from))
            }
            _ => Ok(Source::External(src)),
        }
    }

    fn shrinking_replace(&mut self, pos1: usize, n1: usize, source: Source<T>, n2: usize) {
        match source {
            Source::Internal(from) => assign_within(self.as_mut_slice(), pos1, from, n2),
            Source::External(src) => {
                // SAFETY: external sources are valid for `n2` reads and do
                // not overlap the array.
                let src = unsafe { slice::from_raw_parts(src, n2) };
                self.as_mut_slice()[pos1..pos1 + n2].clone_from_slice(src);
            }
        }
        self.erase(pos1 + n2, n1 - n2);
    }

    /// # Safety
    ///
    /// `n2 - n1 <= back_capacity()`.
    unsafe fn growing_replace(&mut self, pos1: usize, n1: usize, source: Source<T>, n2: usize) {
        let (len, end1, delta) = (self.len(), pos1 + n1, n2 - n1);
        debug_assert!(delta <= self.back_capacity());
        match source {
            Source::Internal(from) => {
                // Clone the source's tail onto the back while every source
                // element is still in place, assign its head over the
                // replaced range, then rotate the new tail into position.
                debug_assert!(n2 <= len - from);
                for i in n1..n2 {
                    let item = self.as_slice()[from + i].clone();
                    // SAFETY: fewer than `delta` elements appended so far.
                    unsafe { self.write_back(item) };
                }
                assign_within(self.as_mut_slice(), pos1, from, n1);
                self.as_mut_slice()[end1..].rotate_right(delta);
            }
            Source::External(src) => {
                // SAFETY: external sources are valid for `n2` reads and do
                // not overlap the array.
                let src = unsafe { slice::from_raw_parts(src, n2) };
                self.as_mut_slice()[pos1..end1].clone_from_slice(&src[..n1]);
                // SAFETY: the tail is detached while the gap is filled, so
                // a panicking clone leaks it instead of dropping it twice.
                unsafe {
                    self.storage.set_len(end1);
                    let base = self.storage.as_mut_ptr();
                    ptr::copy(base.add(end1), base.add(end1 + delta), len - end1);
                    for (i, item) in src[n1..].iter().enumerate() {
                        ptr::write(base.add(end1 + i), item.clone());
                    }
                    self.storage.set_len(len + delta);
                }
            }
        }
    }

    /// Clone-assigns `value` to the `n` slots at `pos`. A slot holding the
    /// value itself is left alone.
    fn fill_slots(&mut self, pos: usize, n: usize, source: Source<T>) {
        match source {
            Source::Internal(j) => {
                let s = self.as_mut_slice();
                for i in (pos..pos + n).filter(|&i| i != j) {
                    clone_between(s, j, i);
                }
            }
            Source::External(value) => {
                // SAFETY: external values are valid and outside the array.
                let value = unsafe { &*value };
                for slot in &mut self.as_mut_slice()[pos..pos + n] {
                    slot.clone_from(value);
                }
            }
        }
    }

    /// # Safety
    ///
    /// `n2 - n1 <= back_capacity()`.
    unsafe fn growing_fill(&mut self, pos1: usize, n1: usize, source: Source<T>, n2: usize) {
        let (len, end1, delta) = (self.len(), pos1 + n1, n2 - n1);
        debug_assert!(delta <= self.back_capacity());
        self.fill_slots(pos1, n1, source);
        // An internal value past the replaced range moves with the tail.
        let source = match source {
            Source::Internal(j) if j >= end1 => Source::Internal(j + delta),
            other => other,
        };
        // SAFETY: as in `growing_replace`; the value's slot is never inside
        // the gap being written.
        unsafe {
            self.storage.set_len(end1);
            let base = self.storage.as_mut_ptr();
            ptr::copy(base.add(end1), base.add(end1 + delta), len - end1);
            for i in 0..delta {
                let value = match source {
                    Source::Internal(j) => &*base.add(j),
                    Source::External(value) => &*value,
                };
                ptr::write(base.add(end1 + i), value.clone());
            }
            self.storage.set_len(len + delta);
        }
    }

    /// # Safety
    ///
    /// `back_capacity() > 0`.
    unsafe fn write_back(&mut self, item: T) {
        let len = self.len();
        // SAFETY: guaranteed by the caller.
        unsafe {
            ptr::write(self.storage.as_mut_ptr().add(len), item);
            self.storage.set_len(len + 1);
        }
    }
}
