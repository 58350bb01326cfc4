//! Non-owning views over a contiguous run of elements.
//!
//! Every type that exposes its elements as a slice implements [`View`] and
//! gets the full read-only vocabulary (sub-views, searches, comparisons,
//! trimming, alias queries) as provided methods. [`ViewMut`] adds the
//! in-place mutations and the algorithms of [`crate::algo`].
//!
//! Searches take an optional *transform* in their `_by` variants: both
//! sides of every comparison are passed through it first, which is how the
//! case-insensitive variants in [`TextView`] are built.
//!
//! Index arguments are preconditions checked with `debug_assert!`:
//! `pos <= len` and `n <= len - pos`.

use core::cmp::Ordering;

use crate::algo;

mod bytes;
mod pointer;
mod refs;
mod text;

pub use bytes::{ByteView, ByteViewMut};
pub(crate) use bytes::{check_int_width, check_long_width};
pub use pointer::{ArrayConstPtr, ArrayPtr};
pub use refs::{ArrayConstRef, ArrayRef};
pub use text::{TextChar, TextView};

#[inline(always)]
pub(crate) fn check_range(len: usize, pos: usize, n: usize) {
    debug_assert!(pos <= len, "position {pos} out of range for length {len}");
    debug_assert!(n <= len - pos, "count {n} out of range at {pos} for length {len}");
}

/// Read-only operations shared by every view and by the arrays themselves.
pub trait View<T> {
    fn as_slice(&self) -> &[T];

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Element at `i`. Panics outside `[0, len)`.
    #[inline(always)]
    fn at(&self, i: usize) -> &T {
        debug_assert!(i < self.len(), "index {i} out of range for length {}", self.len());
        &self.as_slice()[i]
    }

    fn front(&self) -> &T {
        self.at(0)
    }

    fn back(&self) -> &T {
        self.at(self.len() - 1)
    }

    // ========================================================================
    // Sub-views
    // ========================================================================

    fn as_const_ref(&self) -> ArrayConstRef<'_, T> {
        ArrayConstRef::new(self.as_slice())
    }

    /// The `n` elements starting at `pos`.
    fn ref_range(&self, pos: usize, n: usize) -> ArrayConstRef<'_, T> {
        check_range(self.len(), pos, n);
        ArrayConstRef::new(&self.as_slice()[pos..pos + n])
    }

    /// The first `pos` elements.
    fn ref_left(&self, pos: usize) -> ArrayConstRef<'_, T> {
        self.ref_range(0, pos)
    }

    /// Everything from `pos` to the end.
    fn ref_right(&self, pos: usize) -> ArrayConstRef<'_, T> {
        check_range(self.len(), pos, 0);
        self.ref_range(pos, self.len() - pos)
    }

    fn ref_front(&self, n: usize) -> ArrayConstRef<'_, T> {
        self.ref_range(0, n)
    }

    fn ref_back(&self, n: usize) -> ArrayConstRef<'_, T> {
        check_range(self.len(), 0, n);
        self.ref_range(self.len() - n, n)
    }

    fn ref_not_front(&self, n: usize) -> ArrayConstRef<'_, T> {
        self.ref_right(n)
    }

    fn ref_not_back(&self, n: usize) -> ArrayConstRef<'_, T> {
        check_range(self.len(), 0, n);
        self.ref_left(self.len() - n)
    }

    fn pointer(&self) -> ArrayConstPtr<'_, T> {
        ArrayConstPtr::new(self.as_slice())
    }

    fn pointer_range(&self, pos: usize, n: usize) -> ArrayConstPtr<'_, T> {
        self.ref_range(pos, n).pointer()
    }

    fn pointer_right(&self, pos: usize) -> ArrayConstPtr<'_, T> {
        self.ref_right(pos).pointer()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn is_equal_to(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.as_slice() == other
    }

    fn is_equal_to_by<K, F>(&self, other: &[T], transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let this = self.as_slice();
        this.len() == other.len()
            && this
                .iter()
                .zip(other)
                .all(|(a, b)| transform(a) == transform(b))
    }

    /// Lexicographic three-way comparison.
    fn compare(&self, other: &[T]) -> Ordering
    where
        T: Ord,
    {
        self.as_slice().cmp(other)
    }

    /// Lexicographic comparison for partially ordered elements such as
    /// floats. `None` when an unordered pair (a NaN) decides the result.
    fn partial_compare(&self, other: &[T]) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        self.as_slice().partial_cmp(other)
    }

    fn compare_by<K, F>(&self, other: &[T], transform: F) -> Ordering
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let this = self.as_slice();
        for (a, b) in this.iter().zip(other) {
            match transform(a).cmp(&transform(b)) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        this.len().cmp(&other.len())
    }

    // ========================================================================
    // Searching
    // ========================================================================

    fn index_of_first(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == value)
    }

    fn index_of_first_by<K, F>(&self, value: &T, transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let key = transform(value);
        self.as_slice().iter().position(|x| transform(x) == key)
    }

    fn index_of_last(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|x| x == value)
    }

    fn index_of_last_by<K, F>(&self, value: &T, transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let key = transform(value);
        self.as_slice().iter().rposition(|x| transform(x) == key)
    }

    /// Start of the first occurrence of `needle`. An empty needle matches
    /// at 0.
    fn index_of_first_n(&self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        find_n(self.as_slice(), needle, |a, b| a == b)
    }

    fn index_of_first_n_by<K, F>(&self, needle: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        find_n(self.as_slice(), needle, |a, b| transform(a) == transform(b))
    }

    /// Start of the last occurrence of `needle`. An empty needle matches
    /// at `len`.
    fn index_of_last_n(&self, needle: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        rfind_n(self.as_slice(), needle, |a, b| a == b)
    }

    fn index_of_last_n_by<K, F>(&self, needle: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        rfind_n(self.as_slice(), needle, |a, b| transform(a) == transform(b))
    }

    fn index_of_first_if<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.as_slice().iter().position(pred)
    }

    fn index_of_first_if_not<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<usize> {
        self.as_slice().iter().position(|x| !pred(x))
    }

    fn index_of_last_if<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.as_slice().iter().rposition(pred)
    }

    fn index_of_last_if_not<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<usize> {
        self.as_slice().iter().rposition(|x| !pred(x))
    }

    /// First element that appears in `set`.
    fn index_of_first_of(&self, set: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_first_if(|x| set.contains(x))
    }

    fn index_of_first_of_by<K, F>(&self, set: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_first_if(|x| in_set_by(x, set, &transform))
    }

    /// Treats `self` and `set` as two preference lists, most desirable
    /// first, and picks a common option with a small summed rank.
    ///
    /// The first common option of each list is ranked by its position in
    /// both lists; the lower sum wins and ties go to `self`'s choice.
    /// Returns the chosen option's index in `self`.
    ///
    /// ```
    /// use ali_core::{ArrayConstRef, View};
    ///
    /// let ours = ArrayConstRef::new(&["opus", "pcmu", "pcma"]);
    /// assert_eq!(ours.prioritized_index_of_first_of(&["g722", "pcma", "opus"]), Some(0));
    /// assert_eq!(ours.prioritized_index_of_first_of(&["pcma", "g729", "gsm", "opus"]), Some(2));
    /// ```
    fn prioritized_index_of_first_of(&self, set: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        prioritized_index(self.as_slice(), set, |a, b| a == b)
    }

    fn prioritized_index_of_first_of_by<K, F>(&self, set: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        prioritized_index(self.as_slice(), set, |a, b| transform(a) == transform(b))
    }

    fn index_of_first_not_of(&self, set: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_first_if(|x| !set.contains(x))
    }

    fn index_of_first_not_of_by<K, F>(&self, set: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_first_if(|x| !in_set_by(x, set, &transform))
    }

    fn index_of_last_of(&self, set: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_last_if(|x| set.contains(x))
    }

    fn index_of_last_of_by<K, F>(&self, set: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_last_if(|x| in_set_by(x, set, &transform))
    }

    fn index_of_last_not_of(&self, set: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_last_if(|x| !set.contains(x))
    }

    fn index_of_last_not_of_by<K, F>(&self, set: &[T], transform: F) -> Option<usize>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_last_if(|x| !in_set_by(x, set, &transform))
    }

    fn index_of_min(&self) -> Option<usize>
    where
        T: Ord,
    {
        self.index_of_min_by(T::cmp)
    }

    /// Index of the first smallest element.
    fn index_of_min_by<F>(&self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let this = self.as_slice();
        let mut best = 0;
        for i in 1..this.len() {
            if compare(&this[i], &this[best]) == Ordering::Less {
                best = i;
            }
        }
        (!this.is_empty()).then_some(best)
    }

    fn index_of_max(&self) -> Option<usize>
    where
        T: Ord,
    {
        self.index_of_max_by(T::cmp)
    }

    /// Index of the first largest element.
    fn index_of_max_by<F>(&self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let this = self.as_slice();
        let mut best = 0;
        for i in 1..this.len() {
            if compare(&this[i], &this[best]) == Ordering::Greater {
                best = i;
            }
        }
        (!this.is_empty()).then_some(best)
    }

    // ========================================================================
    // Counting and membership
    // ========================================================================

    fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_if(|x| x == value)
    }

    fn count_by<K, F>(&self, value: &T, transform: F) -> usize
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let key = transform(value);
        self.count_if(|x| transform(x) == key)
    }

    /// Number of non-overlapping occurrences of `needle`, which must not be
    /// empty.
    fn count_n(&self, needle: &[T]) -> usize
    where
        T: PartialEq,
    {
        count_n_with(self.as_slice(), needle, |a, b| a == b)
    }

    /// `needle` must not be empty.
    fn count_n_by<K, F>(&self, needle: &[T], transform: F) -> usize
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        count_n_with(self.as_slice(), needle, |a, b| transform(a) == transform(b))
    }

    fn count_if<P: FnMut(&T) -> bool>(&self, mut pred: P) -> usize {
        self.as_slice().iter().filter(|x| pred(x)).count()
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of_first(value).is_some()
    }

    fn contains_by<K, F>(&self, value: &T, transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_first_by(value, transform).is_some()
    }

    fn contains_n(&self, needle: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.index_of_first_n(needle).is_some()
    }

    fn contains_n_by<K, F>(&self, needle: &[T], transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.index_of_first_n_by(needle, transform).is_some()
    }

    /// Whether `pred` holds for any two distinct positions. Examines every
    /// pair, later element first.
    fn contains_pair<P: FnMut(&T, &T) -> bool>(&self, mut pred: P) -> bool {
        let this = self.as_slice();
        (1..this.len())
            .rev()
            .any(|i| (0..i).rev().any(|j| pred(&this[i], &this[j])))
    }

    /// Whether any element occurs more than once.
    fn contains_duplicates(&self) -> bool
    where
        T: PartialEq,
    {
        self.contains_pair(|a, b| a == b)
    }

    /// True for an empty view.
    fn all<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.index_of_last_if_not(pred).is_none()
    }

    fn any<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.index_of_last_if(pred).is_some()
    }

    /// True for an empty view.
    fn none<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        !self.any(pred)
    }

    fn begins_with(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().first() == Some(value)
    }

    fn begins_with_by<K, F>(&self, value: &T, transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.as_slice()
            .first()
            .is_some_and(|x| transform(x) == transform(value))
    }

    fn begins_with_n(&self, prefix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().starts_with(prefix)
    }

    fn begins_with_n_by<K, F>(&self, prefix: &[T], transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        prefix.len() <= self.len() && self.ref_front(prefix.len()).is_equal_to_by(prefix, transform)
    }

    fn ends_with(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().last() == Some(value)
    }

    fn ends_with_by<K, F>(&self, value: &T, transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.as_slice()
            .last()
            .is_some_and(|x| transform(x) == transform(value))
    }

    fn ends_with_n(&self, suffix: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().ends_with(suffix)
    }

    fn ends_with_n_by<K, F>(&self, suffix: &[T], transform: F) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        suffix.len() <= self.len() && self.ref_back(suffix.len()).is_equal_to_by(suffix, transform)
    }

    // ========================================================================
    // Trimming
    // ========================================================================

    /// Drops leading elements that appear in `set`.
    fn trim_left(&self, set: &[T]) -> ArrayConstRef<'_, T>
    where
        T: PartialEq,
    {
        self.trim_left_if(|x| set.contains(x))
    }

    fn trim_right(&self, set: &[T]) -> ArrayConstRef<'_, T>
    where
        T: PartialEq,
    {
        self.trim_right_if(|x| set.contains(x))
    }

    fn trim(&self, set: &[T]) -> ArrayConstRef<'_, T>
    where
        T: PartialEq,
    {
        self.trim_if(|x| set.contains(x))
    }

    fn trim_left_if<P: FnMut(&T) -> bool>(&self, pred: P) -> ArrayConstRef<'_, T> {
        let start = self.index_of_first_if_not(pred).unwrap_or(self.len());
        self.ref_right(start)
    }

    fn trim_right_if<P: FnMut(&T) -> bool>(&self, pred: P) -> ArrayConstRef<'_, T> {
        let end = self.index_of_last_if_not(pred).map_or(0, |i| i + 1);
        self.ref_left(end)
    }

    fn trim_if<P: FnMut(&T) -> bool>(&self, mut pred: P) -> ArrayConstRef<'_, T> {
        let start = self.index_of_first_if_not(&mut pred).unwrap_or(self.len());
        let end = self.index_of_last_if_not(&mut pred).map_or(start, |i| i + 1);
        self.ref_range(start, end - start)
    }

    // ========================================================================
    // Alias queries
    // ========================================================================

    /// Index of `element` if it lives inside this view.
    fn is_internal_element(&self, element: &T) -> Option<usize> {
        self.is_internal_pointer(element)
            .filter(|&i| i < self.len())
    }

    /// Index of `ptr` if it points into this view. One past the end counts
    /// as internal.
    fn is_internal_pointer(&self, ptr: *const T) -> Option<usize> {
        internal_offset(self.as_slice().as_ptr(), self.len(), ptr)
            .filter(|_| size_of::<T>() != 0)
    }

    /// Offset of `other` if it lies entirely inside this view.
    fn is_internal_ref(&self, other: &[T]) -> Option<usize> {
        self.is_internal_pointer(other.as_ptr())
            .filter(|&i| other.len() <= self.len() - i)
    }

    /// Whether the two views share at least one element.
    fn overlaps_with(&self, other: &[T]) -> bool {
        let this = self.as_slice().as_ptr_range();
        let that = other.as_ptr_range();
        size_of::<T>() != 0 && this.start < that.end && that.start < this.end
    }

    // ========================================================================
    // Order queries
    // ========================================================================

    fn is_sorted(&self) -> bool
    where
        T: Ord,
    {
        self.is_sorted_by(T::cmp)
    }

    fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_slice()
            .windows(2)
            .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
    }

    fn is_heap(&self) -> bool
    where
        T: Ord,
    {
        algo::is_heap_by(self.as_slice(), &mut T::cmp)
    }

    fn is_heap_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::is_heap_by(self.as_slice(), &mut compare)
    }
}

fn in_set_by<T, K: PartialEq>(x: &T, set: &[T], transform: &impl Fn(&T) -> K) -> bool {
    let key = transform(x);
    set.iter().any(|s| transform(s) == key)
}

fn prioritized_index<T>(this: &[T], set: &[T], eq: impl Fn(&T, &T) -> bool) -> Option<usize> {
    let position = |list: &[T], x: &T| list.iter().position(|y| eq(x, y));
    let ours = this.iter().position(|x| position(set, x).is_some())?;
    let ours_rank_there = position(set, &this[ours])?;
    let theirs = set.iter().position(|y| position(this, y).is_some())?;
    let theirs_rank_here = position(this, &set[theirs])?;
    if theirs + theirs_rank_here < ours + ours_rank_there {
        Some(theirs_rank_here)
    } else {
        Some(ours)
    }
}

fn find_n<T>(hay: &[T], needle: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&i| {
        hay[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| eq(a, b))
    })
}

fn rfind_n<T>(hay: &[T], needle: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).rev().find(|&i| {
        hay[i..i + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| eq(a, b))
    })
}

fn count_n_with<T>(hay: &[T], needle: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> usize {
    debug_assert!(!needle.is_empty(), "cannot count an empty needle");
    let step = needle.len().max(1);
    let mut found = 0;
    let mut pos = 0;
    while pos <= hay.len() {
        let Some(i) = find_n(&hay[pos..], needle, &mut eq) else {
            break;
        };
        found += 1;
        pos += i + step;
    }
    found
}

/// Offset of `ptr` within `[base, base + len]`, measured in elements.
pub(crate) fn internal_offset<T>(base: *const T, len: usize, ptr: *const T) -> Option<usize> {
    let size = size_of::<T>().max(1);
    let offset = ptr.addr().checked_sub(base.addr())?;
    (offset % size == 0 && offset / size <= len).then_some(offset / size)
}

/// In-place mutations and algorithms, for views that own a unique borrow.
pub trait ViewMut<T>: View<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    fn at_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len(), "index {i} out of range for length {}", self.len());
        &mut self.as_mut_slice()[i]
    }

    fn front_mut(&mut self) -> &mut T {
        self.at_mut(0)
    }

    fn back_mut(&mut self) -> &mut T {
        let last = self.len() - 1;
        self.at_mut(last)
    }

    fn as_mutable_ref(&mut self) -> ArrayRef<'_, T> {
        ArrayRef::new(self.as_mut_slice())
    }

    fn mutable_ref_range(&mut self, pos: usize, n: usize) -> ArrayRef<'_, T> {
        check_range(self.len(), pos, n);
        ArrayRef::new(&mut self.as_mut_slice()[pos..pos + n])
    }

    fn mutable_ref_left(&mut self, pos: usize) -> ArrayRef<'_, T> {
        self.mutable_ref_range(0, pos)
    }

    fn mutable_ref_right(&mut self, pos: usize) -> ArrayRef<'_, T> {
        check_range(self.len(), pos, 0);
        let n = self.len() - pos;
        self.mutable_ref_range(pos, n)
    }

    fn mutable_ref_front(&mut self, n: usize) -> ArrayRef<'_, T> {
        self.mutable_ref_range(0, n)
    }

    fn mutable_ref_back(&mut self, n: usize) -> ArrayRef<'_, T> {
        check_range(self.len(), 0, n);
        let pos = self.len() - n;
        self.mutable_ref_range(pos, n)
    }

    fn mutable_ref_not_front(&mut self, n: usize) -> ArrayRef<'_, T> {
        self.mutable_ref_right(n)
    }

    fn mutable_ref_not_back(&mut self, n: usize) -> ArrayRef<'_, T> {
        check_range(self.len(), 0, n);
        let pos = self.len() - n;
        self.mutable_ref_left(pos)
    }

    fn mutable_pointer(&mut self) -> ArrayPtr<'_, T> {
        ArrayPtr::new(self.as_mut_slice())
    }

    fn mutable_pointer_right(&mut self, pos: usize) -> ArrayPtr<'_, T> {
        ArrayPtr::new(self.mutable_ref_right(pos).into_mut_slice())
    }

    // ========================================================================
    // Element-wise writes
    // ========================================================================

    fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        for x in self.as_mut_slice() {
            x.clone_from(value);
        }
    }

    /// Clones `src` over the elements starting at `pos`.
    fn copy(&mut self, pos: usize, src: &[T])
    where
        T: Clone,
    {
        check_range(self.len(), pos, src.len());
        self.as_mut_slice()[pos..pos + src.len()].clone_from_slice(src);
    }

    fn copy_front(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.copy(0, src);
    }

    fn copy_back(&mut self, src: &[T])
    where
        T: Clone,
    {
        check_range(self.len(), 0, src.len());
        let pos = self.len() - src.len();
        self.copy(pos, src);
    }

    /// Moves the contents of `src` into the elements starting at `pos`
    /// without cloning. `src` receives the values that were overwritten.
    fn move_from(&mut self, pos: usize, src: &mut [T]) {
        check_range(self.len(), pos, src.len());
        self.as_mut_slice()[pos..pos + src.len()].swap_with_slice(src);
    }

    fn move_front(&mut self, src: &mut [T]) {
        self.move_from(0, src);
    }

    fn move_back(&mut self, src: &mut [T]) {
        check_range(self.len(), 0, src.len());
        let pos = self.len() - src.len();
        self.move_from(pos, src);
    }

    /// Exchanges the elements starting at `pos` with `other`.
    fn swap_block(&mut self, pos: usize, other: &mut [T]) {
        self.move_from(pos, other);
    }

    fn swap_block_front(&mut self, other: &mut [T]) {
        self.move_front(other);
    }

    fn swap_block_back(&mut self, other: &mut [T]) {
        self.move_back(other);
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Rotates so that the element at `n` becomes the first.
    fn rotate_left(&mut self, n: usize) {
        check_range(self.len(), n, 0);
        self.as_mut_slice().rotate_left(n);
    }

    /// Rotates so that the last `n` elements move to the front.
    fn rotate_right(&mut self, n: usize) {
        check_range(self.len(), n, 0);
        self.as_mut_slice().rotate_right(n);
    }

    /// Moves the elements satisfying `pred` to the front, preserving the
    /// relative order of both groups. Returns the size of the first group.
    fn stable_partition<P: FnMut(&T) -> bool>(&mut self, pred: P) -> usize {
        algo::stable_partition(self.as_mut_slice(), pred)
    }

    /// Like [`stable_partition`](Self::stable_partition) but only the front
    /// group keeps its order; the rest is left in unspecified order.
    fn stable_partition_left_only<P: FnMut(&T) -> bool>(&mut self, pred: P) -> usize {
        algo::stable_partition_left_only(self.as_mut_slice(), pred)
    }

    fn unstable_partition_around_pivot(&mut self, pivot: usize) -> usize
    where
        T: Ord,
    {
        algo::unstable_partition_around_pivot(self.as_mut_slice(), pivot, &mut T::cmp)
    }

    fn unstable_partition_around_pivot_by<F>(&mut self, pivot: usize, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::unstable_partition_around_pivot(self.as_mut_slice(), pivot, &mut compare)
    }

    /// Sorts with [`heap_sort`](Self::heap_sort).
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.heap_sort();
    }

    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.heap_sort_by(compare);
    }

    fn heap_sort(&mut self)
    where
        T: Ord,
    {
        algo::heap_sort_by(self.as_mut_slice(), &mut T::cmp);
    }

    fn heap_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::heap_sort_by(self.as_mut_slice(), &mut compare);
    }

    fn quick_sort(&mut self)
    where
        T: Ord,
    {
        algo::quick_sort_by(self.as_mut_slice(), &mut T::cmp);
    }

    fn quick_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::quick_sort_by(self.as_mut_slice(), &mut compare);
    }

    fn insertion_sort(&mut self)
    where
        T: Ord,
    {
        algo::insertion_sort_by(self.as_mut_slice(), &mut T::cmp);
    }

    fn insertion_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::insertion_sort_by(self.as_mut_slice(), &mut compare);
    }

    fn make_heap(&mut self)
    where
        T: Ord,
    {
        algo::make_heap_by(self.as_mut_slice(), &mut T::cmp);
    }

    fn make_heap_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::make_heap_by(self.as_mut_slice(), &mut compare);
    }

    /// Restores the heap property after the element at `i` grew.
    fn up_heap(&mut self, i: usize)
    where
        T: Ord,
    {
        algo::up_heap_by(self.as_mut_slice(), i, &mut T::cmp);
    }

    /// Restores the heap property after the element at `i` shrank.
    fn down_heap(&mut self, i: usize)
    where
        T: Ord,
    {
        algo::down_heap_by(self.as_mut_slice(), i, &mut T::cmp);
    }

    fn next_permutation(&mut self) -> bool
    where
        T: Ord,
    {
        algo::next_permutation_by(self.as_mut_slice(), &mut T::cmp)
    }

    fn next_permutation_by<F>(&mut self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::next_permutation_by(self.as_mut_slice(), &mut compare)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
