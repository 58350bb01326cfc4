//! In-place sort, partition, heap and permutation algorithms.
//!
//! All algorithms work on mutable slices and take the comparator by
//! `&mut` so that recursive calls can share it. [`ViewMut`](crate::ViewMut)
//! exposes them as methods with `Ord::cmp` as the default comparator.

use core::{cmp::Ordering, mem};

use crate::config::QUICK_SORT_THRESHOLD;

/// Reorders `s` so that the elements satisfying `pred` come first, keeping
/// the relative order within both groups. Returns the number of elements
/// that satisfied `pred`.
///
/// Bisects, partitions both halves, and merges them with one rotation.
/// Recursion depth is `O(log n)`.
pub fn stable_partition<T, P>(s: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    stable_partition_impl(s, &mut pred)
}

fn stable_partition_impl<T, P>(s: &mut [T], pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    match s.len() {
        0 => 0,
        1 => usize::from(pred(&s[0])),
        len => {
            let mid = len / 2;
            let left = stable_partition_impl(&mut s[..mid], pred);
            let right = mid + stable_partition_impl(&mut s[mid..], pred);
            // [0, left) and [mid, right) are accepted; bring them together.
            s[left..right].rotate_left(mid - left);
            left + (right - mid)
        }
    }
}

/// Moves the elements satisfying `pred` to the front in their original
/// order, in a single pass. The order of the remaining elements is
/// unspecified. Returns the number of elements that satisfied `pred`.
pub fn stable_partition_left_only<T, P>(s: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut kept = 0;
    for i in 0..s.len() {
        if pred(&s[i]) {
            s.swap(kept, i);
            kept += 1;
        }
    }
    kept
}

/// Partitions `s` around the element at `pivot`. Returns the pivot's final
/// index `p`: everything before it compares not greater, everything after
/// it compares greater.
pub fn unstable_partition_around_pivot<T, F>(s: &mut [T], pivot: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(pivot < s.len(), "pivot {pivot} out of range for length {}", s.len());
    let last = s.len() - 1;
    s.swap(pivot, last);
    // Elements in [end, last) are greater than the pivot.
    let mut end = last;
    for i in (0..last).rev() {
        if compare(&s[i], &s[last]) == Ordering::Greater {
            end -= 1;
            s.swap(i, end);
        }
    }
    s.swap(end, last);
    end
}

pub fn insertion_sort_by<T, F>(s: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..s.len() {
        let mut j = i;
        while j > 0 && compare(&s[j - 1], &s[j]) == Ordering::Greater {
            s.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Quicksort with a middle pivot. Recurses into the smaller side and loops
/// on the larger one, so the stack depth stays logarithmic; short runs are
/// finished with insertion sort.
pub fn quick_sort_by<T, F>(s: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut s = s;
    while s.len() > QUICK_SORT_THRESHOLD {
        let mid = s.len() / 2;
        let p = unstable_partition_around_pivot(s, mid, compare);
        let (left, right) = mem::take(&mut s).split_at_mut(p);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_by(left, compare);
            s = right;
        } else {
            quick_sort_by(right, compare);
            s = left;
        }
    }
    insertion_sort_by(s, compare);
}

/// Sifts the element at `i` down until both children compare not greater.
pub fn down_heap_by<T, F>(s: &mut [T], mut i: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = s.len();
    loop {
        let left = 2 * i + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && compare(&s[left], &s[right]) == Ordering::Less {
            right
        } else {
            left
        };
        if compare(&s[i], &s[child]) != Ordering::Less {
            break;
        }
        s.swap(i, child);
        i = child;
    }
}

/// Sifts the element at `i` up until its parent compares not less.
pub fn up_heap_by<T, F>(s: &mut [T], mut i: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(i < s.len());
    while i > 0 {
        let parent = (i - 1) / 2;
        if compare(&s[parent], &s[i]) != Ordering::Less {
            break;
        }
        s.swap(parent, i);
        i = parent;
    }
}

/// Arranges `s` as a max-heap.
pub fn make_heap_by<T, F>(s: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in (0..s.len() / 2).rev() {
        down_heap_by(s, i, compare);
    }
}

pub fn is_heap_by<T, F>(s: &[T], compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..s.len()).all(|i| compare(&s[(i - 1) / 2], &s[i]) != Ordering::Less)
}

/// Heapsort: `O(n log n)` on every input, no extra storage.
pub fn heap_sort_by<T, F>(s: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    make_heap_by(s, compare);
    for end in (1..s.len()).rev() {
        s.swap(0, end);
        down_heap_by(&mut s[..end], 0, compare);
    }
}

/// Advances `s` to the next lexicographic permutation. Returns `false`
/// when `s` was the last one, in which case it is reset to the first
/// (sorted) permutation.
pub fn next_permutation_by<T, F>(s: &mut [T], compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if s.len() < 2 {
        return false;
    }
    let mut i = s.len() - 1;
    while i > 0 && compare(&s[i - 1], &s[i]) != Ordering::Less {
        i -= 1;
    }
    if i == 0 {
        s.reverse();
        return false;
    }
    let mut j = s.len() - 1;
    while compare(&s[j], &s[i - 1]) != Ordering::Greater {
        j -= 1;
    }
    s.swap(i - 1, j);
    s[i..].reverse();
    true
}

#[cfg(test)]
#[path = "algo_test.rs"]
mod algo_test;
