//! Tests for the generic view operations

use super::*;
use pretty_assertions::assert_eq;

// ============================================================================
// Sub-view Tests
// ============================================================================

#[test]
fn test_sub_views() {
    let data = [0, 1, 2, 3, 4, 5];
    let v = ArrayConstRef::new(&data);
    assert_eq!(v.ref_range(1, 3).as_slice(), &[1, 2, 3]);
    assert_eq!(v.ref_left(2).as_slice(), &[0, 1]);
    assert_eq!(v.ref_right(4).as_slice(), &[4, 5]);
    assert_eq!(v.ref_front(1).as_slice(), &[0]);
    assert_eq!(v.ref_back(2).as_slice(), &[4, 5]);
    assert_eq!(v.ref_not_front(5).as_slice(), &[5]);
    assert_eq!(v.ref_not_back(5).as_slice(), &[0]);
    assert!(v.ref_right(6).is_empty());
    assert_eq!(*v.front(), 0);
    assert_eq!(*v.back(), 5);
}

#[test]
fn test_sub_views_outlive_parent_view() {
    let data = [1, 2, 3];
    let tail = {
        let whole = ArrayConstRef::new(&data);
        whole.ref_right(1)
    };
    assert_eq!(tail.as_slice(), &[2, 3]);
}

#[test]
#[should_panic]
fn test_at_out_of_range_panics() {
    let data = [1, 2, 3];
    ArrayConstRef::new(&data).at(3);
}

// ============================================================================
// Comparison Tests
// ============================================================================

#[test]
fn test_equality_and_ordering() {
    let a = ArrayConstRef::new(&[1, 2, 3]);
    assert!(a.is_equal_to(&[1, 2, 3]));
    assert!(!a.is_equal_to(&[1, 2]));
    assert_eq!(a.compare(&[1, 2, 4]), Ordering::Less);
    assert_eq!(a.compare(&[1, 2]), Ordering::Greater);
    assert_eq!(a.compare(&[1, 2, 3]), Ordering::Equal);
    assert!(a.is_equal_to_by(&[-1, -2, 3], |x: &i32| x.abs()));
    assert_eq!(a.compare_by(&[3, 2, 1], |x: &i32| -x), Ordering::Greater);
}

#[test]
fn test_float_comparison_uses_values() {
    let a = ArrayConstRef::new(&[0.0f64, 1.5]);
    assert!(a.is_equal_to(&[-0.0, 1.5]));
    assert!(!ArrayConstRef::new(&[f64::NAN]).is_equal_to(&[f64::NAN]));
    assert_eq!(a.partial_compare(&[0.0, 2.0]), Some(Ordering::Less));
    assert_eq!(ArrayConstRef::new(&[f64::NAN]).partial_compare(&[1.0]), None);
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_index_of_element() {
    let v = ArrayConstRef::new(&[5, 3, 5, 1]);
    assert_eq!(v.index_of_first(&5), Some(0));
    assert_eq!(v.index_of_last(&5), Some(2));
    assert_eq!(v.index_of_first(&7), None);
    assert_eq!(v.index_of_first_by(&-3, |x: &i32| x.abs()), Some(1));
    assert_eq!(v.index_of_first_if(|x| *x < 4), Some(1));
    assert_eq!(v.index_of_last_if(|x| *x < 4), Some(3));
    assert_eq!(v.index_of_first_if_not(|x| *x == 5), Some(1));
    assert_eq!(v.index_of_last_if_not(|x| *x < 5), Some(2));
}

#[test]
fn test_index_of_sequence() {
    let v = ArrayConstRef::new(&[1, 2, 1, 2, 3]);
    assert_eq!(v.index_of_first_n(&[1, 2]), Some(0));
    assert_eq!(v.index_of_last_n(&[1, 2]), Some(2));
    assert_eq!(v.index_of_first_n(&[2, 3]), Some(3));
    assert_eq!(v.index_of_first_n(&[3, 1]), None);
    assert_eq!(v.index_of_first_n(&[]), Some(0));
    assert_eq!(v.index_of_last_n(&[]), Some(5));
    assert_eq!(v.index_of_first_n(&[1, 2, 1, 2, 3, 4]), None);
}

#[test]
fn test_index_of_set() {
    let v = ArrayConstRef::new(&[4, 8, 15, 16, 23, 42]);
    assert_eq!(v.index_of_first_of(&[16, 42]), Some(3));
    assert_eq!(v.index_of_last_of(&[16, 4]), Some(3));
    assert_eq!(v.index_of_first_not_of(&[4, 8]), Some(2));
    assert_eq!(v.index_of_last_not_of(&[42, 23]), Some(3));
    assert_eq!(v.index_of_first_of(&[]), None);
    assert_eq!(v.index_of_first_of_by(&[-15], |x: &i32| x.abs()), Some(2));
}

#[test]
fn test_prioritized_index_of_set() {
    let ours = ArrayConstRef::new(&[10, 20, 30, 40]);
    // Our first pick ranks 0 + 3, theirs ranks 0 + 2.
    assert_eq!(ours.prioritized_index_of_first_of(&[30, 99, 98, 10]), Some(2));
    // Equal sums (1 + 0 and 0 + 1) keep our pick.
    assert_eq!(ours.prioritized_index_of_first_of(&[20, 10]), Some(0));
    assert_eq!(ArrayConstRef::new(&[20, 10]).prioritized_index_of_first_of(&[10, 20]), Some(0));
    assert_eq!(ours.prioritized_index_of_first_of(&[1, 2]), None);
    assert_eq!(ours.prioritized_index_of_first_of(&[]), None);
    assert_eq!(
        ours.prioritized_index_of_first_of_by(&[-30, -10], |x: &i32| x.abs()),
        Some(0)
    );
}

#[test]
fn test_min_max() {
    let v = ArrayConstRef::new(&[3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(v.index_of_min(), Some(1));
    assert_eq!(v.index_of_max(), Some(5));
    assert_eq!(v.index_of_max_by(|a, b| b.cmp(a)), Some(1));
    assert_eq!(ArrayConstRef::<i32>::empty().index_of_min(), None);
}

#[test]
fn test_counting() {
    let v = ArrayConstRef::new(&[1, 1, 1, 1, 2, 1]);
    assert_eq!(v.count(&1), 5);
    assert_eq!(v.count_if(|x| *x > 1), 1);
    // Non-overlapping.
    assert_eq!(v.count_n(&[1, 1]), 2);
    assert_eq!(v.count_n(&[1, 2, 1]), 1);
    assert_eq!(v.count_n(&[3]), 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "cannot count an empty needle")]
fn test_count_empty_needle_panics() {
    ArrayConstRef::new(&[1, 2]).count_n(&[]);
}

#[test]
fn test_membership() {
    let v = ArrayConstRef::new(&[1, 2, 3]);
    assert!(v.contains(&2));
    assert!(!v.contains(&4));
    assert!(v.contains_n(&[2, 3]));
    assert!(!v.contains_n(&[3, 2]));
    assert!(v.begins_with(&1));
    assert!(v.begins_with_n(&[1, 2]));
    assert!(v.ends_with(&3));
    assert!(v.ends_with_n(&[2, 3]));
    assert!(!v.ends_with_n(&[0, 1, 2, 3]));
    assert!(!ArrayConstRef::<i32>::empty().begins_with(&1));
    assert!(!v.contains_duplicates());
    assert!(ArrayConstRef::new(&[1, 2, 1]).contains_duplicates());
    assert!(!ArrayConstRef::<i32>::empty().contains_duplicates());
}

#[test]
fn test_contains_pair() {
    let v = ArrayConstRef::new(&[1, 4, 9, 16]);
    assert!(v.contains_pair(|a, b| a - b == 5));
    assert!(!v.contains_pair(|a, b| a - b == 2));
    // The later element is always the first argument.
    assert!(!v.contains_pair(|a, b| a < b));

    let mut pairs = 0;
    v.contains_pair(|_, _| {
        pairs += 1;
        false
    });
    assert_eq!(pairs, 6);
}

#[test]
fn test_all_any_none() {
    let v = ArrayConstRef::new(&[2, 4, 7]);
    assert!(v.all(|x| *x > 0));
    assert!(!v.all(|x| x % 2 == 0));
    assert!(v.any(|x| x % 2 == 1));
    assert!(!v.any(|x| *x > 7));
    assert!(v.none(|x| *x == 3));
    assert!(!v.none(|x| *x == 7));

    let empty = ArrayConstRef::<i32>::empty();
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
    assert!(empty.none(|_| true));
}

// ============================================================================
// Trim Tests
// ============================================================================

#[test]
fn test_trim_set() {
    let v = ArrayConstRef::new(&[0, 0, 1, 2, 0, 3, 0]);
    assert_eq!(v.trim_left(&[0]).as_slice(), &[1, 2, 0, 3, 0]);
    assert_eq!(v.trim_right(&[0]).as_slice(), &[0, 0, 1, 2, 0, 3]);
    assert_eq!(v.trim(&[0]).as_slice(), &[1, 2, 0, 3]);
    assert!(v.trim(&[0, 1, 2, 3]).is_empty());
    // Trimming never mutates the source.
    assert_eq!(v.len(), 7);
}

#[test]
fn test_trim_if() {
    let v = ArrayConstRef::new(&[1, 3, 4, 5, 7]);
    assert_eq!(v.trim_if(|x| x % 2 == 1).as_slice(), &[4]);
    assert_eq!(v.trim_left_if(|x| *x < 4).as_slice(), &[4, 5, 7]);
    assert_eq!(v.trim_right_if(|x| *x > 4).as_slice(), &[1, 3, 4]);
}

// ============================================================================
// Alias Query Tests
// ============================================================================

#[test]
fn test_internal_element() {
    let data = [10, 20, 30, 40];
    let v = ArrayConstRef::new(&data);
    let outside = 20;
    assert_eq!(v.is_internal_element(&data[2]), Some(2));
    assert_eq!(v.is_internal_element(&outside), None);
    assert_eq!(v.ref_left(2).is_internal_element(&data[2]), None);
    // One past the end is an internal pointer but not an internal element.
    let end = data.as_ptr_range().end;
    assert_eq!(v.is_internal_pointer(end), Some(4));
}

#[test]
fn test_internal_ref_and_overlap() {
    let data = [1, 2, 3, 4, 5];
    let v = ArrayConstRef::new(&data);
    assert_eq!(v.is_internal_ref(&data[1..4]), Some(1));
    assert_eq!(v.ref_left(3).is_internal_ref(&data[1..4]), None);
    assert!(v.ref_left(3).overlaps_with(&data[2..]));
    assert!(!v.ref_left(2).overlaps_with(&data[2..]));
    assert!(!v.overlaps_with(&[1, 2]));
}

// ============================================================================
// Mutable View Tests
// ============================================================================

#[test]
fn test_fill_and_copy() {
    let mut data = [0; 6];
    let mut v = ArrayRef::new(&mut data);
    v.fill(&7);
    v.copy(1, &[1, 2]);
    v.copy_front(&[9]);
    v.copy_back(&[8, 8]);
    assert_eq!(data, [9, 1, 2, 7, 8, 8]);
}

#[test]
fn test_move_swaps_ownership() {
    use alloc::string::{String, ToString};

    let mut names = [String::new(), String::new(), String::new()];
    let mut incoming = ["a".to_string(), "b".to_string()];
    ArrayRef::new(&mut names).move_back(&mut incoming);
    assert_eq!(names, ["", "a", "b"]);
    assert!(incoming.iter().all(String::is_empty));
}

#[test]
fn test_swap_block() {
    let mut data = [1, 2, 3, 4];
    let mut other = [8, 9];
    ArrayRef::new(&mut data).swap_block(1, &mut other);
    assert_eq!(data, [1, 8, 9, 4]);
    assert_eq!(other, [2, 3]);

    ArrayRef::new(&mut data).swap_block_front(&mut other);
    assert_eq!(data, [2, 3, 9, 4]);
}

#[test]
fn test_reverse_and_rotate() {
    let mut data = [1, 2, 3, 4, 5];
    let mut v = ArrayRef::new(&mut data);
    v.rotate_left(2);
    assert_eq!(v.as_slice(), &[3, 4, 5, 1, 2]);
    v.rotate_right(2);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    v.mutable_ref_right(1).reverse();
    assert_eq!(v.as_slice(), &[1, 5, 4, 3, 2]);
}

#[test]
fn test_algorithms_through_views() {
    let mut data = [5, 2, 8, 1, 9, 3, 7, 4, 6, 0, 11, 10];
    let mut v = ArrayRef::new(&mut data);
    v.mutable_ref_front(6).quick_sort();
    assert!(v.ref_front(6).is_sorted());
    v.sort();
    assert!(v.is_sorted());
    v.sort_by(|a, b| b.cmp(a));
    assert_eq!(*v.front(), 11);
    assert!(v.is_sorted_by(|a, b| b.cmp(a)));
}

#[test]
fn test_next_permutation_through_view() {
    let mut data = ['c', 'b', 'a'];
    let mut v = ArrayRef::new(&mut data);
    assert!(!v.next_permutation());
    assert_eq!(v.as_slice(), &['a', 'b', 'c']);
    assert!(v.next_permutation());
    assert_eq!(v.as_slice(), &['a', 'c', 'b']);
}
