//! Tuning constants shared by the container and the algorithms.

/// Smallest capacity chosen when an array has to grow on its own.
pub const MIN_AUTO_CAPACITY: usize = 4;

/// Runs at or below this length are finished with insertion sort.
pub const QUICK_SORT_THRESHOLD: usize = 8;
