//! A sorted table of layer Z heights answering inclusive range queries.
//!
//! ZTable owns a snapshot of discretized layer heights (unsigned vertical
//! coordinates, e.g. slicing layer boundaries) and answers "which recorded
//! heights fall within [min_z, max_z]?" in O(log n + k).
//!
//! Representation
//! - A single `Vec<u32>` holding the heights in non-decreasing order.
//! - Duplicates are preserved: a height recorded twice is reported twice.
//!
//! Key properties and invariants
//! - Constructors copy the caller's input; the table never aliases caller
//!   storage.
//! - The storage is sorted ascending before the table becomes queryable.
//!   Inputs that arrive unsorted are sorted during construction.
//! - The table is immutable after construction; queries are pure reads and
//!   may run concurrently from multiple threads without coordination.
//!
//! Typical usage
//! - Construct via [`ZTable::new`], [`ZTable::from_slice`], or `collect()`.
//! - Query with [`ZTable::get_range`], or use the borrowing variants
//!   [`ZTable::range_slice`] / [`ZTable::heights_within`] to avoid the copy.

use std::ops::Range;

use crate::error::{Error, Result};

/// An immutable, sorted table of `u32` layer heights.
///
/// `ZTable` is built once from a snapshot of height samples and queried any
/// number of times afterward. The range query is inclusive on both ends and
/// returns matches in ascending order, duplicates included. An inverted
/// window (`min_z > max_z`) is a valid query with an empty result.
///
/// # Examples
///
/// ```
/// use ztable::ZTable;
///
/// let table = ZTable::new(vec![5, 1, 3, 3, 9]);
/// assert_eq!(table.as_slice(), &[1, 3, 3, 5, 9]);
/// assert_eq!(table.get_range(3, 5), vec![3, 3, 5]);
/// assert!(table.get_range(10, 20).is_empty());
/// assert_eq!(table.get_range(0, 9), vec![1, 3, 3, 5, 9]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ZTable {
    /// Recorded heights in non-decreasing order.
    ///
    /// # Invariants
    ///
    /// - **Sorted**: `z[i] <= z[i + 1]` for every adjacent pair.
    /// - **Owned**: an independent copy of the construction input, never a
    ///   view into caller storage.
    ///
    /// Duplicates are allowed and preserved.
    z: Vec<u32>,
}

impl ZTable {
    /// Builds a table from a vector of height samples, taking ownership.
    ///
    /// Behavior:
    /// - If `heights` is not already sorted ascending, it is sorted in place
    ///   (duplicates preserved) before the table becomes queryable.
    /// - An empty input is valid and yields a table that answers every query
    ///   with an empty result.
    ///
    /// Complexity: O(n) when the input is already sorted, O(n log n)
    /// otherwise.
    pub fn new(mut heights: Vec<u32>) -> ZTable {
        if !heights.is_sorted() {
            heights.sort_unstable();
        }
        Self::with_sorted(heights)
    }

    /// Creates a table with no recorded heights.
    pub fn empty() -> ZTable {
        ZTable { z: Vec::new() }
    }

    /// Builds a table from a borrowed slice of height samples.
    ///
    /// The slice is copied; the table holds no reference to the caller's
    /// storage once construction returns. Sorting behavior matches
    /// [`new`](Self::new).
    pub fn from_slice(heights: &[u32]) -> ZTable {
        Self::new(heights.to_vec())
    }

    /// Builds a table from a vector the caller asserts is already sorted.
    ///
    /// Unlike [`new`](Self::new), this constructor never reorders the input:
    /// it verifies the non-decreasing invariant in O(n) and rejects
    /// violations, for callers that treat unsorted input as an upstream bug
    /// rather than something to paper over.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind) if
    /// `heights` contains a descent.
    pub fn from_sorted(heights: Vec<u32>) -> Result<ZTable> {
        if !heights.is_sorted() {
            return Err(Error::invalid_arg(
                "heights",
                "must be sorted in non-decreasing order",
            ));
        }
        Ok(Self::with_sorted(heights))
    }

    fn with_sorted(z: Vec<u32>) -> ZTable {
        let table = ZTable { z };
        table.check_basic_invariants();

        #[cfg(debug_assertions)]
        table.check_full_invariants();

        table
    }

    /// Returns all recorded heights `v` with `min_z <= v <= max_z` as a new
    /// vector, in ascending order.
    ///
    /// Both bounds are inclusive. Duplicates that satisfy the window are all
    /// included. `min_z > max_z` yields an empty vector, as does a window
    /// entirely outside the recorded heights. The table is not mutated and
    /// repeated identical calls return identical results.
    ///
    /// Complexity: O(log n) to locate the window plus O(k) to copy the k
    /// matches.
    pub fn get_range(&self, min_z: u32, max_z: u32) -> Vec<u32> {
        self.z[self.locate_range(min_z, max_z)].to_vec()
    }

    /// Returns the index window of heights within `[min_z, max_z]`.
    ///
    /// The returned `lo..hi` satisfies: every index in it holds a height
    /// inside the window, every index below `lo` holds a height `< min_z`,
    /// and every index at or above `hi` holds a height `> max_z`. When
    /// nothing matches (including `min_z > max_z`) the range is empty with
    /// `start == end` at the insertion point of `min_z`, so the position is
    /// still meaningful to callers placing new samples.
    ///
    /// Complexity: O(log n).
    pub fn locate_range(&self, min_z: u32, max_z: u32) -> Range<usize> {
        let lo = self.z.partition_point(|&v| v < min_z);
        if min_z > max_z {
            return lo..lo;
        }
        // Search for the upper bound only within the remaining tail.
        let hi = lo + self.z[lo..].partition_point(|&v| v <= max_z);
        lo..hi
    }

    /// Returns the heights within `[min_z, max_z]` as a borrowed sub-slice
    /// of the sorted storage.
    ///
    /// Zero-copy alternative to [`get_range`](Self::get_range) with the same
    /// window semantics.
    pub fn range_slice(&self, min_z: u32, max_z: u32) -> &[u32] {
        &self.z[self.locate_range(min_z, max_z)]
    }

    /// Returns an iterator over the heights within `[min_z, max_z]`, in
    /// ascending order.
    ///
    /// The iterator supports exact-size and double-ended traversal.
    pub fn heights_within(&self, min_z: u32, max_z: u32) -> HeightsIter<'_> {
        HeightsIter::new(self.range_slice(min_z, max_z))
    }

    /// Counts the heights within `[min_z, max_z]` without materializing
    /// them. O(log n).
    pub fn count_range(&self, min_z: u32, max_z: u32) -> usize {
        self.locate_range(min_z, max_z).len()
    }

    /// Returns an iterator over all recorded heights, in ascending order.
    pub fn heights(&self) -> HeightsIter<'_> {
        HeightsIter::new(&self.z)
    }

    /// Checks whether the exact height `z` is recorded. O(log n).
    pub fn contains(&self, z: u32) -> bool {
        self.z.binary_search(&z).is_ok()
    }

    /// Returns the number of recorded heights.
    #[inline]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Returns `true` if no heights are recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Returns the full sorted storage as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.z
    }

    /// Returns the smallest recorded height, or `None` for an empty table.
    #[inline]
    pub fn min_height(&self) -> Option<u32> {
        self.z.first().copied()
    }

    /// Returns the largest recorded height, or `None` for an empty table.
    #[inline]
    pub fn max_height(&self) -> Option<u32> {
        self.z.last().copied()
    }

    /// Returns the number of heap-allocated bytes used by this table.
    ///
    /// This accounts only for the heap storage of the underlying `Vec`, not
    /// the size of the `ZTable` struct itself or allocator bookkeeping.
    pub fn heap_size_bytes(&self) -> usize {
        self.z.capacity() * std::mem::size_of::<u32>()
    }

    /// Internal consistency checks cheap enough for release builds.
    ///
    /// Panics: if the first and last stored heights are out of order.
    pub fn check_basic_invariants(&self) {
        if let (Some(&first), Some(&last)) = (self.z.first(), self.z.last()) {
            assert!(
                first <= last,
                "first height {first} exceeds last height {last}"
            );
        }
    }

    /// Comprehensive internal consistency checks for debug/tests.
    ///
    /// Panics: if the storage is not sorted non-decreasing.
    pub fn check_full_invariants(&self) {
        self.check_basic_invariants();
        assert!(self.z.is_sorted(), "height storage must be non-decreasing");
    }
}

impl Default for ZTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u32>> for ZTable {
    fn from(heights: Vec<u32>) -> Self {
        ZTable::new(heights)
    }
}

impl From<&[u32]> for ZTable {
    fn from(heights: &[u32]) -> Self {
        ZTable::from_slice(heights)
    }
}

impl FromIterator<u32> for ZTable {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        ZTable::new(iter.into_iter().collect())
    }
}

impl std::fmt::Debug for ZTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.z.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ZTable {
    type Item = u32;
    type IntoIter = HeightsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.heights()
    }
}

/// Iterator over heights in a `ZTable`, in ascending order.
///
/// Created by [`ZTable::heights`] and [`ZTable::heights_within`]. Yields
/// heights by value.
#[derive(Clone)]
pub struct HeightsIter<'a> {
    values_iter: std::slice::Iter<'a, u32>,
}

impl<'a> HeightsIter<'a> {
    fn new(values: &'a [u32]) -> Self {
        Self {
            values_iter: values.iter(),
        }
    }
}

impl<'a> Iterator for HeightsIter<'a> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.values_iter.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values_iter.size_hint()
    }
}

impl<'a> ExactSizeIterator for HeightsIter<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.values_iter.len()
    }
}

impl<'a> DoubleEndedIterator for HeightsIter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values_iter.next_back().copied()
    }
}
