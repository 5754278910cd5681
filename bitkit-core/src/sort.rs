//! In-place introspective sort over a slice
//!
//! Quicksort with median-of-three pivots, insertion sort for partitions of
//! at most [`INSERTION_SORT_THRESHOLD`] elements, and a heapsort fallback
//! once the depth budget of `2 * floor(log2(n))` partitions is spent. Worst
//! case O(n log n), stack depth O(log n). Not stable.
//!
//! The comparison must be a strict weak ordering. An inconsistent
//! comparison leaves the slice in some permutation of its input but the
//! order is unspecified.

use core::cmp::Ordering;

use crate::bits::log2_usize;
use crate::{BitkitError, Result};

/// Partitions at or below this size are finished by insertion sort
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sort `v` in place with `compare`
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    match len {
        0 | 1 => {}
        2 => swap_if_greater(v, 0, 1, &mut compare),
        3 => sort3(v, &mut compare),
        _ => {
            let depth_limit = 2 * log2_usize(len);
            intro_sort(v, depth_limit, &mut compare);
        }
    }
}

/// Sort `v` in place by `T`'s natural order
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sort `v` with a comparison that may be absent
///
/// A missing comparison is rejected before any element is touched.
pub fn try_sort_by<T, F>(v: &mut [T], compare: Option<F>) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let compare = compare.ok_or(BitkitError::MissingComparison)?;
    sort_by(v, compare);
    Ok(())
}

#[inline]
fn swap_if_greater<T, F>(v: &mut [T], i: usize, j: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&v[i], &v[j]) == Ordering::Greater {
        v.swap(i, j);
    }
}

/// Three-element sorting network
#[inline]
fn sort3<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    swap_if_greater(v, 0, 1, compare);
    swap_if_greater(v, 0, 2, compare);
    swap_if_greater(v, 1, 2, compare);
}

fn intro_sort<T, F>(mut v: &mut [T], mut depth_limit: u32, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let len = v.len();
        if len <= INSERTION_SORT_THRESHOLD {
            match len {
                0 | 1 => {}
                2 => swap_if_greater(v, 0, 1, compare),
                3 => sort3(v, compare),
                _ => insertion_sort(v, compare),
            }
            return;
        }

        if depth_limit == 0 {
            heap_sort(v, compare);
            return;
        }
        depth_limit -= 1;

        let pivot = partition(v, compare);

        // Recurse into the smaller side, keep looping on the larger one
        let (left, rest) = core::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            intro_sort(left, depth_limit, compare);
            v = right;
        } else {
            intro_sort(right, depth_limit, compare);
            v = left;
        }
    }
}

/// Median-of-three partition; returns the pivot's final index
///
/// Requires `v.len() > 3`.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let hi = v.len() - 1;
    let mid = hi / 2;

    swap_if_greater(v, 0, mid, compare);
    swap_if_greater(v, 0, hi, compare);
    swap_if_greater(v, mid, hi, compare);

    // v[0] <= pivot <= v[hi]; park the pivot just inside the high sentinel
    let pivot = hi - 1;
    v.swap(mid, pivot);

    let mut left = 0;
    let mut right = pivot;
    loop {
        // Both scans stop at a sentinel: v[pivot] on the left, v[0] on the right
        left += 1;
        while compare(&v[left], &v[pivot]) == Ordering::Less {
            left += 1;
        }
        right -= 1;
        while compare(&v[pivot], &v[right]) == Ordering::Less {
            right -= 1;
        }

        if left >= right {
            break;
        }
        v.swap(left, right);
    }

    if left != pivot {
        v.swap(left, pivot);
    }
    left
}

/// Shift-based insertion sort
fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Binary max-heap sort
fn heap_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for start in (0..len / 2).rev() {
        sift_down(v, start, len, compare);
    }
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, compare);
    }
}

fn sift_down<T, F>(v: &mut [T], mut node: usize, len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && compare(&v[child], &v[child + 1]) == Ordering::Less {
            child += 1;
        }
        if compare(&v[node], &v[child]) != Ordering::Less {
            return;
        }
        v.swap(node, child);
        node = child;
    }
}
