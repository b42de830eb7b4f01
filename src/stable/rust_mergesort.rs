use std::cmp::Ordering;

use tracing::debug;

use crate::stable::merge;
use crate::SortError;

sort_impl!("rust_top_down_mergesort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Classic top-down merge sort. The slice is split at its midpoint, both halves are sorted
/// recursively and then merged through a scratch buffer. There is no run detection and no
/// small-sort, every input takes the same path. The scratch buffer is allocated once per call and
/// holds at most `v.len()` elements.
///
/// # Examples
///
/// ```
/// let mut v = [38, 27, 43, 3, 9, 82, 10];
///
/// merge_sort_rs::stable::rust_mergesort::sort(&mut v);
/// assert!(v == [3, 9, 10, 27, 38, 43, 82]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Copy,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original elements
/// remain in `v`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    sort_range_impl(v, 0, len - 1, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[left..=right]`, leaving the rest of `v` untouched.
///
/// `left > right` denotes an empty range and is a no-op. A non-empty range must fit into `v`,
/// otherwise [`SortError::InvalidRange`] is returned and `v` is not modified.
pub fn sort_range<T>(v: &mut [T], left: usize, right: usize) -> Result<(), SortError>
where
    T: Ord + Copy,
{
    sort_range_by(v, left, right, |a, b| a.cmp(b))
}

/// Same as [`sort_range`] but ordered by `compare`.
pub fn sort_range_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    mut compare: F,
) -> Result<(), SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if left > right {
        return Ok(());
    }

    if right >= v.len() {
        return Err(SortError::InvalidRange {
            left,
            right,
            len: v.len(),
        });
    }

    sort_range_impl(v, left, right, &mut |a, b| compare(a, b) == Ordering::Less);
    Ok(())
}

fn sort_range_impl<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug!(len = v.len(), left, right, "merge sort");

    if left >= right {
        return;
    }

    let mut scratch = Vec::with_capacity(right - left + 1);
    merge_sort(v, left, right, &mut scratch, is_less);
}

/// Recursively sorts `v[left..=right]`.
///
/// The midpoint rounds down, so for odd lengths the left half gets the extra element.
fn merge_sort<T, F>(v: &mut [T], left: usize, right: usize, scratch: &mut Vec<T>, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    // Same as (left + right) / 2 without the overflow.
    let mid = left + (right - left) / 2;

    merge_sort(v, left, mid, scratch, is_less);
    merge_sort(v, mid + 1, right, scratch, is_less);

    merge::merge_runs(&mut v[left..=right], mid - left + 1, scratch, is_less);
}
