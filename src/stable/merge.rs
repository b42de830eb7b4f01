use std::cmp::Ordering;

use tracing::trace;

use crate::SortError;

/// Merges the sorted runs `v[left..=mid]` and `v[mid + 1..=right]` so that `v[left..=right]`
/// becomes sorted.
///
/// The merge is stable: when two elements compare equal the one from the left run is written
/// first. Elements outside `[left, right]` are left untouched.
///
/// Returns [`SortError::InvalidRange`] unless `left <= mid <= right < v.len()`. `mid == right`
/// is allowed and means the right run is empty.
pub fn merge<T>(v: &mut [T], left: usize, mid: usize, right: usize) -> Result<(), SortError>
where
    T: Ord + Copy,
{
    merge_by(v, left, mid, right, |a, b| a.cmp(b))
}

/// Same as [`merge`] but ordered by `compare`.
pub fn merge_by<T, F>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    mut compare: F,
) -> Result<(), SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if left > mid || mid > right || right >= v.len() {
        return Err(SortError::InvalidRange {
            left,
            right,
            len: v.len(),
        });
    }

    let is_less = &mut |a: &T, b: &T| compare(a, b) == Ordering::Less;

    let run = &mut v[left..=right];
    let left_len = mid - left + 1;
    debug_assert!(run[..left_len].windows(2).all(|w| !is_less(&w[1], &w[0])));
    debug_assert!(run[left_len..].windows(2).all(|w| !is_less(&w[1], &w[0])));

    let mut scratch = Vec::with_capacity(run.len());
    merge_runs(run, left_len, &mut scratch, is_less);

    Ok(())
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
///
/// Both runs are first copied into `scratch`, which is cleared on entry and can be reused across
/// calls. The copies act as the `L` and `R` buffers, `v` is then rewritten front to back.
pub(crate) fn merge_runs<T, F>(v: &mut [T], mid: usize, scratch: &mut Vec<T>, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len);

    trace!(len, mid, "merge");

    scratch.clear();
    scratch.extend_from_slice(v);
    let (left_run, right_run) = scratch.split_at(mid);

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left_run.len() && j < right_run.len() {
        // Only take from the right run if it is strictly less, equal elements keep their order.
        if is_less(&right_run[j], &left_run[i]) {
            v[k] = right_run[j];
            j += 1;
        } else {
            v[k] = left_run[i];
            i += 1;
        }
        k += 1;
    }

    // At most one of the runs has elements left, drain it.
    let left_rest = &left_run[i..];
    v[k..k + left_rest.len()].copy_from_slice(left_rest);
    k += left_rest.len();
    v[k..].copy_from_slice(&right_run[j..]);
}
