//! Top-down merge sort, halving the slice until single elements remain. Needs one scratch buffer
//! of the input length.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    if v.len() < 2 {
        // These inputs are always sorted.
        return;
    }

    // Scratch space for one merged run. The buffer stays at length zero and is only used for its
    // capacity, so it never drops an element.
    let mut buf = Vec::<T>::with_capacity(v.len());

    merge_sort(v, buf.as_mut_ptr(), &mut is_less);
}

/// Sorts both halves of `v` and merges them.
///
/// `buf` has to be valid for writes of `v.len()` elements and must not overlap `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // SAFETY: buf holds len elements by the requirement on the caller.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `buf` and copies the merged run back
/// into `v`.
///
/// Only bitwise copies are written to `buf`, `v` keeps owning every element until the final copy
/// back. If `is_less` panics `v` is left as it was before the merge.
///
/// # Safety
///
/// `mid` must be in bounds and `buf` must be valid for writes of `v.len()` elements without
/// overlapping `v`. `T` must not be a zero-sized type.
#[inline(never)]
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid <= len);

    let v_base = v.as_ptr();
    let mut left = 0;
    let mut right = mid;
    let mut out = 0;

    while left < mid && right < len {
        // Ties take from the left run, that keeps the sort stable.
        let src = if is_less(&v[right], &v[left]) {
            right += 1;
            right - 1
        } else {
            left += 1;
            left - 1
        };

        unsafe {
            ptr::copy_nonoverlapping(v_base.add(src), buf.add(out), 1);
        }
        out += 1;
    }

    // At most one of the runs has elements left.
    unsafe {
        ptr::copy_nonoverlapping(v_base.add(left), buf.add(out), mid - left);
        out += mid - left;
        ptr::copy_nonoverlapping(v_base.add(right), buf.add(out), len - right);
        out += len - right;
        debug_assert_eq!(out, len);

        ptr::copy_nonoverlapping(buf, v.as_mut_ptr(), len);
    }
}
