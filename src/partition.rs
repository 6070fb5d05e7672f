//! In-place multi-way partitions. Both run in a single pass and only ever swap, so a panicking
//! or inconsistent comparison leaves `v` a permutation of its input.

use std::cmp::Ordering;

/// Dutch national flag partition of `v` around `pivot`.
///
/// Returns `(mid1, mid2)` such that `v[..mid1]` is less than the pivot, `v[mid1..mid2]` is equal
/// and `v[mid2..]` is greater. Performs exactly `v.len()` comparisons and at most `v.len()` swaps.
///
/// `pivot` is compared by reference and can't live inside `v`. Callers that pick the pivot from
/// the slice split it off first.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition<T, F>(v: &mut [T], pivot: &T, compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Invariant: v[..red] < pivot, v[red..white] == pivot, v[blue..] > pivot,
    // v[white..blue] is not yet classified.
    let mut red = 0;
    let mut white = 0;
    let mut blue = v.len();

    while white < blue {
        match compare(&v[white], pivot) {
            Ordering::Less => {
                v.swap(white, red);
                red += 1;
                white += 1;
            }
            Ordering::Greater => {
                v.swap(white, blue - 1);
                blue -= 1;
            }
            Ordering::Equal => {
                white += 1;
            }
        }
    }

    (red, white)
}

/// Partitions `v` into elements less than `low`, elements in `low..=high` and elements greater
/// than `high`, using the same cursor scheme as [`partition`].
///
/// Returns `(mid1, mid2)` with `v[..mid1] < low`, `low <= v[mid1..mid2] <= high` and
/// `v[mid2..] > high`. Expects `low <= high`, otherwise the middle segment stays empty and its
/// elements are split between the outer ones.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn dual_pivot_partition<T, F>(v: &mut [T], low: &T, high: &T, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lt = 0;
    let mut i = 0;
    let mut gt = v.len();

    while i < gt {
        if is_less(&v[i], low) {
            v.swap(i, lt);
            lt += 1;
            i += 1;
        } else if is_less(high, &v[i]) {
            v.swap(i, gt - 1);
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
