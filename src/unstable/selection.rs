//! Selection sort that fills the slice from the back with the last occurrence of the maximum.

use std::cmp::Ordering;

use crate::util::last_max_between;

// Picking the last maximum keeps equal maxima in order, but the swap moves the element it
// displaces past its equals, e.g. [b, a1, a2, c] -> [a2, a1, b, c]. So not stable.
sort_impl!("selection_unstable", crate::QUADRATIC_MAX_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a: &T, b: &T| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut compare);
}

/// Sorts `v` with *O*(*n*^2) comparisons and at most `v.len() - 1` swaps.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn selection_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for j in (1..v.len()).rev() {
        let max = last_max_between(v, 0, j + 1, compare);
        v.swap(max, j);
    }
}
