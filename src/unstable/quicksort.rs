//! Dual-pivot quicksort with randomly chosen pivots.

use std::cmp::Ordering;
use std::mem;

use rand::Rng;

use crate::partition::dual_pivot_partition;

sort_impl!("dual_pivot_quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less, &mut rand::thread_rng());
}

/// Sorts `v` by splitting it into three segments around two random pivots.
///
/// The two shorter segments are sorted by recursion and the longest one by continuing the loop,
/// so the stack depth stays *O*(log(*n*)).
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn quicksort<T, F, R>(mut v: &mut [T], is_less: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        // Two distinct random positions, the first pivot goes to the front and the second to the
        // back.
        let p1 = rng.gen_range(0..len);
        let mut p2 = rng.gen_range(0..(len - 1));
        if p2 >= p1 {
            p2 += 1;
        }

        v.swap(0, p1);
        // The swap moved whatever was at the front to p1.
        let p2 = if p2 == 0 { p1 } else { p2 };
        v.swap(len - 1, p2);

        // Order the pivots, v[0] <= v[len - 1].
        if is_less(&v[len - 1], &v[0]) {
            v.swap(0, len - 1);
        }

        let (low, rest) = v.split_at_mut(1);
        let (inner, high) = rest.split_at_mut(len - 2);
        let (lt_count, le_count) = dual_pivot_partition(inner, &low[0], &high[0], is_less);

        // Move the pivots between the segments. The low pivot swaps with the last element of the
        // less segment, the high pivot with the first element of the greater segment.
        let low_pos = lt_count;
        let high_pos = le_count + 1;
        v.swap(0, low_pos);
        v.swap(len - 1, high_pos);

        // With equal pivots everything in between equals them too.
        let pivots_equal = !is_less(&v[low_pos], &v[high_pos]);

        let (left, rest) = v.split_at_mut(low_pos);
        let (middle, rest) = rest[1..].split_at_mut(high_pos - low_pos - 1);
        let right = &mut rest[1..];
        let middle = if pivots_equal {
            &mut middle[..0]
        } else {
            middle
        };

        let mut segments = [left, middle, right];
        segments.sort_unstable_by_key(|segment| segment.len());
        let [shortest, medium, longest] = segments;

        quicksort(shortest, is_less, rng);
        quicksort(medium, is_less, rng);
        v = longest;
    }
}
