//! Slice primitives shared by several sorts.

use std::cmp::Ordering;

use rand::Rng;

/// Randomly permutes `v` in place, swapping every position with a uniformly chosen one.
///
/// Only meant for generating test and benchmark inputs, no sort relies on it.
pub fn permute<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = v.len();
    for i in 0..len {
        v.swap(i, rng.gen_range(0..len));
    }
}

/// Returns the largest index in `start..end` that holds a maximum element of that range.
///
/// Of several equal maxima the last one wins, so selection sort never reorders equal maxima
/// among themselves. Returns `start` if the range is empty.
///
/// Panics if `end > v.len()`.
pub fn last_max_between<T, F>(v: &[T], start: usize, end: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut max = start;
    for i in (start + 1)..end {
        if compare(&v[max], &v[i]) != Ordering::Greater {
            max = i;
        }
    }

    max
}
