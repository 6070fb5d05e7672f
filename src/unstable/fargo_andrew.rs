//! FargoAndrewSort, a randomized three-way quicksort.
//!
//! Follows Hoare's suggestion of using the median of three random elements as pivot, partitions
//! with the Dutch national flag scheme and finishes small ranges with selection sort instead of
//! a final insertion sort pass as Sedgewick suggests.

use std::cmp::{self, Ordering};
use std::mem;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::partition::partition;
use crate::unstable::selection::selection_sort;

sort_impl!("fargo_andrew_unstable");

/// Ranges of up to this many elements are sorted with selection sort.
pub const THRESHOLD: usize = 20;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    FargoAndrewSorter::new(|a: &T, b: &T| a.cmp(b)).sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    FargoAndrewSorter::new(compare).sort(v);
}

/// A sorter bound to one comparison function and one source of randomness for pivot selection.
///
/// Seeding the random number generator makes the sequence of pivots, and with it every
/// comparison the sort performs, reproducible:
///
/// ```ignore
/// let mut sorter = FargoAndrewSorter::with_rng(|a: &i32, b: &i32| a.cmp(b), StdRng::seed_from_u64(7));
/// sorter.sort(&mut v);
/// ```
pub struct FargoAndrewSorter<F, R = ThreadRng> {
    compare: F,
    rng: R,
}

impl<F> FargoAndrewSorter<F, ThreadRng> {
    /// Creates a sorter that draws its pivots from the thread local generator.
    pub fn new(compare: F) -> Self {
        Self::with_rng(compare, rand::thread_rng())
    }
}

impl<F, R> FargoAndrewSorter<F, R>
where
    R: Rng,
{
    pub fn with_rng(compare: F, rng: R) -> Self {
        Self { compare, rng }
    }

    /// Sorts `v` in place, afterwards `compare(&v[i], &v[i + 1])` is never `Greater`.
    ///
    /// Unstable, in-place and expected *O*(*n* \* log(*n*)). Runs in linear time if there are only
    /// a few distinct values, as each distinct pivot value is placed in one step.
    pub fn sort<T>(&mut self, v: &mut [T])
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if mem::size_of::<T>() == 0 {
            // Sorting has no meaningful behavior on zero-sized types. Do nothing.
            return;
        }

        fargo_andrew_sort(v, &mut self.compare, &mut self.rng);
    }

    /// Gives back the random number generator, e.g. to continue a seeded sequence elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Sorts `v` by recursively partitioning it around a median of three random elements.
///
/// The two sides of a partition are sorted independently. The shorter one by recursion, the
/// longer one by continuing the loop, which bounds the stack depth to *O*(log(*n*)) no matter how
/// unlucky the pivot draws are.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn fargo_andrew_sort<T, F, R>(mut v: &mut [T], compare: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    loop {
        let len = v.len();
        if len <= THRESHOLD {
            selection_sort(v, compare);
            return;
        }

        let pivot_pos = median_of_three(v, compare, rng);

        // The pivot can't be part of the slice it is compared against, so move it to the front
        // and partition the rest.
        v.swap(0, pivot_pos);
        let (pivot, v_without_pivot) = v.split_at_mut(1);
        let (lt_count, le_count) = partition(v_without_pivot, &pivot[0], compare);

        // Place the pivot in front of its equals. The last element of the less side takes its old
        // slot, if there is one.
        v.swap(0, lt_count);
        let mid1 = lt_count;
        let mid2 = le_count + 1;
        debug_assert!(mid1 < mid2 && mid2 <= len);

        // v[mid1..mid2] is already in its final position.
        let (left, rest) = v.split_at_mut(mid1);
        let right = &mut rest[(mid2 - mid1)..];

        if left.len() < right.len() {
            fargo_andrew_sort(left, compare, rng);
            v = right;
        } else {
            fargo_andrew_sort(right, compare, rng);
            v = left;
        }
    }
}

/// Returns the index of the median of three uniformly random indices of `v`, drawn with
/// replacement. `v` must not be empty.
///
/// Computes `max(min(a, b), min(max(a, b), c))`, which needs no three-way branch.
fn median_of_three<T, F, R>(v: &[T], compare: &mut F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let len = v.len();
    let a = rng.gen_range(0..len);
    let b = rng.gen_range(0..len);
    let c = rng.gen_range(0..len);

    let mut compare_at = |x: &usize, y: &usize| compare(&v[*x], &v[*y]);

    let min_ab = cmp::min_by(a, b, &mut compare_at);
    let max_ab = cmp::max_by(a, b, &mut compare_at);
    let upper = cmp::min_by(max_ab, c, &mut compare_at);

    cmp::max_by(min_ab, upper, &mut compare_at)
}
