//! Straight insertion sort.

use std::cmp::Ordering;

sort_impl!("insertion_stable", crate::QUADRATIC_MAX_TEST_LEN);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Grows a sorted prefix of `v` one element at a time.
///
/// Each new element is compared in place against the prefix from the back, and only once its
/// position is known the prefix tail is rotated to make room. A panicking `is_less` therefore
/// leaves `v` untouched for the current element.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut insert_pos = i;
        // Stop at the first element not greater than v[i], equal elements stay in front.
        while insert_pos > 0 && is_less(&v[i], &v[insert_pos - 1]) {
            insert_pos -= 1;
        }

        if insert_pos != i {
            v[insert_pos..=i].rotate_right(1);
        }
    }
}
