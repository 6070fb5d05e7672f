macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_test_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn max_test_len() -> usize {
                $max_test_len
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

/// Input length above which the quadratic sorts are no longer run by the shared tests.
pub const QUADRATIC_MAX_TEST_LEN: usize = 2_048;

pub mod partition;
pub mod stable;
pub mod unstable;
pub mod util;

pub use unstable::fargo_andrew::FargoAndrewSorter;
