pub trait Sort {
    fn name() -> String;

    /// Largest input the shared tests will feed this sort. Quadratic sorts lower it, otherwise
    /// they dominate the test runtime.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
