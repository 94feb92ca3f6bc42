pub trait Sort {
    fn name() -> String;

    /// Largest input length the implementation is tested with.
    ///
    /// Quadratic sorts and sorts with linear recursion depth on degenerate inputs would make the
    /// suite take forever or overflow the test thread stack with the largest sizes.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod numeric_types;
pub mod patterns;
