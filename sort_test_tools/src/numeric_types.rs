use std::cmp::Ordering;

/// `f64` ordered by `f64::total_cmp`, the sort input type for floating point tests.
#[derive(Debug, Clone, Copy)]
pub struct F64Total(pub f64);

impl F64Total {
    /// Maps `val` into a fractional value while preserving the order of the `i32` inputs.
    pub fn new(val: i32) -> Self {
        Self((val as f64) / 7.0 + 0.25)
    }
}

impl PartialEq for F64Total {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for F64Total {}

impl PartialOrd for F64Total {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64Total {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
