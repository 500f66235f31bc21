//! Sequence-length histogram inputs.

use serde::{Deserialize, Serialize};

/// An inclusive sequence-length range and the number of observed items in it.
///
/// The bin midpoint is used as the representative length for estimation.
/// Bins are consumed in the order given; overlap and ordering are not
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBin {
    /// Inclusive lower bound of the length range.
    pub lower: u32,
    /// Inclusive upper bound of the length range.
    pub upper: u32,
    /// Number of observed items in this range.
    pub count: u64,
}

impl LengthBin {
    /// Creates a new length bin.
    #[must_use]
    pub const fn new(lower: u32, upper: u32, count: u64) -> Self {
        Self {
            lower,
            upper,
            count,
        }
    }

    /// Returns the representative midpoint length of this bin.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.lower) + f64::from(self.upper)) / 2.0
    }

    /// Returns a display label like `200-299`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper)
    }
}

/// A named sequence-length histogram dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthHistogram {
    /// Short identifier (e.g., "mgnify").
    pub id: String,
    /// Human-readable description of the dataset.
    pub description: String,
    /// Histogram bins in ascending length order.
    pub bins: Vec<LengthBin>,
}

impl LengthHistogram {
    /// Returns the total item count across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let bin = LengthBin::new(200, 299, 10);
        assert!((bin.midpoint() - 249.5).abs() < 1e-12);
    }

    #[test]
    fn test_label() {
        assert_eq!(LengthBin::new(1000, 1099, 1).label(), "1000-1099");
    }

    #[test]
    fn test_total_count_is_exact() {
        let hist = LengthHistogram {
            id: "test".into(),
            description: String::new(),
            bins: vec![
                LengthBin::new(200, 299, 106_232_237),
                LengthBin::new(300, 399, 43_382_930),
            ],
        };
        assert_eq!(hist.total_count(), 106_232_237 + 43_382_930);
    }
}
