//! Measured reference anchor points.

use serde::{Deserialize, Serialize};

/// A measured (sequence length, time) pair on a reference accelerator.
///
/// A sorted set of anchor points with unique lengths defines the known
/// performance curve that per-sequence times are interpolated from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Sequence length (residues) the measurement was taken at.
    pub length: u32,
    /// Measured per-sequence time in seconds.
    pub seconds: f64,
}

impl AnchorPoint {
    /// Creates a new anchor point.
    #[must_use]
    pub const fn new(length: u32, seconds: f64) -> Self {
        Self { length, seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_roundtrip_json() {
        let anchor = AnchorPoint::new(250, 10.35);
        let json = serde_json::to_string(&anchor).unwrap();
        let back: AnchorPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(anchor, back);
    }
}
