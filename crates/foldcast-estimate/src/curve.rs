//! Validated anchor curves with clamped piecewise-linear interpolation.

use foldcast_types::{AnchorPoint, InvalidInput};

/// A validated, immutable set of measured anchor points.
///
/// Construction enforces the curve preconditions once (at least two points,
/// positive lengths and times, strictly ascending lengths); interpolation on
/// a constructed curve cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorCurve {
    points: Vec<AnchorPoint>,
}

impl AnchorCurve {
    /// Creates a curve from anchor points sorted by ascending length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if fewer than two points are supplied, any
    /// point has a zero length or non-positive time, or lengths are not
    /// strictly ascending.
    pub fn new(points: Vec<AnchorPoint>) -> Result<Self, InvalidInput> {
        if points.len() < 2 {
            return Err(InvalidInput::TooFewAnchors {
                count: points.len(),
            });
        }

        for (index, point) in points.iter().enumerate() {
            if point.length == 0 {
                return Err(InvalidInput::ZeroAnchorLength { index });
            }
            if !(point.seconds > 0.0 && point.seconds.is_finite()) {
                return Err(InvalidInput::NonPositiveAnchorTime {
                    index,
                    seconds: point.seconds,
                });
            }
            if index > 0 && point.length <= points[index - 1].length {
                return Err(InvalidInput::UnsortedAnchors { index });
            }
        }

        Ok(Self { points })
    }

    /// Returns the anchor points in ascending length order.
    #[must_use]
    pub fn points(&self) -> &[AnchorPoint] {
        &self.points
    }

    /// Returns the smallest measured length.
    #[must_use]
    pub fn min_length(&self) -> u32 {
        self.points[0].length
    }

    /// Returns the largest measured length.
    #[must_use]
    pub fn max_length(&self) -> u32 {
        self.points[self.points.len() - 1].length
    }

    /// Returns whether `length` lies within the measured range.
    #[must_use]
    pub fn covers(&self, length: f64) -> bool {
        length >= f64::from(self.min_length()) && length <= f64::from(self.max_length())
    }

    /// Returns the interpolated per-sequence time at `length`.
    ///
    /// Piecewise-linear between the two bracketing anchors. Outside the
    /// measured range the boundary anchor's time is returned unchanged: no
    /// extrapolation, which silently underestimates times beyond the largest
    /// anchor. That clamping is the contract, not a defect.
    #[must_use]
    pub fn seconds_at(&self, length: f64) -> f64 {
        let first = self.points[0];
        if length <= f64::from(first.length) {
            return first.seconds;
        }
        let last = self.points[self.points.len() - 1];
        if length >= f64::from(last.length) {
            return last.seconds;
        }

        // Index of the first anchor at or beyond the target length.
        let hi = self
            .points
            .partition_point(|p| f64::from(p.length) < length);
        let a = self.points[hi - 1];
        let b = self.points[hi];

        let span = f64::from(b.length) - f64::from(a.length);
        a.seconds + (length - f64::from(a.length)) / span * (b.seconds - a.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(points: &[(u32, f64)]) -> AnchorCurve {
        AnchorCurve::new(
            points
                .iter()
                .map(|&(length, seconds)| AnchorPoint::new(length, seconds))
                .collect(),
        )
        .unwrap()
    }

    fn af2_head() -> AnchorCurve {
        curve(&[(100, 4.9), (200, 7.7), (300, 13.0)])
    }

    #[test]
    fn test_interpolates_between_anchors() {
        let c = af2_head();
        // 7.7 + (250-200)/(300-200) * (13.0-7.7)
        assert_relative_eq!(c.seconds_at(250.0), 10.35, max_relative = 1e-12);
        assert_relative_eq!(c.seconds_at(150.0), 6.3, max_relative = 1e-12);
    }

    #[test]
    fn test_exact_at_anchors() {
        let c = af2_head();
        assert_relative_eq!(c.seconds_at(100.0), 4.9);
        assert_relative_eq!(c.seconds_at(200.0), 7.7, max_relative = 1e-12);
        assert_relative_eq!(c.seconds_at(300.0), 13.0);
    }

    #[test]
    fn test_clamps_below_range() {
        let c = af2_head();
        assert_eq!(c.seconds_at(50.0), 4.9);
        assert_eq!(c.seconds_at(0.0), 4.9);
    }

    #[test]
    fn test_clamps_above_range() {
        let c = af2_head();
        assert_eq!(c.seconds_at(300.0), 13.0);
        assert_eq!(c.seconds_at(5000.0), 13.0);
    }

    #[test]
    fn test_covers() {
        let c = af2_head();
        assert!(c.covers(100.0));
        assert!(c.covers(299.5));
        assert!(!c.covers(99.9));
        assert!(!c.covers(300.1));
    }

    #[test]
    fn test_rejects_too_few_anchors() {
        let err = AnchorCurve::new(vec![AnchorPoint::new(100, 4.9)]).unwrap_err();
        assert_eq!(err, InvalidInput::TooFewAnchors { count: 1 });
        assert!(AnchorCurve::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_zero_length() {
        let err =
            AnchorCurve::new(vec![AnchorPoint::new(0, 4.9), AnchorPoint::new(200, 7.7)])
                .unwrap_err();
        assert_eq!(err, InvalidInput::ZeroAnchorLength { index: 0 });
    }

    #[test]
    fn test_rejects_non_positive_time() {
        let err =
            AnchorCurve::new(vec![AnchorPoint::new(100, 4.9), AnchorPoint::new(200, 0.0)])
                .unwrap_err();
        assert!(matches!(
            err,
            InvalidInput::NonPositiveAnchorTime { index: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_unsorted_anchors() {
        let err = AnchorCurve::new(vec![
            AnchorPoint::new(100, 4.9),
            AnchorPoint::new(300, 13.0),
            AnchorPoint::new(200, 7.7),
        ])
        .unwrap_err();
        assert_eq!(err, InvalidInput::UnsortedAnchors { index: 2 });

        // Duplicate lengths are also rejected.
        let dup = AnchorCurve::new(vec![
            AnchorPoint::new(100, 4.9),
            AnchorPoint::new(100, 5.0),
        ]);
        assert!(dup.is_err());
    }
}
