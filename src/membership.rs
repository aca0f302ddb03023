use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{FuzzyError, Result};

/// A named triangular membership function defined by three sorted points.
///
/// The degree is zero outside `[p0, p2]`, rises linearly to one at `p1` and
/// falls back to zero at `p2`. When `p0 == p1` the function is a left
/// shoulder: every `x <= p0` has degree one.
#[derive(Clone, Debug, PartialEq)]
pub struct MembershipFunction {
    name: String,
    points: [f64; 3],
}

impl MembershipFunction {
    /// Fails with [`FuzzyError::InvalidPoints`] unless the points are finite and
    /// `p0 <= p1 <= p2`.
    pub fn new(name: impl Into<String>, points: [f64; 3]) -> Result<Self> {
        let name = name.into();
        let [p0, p1, p2] = points;

        if !points.iter().all(|p| p.is_finite()) || p0 > p1 || p1 > p2 {
            return Err(FuzzyError::InvalidPoints { name, points });
        }

        Ok(Self { name, points })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> [f64; 3] {
        self.points
    }

    /// The closed interval outside of which the degree is zero (save for a left shoulder)
    pub fn support(&self) -> RangeInclusive<f64> {
        self.points[0]..=self.points[2]
    }

    /// Membership degree of `x`, always within `[0, 1]`
    pub fn evaluate(&self, x: f64) -> f64 {
        let [p0, p1, p2] = self.points;

        if x <= p0 {
            if p0 == p1 {
                1.
            } else {
                0.
            }
        } else if x <= p1 {
            (x - p0) / (p1 - p0)
        } else if x <= p2 {
            (p2 - x) / (p2 - p1)
        } else {
            0.
        }
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Sampled `(x, degree)` pairs of one membership function, for plotting
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MembershipCurve {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn mf(points: [f64; 3]) -> MembershipFunction {
        MembershipFunction::new("test", points).unwrap()
    }

    #[test]
    fn test_triangle() {
        let medium = mf([0., 5., 10.]);

        assert_eq!(medium.evaluate(-1.), 0.);
        assert_eq!(medium.evaluate(0.), 0.);
        assert_abs_diff_eq!(medium.evaluate(2.5), 0.5);
        assert_eq!(medium.evaluate(5.), 1.);
        assert_abs_diff_eq!(medium.evaluate(7.5), 0.5);
        assert_eq!(medium.evaluate(10.), 0.);
        assert_eq!(medium.evaluate(11.), 0.);
    }

    #[test]
    fn test_left_shoulder() {
        let low = mf([0., 0., 5.]);

        assert_eq!(low.evaluate(-100.), 1.);
        assert_eq!(low.evaluate(0.), 1.);
        assert_abs_diff_eq!(low.evaluate(1.), 0.8);
        assert_eq!(low.evaluate(5.), 0.);
        assert_eq!(low.evaluate(6.), 0.);
    }

    #[test]
    fn test_right_shoulder() {
        let high = mf([5., 10., 10.]);

        assert_eq!(high.evaluate(5.), 0.);
        assert_abs_diff_eq!(high.evaluate(9.), 0.8);
        assert_eq!(high.evaluate(10.), 1.);
        // The right side is not extended past p2
        assert_eq!(high.evaluate(10.5), 0.);
    }

    #[test]
    fn test_fully_degenerate() {
        let spike = mf([3., 3., 3.]);

        assert_eq!(spike.evaluate(-3.), 1.);
        assert_eq!(spike.evaluate(3.), 1.);
        assert_eq!(spike.evaluate(3.0001), 0.);
    }

    #[test]
    fn test_invalid_points() {
        assert_eq!(
            MembershipFunction::new("bad", [5., 0., 10.]),
            Err(FuzzyError::InvalidPoints {
                name: "bad".into(),
                points: [5., 0., 10.],
            })
        );
        assert!(MembershipFunction::new("bad", [0., 5., 4.]).is_err());
        assert!(MembershipFunction::new("bad", [f64::NAN, 5., 10.]).is_err());
        assert!(MembershipFunction::new("bad", [0., 5., f64::INFINITY]).is_err());
    }

    #[test]
    fn test_accessors() {
        let low = MembershipFunction::new("Low food", [0., 0., 5.]).unwrap();

        assert_eq!(low.name(), "Low food");
        assert_eq!(low.to_string(), "Low food");
        assert_eq!(low.points(), [0., 0., 5.]);
        assert_eq!(low.support(), 0.0..=5.0);
    }
}
