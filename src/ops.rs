use num::Float;
use serde::{Deserialize, Serialize};

/// Connective between antecedent terms of a rule.
///
/// Only the first operator of a rule decides how its degrees are combined:
/// `Or` reduces all degrees with the OR method, anything else (including no
/// operator at all) with the AND method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    None,
}

/// And operator method for combining the degrees of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }

    /// Folds all degrees left to right; empty input yields `None`
    pub fn reduce<F: Float>(self, degrees: impl IntoIterator<Item = F>) -> Option<F> {
        degrees.into_iter().reduce(|u, v| self.call(u, v))
    }
}

/// Or operator method for combining the degrees of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
        }
    }

    pub fn reduce<F: Float>(self, degrees: impl IntoIterator<Item = F>) -> Option<F> {
        degrees.into_iter().reduce(|u, v| self.call(u, v))
    }
}

#[test]
fn test_and_ops() {
    use approx::assert_abs_diff_eq;

    assert_eq!(AndOp::Min.call(0.7, 0.3), 0.3);
    assert_eq!(AndOp::Prod.call(0.5, 0.5), 0.25);
    assert_abs_diff_eq!(AndOp::BoundedProd.call(0.7, 0.6), 0.3, epsilon = 1e-12);
    assert_eq!(AndOp::BoundedProd.call(0.2, 0.3), 0.);
    assert_eq!(AndOp::DrasticProd.call(0.4, 1.), 0.4);
    assert_eq!(AndOp::DrasticProd.call(1., 0.4), 0.4);
    assert_eq!(AndOp::DrasticProd.call(0.9, 0.9), 0.);
}

#[test]
fn test_or_ops() {
    use approx::assert_abs_diff_eq;

    assert_eq!(OrOp::Max.call(0.7, 0.3), 0.7);
    assert_abs_diff_eq!(OrOp::ProbOr.call(0.5, 0.5), 0.75);
    assert_eq!(OrOp::BoundedSum.call(0.7, 0.6), 1.);
    assert_eq!(OrOp::DrasticSum.call(0.4, 0.), 0.4);
    assert_eq!(OrOp::DrasticSum.call(0., 0.4), 0.4);
    assert_eq!(OrOp::DrasticSum.call(0.1, 0.1), 1.);
}

#[test]
fn test_reduce() {
    assert_eq!(AndOp::Min.reduce([0.9, 0.2, 0.5]), Some(0.2));
    assert_eq!(OrOp::Max.reduce([0.9, 0.2, 0.5]), Some(0.9));
    assert_eq!(AndOp::Min.reduce([0.6f32]), Some(0.6));
    assert_eq!(OrOp::Max.reduce(Vec::<f64>::new()), None);
}

#[test]
fn test_config_names() {
    assert_eq!(serde_json::to_string(&AndOp::BoundedProd).unwrap(), "\"BoundedProd\"");
    assert_eq!(serde_json::from_str::<OrOp>("\"ProbOr\"").unwrap(), OrOp::ProbOr);
    assert_eq!(serde_json::from_str::<Operator>("\"Or\"").unwrap(), Operator::Or);
}
