use std::fmt;
use std::sync::Arc;

use crate::error::{FuzzyError, Result};

type ConsequentFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// The crisp output function of a rule.
///
/// It receives the crisp input values of the rule's antecedent terms, in
/// antecedent order. Consequents are cheap to clone and shareable between
/// threads.
#[derive(Clone)]
pub struct Consequent {
    arity: Option<usize>,
    func: Arc<ConsequentFn>,
}

impl Consequent {
    /// Accepts any number of arguments
    pub fn new(func: impl Fn(&[f64]) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            arity: None,
            func: Arc::new(func),
        }
    }

    /// Inference fails with [`FuzzyError::ArityMismatch`] unless the antecedent
    /// supplies exactly `arity` values.
    pub fn with_arity(arity: usize, func: impl Fn(&[f64]) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            arity: Some(arity),
            func: Arc::new(func),
        }
    }

    /// Zero-order consequent, ignores its arguments
    pub fn constant(value: f64) -> Self {
        Self::new(move |_| value)
    }

    /// First-order consequent `c0 * x0 + c1 * x1 + ... + intercept`
    pub fn linear(coefficients: impl Into<Vec<f64>>, intercept: f64) -> Self {
        let coefficients = coefficients.into();

        Self::with_arity(coefficients.len(), move |args| {
            coefficients
                .iter()
                .zip(args)
                .map(|(c, x)| c * x)
                .sum::<f64>()
                + intercept
        })
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub fn call(&self, args: &[f64]) -> Result<f64> {
        match self.arity {
            Some(expected) if expected != args.len() => Err(FuzzyError::ArityMismatch {
                expected,
                got: args.len(),
            }),
            _ => Ok((self.func)(args)),
        }
    }
}

impl fmt::Debug for Consequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consequent")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl<Func> From<Func> for Consequent
where
    Func: Fn(&[f64]) -> f64 + Send + Sync + 'static,
{
    fn from(func: Func) -> Self {
        Self::new(func)
    }
}

#[test]
fn test_closure() {
    let sum = Consequent::new(|args| 1.25 * args.iter().sum::<f64>());

    assert_eq!(sum.arity(), None);
    assert_eq!(sum.call(&[10., 10.]), Ok(25.));
    assert_eq!(sum.call(&[4.]), Ok(5.));
}

#[test]
fn test_declared_arity() {
    let tip = Consequent::with_arity(1, |args| 2.5 * args[0]);

    assert_eq!(tip.call(&[10.]), Ok(25.));
    assert_eq!(
        tip.call(&[10., 3.]),
        Err(FuzzyError::ArityMismatch { expected: 1, got: 2 })
    );
}

#[test]
fn test_constant_and_linear() {
    assert_eq!(Consequent::constant(13.).call(&[1., 2., 3.]), Ok(13.));

    let linear = Consequent::linear([1.25, 1.25], 0.);

    assert_eq!(linear.arity(), Some(2));
    assert_eq!(linear.call(&[10., 10.]), Ok(25.));
    assert_eq!(Consequent::linear(vec![2., -1.], 3.).call(&[4., 1.]), Ok(10.));
    assert!(linear.call(&[10.]).is_err());
}
