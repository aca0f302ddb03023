use crate::consequent::Consequent;
use crate::error::{FuzzyError, Result};
use crate::ops::Operator;

/// One `variable is membership_function` term of a rule antecedent.
///
/// Both sides are names, resolved against the system only at inference time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Proposition {
    pub variable: String,
    pub membership_function: String,
}

impl Proposition {
    pub fn new(variable: impl Into<String>, membership_function: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            membership_function: membership_function.into(),
        }
    }
}

impl<V: Into<String>, M: Into<String>> From<(V, M)> for Proposition {
    fn from((variable, membership_function): (V, M)) -> Self {
        Self::new(variable, membership_function)
    }
}

#[derive(Clone, Debug)]
pub struct FuzzyRule {
    antecedent: Vec<Proposition>,
    operators: Vec<Operator>,
    consequent: Consequent,
}

impl FuzzyRule {
    pub fn new(
        antecedent: impl IntoIterator<Item = impl Into<Proposition>>,
        operators: impl Into<Vec<Operator>>,
        consequent: Consequent,
    ) -> Result<Self> {
        let antecedent: Vec<Proposition> = antecedent.into_iter().map(Into::into).collect();

        if antecedent.is_empty() {
            return Err(FuzzyError::EmptyAntecedent);
        }

        Ok(Self {
            antecedent,
            operators: operators.into(),
            consequent,
        })
    }

    pub fn antecedent(&self) -> &[Proposition] {
        &self.antecedent
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// The operator that decides how all antecedent degrees are combined
    pub fn leading_operator(&self) -> Option<Operator> {
        self.operators.first().copied()
    }

    pub fn consequent(&self) -> &Consequent {
        &self.consequent
    }
}

#[test]
fn test_new_rule() {
    let rule = FuzzyRule::new(
        [("Food Quality", "Low"), ("Service Quality", "Low")],
        [Operator::Or],
        Consequent::linear([1.25, 1.25], 0.),
    )
    .unwrap();

    assert_eq!(rule.antecedent()[1], Proposition::new("Service Quality", "Low"));
    assert_eq!(rule.leading_operator(), Some(Operator::Or));
    assert_eq!(rule.consequent().arity(), Some(2));
}

#[test]
fn test_operators_may_be_omitted() {
    let rule = FuzzyRule::new(
        [("Service Quality", "Medium")],
        Vec::<Operator>::new(),
        Consequent::with_arity(1, |args| 2.5 * args[0]),
    )
    .unwrap();

    assert_eq!(rule.leading_operator(), None);
}

#[test]
fn test_empty_antecedent() {
    let result = FuzzyRule::new(
        Vec::<Proposition>::new(),
        [Operator::None],
        Consequent::constant(1.),
    );

    assert_eq!(result.unwrap_err(), FuzzyError::EmptyAntecedent);
}
