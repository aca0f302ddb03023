use crate::consequent::Consequent;
use crate::error::Result;
use crate::ops::Operator;
use crate::rules::{FuzzyRule, Proposition};

/// Rule premise under construction, e.g.
/// `is("Food Quality", "Low").or("Service Quality", "Low")`
#[derive(Clone, Debug, PartialEq)]
pub struct Premise {
    pub(crate) antecedent: Vec<Proposition>,
    pub(crate) operators: Vec<Operator>,
}

/// Starts a premise with a single `variable is membership_function` term
pub fn is(variable: impl Into<String>, membership_function: impl Into<String>) -> Premise {
    Premise {
        antecedent: vec![Proposition::new(variable, membership_function)],
        operators: Vec::new(),
    }
}

impl Premise {
    pub fn and(self, variable: impl Into<String>, membership_function: impl Into<String>) -> Self {
        self.push(Operator::And, Proposition::new(variable, membership_function))
    }

    pub fn or(self, variable: impl Into<String>, membership_function: impl Into<String>) -> Self {
        self.push(Operator::Or, Proposition::new(variable, membership_function))
    }

    fn push(mut self, op: Operator, prop: Proposition) -> Self {
        self.operators.push(op);
        self.antecedent.push(prop);
        self
    }

    pub fn propositions(&self) -> &[Proposition] {
        &self.antecedent
    }

    pub fn then(self, consequent: impl Into<Consequent>) -> Result<FuzzyRule> {
        FuzzyRule::new(self.antecedent, self.operators, consequent.into())
    }
}

#[test]
fn test_premise_builder() {
    let premise = is("Food Quality", "Low").or("Service Quality", "Low");

    assert_eq!(
        premise.propositions(),
        [
            Proposition::new("Food Quality", "Low"),
            Proposition::new("Service Quality", "Low"),
        ]
    );
    assert_eq!(premise.operators, [Operator::Or]);

    let rule = premise.then(Consequent::linear([1.25, 1.25], 0.)).unwrap();

    assert_eq!(rule.antecedent().len(), 2);
    assert_eq!(rule.operators(), [Operator::Or]);
}

#[test]
fn test_mixed_chain_records_every_operator() {
    let premise = is("a", "x").and("b", "y").or("c", "z");

    assert_eq!(premise.operators, [Operator::And, Operator::Or]);
    assert_eq!(premise.propositions().len(), 3);
}
