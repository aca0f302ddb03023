use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::error::{FuzzyError, NameKind, Result};
use crate::inputs::Inputs;
use crate::math::weighted_average;
use crate::ops::{AndOp, OrOp, Operator};
use crate::outputs::{Outputs, RuleActivation};
use crate::rules::FuzzyRule;
use crate::variable::FuzzyVariable;

/// What to return when every rule fires with weight zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ZeroWeightPolicy {
    /// Fail with [`FuzzyError::ZeroTotalWeight`]
    #[default]
    Error,
    /// Return this crisp value instead
    Fallback(f64),
}

/// Takagi-Sugeno inference settings.
///
/// The default combines degrees with `min` for AND and `max` for OR and
/// treats a zero total weight as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SugenoInference {
    and_op: AndOp,
    or_op: OrOp,
    zero_weight: ZeroWeightPolicy,
}

impl SugenoInference {
    pub fn new(and_op: AndOp, or_op: OrOp, zero_weight: ZeroWeightPolicy) -> Self {
        Self {
            and_op,
            or_op,
            zero_weight,
        }
    }

    pub fn with_and_op(mut self, and_op: AndOp) -> Self {
        self.and_op = and_op;
        self
    }

    pub fn with_or_op(mut self, or_op: OrOp) -> Self {
        self.or_op = or_op;
        self
    }

    pub fn with_zero_weight(mut self, zero_weight: ZeroWeightPolicy) -> Self {
        self.zero_weight = zero_weight;
        self
    }

    pub fn and_op(&self) -> AndOp {
        self.and_op
    }

    pub fn or_op(&self) -> OrOp {
        self.or_op
    }

    pub fn zero_weight(&self) -> ZeroWeightPolicy {
        self.zero_weight
    }

    /// Firing strength of a rule from its antecedent degrees.
    ///
    /// Only the leading operator matters: `Or` reduces every degree with the
    /// OR method, otherwise every degree is reduced with the AND method.
    /// Mixed chains are not evaluated left to right.
    pub fn firing_strength(&self, leading: Option<Operator>, degrees: &[f64]) -> f64 {
        let weight = match (degrees, leading) {
            ([degree], _) => Some(*degree),
            (_, Some(Operator::Or)) => self.or_op.reduce(degrees.iter().copied()),
            _ => self.and_op.reduce(degrees.iter().copied()),
        };

        // Rules always have at least one term
        weight.unwrap_or(0.)
    }

    /// Evaluates every rule in order and aggregates their outputs by weighted average.
    ///
    /// Rule references are resolved here, so a missing input, variable or
    /// membership function fails the whole call.
    #[instrument(level = "debug", skip_all, fields(rules = rules.len(), inputs = inputs.len()))]
    pub fn eval(
        &self,
        vars: &IndexMap<String, FuzzyVariable>,
        rules: &[FuzzyRule],
        inputs: &Inputs,
    ) -> Result<Outputs> {
        let mut activations = Vec::with_capacity(rules.len());

        for (i, rule) in rules.iter().enumerate() {
            let n_terms = rule.antecedent().len();
            let mut degrees = Vec::with_capacity(n_terms);
            let mut args = Vec::with_capacity(n_terms);

            for prop in rule.antecedent() {
                let value = inputs
                    .get(&prop.variable)
                    .ok_or_else(|| FuzzyError::MissingInput(prop.variable.clone()))?;

                if !value.is_finite() {
                    return Err(FuzzyError::NonFiniteInput {
                        name: prop.variable.clone(),
                        value,
                    });
                }

                let var = vars
                    .get(&prop.variable)
                    .ok_or_else(|| FuzzyError::not_found(NameKind::Variable, &prop.variable))?;
                let mf = var.get(&prop.membership_function)?;

                degrees.push(mf.evaluate(value));
                args.push(value);
            }

            let weight = self.firing_strength(rule.leading_operator(), &degrees);
            // Evaluated even for zero weight rules, whose output is then ignored
            let output = rule.consequent().call(&args)?;

            trace!(rule = i, ?degrees, weight, output, "rule evaluated");

            if weight > 0. && !output.is_finite() {
                return Err(FuzzyError::NonFiniteOutput { rule: i, value: output });
            }

            activations.push(RuleActivation { weight, output });
        }

        let (crisp, total_weight) = weighted_average(activations.iter().map(|a| (a.weight, a.output)));

        let crisp = match (crisp, self.zero_weight) {
            (Some(crisp), _) if crisp.is_finite() => crisp,
            (Some(crisp), _) => return Err(FuzzyError::NonFiniteAggregate(crisp)),
            (None, ZeroWeightPolicy::Fallback(fallback)) => {
                warn!(fallback, "no rule fired, using fallback output");
                fallback
            },
            (None, ZeroWeightPolicy::Error) => {
                debug!("no rule fired");
                return Err(FuzzyError::ZeroTotalWeight);
            },
        };

        debug!(crisp, total_weight, "inference complete");

        Ok(Outputs::new(crisp, activations, total_weight))
    }
}

#[test]
fn test_firing_strength() {
    let model = SugenoInference::default();

    assert_eq!(model.firing_strength(None, &[0.3]), 0.3);
    assert_eq!(model.firing_strength(Some(Operator::Or), &[0.3]), 0.3);
    assert_eq!(model.firing_strength(Some(Operator::Or), &[0.3, 0.8, 0.1]), 0.8);
    assert_eq!(model.firing_strength(Some(Operator::And), &[0.3, 0.8, 0.1]), 0.1);
    assert_eq!(model.firing_strength(Some(Operator::None), &[0.3, 0.8]), 0.3);
    // No operator despite several terms falls back to AND
    assert_eq!(model.firing_strength(None, &[0.3, 0.8]), 0.3);
}

#[test]
fn test_alternative_ops() {
    use approx::assert_abs_diff_eq;

    let model = SugenoInference::default()
        .with_and_op(AndOp::Prod)
        .with_or_op(OrOp::ProbOr);

    assert_abs_diff_eq!(model.firing_strength(Some(Operator::And), &[0.5, 0.5]), 0.25);
    assert_abs_diff_eq!(model.firing_strength(Some(Operator::Or), &[0.5, 0.5]), 0.75);
}

#[test]
fn test_config_from_json() {
    let model: SugenoInference = serde_json::from_str(r#"{ "and_op": "Prod", "zero_weight": { "Fallback": 12.5 } }"#).unwrap();

    assert_eq!(
        model,
        SugenoInference::new(AndOp::Prod, OrOp::Max, ZeroWeightPolicy::Fallback(12.5))
    );

    let model: SugenoInference = serde_json::from_str("{}").unwrap();

    assert_eq!(model, SugenoInference::default());
    assert_eq!(model.zero_weight(), ZeroWeightPolicy::Error);
}
