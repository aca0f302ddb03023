use serde::Serialize;

/// Firing strength and crisp output of a single rule
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RuleActivation {
    pub weight: f64,
    pub output: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outputs {
    crisp: f64,
    activations: Vec<RuleActivation>,
    total_weight: f64,
}

impl Outputs {
    pub(crate) fn new(crisp: f64, activations: Vec<RuleActivation>, total_weight: f64) -> Self {
        Self {
            crisp,
            activations,
            total_weight,
        }
    }

    /// The weighted average of all rule outputs, or the fallback value
    pub fn crisp(&self) -> f64 {
        self.crisp
    }

    /// One entry per rule, in rule order
    pub fn activations(&self) -> &[RuleActivation] {
        &self.activations
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// True when no rule fired and the crisp value came from the fallback policy
    pub fn is_fallback(&self) -> bool {
        self.total_weight == 0.
    }
}

#[test]
fn test_outputs_serialize() {
    let outputs = Outputs::new(
        25.,
        vec![
            RuleActivation { weight: 0., output: 25. },
            RuleActivation { weight: 1., output: 25. },
        ],
        1.,
    );

    assert_eq!(
        serde_json::to_value(&outputs).unwrap(),
        serde_json::json!({
            "crisp": 25.0,
            "activations": [
                { "weight": 0.0, "output": 25.0 },
                { "weight": 1.0, "output": 25.0 },
            ],
            "total_weight": 1.0,
        })
    );
}
