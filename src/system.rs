use indexmap::IndexMap;

use crate::error::{FuzzyError, NameKind, Result};
use crate::inference::SugenoInference;
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::rules::FuzzyRule;
use crate::variable::FuzzyVariable;

/// Fuzzy variables and rules that together map crisp inputs to one crisp output.
///
/// Rules refer to variables and membership functions by name and are only
/// checked against the registered variables when [`FuzzySystem::infer`] runs,
/// so rules and variables may be added in any order.
#[derive(Clone, Debug, Default)]
pub struct FuzzySystem {
    variables: IndexMap<String, FuzzyVariable>,
    rules: Vec<FuzzyRule>,
    engine: SugenoInference,
}

impl FuzzySystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(mut self, engine: SugenoInference) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &SugenoInference {
        &self.engine
    }

    pub fn add_variable(&mut self, variable: FuzzyVariable) -> Result<()> {
        if self.variables.contains_key(variable.name()) {
            return Err(FuzzyError::duplicate(NameKind::Variable, variable.name()));
        }

        self.variables.insert(variable.name().to_owned(), variable);

        Ok(())
    }

    pub fn get_variable(&self, name: &str) -> Result<&FuzzyVariable> {
        self.variables
            .get(name)
            .ok_or_else(|| FuzzyError::not_found(NameKind::Variable, name))
    }

    pub fn get_variable_mut(&mut self, name: &str) -> Result<&mut FuzzyVariable> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| FuzzyError::not_found(NameKind::Variable, name))
    }

    pub fn delete_variable(&mut self, name: &str) -> Result<FuzzyVariable> {
        self.variables
            .shift_remove(name)
            .ok_or_else(|| FuzzyError::not_found(NameKind::Variable, name))
    }

    pub fn variables(&self) -> impl ExactSizeIterator<Item = &FuzzyVariable> {
        self.variables.values()
    }

    pub fn add_rule(&mut self, rule: FuzzyRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    pub fn infer(&self, inputs: &Inputs) -> Result<f64> {
        self.infer_detailed(inputs).map(|outputs| outputs.crisp())
    }

    /// Like [`Self::infer`] but also reports each rule's weight and output
    pub fn infer_detailed(&self, inputs: &Inputs) -> Result<Outputs> {
        self.engine.eval(&self.variables, &self.rules, inputs)
    }
}
