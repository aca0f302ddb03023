use std::collections::HashMap;

/// Crisp input values keyed by variable name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) HashMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Replaces any previous value for the same variable
    pub fn add(&mut self, variable: impl Into<String>, val: f64) {
        self.0.insert(variable.into(), val);
    }

    pub fn with(mut self, variable: impl Into<String>, val: f64) -> Self {
        self.add(variable, val);
        self
    }

    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Inputs(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<HashMap<String, f64>> for Inputs {
    fn from(map: HashMap<String, f64>) -> Self {
        Inputs(map)
    }
}

#[test]
fn test_inputs() {
    let mut inputs: Inputs = [("Food Quality", 10.), ("Service Quality", 3.)].into_iter().collect();

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs.get("Service Quality"), Some(3.));
    assert_eq!(inputs.get("Ambience"), None);

    inputs.add("Service Quality", 7.);

    assert_eq!(inputs.get("Service Quality"), Some(7.));
    assert_eq!(Inputs::new().with("Food Quality", 1.).len(), 1);
}
