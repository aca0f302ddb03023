use std::fmt;
use std::ops::RangeInclusive;

use indexmap::IndexMap;

use crate::error::{FuzzyError, NameKind, Result};
use crate::linspace::Linspace;
use crate::membership::{MembershipCurve, MembershipFunction};

/// Number of x samples used when plotting a variable's membership functions
pub const DEFAULT_CURVE_SAMPLES: usize = 101;

/// A named linguistic variable holding uniquely named membership functions
/// in insertion order.
#[derive(Clone, Debug)]
pub struct FuzzyVariable {
    name: String,
    membership_functions: IndexMap<String, MembershipFunction>,
}

impl FuzzyVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            membership_functions: IndexMap::new(),
        }
    }

    /// Fails on the first duplicated membership function name
    pub fn with_membership_functions(
        name: impl Into<String>,
        membership_functions: impl IntoIterator<Item = MembershipFunction>,
    ) -> Result<Self> {
        let mut this = Self::new(name);

        for mf in membership_functions {
            this.add(mf)?;
        }

        Ok(this)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, mf: MembershipFunction) -> Result<()> {
        if self.membership_functions.contains_key(mf.name()) {
            return Err(FuzzyError::duplicate(NameKind::MembershipFunction, mf.name()));
        }

        self.membership_functions.insert(mf.name().to_owned(), mf);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&MembershipFunction> {
        self.membership_functions
            .get(name)
            .ok_or_else(|| FuzzyError::not_found(NameKind::MembershipFunction, name))
    }

    /// Removes and returns the named function; the others keep their order
    pub fn delete(&mut self, name: &str) -> Result<MembershipFunction> {
        self.membership_functions
            .shift_remove(name)
            .ok_or_else(|| FuzzyError::not_found(NameKind::MembershipFunction, name))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MembershipFunction> {
        self.membership_functions.values()
    }

    pub fn len(&self) -> usize {
        self.membership_functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membership_functions.is_empty()
    }

    /// Degree of `x` in every membership function, in insertion order
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.iter().map(|mf| (mf.name(), mf.evaluate(x))).collect()
    }

    /// From the first function's lower bound to the last function's upper bound
    pub fn universe(&self) -> Option<RangeInclusive<f64>> {
        let first = self.membership_functions.first()?.1;
        let last = self.membership_functions.last()?.1;

        Some(first.points()[0]..=last.points()[2])
    }

    /// Samples every membership function at `n` evenly spaced points across
    /// [`Self::universe`]. Rendering is left to the caller.
    pub fn sample_curves(&self, n: usize) -> Vec<MembershipCurve> {
        let Some(universe) = self.universe() else {
            return Vec::new();
        };
        let xs: Vec<f64> = Linspace::new(*universe.start(), *universe.end(), n).collect();

        self.iter()
            .map(|mf| MembershipCurve {
                name: mf.name().to_owned(),
                points: xs.iter().map(|&x| (x, mf.evaluate(x))).collect(),
            })
            .collect()
    }
}

impl fmt::Display for FuzzyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<'v> IntoIterator for &'v FuzzyVariable {
    type Item = &'v MembershipFunction;
    type IntoIter = indexmap::map::Values<'v, String, MembershipFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.membership_functions.values()
    }
}

#[cfg(test)]
fn quality(name: &str) -> FuzzyVariable {
    FuzzyVariable::with_membership_functions(
        name,
        [
            MembershipFunction::new("Low", [0., 0., 5.]).unwrap(),
            MembershipFunction::new("Medium", [0., 5., 10.]).unwrap(),
            MembershipFunction::new("High", [5., 10., 10.]).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn test_add_get_delete() {
    let mut food = FuzzyVariable::new("Food Quality");

    assert!(food.is_empty());
    food.add(MembershipFunction::new("Low", [0., 0., 5.]).unwrap()).unwrap();
    food.add(MembershipFunction::new("High", [5., 10., 10.]).unwrap()).unwrap();

    assert_eq!(food.len(), 2);
    assert_eq!(food.get("High").unwrap().points(), [5., 10., 10.]);

    let removed = food.delete("Low").unwrap();

    assert_eq!(removed.name(), "Low");
    assert_eq!(food.len(), 1);
    assert_eq!(
        food.get("Low"),
        Err(FuzzyError::not_found(NameKind::MembershipFunction, "Low"))
    );
}

#[test]
fn test_duplicate_add_leaves_variable_unchanged() {
    let mut food = quality("Food Quality");
    let err = food
        .add(MembershipFunction::new("Medium", [1., 2., 3.]).unwrap())
        .unwrap_err();

    assert_eq!(err, FuzzyError::duplicate(NameKind::MembershipFunction, "Medium"));
    assert_eq!(food.len(), 3);
    // The original definition survives
    assert_eq!(food.get("Medium").unwrap().points(), [0., 5., 10.]);
}

#[test]
fn test_unknown_delete_leaves_variable_unchanged() {
    let mut food = quality("Food Quality");

    assert_eq!(
        food.delete("Excellent").unwrap_err(),
        FuzzyError::not_found(NameKind::MembershipFunction, "Excellent")
    );
    assert_eq!(food.len(), 3);
}

#[test]
fn test_duplicate_in_initial_list() {
    let result = FuzzyVariable::with_membership_functions(
        "Tip",
        [
            MembershipFunction::new("Low", [0., 0., 13.]).unwrap(),
            MembershipFunction::new("Low", [0., 13., 25.]).unwrap(),
        ],
    );

    assert!(matches!(result, Err(FuzzyError::DuplicateName { .. })));
}

#[test]
fn test_delete_preserves_order() {
    let mut food = quality("Food Quality");

    food.delete("Low").unwrap();
    food.add(MembershipFunction::new("Low", [0., 0., 5.]).unwrap()).unwrap();

    let names: Vec<_> = food.iter().map(MembershipFunction::name).collect();
    assert_eq!(names, ["Medium", "High", "Low"]);
}

#[test]
fn test_fuzzify() {
    let food = quality("Food Quality");

    assert_eq!(food.fuzzify(10.), vec![("Low", 0.), ("Medium", 0.), ("High", 1.)]);
    assert_eq!(food.fuzzify(0.), vec![("Low", 1.), ("Medium", 0.), ("High", 0.)]);
}

#[test]
fn test_sample_curves() {
    let food = quality("Food Quality");

    assert_eq!(food.universe(), Some(0.0..=10.0));

    let curves = food.sample_curves(DEFAULT_CURVE_SAMPLES);

    assert_eq!(curves.len(), 3);
    assert_eq!(curves[0].name, "Low");
    assert_eq!(curves[2].name, "High");
    assert!(curves.iter().all(|c| c.points.len() == DEFAULT_CURVE_SAMPLES));
    assert_eq!(curves[1].points[50], (5., 1.));
    assert_eq!(curves[2].points[100], (10., 1.));

    assert!(FuzzyVariable::new("empty").sample_curves(11).is_empty());
    assert_eq!(FuzzyVariable::new("empty").universe(), None);
}

#[test]
fn test_curves_serialize() {
    let tip = FuzzyVariable::with_membership_functions(
        "Tip Amount",
        [MembershipFunction::new("Low tip", [0., 0., 13.]).unwrap()],
    )
    .unwrap();
    let json = serde_json::to_value(tip.sample_curves(2)).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "name": "Low tip", "points": [[0.0, 1.0], [13.0, 0.0]] }])
    );
}
