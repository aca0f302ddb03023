//! Takagi-Sugeno fuzzy inference with triangular membership functions.
//!
//! Crisp inputs are fuzzified through named triangular membership functions,
//! each rule combines its antecedent degrees into a firing strength and
//! evaluates a crisp consequent, and the rule outputs are aggregated by
//! weighted average.
//!
//! ```
//! use sugeno_fuzzy::{is, Consequent, FuzzySystem, FuzzyVariable, Inputs, MembershipFunction};
//!
//! # fn main() -> sugeno_fuzzy::Result<()> {
//! let mut food = FuzzyVariable::new("Food Quality");
//! food.add(MembershipFunction::new("Low", [0., 0., 5.])?)?;
//! food.add(MembershipFunction::new("High", [5., 10., 10.])?)?;
//!
//! let mut system = FuzzySystem::new();
//! system.add_variable(food)?;
//! system.add_rule(is("Food Quality", "Low").then(Consequent::constant(5.))?);
//! system.add_rule(is("Food Quality", "High").then(Consequent::linear([2.5], 0.))?);
//!
//! let tip = system.infer(&Inputs::new().with("Food Quality", 10.))?;
//! assert_eq!(tip, 25.);
//! # Ok(())
//! # }
//! ```

mod consequent;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod system;
mod variable;

pub use consequent::Consequent;
pub use dsl::{is, Premise};
pub use error::{FuzzyError, NameKind, Result};
pub use inference::{SugenoInference, ZeroWeightPolicy};
pub use inputs::Inputs;
pub use membership::{MembershipCurve, MembershipFunction};
pub use ops::{AndOp, Operator, OrOp};
pub use outputs::{Outputs, RuleActivation};
pub use rules::{FuzzyRule, Proposition};
pub use system::FuzzySystem;
pub use variable::{FuzzyVariable, DEFAULT_CURVE_SAMPLES};
