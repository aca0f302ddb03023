//! Error types for building fuzzy systems and running inference.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// The kind of named item a lookup or insertion was about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Variable,
    MembershipFunction,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable => f.write_str("variable"),
            Self::MembershipFunction => f.write_str("membership function"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// A variable or membership function with this name already exists in its container
    #[error("{kind} \"{name}\" already exists")]
    DuplicateName { kind: NameKind, name: String },

    /// No variable or membership function with this name is registered
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: NameKind, name: String },

    /// A rule needs a crisp value for this variable but none was supplied
    #[error("no input value supplied for variable \"{0}\"")]
    MissingInput(String),

    /// A crisp input was NaN or infinite
    #[error("input for variable \"{name}\" is not finite: {value}")]
    NonFiniteInput { name: String, value: f64 },

    /// A rule that fired produced a NaN or infinite output
    #[error("rule {rule} fired with a non-finite output: {value}")]
    NonFiniteOutput { rule: usize, value: f64 },

    /// The weighted average overflowed or otherwise left the finite range
    #[error("aggregated output is not finite: {0}")]
    NonFiniteAggregate(f64),

    /// Every rule fired with weight zero, so the weighted average is undefined
    #[error("total rule weight is zero; no rule fired for the given inputs")]
    ZeroTotalWeight,

    /// Triangle points must be finite and sorted
    #[error("membership function \"{name}\" has invalid points {points:?}; expected finite p0 <= p1 <= p2")]
    InvalidPoints { name: String, points: [f64; 3] },

    /// A rule was built without any antecedent terms
    #[error("rule antecedent must contain at least one term")]
    EmptyAntecedent,

    /// A consequent with a declared arity received a different number of arguments
    #[error("consequent expects {expected} arguments but the antecedent supplied {got}")]
    ArityMismatch { expected: usize, got: usize },
}

impl FuzzyError {
    pub(crate) fn duplicate(kind: NameKind, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn not_found(kind: NameKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

#[test]
fn test_error_messages() {
    let err = FuzzyError::duplicate(NameKind::MembershipFunction, "Low");
    assert_eq!(err.to_string(), "membership function \"Low\" already exists");

    let err = FuzzyError::not_found(NameKind::Variable, "Food Quality");
    assert_eq!(err.to_string(), "variable \"Food Quality\" not found");

    let err = FuzzyError::ArityMismatch { expected: 2, got: 1 };
    assert_eq!(err.to_string(), "consequent expects 2 arguments but the antecedent supplied 1");
}
