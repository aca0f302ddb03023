//! Property-based tests for membership functions and inference.

use proptest::prelude::*;
use sugeno_fuzzy::{
    is, Consequent, FuzzyError, FuzzySystem, FuzzyVariable, Inputs, MembershipFunction, NameKind,
};

// ===== Strategies =====

/// Sorted triangle points within [-100, 100]
fn arb_points() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|mut p| {
        p.sort_by(f64::total_cmp);
        p
    })
}

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

fn tipping() -> FuzzySystem {
    let mut system = FuzzySystem::new();

    system.add_variable(quality("Food Quality")).unwrap();
    system.add_variable(quality("Service Quality")).unwrap();
    system.add_rule(
        is("Food Quality", "Low")
            .or("Service Quality", "Low")
            .then(Consequent::linear([1.25, 1.25], 0.))
            .unwrap(),
    );
    system.add_rule(
        is("Service Quality", "Medium")
            .then(Consequent::linear([2.5], 0.))
            .unwrap(),
    );
    system.add_rule(
        is("Food Quality", "High")
            .or("Service Quality", "High")
            .then(Consequent::linear([1.25, 1.25], 0.))
            .unwrap(),
    );
    system
}

// ===== Membership functions =====

proptest! {
    #[test]
    fn prop_degree_in_unit_interval(points in arb_points(), x in -200.0..200.0f64) {
        let mf = MembershipFunction::new("mf", points).unwrap();
        let degree = mf.evaluate(x);

        prop_assert!((0.0..=1.0).contains(&degree), "degree {} out of range", degree);
    }

    #[test]
    fn prop_peak_is_one(points in arb_points()) {
        let mf = MembershipFunction::new("mf", points).unwrap();

        prop_assert_eq!(mf.evaluate(points[1]), 1.0);
    }

    #[test]
    fn prop_zero_outside_support(points in arb_points(), offset in 0.001..50.0f64) {
        let mf = MembershipFunction::new("mf", points).unwrap();
        let [p0, p1, p2] = points;

        prop_assert_eq!(mf.evaluate(p2 + offset), 0.0);

        let left = mf.evaluate(p0 - offset);
        if p0 == p1 {
            prop_assert_eq!(left, 1.0);
        } else {
            prop_assert_eq!(left, 0.0);
        }
    }

    #[test]
    fn prop_endpoints(points in arb_points()) {
        let mf = MembershipFunction::new("mf", points).unwrap();
        let [p0, p1, p2] = points;

        prop_assert_eq!(mf.evaluate(p0), if p0 == p1 { 1.0 } else { 0.0 });
        prop_assert_eq!(mf.evaluate(p2), if p1 == p2 { 1.0 } else { 0.0 });
    }

    #[test]
    fn prop_unsorted_points_rejected(points in arb_points()) {
        let [p0, p1, p2] = points;
        prop_assume!(p0 < p2);

        let reversed = MembershipFunction::new("mf", [p2, p1, p0]);

        prop_assert!(
            matches!(reversed, Err(FuzzyError::InvalidPoints { .. })),
            "expected InvalidPoints error"
        );
    }
}

// ===== Variables =====

proptest! {
    #[test]
    fn prop_duplicate_add_keeps_cardinality(points in arb_points(), idx in 0usize..3) {
        let mut var = quality("q");
        let name = ["Low", "Medium", "High"][idx];
        let err = var.add(MembershipFunction::new(name, points).unwrap()).unwrap_err();

        prop_assert_eq!(
            err,
            FuzzyError::DuplicateName { kind: NameKind::MembershipFunction, name: name.to_owned() }
        );
        prop_assert_eq!(var.len(), 3);
    }

    #[test]
    fn prop_unknown_delete_keeps_cardinality(name in "[a-z]{1,8}") {
        let mut var = quality("q");

        prop_assert!(var.delete(&name).is_err());
        prop_assert_eq!(var.len(), 3);
    }
}

// ===== Inference =====

proptest! {
    #[test]
    fn prop_infer_is_deterministic(food in -2.0..12.0f64, service in -2.0..12.0f64) {
        let system = tipping();
        let inputs = Inputs::new().with("Food Quality", food).with("Service Quality", service);

        prop_assert_eq!(system.infer(&inputs), system.infer(&inputs));
    }

    #[test]
    fn prop_output_within_rule_outputs(food in 0.0..=10.0f64, service in 0.0..=10.0f64) {
        let system = tipping();
        let inputs = Inputs::new().with("Food Quality", food).with("Service Quality", service);
        let outputs = system.infer_detailed(&inputs).unwrap();
        let fired = outputs.activations().iter().filter(|a| a.weight > 0.);
        let (lo, hi) = fired.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), a| {
            (lo.min(a.output), hi.max(a.output))
        });

        // A weighted average never leaves the range of its contributors
        prop_assert!(outputs.crisp() >= lo - 1e-9 && outputs.crisp() <= hi + 1e-9);
    }

    #[test]
    fn prop_single_rule_returns_its_output(x in 0.01..9.99f64, constant in -1e6..1e6f64) {
        let mut system = FuzzySystem::new();

        system.add_variable(quality("x")).unwrap();
        system.add_rule(is("x", "Medium").then(Consequent::constant(constant)).unwrap());

        let crisp = system.infer(&Inputs::new().with("x", x)).unwrap();

        // The weight cancels out of w * c / w, up to rounding
        prop_assert!((crisp - constant).abs() <= 1e-9 * constant.abs().max(1.));
    }
}
