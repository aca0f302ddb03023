//! Benchmarks for fuzzy inference

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sugeno_fuzzy::{
    is, Consequent, FuzzyRule, FuzzySystem, FuzzyVariable, Inputs, MembershipFunction, Operator,
};

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
    system.add_rule(is("Service Quality", "Medium").then(Consequent::linear([2.5], 0.)).unwrap());
    system.add_rule(
        is("Food Quality", "High")
            .or("Service Quality", "High")
            .then(Consequent::linear([1.25, 1.25], 0.))
            .unwrap(),
    );
    system
}

/// Every combination of `n_vars` variables' terms, ANDed together
fn grid(n_vars: usize) -> (FuzzySystem, Inputs) {
    let mut system = FuzzySystem::new();
    let names: Vec<String> = (0..n_vars).map(|i| format!("x{i}")).collect();

    for name in &names {
        system.add_variable(quality(name)).unwrap();
    }

    let terms = ["Low", "Medium", "High"];
    let n_rules = terms.len().pow(n_vars as u32);

    for r in 0..n_rules {
        let antecedent: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), terms[r / terms.len().pow(i as u32) % terms.len()]))
            .collect();

        system.add_rule(
            FuzzyRule::new(antecedent, [Operator::And], Consequent::constant(r as f64)).unwrap(),
        );
    }

    let inputs = names.iter().map(|name| (name.as_str(), 3.7)).collect();

    (system, inputs)
}

fn tipping_benchmark(c: &mut Criterion) {
    let system = tipping();
    let inputs = Inputs::new()
        .with("Food Quality", 6.5)
        .with("Service Quality", 3.2);

    c.bench_function("infer_tipping", |b| {
        b.iter(|| system.infer(black_box(&inputs)).unwrap());
    });
}

fn rule_grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_grid");

    for n_vars in [2, 4, 6] {
        let (system, inputs) = grid(n_vars);

        group.bench_with_input(BenchmarkId::new("vars", n_vars), &inputs, |b, inputs| {
            b.iter(|| system.infer(black_box(inputs)).unwrap());
        });
    }

    group.finish();
}

fn curve_sampling_benchmark(c: &mut Criterion) {
    let food = quality("Food Quality");

    c.bench_function("sample_curves_1001", |b| {
        b.iter(|| black_box(food.sample_curves(1001)));
    });
}

criterion_group!(benches, tipping_benchmark, rule_grid_benchmark, curve_sampling_benchmark);
criterion_main!(benches);
