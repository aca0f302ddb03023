//! Restaurant tipping: food and service quality on a 0-10 scale map to a tip.
//!
//! Prints each variable's membership curves as JSON for an external plotter,
//! then the inferred tip for the food and service scores given on the command
//! line (defaults to 10 and 10).
//!
//! `RUST_LOG=sugeno_fuzzy=trace cargo run --example tipping -- 3 8`

use std::env;
use std::error::Error;

use sugeno_fuzzy::{
    is, Consequent, FuzzySystem, FuzzyVariable, Inputs, MembershipFunction, DEFAULT_CURVE_SAMPLES,
};
use tracing_subscriber::EnvFilter;

fn triangle_set(name: &str, suffix: &str, peak: f64, max: f64) -> sugeno_fuzzy::Result<FuzzyVariable> {
    FuzzyVariable::with_membership_functions(
        name,
        [
            MembershipFunction::new(format!("Low {suffix}"), [0., 0., peak])?,
            MembershipFunction::new(format!("Medium {suffix}"), [0., peak, max])?,
            MembershipFunction::new(format!("High {suffix}"), [peak, max, max])?,
        ],
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let food_score: f64 = args.next().map(|a| a.parse::<f64>()).transpose()?.unwrap_or(10.);
    let service_score: f64 = args.next().map(|a| a.parse::<f64>()).transpose()?.unwrap_or(10.);

    let food = triangle_set("Food Quality", "food", 5., 10.)?;
    let service = triangle_set("Service Quality", "service", 5., 10.)?;
    // Only plotted; tips come from the rule consequents
    let tip = triangle_set("Tip Amount", "tip", 13., 25.)?;

    for var in [&food, &service, &tip] {
        let plot = serde_json::json!({
            "variable": var.name(),
            "curves": var.sample_curves(DEFAULT_CURVE_SAMPLES),
        });
        println!("{plot}");
    }

    let mut system = FuzzySystem::new();

    system.add_variable(food)?;
    system.add_variable(service)?;
    system.add_rule(
        is("Food Quality", "Low food")
            .or("Service Quality", "Low service")
            .then(Consequent::linear([1.25, 1.25], 0.))?,
    );
    system.add_rule(is("Service Quality", "Medium service").then(Consequent::linear([2.5], 0.))?);
    system.add_rule(
        is("Food Quality", "High food")
            .or("Service Quality", "High service")
            .then(Consequent::linear([1.25, 1.25], 0.))?,
    );

    let inputs = Inputs::new()
        .with("Food Quality", food_score)
        .with("Service Quality", service_score);

    println!("Tip Amount: {:.2}", system.infer(&inputs)?);

    Ok(())
}
