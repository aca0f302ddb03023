use num::Float;

/// `Σ wᵢ·oᵢ / Σ wᵢ` together with `Σ wᵢ`.
///
/// Pairs with zero weight are skipped, so their output never reaches the sum.
/// The ratio is `None` when the total weight is zero.
pub(crate) fn weighted_average<F: Float>(pairs: impl IntoIterator<Item = (F, F)>) -> (Option<F>, F) {
    let (num, den) = pairs
        .into_iter()
        .filter(|(weight, _)| *weight != F::zero())
        .fold((F::zero(), F::zero()), |(num, den), (weight, output)| {
            (num + weight * output, den + weight)
        });

    if den == F::zero() {
        (None, den)
    } else {
        (Some(num / den), den)
    }
}

#[test]
fn test_weighted_average() {
    assert_eq!(weighted_average([(1., 25.), (0., 25.), (0., 25.)]), (Some(25.), 1.));
    assert_eq!(weighted_average([(0.4, 13.), (0., 99.)]), (Some(13.), 0.4));
    assert_eq!(weighted_average([(0.5f32, 10.), (0.5, 20.)]), (Some(15.), 1.));
    assert_eq!(weighted_average([(0., 1.), (0., 2.)]), (None, 0.));
    assert_eq!(weighted_average(Vec::<(f64, f64)>::new()), (None, 0.));
}

#[test]
fn test_weighted_average_ignores_unfired_outputs() {
    assert_eq!(weighted_average([(0., f64::INFINITY), (1., 3.)]), (Some(3.), 1.));
    assert_eq!(weighted_average([(0., f64::NAN), (0.5, 8.)]), (Some(8.), 0.5));
    assert_eq!(weighted_average([(0., f64::NAN)]), (None, 0.));
}
