use num::Float;

/// `n` evenly spaced samples over `[min, max]`, both ends included
pub(crate) struct Linspace<F> {
    start: F,
    end: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub(crate) fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            // usize always fits in a float, possibly with rounding
            let num_steps = F::from(n - 1).unwrap_or_else(F::one);
            (max - min) / num_steps
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            return None;
        }

        let i = self.index;
        self.index += 1;

        // Last sample is exactly `max`, like numpy.linspace
        if i + 1 == self.len && i > 0 {
            return Some(self.end);
        }

        Some(self.start + self.step * F::from(i)?)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let xs: Vec<f64> = Linspace::new(0., 10., 5).collect();
    assert_eq!(xs, vec![0., 2.5, 5., 7.5, 10.]);

    let xs: Vec<f64> = Linspace::new(3., 7., 1).collect();
    assert_eq!(xs, vec![3.]);

    assert_eq!(Linspace::<f64>::new(0., 1., 0).count(), 0);
    assert_eq!(Linspace::<f32>::new(0., 1., 101).len(), 101);
}
