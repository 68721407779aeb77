use rand::Rng;

/// Source of uniform samples used to lay out new circles.
pub trait RandomSource {
    /// A sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// A sample in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[cfg(test)]
pub struct Sequence {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl Sequence {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty());
        Self { values, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn range_spans_min_to_max() {
        let mut rng = Sequence::new(vec![0.0, 0.5, 0.999]);
        assert_eq!(rng.range(10.0, 20.0), 10.0);
        assert_eq!(rng.range(10.0, 20.0), 15.0);
        let top = rng.range(10.0, 20.0);
        assert!(top > 19.9 && top < 20.0);
    }

    #[test]
    fn seeded_rng_stays_in_range() {
        let mut rng = RngSource(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..=5.0).contains(&v));
        }
    }
}
