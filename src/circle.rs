use std::f32::consts::TAU;

use crate::color::Color;
use crate::random::RandomSource;
use crate::viewport::{RadiusRange, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    color: Color,
    rad: f32,
    pub pos: [f32; 2],
    pub vel: [f32; 2],
}

impl Circle {
    pub fn new(pos: [f32; 2], vel: [f32; 2], rad: f32, color: Color) -> Self {
        Self { color, rad, pos, vel }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn radius(&self) -> f32 {
        self.rad
    }

    #[cfg(test)]
    pub fn speed(&self) -> f32 {
        self.vel[0].hypot(self.vel[1])
    }
}

/// Every circle on screen plus the sizing it was generated with.
/// Replaced wholesale, never edited circle by circle from outside a tick.
#[derive(Clone, Debug)]
pub struct CircleSet {
    circles: Vec<Circle>,
    radius_range: RadiusRange,
}

impl CircleSet {
    pub fn generate(
        count: usize,
        speed: f32,
        viewport: Viewport,
        rng: &mut impl RandomSource,
    ) -> Self {
        let radius_range = viewport.radius_range();
        let margin = radius_range.max;

        let mut circles = Vec::with_capacity(count);
        for _ in 0..count {
            let rad = rng.range(radius_range.min, radius_range.max);
            let pos = [
                rng.range(margin, viewport.width() - margin),
                rng.range(margin, viewport.height() - margin),
            ];
            let angle = rng.range(0.0, TAU);
            let vel = [speed * angle.cos(), speed * angle.sin()];
            circles.push(Circle::new(pos, vel, rad, Color::random_translucent(rng)));
        }

        Self { circles, radius_range }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub(crate) fn circles_mut(&mut self) -> &mut [Circle] {
        &mut self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn radius_range(&self) -> RadiusRange {
        self.radius_range
    }

    pub fn marker_radius(&self) -> f32 {
        self.radius_range.marker_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, Sequence};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_placed(set: &CircleSet, count: usize, speed: f32, vp: Viewport) {
        let range = vp.radius_range();
        let eps = 1e-3;
        assert_eq!(set.len(), count);
        for c in set.circles() {
            assert!(c.radius() >= range.min - eps && c.radius() <= range.max + eps);
            assert!(c.pos[0] >= range.max - eps && c.pos[0] <= vp.width() - range.max + eps);
            assert!(c.pos[1] >= range.max - eps && c.pos[1] <= vp.height() - range.max + eps);
            assert!((c.speed() - speed).abs() <= 1e-4 * speed.max(1.0));
            assert!(c.color().a < 1.0);
        }
    }

    #[test]
    fn scripted_generation() {
        // radius, x, y, angle, r, g, b
        let mut rng = Sequence::new(vec![0.5, 0.0, 1.0, 0.25, 0.1, 0.2, 0.3]);
        let vp = Viewport::new(600.0, 300.0).unwrap();
        let set = CircleSet::generate(1, 2.0, vp, &mut rng);

        let c = set.circles()[0];
        assert_eq!(c.radius(), 75.0);
        assert_eq!(c.pos, [100.0, 200.0]);
        assert!(c.vel[0].abs() < 1e-5);
        assert!((c.vel[1] - 2.0).abs() < 1e-5);
        assert_eq!(set.marker_radius(), 2.5);
    }

    #[test]
    fn regenerating_twice_gives_valid_sets() {
        let vp = Viewport::new(1024.0, 768.0).unwrap();
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        let first = CircleSet::generate(12, 3.0, vp, &mut rng);
        let second = CircleSet::generate(12, 3.0, vp, &mut rng);
        assert_placed(&first, 12, 3.0, vp);
        assert_placed(&second, 12, 3.0, vp);
        assert_eq!(first.radius_range(), second.radius_range());
    }

    #[test]
    fn zero_speed_circles_stand_still() {
        let vp = Viewport::new(400.0, 400.0).unwrap();
        let set = CircleSet::generate(5, 0.0, vp, &mut RngSource(StdRng::seed_from_u64(1)));
        assert!(set.circles().iter().all(|c| c.vel == [0.0, 0.0]));
    }

    proptest! {
        #[test]
        fn placement_holds_for_any_viewport(
            w in 10.0f32..4000.0,
            h in 10.0f32..4000.0,
            count in 1usize..40,
            speed in 0.0f32..20.0,
            seed in any::<u64>(),
        ) {
            let vp = Viewport::new(w, h).unwrap();
            let set = CircleSet::generate(count, speed, vp, &mut RngSource(StdRng::seed_from_u64(seed)));
            assert_placed(&set, count, speed, vp);
        }
    }
}
