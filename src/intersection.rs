//! Boundary crossings between pairs of circles.
//!
//! The two centers and a crossing point form a triangle with sides `ra`, `rb`
//! and the center distance `d`. The law of cosines gives the angle at A's
//! center, and the crossing points sit `ra` away from A at that angle on
//! either side of the A→B direction.

use crate::circle::Circle;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("circles share a center")]
    Concentric,
    #[error("circle has zero radius")]
    ZeroRadius,
}

/// Crossing points of two circle boundaries given as center and radius.
///
/// Returns `Ok(None)` when the circles are apart (`d > ra + rb`) or one lies
/// strictly inside the other (`d < |ra - rb|`). Touching circles yield two
/// equal points.
pub fn crossing_points(
    a: Point,
    ra: f32,
    b: Point,
    rb: f32,
) -> Result<Option<[Point; 2]>, GeometryError> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d = dx.hypot(dy);

    if d > ra + rb {
        return Ok(None);
    }
    if ra <= 0.0 || rb <= 0.0 {
        return Err(GeometryError::ZeroRadius);
    }
    if d == 0.0 {
        return Err(GeometryError::Concentric);
    }
    if d < (ra - rb).abs() {
        return Ok(None);
    }

    // Touching circles can land a rounding error outside [-1, 1].
    let cos_a = ((ra * ra - rb * rb + d * d) / (2.0 * ra * d)).clamp(-1.0, 1.0);
    let rotation = cos_a.acos();
    let base = dy.atan2(dx);

    let at = |theta: f32| Point::new(a.x + ra * theta.cos(), a.y + ra * theta.sin());
    Ok(Some([at(base - rotation), at(base + rotation)]))
}

/// [`crossing_points`] for two circles.
pub fn intersect(a: &Circle, b: &Circle) -> Result<Option<[Point; 2]>, GeometryError> {
    crossing_points(
        Point::new(a.pos[0], a.pos[1]),
        a.radius(),
        Point::new(b.pos[0], b.pos[1]),
        b.radius(),
    )
}

/// All crossings found in one pass over the unordered pairs of a circle set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Detection {
    pub points: Vec<Point>,
    pub skipped_pairs: usize,
}

/// Checks every pair `(i, j)` with `i < j` exactly once.
/// Degenerate pairs are counted and skipped.
pub fn detect(circles: &[Circle]) -> Detection {
    let mut detection = Detection::default();

    for (i, a) in circles.iter().enumerate() {
        for (j, b) in circles.iter().enumerate().skip(i + 1) {
            match intersect(a, b) {
                Ok(Some(points)) => detection.points.extend_from_slice(&points),
                Ok(None) => {}
                Err(e) => {
                    log::trace!("skipping circles {i} and {j}: {e}");
                    detection.skipped_pairs += 1;
                }
            }
        }
    }

    detection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use proptest::prelude::*;

    fn close(p: Point, x: f32, y: f32) -> bool {
        (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4
    }

    fn circle(x: f32, y: f32, rad: f32) -> Circle {
        Circle::new([x, y], [0.0, 0.0], rad, Color::WHITE)
    }

    #[test]
    fn three_four_five_triangle() {
        let [p, q] = crossing_points(Point::new(0.0, 0.0), 5.0, Point::new(8.0, 0.0), 5.0)
            .unwrap()
            .unwrap();
        assert!(close(p, 4.0, -3.0), "{p:?}");
        assert!(close(q, 4.0, 3.0), "{q:?}");
    }

    #[test]
    fn rotated_pair() {
        let [p, q] = crossing_points(Point::new(10.0, 10.0), 5.0, Point::new(10.0, 18.0), 5.0)
            .unwrap()
            .unwrap();
        assert!(close(p, 13.0, 14.0), "{p:?}");
        assert!(close(q, 7.0, 14.0), "{q:?}");
    }

    #[test]
    fn touching_circles_meet_in_one_point() {
        let [p, q] = crossing_points(Point::new(0.0, 0.0), 5.0, Point::new(10.0, 0.0), 5.0)
            .unwrap()
            .unwrap();
        assert_eq!(p, q);
        assert!(close(p, 5.0, 0.0));
    }

    #[test]
    fn internally_touching_circles_meet_in_one_point() {
        let [p, q] = crossing_points(Point::new(0.0, 0.0), 10.0, Point::new(4.0, 0.0), 6.0)
            .unwrap()
            .unwrap();
        assert_eq!(p, q);
        assert!(close(p, 10.0, 0.0));
    }

    #[test]
    fn separate_circles_do_not_cross() {
        let r = crossing_points(Point::new(0.0, 0.0), 5.0, Point::new(10.01, 0.0), 5.0);
        assert_eq!(r, Ok(None));
    }

    #[test]
    fn nested_circles_do_not_cross() {
        let r = crossing_points(Point::new(0.0, 0.0), 10.0, Point::new(1.0, 1.0), 2.0);
        assert_eq!(r, Ok(None));
    }

    #[test]
    fn degenerate_pairs_are_errors() {
        let o = Point::new(3.0, 3.0);
        assert_eq!(crossing_points(o, 4.0, o, 4.0), Err(GeometryError::Concentric));
        assert_eq!(crossing_points(o, 4.0, o, 2.0), Err(GeometryError::Concentric));
        assert_eq!(
            crossing_points(o, 0.0, Point::new(4.0, 3.0), 2.0),
            Err(GeometryError::ZeroRadius)
        );
    }

    #[test]
    fn detect_visits_each_pair_once() {
        let circles = [
            circle(0.0, 0.0, 5.0),
            circle(8.0, 0.0, 5.0),
            circle(16.0, 0.0, 5.0),
            circle(0.0, 0.0, 5.0),
        ];
        let detection = detect(&circles);

        // (0,1), (1,2), (1,3) cross; (0,3) is concentric; (0,2) and (2,3) are apart.
        assert_eq!(detection.points.len(), 6);
        assert_eq!(detection.skipped_pairs, 1);
        assert!(detection.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn detect_on_empty_and_single() {
        assert_eq!(detect(&[]), Detection::default());
        assert_eq!(detect(&[circle(1.0, 1.0, 1.0)]), Detection::default());
    }

    proptest! {
        #[test]
        fn crossings_lie_on_both_circles(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            ra in 1.0f32..100.0,
            rb in 1.0f32..100.0,
            t in 0.0f32..=1.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            // Keep the distance a little away from the tangent configurations.
            let margin = 0.1 * ra.min(rb);
            let lo = (ra - rb).abs() + margin;
            let hi = ra + rb - margin;
            let d = lo + t * (hi - lo);

            let a = Point::new(ax, ay);
            let b = Point::new(ax + d * angle.cos(), ay + d * angle.sin());
            let points = crossing_points(a, ra, b, rb).unwrap().unwrap();

            let tol = 1e-3 * (ra + rb);
            for p in points {
                prop_assert!((p.distance_to(a) - ra).abs() < tol, "{:?} from A", p);
                prop_assert!((p.distance_to(b) - rb).abs() < tol, "{:?} from B", p);
            }
        }

        #[test]
        fn apart_circles_never_cross(
            ra in 1.0f32..100.0,
            rb in 1.0f32..100.0,
            gap in 0.01f32..500.0,
        ) {
            let b = Point::new(ra + rb + gap, 0.0);
            prop_assert_eq!(crossing_points(Point::new(0.0, 0.0), ra, b, rb), Ok(None));
        }
    }
}
