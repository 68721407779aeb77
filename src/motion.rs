//! Wall bouncing and position integration.
//!
//! Each axis is handled on its own. A velocity component is reflected only when
//! the circle's edge is past the wall *and* still heading out, so a circle that
//! overshoots by one step is turned around on the next tick instead of being
//! pinned to the wall. Positions are never clamped.

use crate::circle::Circle;
use crate::viewport::Viewport;

/// Reflects the velocity components of `circle` that point out of the viewport.
/// Uses the current (pre-step) position.
pub fn bounce(circle: &mut Circle, viewport: Viewport) {
    let rad = circle.radius();
    let bounds = [viewport.width(), viewport.height()];

    for axis in 0..2 {
        let p = circle.pos[axis];
        let v = circle.vel[axis];
        if (p + rad > bounds[axis] && v > 0.0) || (p - rad < 0.0 && v < 0.0) {
            circle.vel[axis] = -v;
        }
    }
}

/// One explicit Euler step of unit length.
pub fn integrate(circle: &mut Circle) {
    circle.pos[0] += circle.vel[0];
    circle.pos[1] += circle.vel[1];
}

/// Bounce check followed by integration.
pub fn step(circle: &mut Circle, viewport: Viewport) {
    bounce(circle, viewport);
    integrate(circle);
}
