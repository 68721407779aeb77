/// Maps viewport pixels (origin top-left, y down) to clip space.
pub struct Projection {
    pub size: [f32; 2],
}

impl Projection {
    /// Column-major, as WGSL `mat4x4<f32>` expects.
    pub fn transform(&self) -> [[f32; 4]; 4] {
        let [w, h] = self.size;
        [
            [2.0 / w, 0.0, 0.0, 0.0],
            [0.0, -2.0 / h, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0, 1.0],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(m: [[f32; 4]; 4], x: f32, y: f32) -> [f32; 2] {
        [
            m[0][0] * x + m[1][0] * y + m[3][0],
            m[0][1] * x + m[1][1] * y + m[3][1],
        ]
    }

    fn assert_maps(m: [[f32; 4]; 4], from: [f32; 2], to: [f32; 2]) {
        let got = apply(m, from[0], from[1]);
        assert!(
            (got[0] - to[0]).abs() < 1e-6 && (got[1] - to[1]).abs() < 1e-6,
            "{from:?} -> {got:?}, expected {to:?}"
        );
    }

    #[test]
    fn corners_map_to_clip_corners() {
        let m = Projection { size: [800.0, 600.0] }.transform();
        assert_maps(m, [0.0, 0.0], [-1.0, 1.0]);
        assert_maps(m, [800.0, 600.0], [1.0, -1.0]);
        assert_maps(m, [400.0, 300.0], [0.0, 0.0]);
    }
}
