use crate::color::Color;

/// Immediate-mode drawing target, in viewport pixels.
pub trait RenderSurface {
    /// Fills a disk and strokes its outline.
    fn draw_disk(&mut self, x: f32, y: f32, radius: f32, fill: Color, stroke: Color);

    /// Clears everything inside `width` x `height`.
    fn clear_area(&mut self, width: f32, height: f32);
}

/// Records draw calls, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recording {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    Disk { x: f32, y: f32, radius: f32, fill: Color, stroke: Color },
}

#[cfg(test)]
impl Recording {
    pub fn disks(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Disk { .. }))
    }
}

#[cfg(test)]
impl RenderSurface for Recording {
    fn draw_disk(&mut self, x: f32, y: f32, radius: f32, fill: Color, stroke: Color) {
        self.calls.push(DrawCall::Disk { x, y, radius, fill, stroke });
    }

    fn clear_area(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }
}
