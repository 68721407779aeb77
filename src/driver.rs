//! Frame loop tying motion, intersection detection and drawing together.
//!
//! The driver is either `Idle` or `Running`. While running, every tick clears
//! the surface, steps and draws each circle, draws the crossing markers of the
//! updated positions, then asks the scheduler for the next tick. Configuration
//! changes arrive between ticks and swap in a whole new circle set.

use crate::circle::{Circle, CircleSet};
use crate::color::Color;
use crate::config::{validate_count, validate_speed, ConfigError, Settings};
use crate::intersection;
use crate::motion;
use crate::random::RandomSource;
use crate::scheduler::FrameScheduler;
use crate::surface::RenderSurface;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DriverError {
    #[error("no viewport has been set; set_viewport must come before regenerating or starting")]
    NoViewport,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub circles: usize,
    pub markers: usize,
    pub skipped_pairs: usize,
}

struct Scene {
    viewport: Viewport,
    circles: CircleSet,
}

pub struct Driver<R> {
    state: DriverState,
    settings: Settings,
    scene: Option<Scene>,
    rng: R,
}

impl<R: RandomSource> Driver<R> {
    pub fn new(settings: Settings, rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            state: DriverState::Idle,
            settings,
            scene: None,
            rng,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.scene.as_ref().map(|s| s.viewport)
    }

    #[cfg(test)]
    pub fn circles(&self) -> Option<&CircleSet> {
        self.scene.as_ref().map(|s| &s.circles)
    }

    /// Adopts a new viewport size and regenerates the circle set for it.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), DriverError> {
        let viewport = Viewport::new(width, height)?;
        log::debug!("viewport {width}x{height}");
        self.replace_scene(viewport);
        Ok(())
    }

    /// Changes the number of circles. Regenerates if a viewport is known.
    pub fn set_circle_count(&mut self, count: usize) -> Result<(), DriverError> {
        self.settings.circle_count = validate_count(count)?;
        log::debug!("circle count {count}");
        if let Some(viewport) = self.viewport() {
            self.replace_scene(viewport);
        }
        Ok(())
    }

    /// Speed for circles created from now on. Existing circles keep theirs.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), DriverError> {
        self.settings.speed = validate_speed(speed)?;
        log::debug!("circle speed {speed}");
        Ok(())
    }

    /// Takes effect on the next drawn marker.
    pub fn set_marker_color(&mut self, color: Color) {
        log::debug!("marker color {}", color.to_hex());
        self.settings.marker_color = color;
    }

    pub fn regenerate(&mut self) -> Result<(), DriverError> {
        let viewport = self.viewport().ok_or(DriverError::NoViewport)?;
        self.replace_scene(viewport);
        Ok(())
    }

    fn replace_scene(&mut self, viewport: Viewport) {
        let circles = CircleSet::generate(
            self.settings.circle_count,
            self.settings.speed,
            viewport,
            &mut self.rng,
        );
        log::info!(
            "generated {} circles (radius {:.1}..{:.1}, speed {})",
            circles.len(),
            circles.radius_range().min,
            circles.radius_range().max,
            self.settings.speed,
        );
        self.scene = Some(Scene { viewport, circles });
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Result<(), DriverError> {
        if self.scene.is_none() {
            return Err(DriverError::NoViewport);
        }
        if self.state == DriverState::Idle {
            log::info!("animation started");
            self.state = DriverState::Running;
            scheduler.schedule_next_tick();
        }
        Ok(())
    }

    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.state == DriverState::Running {
            log::info!("animation stopped");
            scheduler.cancel_scheduled_tick();
            self.state = DriverState::Idle;
        }
    }

    /// Runs one frame. A tick delivered while idle does nothing and returns `None`.
    pub fn tick(
        &mut self,
        surface: &mut impl RenderSurface,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<Option<FrameStats>, DriverError> {
        if self.state == DriverState::Idle {
            return Ok(None);
        }
        let scene = self.scene.as_mut().ok_or(DriverError::NoViewport)?;
        let viewport = scene.viewport;

        surface.clear_area(viewport.width(), viewport.height());

        for circle in scene.circles.circles_mut() {
            motion::step(circle, viewport);
            draw_circle(circle, surface);
        }

        let stats = draw_markers(&scene.circles, self.settings.marker_color, surface);
        log::trace!(
            "{} circles, {} markers, {} degenerate pairs skipped",
            stats.circles,
            stats.markers,
            stats.skipped_pairs
        );

        scheduler.schedule_next_tick();
        Ok(Some(stats))
    }

    /// Paints the current positions without advancing them or scheduling a tick.
    /// Used to refresh a paused frame after a reset.
    pub fn draw(&self, surface: &mut impl RenderSurface) -> Result<FrameStats, DriverError> {
        let scene = self.scene.as_ref().ok_or(DriverError::NoViewport)?;
        surface.clear_area(scene.viewport.width(), scene.viewport.height());
        for circle in scene.circles.circles() {
            draw_circle(circle, surface);
        }
        Ok(draw_markers(&scene.circles, self.settings.marker_color, surface))
    }
}

fn draw_circle(circle: &Circle, surface: &mut impl RenderSurface) {
    let fill = circle.color();
    surface.draw_disk(circle.pos[0], circle.pos[1], circle.radius(), fill, fill.opaque());
}

fn draw_markers(circles: &CircleSet, color: Color, surface: &mut impl RenderSurface) -> FrameStats {
    let detection = intersection::detect(circles.circles());
    let marker_radius = circles.marker_radius();
    for p in &detection.points {
        surface.draw_disk(p.x, p.y, marker_radius, color, color);
    }
    FrameStats {
        circles: circles.len(),
        markers: detection.points.len(),
        skipped_pairs: detection.skipped_pairs,
    }
}
