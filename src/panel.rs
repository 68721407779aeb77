//! Keyboard parameter panel.
//!
//! `Up`/`Down` circle count, `Left`/`Right` speed, `C` marker color,
//! `R` regenerate, `Space` pause/resume, `Escape` quit.

use winit::event::VirtualKeyCode;

use crate::color::Color;
use crate::driver::{Driver, DriverError, DriverState};
use crate::random::RandomSource;
use crate::scheduler::FrameScheduler;

const SPEED_STEP: f32 = 0.5;

const MARKER_PALETTE: [Color; 5] = [
    Color::RED,
    Color::BLACK,
    Color::rgb(0.0, 0.0, 1.0),
    Color::rgb(0.0, 0.6, 0.0),
    Color::rgb(1.0, 0.5, 0.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    MoreCircles,
    FewerCircles,
    Faster,
    Slower,
    NextMarkerColor,
    Regenerate,
    TogglePause,
    Quit,
}

impl PanelCommand {
    pub fn for_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::Up => Some(Self::MoreCircles),
            VirtualKeyCode::Down => Some(Self::FewerCircles),
            VirtualKeyCode::Right => Some(Self::Faster),
            VirtualKeyCode::Left => Some(Self::Slower),
            VirtualKeyCode::C => Some(Self::NextMarkerColor),
            VirtualKeyCode::R => Some(Self::Regenerate),
            VirtualKeyCode::Space => Some(Self::TogglePause),
            VirtualKeyCode::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct Panel {
    palette_index: usize,
}

impl Panel {
    pub fn new(marker_color: Color) -> Self {
        let palette_index = MARKER_PALETTE
            .iter()
            .position(|c| *c == marker_color)
            .unwrap_or(MARKER_PALETTE.len() - 1);
        Self { palette_index }
    }

    /// Applies a command to the driver. `Quit` is left to the host.
    pub fn apply<R: RandomSource>(
        &mut self,
        command: PanelCommand,
        driver: &mut Driver<R>,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<(), DriverError> {
        let settings = *driver.settings();
        match command {
            PanelCommand::MoreCircles => driver.set_circle_count(settings.circle_count + 1)?,
            PanelCommand::FewerCircles => {
                driver.set_circle_count(settings.circle_count.saturating_sub(1))?
            }
            PanelCommand::Faster => {
                driver.set_speed(settings.speed + SPEED_STEP)?;
                driver.regenerate()?;
            }
            PanelCommand::Slower => {
                driver.set_speed((settings.speed - SPEED_STEP).max(0.0))?;
                driver.regenerate()?;
            }
            PanelCommand::NextMarkerColor => {
                self.palette_index = (self.palette_index + 1) % MARKER_PALETTE.len();
                driver.set_marker_color(MARKER_PALETTE[self.palette_index]);
            }
            PanelCommand::Regenerate => driver.regenerate()?,
            PanelCommand::TogglePause => match driver.state() {
                DriverState::Running => driver.cancel(scheduler),
                DriverState::Idle => driver.start(scheduler)?,
            },
            PanelCommand::Quit => {}
        }
        Ok(())
    }
}

/// Window title describing the current parameters.
pub fn title<R>(driver: &Driver<R>) -> String
where
    R: RandomSource,
{
    let settings = driver.settings();
    let paused = match driver.state() {
        DriverState::Running => "",
        DriverState::Idle => " (paused)",
    };
    format!(
        "Circles: {} | speed {:.1} | markers {}{}",
        settings.circle_count,
        settings.speed,
        settings.marker_color.to_hex(),
        paused,
    )
}
