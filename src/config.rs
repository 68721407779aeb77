use crate::color::Color;

pub const DEFAULT_CIRCLES: usize = 10;
pub const DEFAULT_SPEED: f32 = 2.0;
pub const DEFAULT_MARKER_COLOR: Color = Color::RED;

const ENV_CIRCLES: &str = "CIRCLES_COUNT";
const ENV_SPEED: &str = "CIRCLES_SPEED";
const ENV_MARKER_COLOR: &str = "CIRCLES_MARKER_COLOR";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("circle count must be at least 1")]
    NoCircles,
    #[error("circle speed must be a finite non-negative number, got {0}")]
    BadSpeed(f32),
    #[error("viewport must have a positive size, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
    #[error("expected a #rrggbb color, got {0:?}")]
    BadColor(String),
}

/// Live-tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub circle_count: usize,
    pub speed: f32,
    pub marker_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_count: DEFAULT_CIRCLES,
            speed: DEFAULT_SPEED,
            marker_color: DEFAULT_MARKER_COLOR,
        }
    }
}

impl Settings {
    /// Defaults overridden by `CIRCLES_COUNT`, `CIRCLES_SPEED` and `CIRCLES_MARKER_COLOR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_CIRCLES) {
            match raw.trim().parse::<usize>() {
                Ok(count) => match validate_count(count) {
                    Ok(count) => settings.circle_count = count,
                    Err(e) => log::warn!("ignoring {ENV_CIRCLES}: {e}"),
                },
                Err(e) => log::warn!("ignoring {ENV_CIRCLES}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_SPEED) {
            match raw.trim().parse::<f32>() {
                Ok(speed) => match validate_speed(speed) {
                    Ok(speed) => settings.speed = speed,
                    Err(e) => log::warn!("ignoring {ENV_SPEED}: {e}"),
                },
                Err(e) => log::warn!("ignoring {ENV_SPEED}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_MARKER_COLOR) {
            match Color::from_hex(&raw) {
                Ok(color) => settings.marker_color = color,
                Err(e) => log::warn!("ignoring {ENV_MARKER_COLOR}: {e}"),
            }
        }

        settings
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.circle_count)?;
        validate_speed(self.speed)?;
        Ok(())
    }
}

pub fn validate_count(count: usize) -> Result<usize, ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoCircles);
    }
    Ok(count)
}

pub fn validate_speed(speed: f32) -> Result<f32, ConfigError> {
    if !speed.is_finite() || speed < 0.0 {
        return Err(ConfigError::BadSpeed(speed));
    }
    Ok(speed)
}
