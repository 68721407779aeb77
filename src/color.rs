use crate::config::ConfigError;
use crate::random::RandomSource;

/// Alpha given to every randomly colored circle.
pub const CIRCLE_ALPHA: f32 = 0.4;

#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn random_translucent(rng: &mut impl RandomSource) -> Self {
        Self {
            r: rng.next_unit(),
            g: rng.next_unit(),
            b: rng.next_unit(),
            a: CIRCLE_ALPHA,
        }
    }

    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::BadColor(s.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ConfigError::BadColor(s.to_owned()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#00ff00").unwrap().to_hex(), "#00ff00");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#ff00").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("##ff0000").is_err());
    }

    #[test]
    fn random_colors_are_translucent() {
        let mut rng = Sequence::new(vec![0.25, 0.5, 0.75]);
        let c = Color::random_translucent(&mut rng);
        assert_eq!(c, Color { r: 0.25, g: 0.5, b: 0.75, a: CIRCLE_ALPHA });
        assert_eq!(c.opaque().a, 1.0);
    }
}
