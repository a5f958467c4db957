use crate::foundation::error::{PageDotsError, PageDotsResult};

pub use kurbo::{BezPath, Point, Rect, Size};

/// Bounds of the host view the indicator row is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Container {
    /// Build a container, flooring negative or non-finite extents to zero.
    pub fn new(width: f64, height: f64) -> Self {
        fn sane(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    /// Vertical midline shared by every dot and track line.
    pub fn mid_y(self) -> f64 {
        self.height / 2.0
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// The system-blue accent most hosts use as default tint.
    pub const DEFAULT_TINT: Self = Self::new(0, 122, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with its alpha replaced by `alpha` (0..=1).
    ///
    /// The existing alpha is discarded, not multiplied.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_finite() {
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        };
        Self { a, ..self }
    }

    /// Alpha as a 0..=1 fraction.
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> PageDotsResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || PageDotsError::validation(format!("invalid hex color '{s}'"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| bad())
                };
                Ok(Self::new(nib(0)?, nib(1)?, nib(2)?, 255))
            }
            6 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }

    /// Premultiplied bytes, rounded.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }
        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::DEFAULT_TINT
    }
}

/// What the host supplies around the configuration: its bounds and accent color.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct HostEnv {
    pub container: Container,
    pub tint: Rgba8,
}

impl HostEnv {
    pub fn new(container: Container, tint: Rgba8) -> Self {
        Self { container, tint }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
