/// Timing curve applied to a transition's normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// The platform "ease-out" curve, `cubic-bezier(0, 0, 0.58, 1)`.
    pub const EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                cubic_bezier(t, x1, y1, x2, y2)
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::EASE_OUT
    }
}

// Newton-Raphson on x(u) = t, then evaluate y(u).
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut u = t;
    for _ in 0..8 {
        let x = bezier_coord(u, x1, x2) - t;
        if x.abs() < 1e-7 {
            break;
        }
        let slope = bezier_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - x / slope).clamp(0.0, 1.0);
    }
    bezier_coord(u, y1, y2)
}

fn bezier_coord(u: f64, p1: f64, p2: f64) -> f64 {
    let mu = 1.0 - u;
    3.0 * mu * mu * u * p1 + 3.0 * mu * u * u * p2 + u * u * u
}

fn bezier_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let mu = 1.0 - u;
    3.0 * mu * mu * p1 + 6.0 * mu * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
