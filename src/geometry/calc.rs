//! Per-step geometry for an indicator row.
//!
//! Everything here is a pure function of a [`Configuration`] and the host's [`HostEnv`]. The
//! selected step is read through [`Configuration::selected_step`], so it is always inside
//! `0..steps`.

use crate::{
    config::model::Configuration,
    foundation::core::{HostEnv, Point, Rect, Rgba8},
};

/// Distance (in steps) beyond which the zoom falloff stops shrinking dots.
pub const ZOOM_FALLOFF_STEPS: f64 = 3.0;

/// Fraction of a line's height that it overlaps into each neighbouring dot.
pub const LINE_OVERLAP: f64 = 0.1;

#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    config: &'a Configuration,
    env: HostEnv,
}

impl<'a> Geometry<'a> {
    pub fn new(config: &'a Configuration, env: HostEnv) -> Self {
        Self { config, env }
    }

    fn diameter(&self) -> f64 {
        self.config.indicator_size_in(self.env.container)
    }

    fn selected(&self) -> usize {
        self.config.selected_step()
    }

    /// Whether step `step` counts as reached under the current selection.
    pub fn is_stepped(&self, step: usize) -> bool {
        if self.config.continuous_steps {
            step <= self.selected()
        } else {
            step == self.selected()
        }
    }

    /// Spacing between neighbouring dot edges; zero for a single dot.
    pub fn gap(&self) -> f64 {
        let steps = self.config.steps();
        if steps <= 1 {
            return 0.0;
        }
        let steps = steps as f64;
        (self.env.container.width - self.diameter() * steps) / (steps - 1.0)
    }

    /// Center of dot `step`, or the origin when `step` is out of range.
    pub fn indicator_center(&self, step: usize) -> Point {
        let steps = self.config.steps();
        if step >= steps {
            return Point::ORIGIN;
        }
        let y = self.env.container.mid_y();
        if steps == 1 {
            return Point::new(self.env.container.width / 2.0, y);
        }
        let d = self.diameter();
        let x = step as f64 * (d + self.gap()) + d / 2.0;
        Point::new(x, y)
    }

    /// Rendered diameter of dot `step`.
    pub fn indicator_diameter(&self, step: usize) -> f64 {
        let d = self.diameter();
        let shrink = self.config.shrink_coefficient;

        if self.config.zoom_effect {
            let coeff_diff = (1.0 - shrink) / ZOOM_FALLOFF_STEPS;
            let distance = (step.abs_diff(self.selected()) as f64).min(ZOOM_FALLOFF_STEPS);
            return (1.0 - coeff_diff * distance) * d;
        }

        if self.config.zoom_selected && self.config.continuous_steps && step == self.selected() {
            d * (2.0 - shrink)
        } else if self.is_stepped(step) {
            d
        } else {
            d * shrink
        }
    }

    /// Square bounding box of dot `step`, centered on its center.
    pub fn indicator_rect(&self, step: usize) -> Rect {
        let size = self.indicator_diameter(step);
        Rect::from_center_size(self.indicator_center(step), (size, size))
    }

    pub fn indicator_stroke_width(&self, step: usize) -> f64 {
        if self.is_stepped(step) || self.config.fill_unstepped {
            0.0
        } else {
            self.config.step_width * self.config.shrink_coefficient
        }
    }

    pub fn indicator_fill(&self, step: usize) -> Rgba8 {
        if self.is_stepped(step) {
            self.env.tint.with_alpha(1.0)
        } else if self.config.fill_unstepped {
            self.env.tint.with_alpha(self.config.step_alpha)
        } else {
            Rgba8::TRANSPARENT
        }
    }

    pub fn indicator_stroke_color(&self) -> Rgba8 {
        self.env.tint.with_alpha(self.config.step_alpha)
    }

    /// Whether the track segment after dot `gap` counts as reached.
    ///
    /// In discrete mode every segment except the one starting at the selection is reported as
    /// reached, but neither [`Self::line_height`] nor [`Self::line_fill`] consult it there:
    /// discrete tracks are uniform.
    pub fn is_line_stepped(&self, gap: usize) -> bool {
        if self.config.continuous_steps {
            gap < self.selected()
        } else {
            gap != self.selected()
        }
    }

    pub fn line_height(&self, gap: usize) -> f64 {
        if self.is_line_stepped(gap) || !self.config.continuous_steps {
            self.config.line_width
        } else {
            self.config.line_width * self.config.shrink_coefficient
        }
    }

    /// Track segment joining dot `gap` and dot `gap + 1`.
    pub fn line_rect(&self, gap: usize) -> Rect {
        let prev = self.indicator_rect(gap);
        let next = self.indicator_rect(gap + 1);
        let height = self.line_height(gap);
        let tolerance = height * LINE_OVERLAP;
        let inset = self.config.line_inset;

        let x0 = prev.x1 - tolerance + inset / 2.0;
        let width = next.x0 - x0 + 2.0 * tolerance - inset;
        let y0 = (self.env.container.height - height) / 2.0;
        Rect::new(x0, y0, x0 + width, y0 + height)
    }

    pub fn line_fill(&self, gap: usize) -> Rgba8 {
        if self.is_line_stepped(gap) && self.config.continuous_steps {
            self.env.tint.with_alpha(1.0)
        } else {
            self.env.tint.with_alpha(self.config.line_alpha)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/calc.rs"]
mod tests;
