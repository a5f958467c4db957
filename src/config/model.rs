use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Container;
use crate::foundation::error::{PageDotsError, PageDotsResult};

/// Every visual parameter of an indicator row.
///
/// `steps` and `selected_step` are only reachable through accessors so that the selection
/// always stays inside `0..steps`, including after the step count shrinks. Every other field is
/// plain data; out-of-range values are pulled back into range by [`Configuration::normalize`],
/// which runs on deserialization and whenever a configuration enters a
/// [`crate::PageControl`].
///
/// JSON uses snake_case keys; any key may be omitted and falls back to its default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "ConfigurationDef", into = "ConfigurationDef")]
pub struct Configuration {
    steps: usize,
    selected_step: usize,
    /// Diameter of a fully sized dot. Clamped to the container height at layout time.
    pub indicator_size: f64,
    /// Scale applied to unselected/unstepped dots, strokes and unstepped lines (0..=1).
    pub shrink_coefficient: f64,
    /// Enlarge the selected dot by `2 - shrink_coefficient` in continuous mode.
    pub zoom_selected: bool,
    /// Size dots by their distance to the selection instead of by stepped state.
    pub zoom_effect: bool,
    /// Progress-bar semantics: every step up to the selection counts as reached.
    pub continuous_steps: bool,
    /// Fill unreached dots with the tint at `step_alpha` instead of stroking them.
    pub fill_unstepped: bool,
    /// Draw track lines between dots.
    pub show_track: bool,
    /// Track line thickness.
    pub line_width: f64,
    /// Track opacity for unreached segments.
    pub line_alpha: f64,
    /// Horizontal gap left between a track line and the dots it joins.
    pub line_inset: f64,
    /// Outline width for unreached, unfilled dots (before shrinking).
    pub step_width: f64,
    /// Opacity used for unreached dot fills and outlines.
    pub step_alpha: f64,
    /// Selection transition length in seconds.
    pub animation_duration: f64,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON reader, rejecting invalid values.
    pub fn from_reader<R: std::io::Read>(r: R) -> PageDotsResult<Self> {
        let def: ConfigurationDef = serde_json::from_reader(r)
            .map_err(|e| PageDotsError::serde(format!("parse configuration JSON: {e}")))?;
        def.validate()?;
        Ok(def.into())
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PageDotsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open configuration JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Change the step count; the selection is re-clamped.
    pub fn set_steps(&mut self, steps: usize) {
        self.steps = steps.max(1);
        self.selected_step = self.selected_step.min(self.steps - 1);
    }

    /// Move the selection, clamped into `0..steps`.
    pub fn set_selected_step(&mut self, step: usize) {
        self.selected_step = step.min(self.steps - 1);
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.set_steps(steps);
        self
    }

    pub fn with_selected_step(mut self, step: usize) -> Self {
        self.set_selected_step(step);
        self
    }

    /// Indicator diameter as laid out inside `container`.
    pub fn indicator_size_in(&self, container: Container) -> f64 {
        self.indicator_size.clamp(0.0, container.height)
    }

    /// Pull every field back into its valid range.
    ///
    /// Non-finite numbers fall back to their defaults.
    pub fn normalize(&mut self) {
        let d = Self::default();
        fn finite_or(v: f64, fallback: f64) -> f64 {
            if v.is_finite() { v } else { fallback }
        }

        self.set_steps(self.steps);
        self.indicator_size = finite_or(self.indicator_size, d.indicator_size).max(0.0);
        self.shrink_coefficient =
            finite_or(self.shrink_coefficient, d.shrink_coefficient).clamp(0.0, 1.0);
        self.line_width = finite_or(self.line_width, d.line_width).max(0.0);
        self.line_alpha = finite_or(self.line_alpha, d.line_alpha).clamp(0.0, 1.0);
        self.line_inset = finite_or(self.line_inset, d.line_inset);
        self.step_width = finite_or(self.step_width, d.step_width).max(0.0);
        self.step_alpha = finite_or(self.step_alpha, d.step_alpha).clamp(0.0, 1.0);
        self.animation_duration =
            finite_or(self.animation_duration, d.animation_duration).max(0.0);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// True when `other` differs from `self` in anything but the selected step.
    pub fn differs_structurally(&self, other: &Self) -> bool {
        let mut probe = other.clone();
        probe.selected_step = self.selected_step;
        probe != *self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            steps: 3,
            selected_step: 0,
            indicator_size: 7.0,
            shrink_coefficient: 0.6,
            zoom_selected: true,
            zoom_effect: false,
            continuous_steps: true,
            fill_unstepped: true,
            show_track: false,
            line_width: 1.0,
            line_alpha: 0.3,
            line_inset: 0.0,
            step_width: 1.0,
            step_alpha: 0.3,
            animation_duration: 0.3,
        }
    }
}

/// Serde-facing mirror of [`Configuration`] with every field public and optional.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigurationDef {
    steps: usize,
    selected_step: usize,
    indicator_size: f64,
    shrink_coefficient: f64,
    zoom_selected: bool,
    zoom_effect: bool,
    continuous_steps: bool,
    fill_unstepped: bool,
    show_track: bool,
    line_width: f64,
    line_alpha: f64,
    line_inset: f64,
    step_width: f64,
    step_alpha: f64,
    animation_duration: f64,
}

impl Default for ConfigurationDef {
    fn default() -> Self {
        Configuration::default().into()
    }
}

impl ConfigurationDef {
    fn validate(&self) -> PageDotsResult<()> {
        if self.steps == 0 {
            return Err(PageDotsError::validation("steps must be >= 1"));
        }
        for (name, value) in [
            ("indicator_size", self.indicator_size),
            ("line_width", self.line_width),
            ("step_width", self.step_width),
            ("animation_duration", self.animation_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PageDotsError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("shrink_coefficient", self.shrink_coefficient),
            ("line_alpha", self.line_alpha),
            ("step_alpha", self.step_alpha),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PageDotsError::validation(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        if !self.line_inset.is_finite() {
            return Err(PageDotsError::validation("line_inset must be finite"));
        }
        Ok(())
    }
}

impl From<ConfigurationDef> for Configuration {
    fn from(def: ConfigurationDef) -> Self {
        Self {
            steps: def.steps,
            selected_step: def.selected_step,
            indicator_size: def.indicator_size,
            shrink_coefficient: def.shrink_coefficient,
            zoom_selected: def.zoom_selected,
            zoom_effect: def.zoom_effect,
            continuous_steps: def.continuous_steps,
            fill_unstepped: def.fill_unstepped,
            show_track: def.show_track,
            line_width: def.line_width,
            line_alpha: def.line_alpha,
            line_inset: def.line_inset,
            step_width: def.step_width,
            step_alpha: def.step_alpha,
            animation_duration: def.animation_duration,
        }
        .normalized()
    }
}

impl From<Configuration> for ConfigurationDef {
    fn from(c: Configuration) -> Self {
        Self {
            steps: c.steps,
            selected_step: c.selected_step,
            indicator_size: c.indicator_size,
            shrink_coefficient: c.shrink_coefficient,
            zoom_selected: c.zoom_selected,
            zoom_effect: c.zoom_effect,
            continuous_steps: c.continuous_steps,
            fill_unstepped: c.fill_unstepped,
            show_track: c.show_track,
            line_width: c.line_width,
            line_alpha: c.line_alpha,
            line_inset: c.line_inset,
            step_width: c.step_width,
            step_alpha: c.step_alpha,
            animation_duration: c.animation_duration,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
