use crate::{
    animation::{ease::Ease, transition::requests_for},
    config::model::Configuration,
    foundation::core::{Container, HostEnv, Rgba8},
    foundation::error::PageDotsResult,
    model::shapes::{ShapeSet, compute_shape_set},
    render::backend::RenderBackend,
};

/// Whether a selection transition has been issued and not yet reported finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Animating,
}

/// A page control: configuration, host environment, and the shapes currently on screen.
///
/// Selection changes animate; every other change rebuilds the shapes and redraws them
/// without animation.
pub struct PageControl<B: RenderBackend> {
    config: Configuration,
    env: HostEnv,
    shapes: ShapeSet,
    state: DriverState,
    ease: Ease,
    backend: B,
}

impl<B: RenderBackend> PageControl<B> {
    /// Normalize `config`, lay it out inside `env` and draw it.
    pub fn new(config: Configuration, env: HostEnv, backend: B) -> PageDotsResult<Self> {
        let config = config.normalized();
        let shapes = compute_shape_set(&config, env);
        let mut control = Self {
            config,
            env,
            shapes,
            state: DriverState::Idle,
            ease: Ease::EASE_OUT,
            backend,
        };
        control.backend.draw(&control.shapes)?;
        Ok(control)
    }

    /// Replace the easing used for selection transitions.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn env(&self) -> HostEnv {
        self.env
    }

    /// Shapes as of the last rebuild or selection change (transition targets, not
    /// in-between values).
    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Swap in a whole new configuration.
    ///
    /// A configuration that differs only in its selected step animates like
    /// [`Self::set_selected_step`]; anything else redraws without animation.
    #[tracing::instrument(skip(self, config))]
    pub fn apply_configuration(&mut self, config: Configuration) -> PageDotsResult<&ShapeSet> {
        let config = config.normalized();
        if !self.config.differs_structurally(&config) {
            if config.selected_step() == self.config.selected_step() {
                return Ok(&self.shapes);
            }
            return self.set_selected_step(config.selected_step());
        }
        self.config = config;
        self.rebuild()
    }

    /// Mutate a copy of the configuration and apply it like [`Self::apply_configuration`]:
    /// a closure that only moves the selection animates, anything else redraws.
    pub fn update(&mut self, f: impl FnOnce(&mut Configuration)) -> PageDotsResult<&ShapeSet> {
        let mut next = self.config.clone();
        f(&mut next);
        self.apply_configuration(next)
    }

    /// Move the selection (clamped) and animate every shape toward its new state.
    ///
    /// Does nothing when the clamped step is already selected. With a zero duration the
    /// backend applies the targets at once and the driver stays idle.
    #[tracing::instrument(skip(self))]
    pub fn set_selected_step(&mut self, step: usize) -> PageDotsResult<&ShapeSet> {
        let current = self.config.selected_step();
        self.config.set_selected_step(step);
        if self.config.selected_step() == current {
            return Ok(&self.shapes);
        }
        let target = compute_shape_set(&self.config, self.env);
        let requests = requests_for(&target, self.config.animation_duration, self.ease);
        tracing::debug!(
            selected = self.config.selected_step(),
            requests = requests.len(),
            duration = self.config.animation_duration,
            "animating selection"
        );
        for req in &requests {
            self.backend.animate(req)?;
        }
        self.shapes = target;
        self.state = if self.config.animation_duration > 0.0 {
            DriverState::Animating
        } else {
            DriverState::Idle
        };
        Ok(&self.shapes)
    }

    /// Step forward, stopping at the last step.
    pub fn select_next(&mut self) -> PageDotsResult<&ShapeSet> {
        let next = self.config.selected_step().saturating_add(1);
        self.set_selected_step(next)
    }

    /// Step back, stopping at the first step.
    pub fn select_previous(&mut self) -> PageDotsResult<&ShapeSet> {
        let prev = self.config.selected_step().saturating_sub(1);
        self.set_selected_step(prev)
    }

    /// The host view changed size.
    pub fn resize(&mut self, container: Container) -> PageDotsResult<&ShapeSet> {
        self.env.container = container;
        self.rebuild()
    }

    /// The host's tint color changed.
    pub fn set_tint(&mut self, tint: Rgba8) -> PageDotsResult<&ShapeSet> {
        self.env.tint = tint;
        self.rebuild()
    }

    /// The backend reports the selection transition has completed.
    pub fn transition_finished(&mut self) {
        self.state = DriverState::Idle;
    }

    pub fn set_steps(&mut self, steps: usize) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.set_steps(steps))
    }

    pub fn set_indicator_size(&mut self, size: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.indicator_size = size)
    }

    pub fn set_shrink_coefficient(&mut self, shrink: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.shrink_coefficient = shrink)
    }

    pub fn set_zoom_selected(&mut self, on: bool) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.zoom_selected = on)
    }

    pub fn set_zoom_effect(&mut self, on: bool) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.zoom_effect = on)
    }

    pub fn set_continuous_steps(&mut self, on: bool) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.continuous_steps = on)
    }

    pub fn set_fill_unstepped(&mut self, on: bool) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.fill_unstepped = on)
    }

    pub fn set_show_track(&mut self, on: bool) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.show_track = on)
    }

    pub fn set_line_width(&mut self, width: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.line_width = width)
    }

    pub fn set_line_alpha(&mut self, alpha: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.line_alpha = alpha)
    }

    pub fn set_line_inset(&mut self, inset: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.line_inset = inset)
    }

    pub fn set_step_width(&mut self, width: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.step_width = width)
    }

    pub fn set_step_alpha(&mut self, alpha: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.step_alpha = alpha)
    }

    pub fn set_animation_duration(&mut self, secs: f64) -> PageDotsResult<&ShapeSet> {
        self.update(|c| c.animation_duration = secs)
    }

    fn rebuild(&mut self) -> PageDotsResult<&ShapeSet> {
        self.shapes = compute_shape_set(&self.config, self.env);
        tracing::debug!(
            steps = self.config.steps(),
            lines = self.shapes.lines.len(),
            "rebuilding shapes"
        );
        self.backend.draw(&self.shapes)?;
        self.state = DriverState::Idle;
        Ok(&self.shapes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/control.rs"]
mod tests;
