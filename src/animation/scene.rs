use std::collections::BTreeMap;

use crate::{
    animation::{
        ease::Ease,
        lerp::Lerp,
        transition::{PropertyKind, PropertyValue, TransitionRequest, read_property, write_property},
    },
    model::shapes::{ShapeSet, ShapeSlot},
};

#[derive(Clone, Copy, Debug)]
struct Track {
    from: PropertyValue,
    to: PropertyValue,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl Track {
    fn sample(&self, clock: f64) -> PropertyValue {
        let t = ((clock - self.start) / self.duration).clamp(0.0, 1.0);
        PropertyValue::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    fn finished(&self, clock: f64) -> bool {
        clock >= self.start + self.duration
    }
}

/// Displayed state of a shape set plus its in-flight property transitions.
///
/// The scene keeps two layers: the model (every request's target, applied immediately) and
/// one track per `(slot, property)` that is still moving toward its target. A request for a
/// property that is already moving restarts from the value visible at the current clock, so
/// the latest request always wins.
#[derive(Clone, Debug, Default)]
pub struct AnimatedScene {
    model: ShapeSet,
    tracks: BTreeMap<(ShapeSlot, PropertyKind), Track>,
    clock: f64,
}

impl AnimatedScene {
    pub fn new(shapes: ShapeSet) -> Self {
        Self {
            model: shapes,
            tracks: BTreeMap::new(),
            clock: 0.0,
        }
    }

    /// Replace everything at once, dropping in-flight transitions.
    pub fn replace(&mut self, shapes: ShapeSet) {
        self.model = shapes;
        self.tracks.clear();
    }

    /// Start a transition. Returns `false` when the slot does not exist in the scene.
    pub fn request(&mut self, req: &TransitionRequest) -> bool {
        let kind = req.target.kind();
        let Some(from) = self.displayed(req.slot, kind) else {
            return false;
        };
        if !write_property(&mut self.model, req.slot, req.target) {
            return false;
        }

        if req.duration.is_finite() && req.duration > 0.0 && from != req.target {
            self.tracks.insert(
                (req.slot, kind),
                Track {
                    from,
                    to: req.target,
                    start: self.clock,
                    duration: req.duration,
                    ease: req.ease,
                },
            );
        } else {
            self.tracks.remove(&(req.slot, kind));
        }
        true
    }

    /// Move the clock forward by `dt` seconds and retire finished tracks.
    ///
    /// Returns whether anything is still animating.
    pub fn advance(&mut self, dt: f64) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }
        let clock = self.clock;
        self.tracks.retain(|_, track| !track.finished(clock));
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Seconds elapsed on the scene clock.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Target state, as it will look once every transition completes.
    pub fn model(&self) -> &ShapeSet {
        &self.model
    }

    /// State visible at the current clock.
    pub fn sample(&self) -> ShapeSet {
        let mut out = self.model.clone();
        for (&(slot, _), track) in &self.tracks {
            write_property(&mut out, slot, track.sample(self.clock));
        }
        out
    }

    fn displayed(&self, slot: ShapeSlot, kind: PropertyKind) -> Option<PropertyValue> {
        match self.tracks.get(&(slot, kind)) {
            Some(track) => Some(track.sample(self.clock)),
            None => read_property(&self.model, slot, kind),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scene.rs"]
mod tests;
