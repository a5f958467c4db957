//! Easing, interpolation and backend-side transition playback.

pub(crate) mod ease;
pub(crate) mod lerp;
pub(crate) mod scene;
pub(crate) mod transition;
