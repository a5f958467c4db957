//! pagedots lays out and animates a page indicator: a row of dots, one per step, optionally
//! joined by track lines.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: a [`Configuration`] (step count, selection, sizes, toggles) plus the
//!    host's [`HostEnv`] (container bounds and tint).
//! 2. **Lay out**: [`compute_shape_set`] turns both into a [`ShapeSet`] (track lines first,
//!    then dots), using the per-step math in [`Geometry`].
//! 3. **Drive**: a [`PageControl`] owns the configuration and forwards changes to a
//!    [`RenderBackend`]. Selection moves become eased [`TransitionRequest`]s; any other change
//!    redraws the whole set at once.
//! 4. **Render** (optional): [`CpuBackend`] plays transitions back on its own clock and
//!    rasterizes frames with `vello_cpu`.
//!
//! Layout is pure and infallible: out-of-range inputs are clamped, and a single step yields a
//! single centered dot.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod driver;
mod foundation;
mod geometry;
mod model;
mod render;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::scene::AnimatedScene;
pub use animation::transition::{
    PropertyKind, PropertyValue, TransitionRequest, animated_kinds, read_property, requests_for,
    write_property,
};
pub use config::model::Configuration;
pub use driver::control::{DriverState, PageControl};
pub use foundation::core::{BezPath, Container, HostEnv, Point, Rect, Rgba8, Size};
pub use foundation::error::{PageDotsError, PageDotsResult};
pub use geometry::calc::{Geometry, LINE_OVERLAP, ZOOM_FALLOFF_STEPS};
pub use model::shapes::{
    IndicatorDescriptor, LineDescriptor, PATH_TOLERANCE, ShapeRef, ShapeSet, ShapeSlot,
    compute_shape_set,
};
pub use render::backend::{FrameRGBA, RenderBackend, RenderSettings};
pub use render::cpu::CpuBackend;
pub use render::recording::{BackendCall, RecordingBackend};
