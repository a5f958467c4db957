use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::core::{Rect, Rgba8},
    model::shapes::{ShapeSet, ShapeSlot},
};

/// Which animatable property of a shape a value belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PropertyKind {
    /// Bounds of a dot or track segment.
    Frame,
    /// Outline width of a dot.
    StrokeWidth,
    /// Fill color of a dot or track segment.
    Fill,
}

/// A property value addressed to one shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PropertyValue {
    Frame(Rect),
    StrokeWidth(f64),
    Fill(Rgba8),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Frame(_) => PropertyKind::Frame,
            Self::StrokeWidth(_) => PropertyKind::StrokeWidth,
            Self::Fill(_) => PropertyKind::Fill,
        }
    }
}

impl Lerp for PropertyValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Frame(a), Self::Frame(b)) => Self::Frame(Rect::lerp(a, b, t)),
            (Self::StrokeWidth(a), Self::StrokeWidth(b)) => {
                Self::StrokeWidth(<f64 as Lerp>::lerp(a, b, t))
            }
            (Self::Fill(a), Self::Fill(b)) => Self::Fill(Rgba8::lerp(a, b, t)),
            // Mismatched kinds snap to the target.
            _ => *b,
        }
    }
}

/// An eased move of one shape property toward `target`.
///
/// The start value is whatever the backend currently displays for that property, so a newer
/// request for the same slot and property supersedes an older one mid-flight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionRequest {
    pub slot: ShapeSlot,
    pub target: PropertyValue,
    /// Length in seconds.
    pub duration: f64,
    pub ease: Ease,
}

/// Every property a slot of that type animates, in request order.
pub fn animated_kinds(slot: ShapeSlot) -> &'static [PropertyKind] {
    match slot {
        ShapeSlot::Indicator(_) => &[
            PropertyKind::Frame,
            PropertyKind::StrokeWidth,
            PropertyKind::Fill,
        ],
        ShapeSlot::Line(_) => &[PropertyKind::Frame, PropertyKind::Fill],
    }
}

/// Read one property of one shape, if both exist.
pub fn read_property(set: &ShapeSet, slot: ShapeSlot, kind: PropertyKind) -> Option<PropertyValue> {
    match slot {
        ShapeSlot::Indicator(i) => {
            let d = set.indicators.get(i)?;
            Some(match kind {
                PropertyKind::Frame => PropertyValue::Frame(d.frame()),
                PropertyKind::StrokeWidth => PropertyValue::StrokeWidth(d.stroke_width),
                PropertyKind::Fill => PropertyValue::Fill(d.fill),
            })
        }
        ShapeSlot::Line(i) => {
            let l = set.lines.get(i)?;
            match kind {
                PropertyKind::Frame => Some(PropertyValue::Frame(l.rect)),
                PropertyKind::Fill => Some(PropertyValue::Fill(l.fill)),
                PropertyKind::StrokeWidth => None,
            }
        }
    }
}

/// Overwrite one property of one shape. Returns `false` when the slot or property is absent.
pub fn write_property(set: &mut ShapeSet, slot: ShapeSlot, value: PropertyValue) -> bool {
    match slot {
        ShapeSlot::Indicator(i) => {
            let Some(d) = set.indicators.get_mut(i) else {
                return false;
            };
            match value {
                PropertyValue::Frame(r) => *d = d.with_frame(r),
                PropertyValue::StrokeWidth(w) => d.stroke_width = w,
                PropertyValue::Fill(c) => d.fill = c,
            }
            true
        }
        ShapeSlot::Line(i) => {
            let Some(l) = set.lines.get_mut(i) else {
                return false;
            };
            match value {
                PropertyValue::Frame(r) => l.rect = r,
                PropertyValue::Fill(c) => l.fill = c,
                PropertyValue::StrokeWidth(_) => return false,
            }
            true
        }
    }
}

/// Requests moving every property of every shape in `target` over `duration` seconds.
pub fn requests_for(target: &ShapeSet, duration: f64, ease: Ease) -> Vec<TransitionRequest> {
    let mut out = Vec::new();
    for slot in target.slots() {
        for &kind in animated_kinds(slot) {
            if let Some(value) = read_property(target, slot, kind) {
                out.push(TransitionRequest {
                    slot,
                    target: value,
                    duration,
                    ease,
                });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
