use kurbo::{Ellipse, Shape as _};

use crate::{
    config::model::Configuration,
    foundation::core::{BezPath, HostEnv, Point, Rect, Rgba8},
    geometry::calc::Geometry,
};

/// Flattening tolerance used when turning descriptors into paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Drawable state of one dot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndicatorDescriptor {
    pub center: Point,
    /// Outer diameter, stroke included.
    pub size: f64,
    pub fill: Rgba8,
    pub stroke_width: f64,
    pub stroke: Rgba8,
}

impl IndicatorDescriptor {
    /// Square bounds of the dot.
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, (self.size, self.size))
    }

    /// Rebuild the descriptor around a new frame, keeping its center on the frame's center.
    pub fn with_frame(self, frame: Rect) -> Self {
        Self {
            center: frame.center(),
            size: frame.width().min(frame.height()).max(0.0),
            ..self
        }
    }

    /// Oval traced along the middle of the stroke, so the painted outline stays inside
    /// [`Self::frame`].
    pub fn path(&self) -> BezPath {
        let half = self.stroke_width / 2.0;
        let rect = self.frame().inset(-half);
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return BezPath::new();
        }
        Ellipse::from_rect(rect).to_path(PATH_TOLERANCE)
    }
}

/// Drawable state of one track segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineDescriptor {
    pub rect: Rect,
    pub fill: Rgba8,
}

impl LineDescriptor {
    pub fn path(&self) -> BezPath {
        self.rect.abs().to_path(PATH_TOLERANCE)
    }
}

/// Addresses one shape inside a [`ShapeSet`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ShapeSlot {
    /// Track segment after dot `n`.
    Line(usize),
    /// Dot `n`.
    Indicator(usize),
}

/// Full renderable state for one configuration snapshot.
///
/// Lines come first so that they are painted beneath the dots.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeSet {
    pub lines: Vec<LineDescriptor>,
    pub indicators: Vec<IndicatorDescriptor>,
}

/// One entry of a [`ShapeSet`] in paint order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeRef<'a> {
    Line(usize, &'a LineDescriptor),
    Indicator(usize, &'a IndicatorDescriptor),
}

impl ShapeSet {
    pub fn len(&self) -> usize {
        self.lines.len() + self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.indicators.is_empty()
    }

    /// Shapes in paint order: every line, then every dot.
    pub fn iter(&self) -> impl Iterator<Item = ShapeRef<'_>> {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, l)| ShapeRef::Line(i, l));
        let dots = self
            .indicators
            .iter()
            .enumerate()
            .map(|(i, d)| ShapeRef::Indicator(i, d));
        lines.chain(dots)
    }

    /// Slots in paint order.
    pub fn slots(&self) -> impl Iterator<Item = ShapeSlot> + '_ {
        self.iter().map(|s| match s {
            ShapeRef::Line(i, _) => ShapeSlot::Line(i),
            ShapeRef::Indicator(i, _) => ShapeSlot::Indicator(i),
        })
    }
}

/// Lay out every dot and track segment for `config` inside `env`.
///
/// Pure: identical inputs always produce identical shape sets.
pub fn compute_shape_set(config: &Configuration, env: HostEnv) -> ShapeSet {
    let geo = Geometry::new(config, env);
    let steps = config.steps();

    let lines = if config.show_track && steps > 1 {
        (0..steps - 1)
            .map(|gap| LineDescriptor {
                rect: geo.line_rect(gap),
                fill: geo.line_fill(gap),
            })
            .collect()
    } else {
        Vec::new()
    };

    let indicators = (0..steps)
        .map(|step| IndicatorDescriptor {
            center: geo.indicator_center(step),
            size: geo.indicator_diameter(step),
            fill: geo.indicator_fill(step),
            stroke_width: geo.indicator_stroke_width(step),
            stroke: geo.indicator_stroke_color(),
        })
        .collect();

    ShapeSet { lines, indicators }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shapes.rs"]
mod tests;
