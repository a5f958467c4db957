use crate::{
    animation::{scene::AnimatedScene, transition::TransitionRequest},
    foundation::core::{BezPath, Rgba8},
    foundation::error::{PageDotsError, PageDotsResult},
    model::shapes::{PATH_TOLERANCE, ShapeRef, ShapeSet},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
};

/// CPU raster backend.
///
/// Keeps an [`AnimatedScene`] on its own clock: the host calls [`CpuBackend::advance`] between
/// frames and [`CpuBackend::render_frame`] to rasterize what is visible at that moment.
/// Shapes are laid out in surface pixels, one container point per pixel.
pub struct CpuBackend {
    settings: RenderSettings,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    scene: AnimatedScene,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> PageDotsResult<Self> {
        let width: u16 = settings
            .width
            .try_into()
            .map_err(|_| PageDotsError::render("surface width exceeds u16"))?;
        let height: u16 = settings
            .height
            .try_into()
            .map_err(|_| PageDotsError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(PageDotsError::render("surface width/height must be > 0"));
        }
        Ok(Self {
            settings,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            scene: AnimatedScene::default(),
        })
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn scene(&self) -> &AnimatedScene {
        &self.scene
    }

    /// Advance the animation clock by `dt` seconds. Returns whether anything still moves.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.scene.advance(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.scene.is_animating()
    }

    /// Rasterize the shapes visible at the current clock.
    ///
    /// The returned frame is straight (non-premultiplied) alpha.
    #[tracing::instrument(skip(self))]
    pub fn render_frame(&mut self) -> PageDotsResult<FrameRGBA> {
        let clear = self
            .settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8::new(r, g, b, a).to_premul())
            .unwrap_or([0, 0, 0, 0]);
        clear_pixmap(&mut self.pixmap, clear);

        let shapes = self.scene.sample();
        tracing::trace!(clock = self.scene.clock(), shapes = shapes.len(), "rasterize");
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        paint_shapes(&mut ctx, &shapes);
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        let mut frame = FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        frame.unpremultiply();
        Ok(frame)
    }
}

impl RenderBackend for CpuBackend {
    fn draw(&mut self, shapes: &ShapeSet) -> PageDotsResult<()> {
        self.scene.replace(shapes.clone());
        Ok(())
    }

    fn animate(&mut self, request: &TransitionRequest) -> PageDotsResult<()> {
        if !self.scene.request(request) {
            tracing::warn!(slot = ?request.slot, "transition for a shape that is not drawn");
        }
        Ok(())
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn paint_shapes(ctx: &mut vello_cpu::RenderContext, shapes: &ShapeSet) {
    for shape in shapes.iter() {
        match shape {
            ShapeRef::Line(_, line) => fill(ctx, &line.path(), line.fill),
            ShapeRef::Indicator(_, dot) => {
                let path = dot.path();
                fill(ctx, &path, dot.fill);
                if dot.stroke_width > 0.0 {
                    let outline = kurbo::stroke(
                        path.iter(),
                        &kurbo::Stroke::new(dot.stroke_width),
                        &kurbo::StrokeOpts::default(),
                        PATH_TOLERANCE,
                    );
                    fill(ctx, &outline, dot.stroke);
                }
            }
        }
    }
}

fn fill(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8) {
    if color.a == 0 || path.elements().is_empty() {
        return;
    }
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
