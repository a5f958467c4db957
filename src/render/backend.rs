use crate::{
    animation::transition::TransitionRequest, foundation::error::PageDotsResult,
    model::shapes::ShapeSet,
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
        if !self.premultiplied || a == 0 || a == 255 {
            return Some([r, g, b, a]);
        }
        let unpremul = |c: u8| -> u8 {
            ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
        };
        Some([unpremul(r), unpremul(g), unpremul(b), a])
    }

    /// Convert the buffer to straight alpha in place.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// Everything a page control needs from whatever draws it.
///
/// `draw` replaces the displayed shapes outright. `animate` asks for one property of one
/// shape to move toward a new value; the backend decides how overlapping requests compose,
/// and the page control never waits on them.
pub trait RenderBackend {
    fn draw(&mut self, shapes: &ShapeSet) -> PageDotsResult<()>;

    fn animate(&mut self, request: &TransitionRequest) -> PageDotsResult<()>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for Box<B> {
    fn draw(&mut self, shapes: &ShapeSet) -> PageDotsResult<()> {
        (**self).draw(shapes)
    }

    fn animate(&mut self, request: &TransitionRequest) -> PageDotsResult<()> {
        (**self).animate(request)
    }
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output surface width in pixels.
    pub width: u32,
    /// Output surface height in pixels.
    pub height: u32,
    /// If set, backends clear the surface to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
