use crate::foundation::core::{Bitmap, Point};
use crate::foundation::error::{RingletError, RingletResult};
use crate::render::surface::{Cap, StrokedArc, Surface};
use kurbo::Shape;
use std::sync::Arc;

/// Flattening tolerance for arc and circle paths, in surface units.
const PATH_TOLERANCE: f64 = 0.1;

/// Options for the CPU surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuSurfaceOpts {
    pub(crate) clear_rgba: Option<[u8; 4]>,
}

impl CpuSurfaceOpts {
    /// Return options with a configured clear color for the target.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// Drawing commands accumulate in a render context; [`CpuSurface::finish`] rasterizes them into a
/// premultiplied RGBA8 [`Bitmap`] and resets the context for the next frame. Hosts without their
/// own canvas can present these frames directly; the test suite uses them for pixel-level checks.
pub struct CpuSurface {
    width: u16,
    height: u16,
    opts: CpuSurfaceOpts,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Create a surface with default options.
    pub fn new(width: u32, height: u32) -> RingletResult<Self> {
        Self::with_opts(width, height, CpuSurfaceOpts::default())
    }

    /// Create a surface with explicit options.
    pub fn with_opts(width: u32, height: u32, opts: CpuSurfaceOpts) -> RingletResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| RingletError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| RingletError::validation("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(RingletError::validation("surface dimensions must be > 0"));
        }
        let ctx = vello_cpu::RenderContext::new(w, h);
        let mut surface = Self {
            width: w,
            height: h,
            opts,
            ctx,
        };
        surface.apply_clear();
        Ok(surface)
    }

    /// Rasterize the accumulated commands and return the frame.
    ///
    /// The context is reset afterwards, so the surface can be reused for the next frame.
    pub fn finish(&mut self) -> RingletResult<Bitmap> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx.reset();
        self.apply_clear();
        Bitmap::from_rgba8(u32::from(self.width), u32::from(self.height), data, true)
    }

    fn apply_clear(&mut self) {
        let Some([r, g, b, a]) = self.opts.clear_rgba else {
            return;
        };
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }
}

impl Surface for CpuSurface {
    fn stroke_arc(&mut self, arc: &StrokedArc) -> RingletResult<()> {
        let sweep = arc.end_angle - arc.start_angle;
        let shape = kurbo::Arc::new(
            arc.center,
            (arc.radius, arc.radius),
            arc.start_angle,
            sweep,
            0.0,
        );
        let mut path = kurbo::BezPath::new();
        for el in shape.path_elements(PATH_TOLERANCE) {
            path.push(el);
        }

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            arc.color.r,
            arc.color.g,
            arc.color.b,
            arc.color.a,
        ));
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(arc.width).with_caps(cap_to_cpu(arc.cap)));
        self.ctx.stroke_path(&bezpath_to_cpu(&path));
        Ok(())
    }

    fn draw_bitmap_in_circle(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
        radius: f64,
    ) -> RingletResult<()> {
        if radius <= 0.0 || bitmap.width == 0 || bitmap.height == 0 {
            return Ok(());
        }
        let image = bitmap_to_image(bitmap)?;

        let circle = kurbo::Circle::new(center, radius);
        let mut clip = kurbo::BezPath::new();
        for el in circle.path_elements(PATH_TOLERANCE) {
            clip.push(el);
        }

        // Aspect-fill: uniform scale so the circumscribed square of the clip is covered.
        let side = radius * 2.0;
        let scale = side / f64::from(bitmap.width.min(bitmap.height));
        let scaled_w = f64::from(bitmap.width) * scale;
        let scaled_h = f64::from(bitmap.height) * scale;
        let transform = kurbo::Affine::translate((
            center.x - scaled_w * 0.5,
            center.y - scaled_h * 0.5,
        )) * kurbo::Affine::scale(scale);

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&bezpath_to_cpu(&clip));
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(image);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(bitmap.width),
            f64::from(bitmap.height),
        ));
        self.ctx.pop_layer();
        Ok(())
    }
}

fn cap_to_cpu(cap: Cap) -> vello_cpu::kurbo::Cap {
    match cap {
        Cap::Butt => vello_cpu::kurbo::Cap::Butt,
        Cap::Round => vello_cpu::kurbo::Cap::Round,
        Cap::Square => vello_cpu::kurbo::Cap::Square,
    }
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn bitmap_to_image(bitmap: &Bitmap) -> RingletResult<vello_cpu::Image> {
    let w: u16 = bitmap
        .width
        .try_into()
        .map_err(|_| RingletError::render("bitmap width exceeds u16"))?;
    let h: u16 = bitmap
        .height
        .try_into()
        .map_err(|_| RingletError::render("bitmap height exceeds u16"))?;
    let expected = (bitmap.width as usize)
        .saturating_mul(bitmap.height as usize)
        .saturating_mul(4);
    if bitmap.data.len() != expected {
        return Err(RingletError::render("bitmap byte len mismatch"));
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (bitmap.width as usize) * (bitmap.height as usize),
    );
    for px in bitmap.data.chunks_exact(4) {
        let [r, g, b, a] = [px[0], px[1], px[2], px[3]];
        let premul = if bitmap.premultiplied {
            [r, g, b, a]
        } else {
            let a16 = u16::from(a);
            let mul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
            [mul(r), mul(g), mul(b), a]
        };
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array(premul));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
