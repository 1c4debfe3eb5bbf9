use crate::foundation::core::{Bitmap, Point};
use crate::foundation::error::RingletResult;
use crate::render::surface::{StrokedArc, Surface};

/// One captured drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// A stroked arc.
    StrokeArc(StrokedArc),
    /// A bitmap composited into a circular clip. The pixel data itself is not retained, only the
    /// bitmap dimensions and the clip geometry.
    DrawBitmapInCircle {
        /// Bitmap width in pixels.
        width: u32,
        /// Bitmap height in pixels.
        height: u32,
        /// Clip circle center.
        center: Point,
        /// Clip circle radius.
        radius: f64,
    },
}

/// In-memory surface for tests and debugging: records commands instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured commands in issue order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// The captured arc commands, in issue order.
    pub fn arcs(&self) -> impl Iterator<Item = &StrokedArc> {
        self.commands.iter().filter_map(|c| match c {
            SurfaceCommand::StrokeArc(arc) => Some(arc),
            SurfaceCommand::DrawBitmapInCircle { .. } => None,
        })
    }

    /// Discard all captured commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn stroke_arc(&mut self, arc: &StrokedArc) -> RingletResult<()> {
        self.commands.push(SurfaceCommand::StrokeArc(*arc));
        Ok(())
    }

    fn draw_bitmap_in_circle(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
        radius: f64,
    ) -> RingletResult<()> {
        self.commands.push(SurfaceCommand::DrawBitmapInCircle {
            width: bitmap.width,
            height: bitmap.height,
            center,
            radius,
        });
        Ok(())
    }
}
