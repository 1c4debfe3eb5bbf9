use crate::foundation::core::{Bitmap, Point, Rgba8};
use crate::foundation::error::RingletResult;

pub use kurbo::Cap;

/// One stroked-arc drawing command.
///
/// Angles are radians from the positive x-axis, increasing clockwise in y-down coordinates. The
/// stroke is centered on the circle of the given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedArc {
    /// Center of the arc's circle.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Stroked line width.
    pub width: f64,
    /// Line cap style at the arc's endpoints.
    pub cap: Cap,
    /// Stroke color.
    pub color: Rgba8,
}

/// A 2D drawing surface the ring renderer draws into.
///
/// Implementations are borrowed for the duration of a single render call and never retained.
/// Command failures (a backend rejecting a command) propagate to the render caller; the renderer
/// itself never produces invalid commands from invalid widget state, it skips instead.
pub trait Surface {
    /// Stroke a circular arc.
    fn stroke_arc(&mut self, arc: &StrokedArc) -> RingletResult<()>;

    /// Draw `bitmap` aspect-filled into the circle of `radius` around `center`.
    ///
    /// The bitmap is scaled uniformly so the circumscribed square of the circle is covered, then
    /// clipped to the circle.
    fn draw_bitmap_in_circle(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
        radius: f64,
    ) -> RingletResult<()>;
}
