use crate::foundation::core::{Bitmap, Point, Rgba8};
use crate::foundation::error::RingletResult;
use crate::geometry::spans::{self, FULL_SWEEP, TOP_ANGLE};
use crate::render::surface::{Cap, StrokedArc, Surface};

/// Everything needed to draw one frame of the widget, borrowed from the owner.
#[derive(Clone, Copy, Debug)]
pub struct RingFrame<'a> {
    /// Segment weights as currently interpolated.
    pub weights: &'a [f64],
    /// Segment colors; segment `i` uses `colors[i % colors.len()]`.
    pub colors: &'a [Rgba8],
    /// Center of the widget.
    pub center: Point,
    /// Half the smaller widget dimension.
    pub outer_radius: f64,
    /// Nominal ring thickness; also the gap between ring and avatar.
    pub border_width: f64,
    /// Drawn stroke thickness.
    pub stroke_width: f64,
    /// Avatar bitmap, if any.
    pub avatar: Option<&'a Bitmap>,
}

/// Draw one frame: the segmented ring, then the avatar inside its circular clip.
///
/// The stroke centerline sits at `outer_radius - border_width / 2` regardless of stroke width, so
/// an oversized stroke grows outward and inward symmetrically around the nominal ring. The ring
/// is skipped entirely when the centerline radius is non-positive, the stroke width is
/// non-positive, or there are no colors; zero-length spans are skipped individually. The avatar
/// is skipped when absent or when `outer_radius - border_width` is non-positive.
#[tracing::instrument(skip(frame, surface))]
pub fn render_ring(frame: &RingFrame<'_>, surface: &mut dyn Surface) -> RingletResult<()> {
    let centerline = frame.outer_radius - frame.border_width * 0.5;
    if centerline > 0.0 && frame.stroke_width > 0.0 && !frame.colors.is_empty() {
        for span in spans::project(frame.weights, TOP_ANGLE, FULL_SWEEP) {
            if span.is_empty() {
                continue;
            }
            surface.stroke_arc(&StrokedArc {
                center: frame.center,
                radius: centerline,
                start_angle: span.start,
                end_angle: span.end,
                width: frame.stroke_width,
                cap: Cap::Butt,
                color: frame.colors[span.index % frame.colors.len()],
            })?;
        }
    }

    if let Some(avatar) = frame.avatar {
        let clip_radius = frame.outer_radius - frame.border_width;
        if clip_radius > 0.0 {
            surface.draw_bitmap_in_circle(avatar, frame.center, clip_radius)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/ring.rs"]
mod tests;
