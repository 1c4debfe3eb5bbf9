use crate::animation::controller::BorderAnimator;
use crate::foundation::core::{Bitmap, Point, Rgba8, Size};
use crate::foundation::error::RingletResult;
use crate::render::ring::{RingFrame, render_ring};
use crate::render::surface::Surface;
use std::sync::Arc;

/// The avatar widget core: a circular avatar image surrounded by a segmented, pie-chart-style
/// ring border, with animated transitions between configurations.
///
/// `AvatarView` is host-agnostic. The host owns layout, redraw scheduling, and the drawing
/// surface; it forwards size changes via [`AvatarView::set_size`], drives time via
/// [`AvatarView::tick`], and calls [`AvatarView::render`] when a redraw was requested. Animations
/// started between ticks are stamped with the latest tick's timestamp.
///
/// ```
/// use ringlet::{AvatarView, RecordingSurface, Rgba8};
///
/// let mut view = AvatarView::new(100.0, 100.0);
/// view.set_border_width(10.0);
/// view.set_border_colors(vec![Rgba8::rgb(255, 0, 0), Rgba8::rgb(0, 0, 255)]);
/// view.set_border_values(&[1.0, 1.0, 1.0, 1.0]);
///
/// let mut surface = RecordingSurface::new();
/// view.render(&mut surface).unwrap();
/// assert_eq!(surface.arcs().count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct AvatarView {
    animator: BorderAnimator,
    colors: Vec<Rgba8>,
    avatar: Option<Arc<Bitmap>>,
    size: Size,
    clock: f64,
    dirty: bool,
}

impl AvatarView {
    /// Create a widget of the given size with no segments, no colors, no avatar, and zero border
    /// width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            animator: BorderAnimator::new(),
            colors: Vec::new(),
            avatar: None,
            size: Size::new(width, height),
            clock: 0.0,
            dirty: true,
        }
    }

    /// Current widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Update the widget size (host layout callback).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.dirty = true;
    }

    /// The avatar bitmap displayed in the center, if any.
    pub fn avatar_image(&self) -> Option<&Arc<Bitmap>> {
        self.avatar.as_ref()
    }

    /// Set or clear the avatar bitmap. The bitmap is shared with the caller and never mutated.
    pub fn set_avatar_image(&mut self, image: Option<Arc<Bitmap>>) {
        self.avatar = image;
        self.dirty = true;
    }

    /// The border segment colors.
    pub fn border_colors(&self) -> &[Rgba8] {
        &self.colors
    }

    /// Set the border segment colors. Segment `i` is drawn in color `i % colors.len()`; an empty
    /// vector hides the ring. Colors are discrete and never interpolated.
    pub fn set_border_colors(&mut self, colors: Vec<Rgba8>) {
        self.colors = colors;
        self.dirty = true;
    }

    /// The border segment weights the caller last requested.
    pub fn border_values(&self) -> &[f64] {
        self.animator.border_values()
    }

    /// Instantaneously replace the border segment weights.
    pub fn set_border_values(&mut self, values: &[f64]) {
        self.animator.set_border_values(values);
        self.dirty = true;
    }

    /// Smoothly transition the border segment weights to `values` over `duration` seconds.
    ///
    /// Segments may appear or disappear between configurations; they grow from or shrink to zero
    /// sweep. A non-positive duration is equivalent to [`AvatarView::set_border_values`].
    pub fn animate_to_border_values(&mut self, values: &[f64], duration: f64) {
        self.animator
            .animate_to_border_values(values, duration, self.clock);
        self.dirty = true;
    }

    /// Nominal ring thickness; also the radial gap between the ring and the avatar.
    pub fn border_width(&self) -> f64 {
        self.animator.border_width()
    }

    /// Set the nominal ring thickness. Also snaps the drawn stroke width to the same value.
    pub fn set_border_width(&mut self, width: f64) {
        self.animator.set_border_width(width);
        self.dirty = true;
    }

    /// The stroke thickness the ring is currently drawn with.
    pub fn border_stroke_width(&self) -> f64 {
        self.animator.stroke_width(self.clock)
    }

    /// Set the drawn stroke thickness, independent of the nominal thickness.
    pub fn set_border_stroke_width(&mut self, width: f64) {
        self.animator.set_border_stroke_width(width);
        self.dirty = true;
    }

    /// Smoothly transition the drawn stroke thickness over `duration` seconds.
    pub fn animate_to_stroke_width(&mut self, width: f64, duration: f64) {
        self.animator
            .animate_to_stroke_width(width, duration, self.clock);
        self.dirty = true;
    }

    /// Advance animations to `now` (seconds from an arbitrary monotonic epoch).
    ///
    /// Returns `true` when the host should schedule a redraw: either a setter changed state since
    /// the last tick or an animation track advanced. At most one redraw is requested per tick.
    pub fn tick(&mut self, now: f64) -> bool {
        self.clock = now;
        let animated = self.animator.tick(now);
        let redraw = animated || self.dirty;
        self.dirty = false;
        redraw
    }

    /// Draw the current frame into `surface`.
    ///
    /// The surface is borrowed for the duration of the call. The ring's outer radius is half the
    /// smaller widget dimension; the avatar occupies the disk inset by the border width.
    pub fn render(&self, surface: &mut dyn Surface) -> RingletResult<()> {
        let weights = self.animator.weights(self.clock);
        let frame = RingFrame {
            weights: &weights,
            colors: &self.colors,
            center: Point::new(self.size.width * 0.5, self.size.height * 0.5),
            outer_radius: 0.5 * self.size.width.min(self.size.height),
            border_width: self.animator.border_width(),
            stroke_width: self.animator.stroke_width(self.clock),
            avatar: self.avatar.as_deref(),
        };
        render_ring(&frame, surface)
    }
}
