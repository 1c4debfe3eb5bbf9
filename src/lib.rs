//! Ringlet renders a circular avatar image surrounded by a segmented, pie-chart-style ring
//! border, with animated transitions between configurations.
//!
//! The crate is host-agnostic: it owns segment geometry, animation state, and frame emission,
//! while the host UI framework owns layout, timing, and the drawing surface.
//!
//! - Configure and drive an [`AvatarView`] (or the lower-level [`BorderAnimator`])
//! - Implement [`Surface`] over your canvas, or use the built-in [`CpuSurface`]
//! - Call [`AvatarView::tick`] from your frame callback and [`AvatarView::render`] when it asks
//!   for a redraw
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod geometry;
mod render;
mod view;

pub use crate::animation::controller::BorderAnimator;
pub use crate::animation::ease::Ease;
pub use crate::animation::track::{Lerp, Track};
pub use crate::foundation::core::{Affine, Bitmap, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{RingletError, RingletResult};
pub use crate::geometry::spans::{ArcSpan, FULL_SWEEP, TOP_ANGLE, project};
pub use crate::render::cpu::{CpuSurface, CpuSurfaceOpts};
pub use crate::render::recording::{RecordingSurface, SurfaceCommand};
pub use crate::render::ring::{RingFrame, render_ring};
pub use crate::render::surface::{Cap, StrokedArc, Surface};
pub use crate::view::AvatarView;
