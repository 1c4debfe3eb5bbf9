use crate::animation::ease::Ease;
use crate::animation::track::Track;

/// Interpolated state for the ring border: one track for the segment weights and one for the
/// stroke width, advanced toward their targets by timing ticks.
///
/// The two tracks are fully independent: starting, snapping, or completing one never affects the
/// other. Every operation is total; invalid numeric input is coerced (negative or non-finite
/// weights become 0, non-positive durations collapse to a snap).
#[derive(Clone, Debug)]
pub struct BorderAnimator {
    weights: Track<Vec<f64>>,
    /// Length the weight vector settles to once the current transition completes.
    weights_len: usize,
    stroke: Track<f64>,
    border_width: f64,
}

impl Default for BorderAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BorderAnimator {
    /// Create an animator with no segments, zero border width, and zero stroke width.
    pub fn new() -> Self {
        Self {
            weights: Track::new(Vec::new()),
            weights_len: 0,
            stroke: Track::new(0.0),
            border_width: 0.0,
        }
    }

    /// Instantaneously replace the segment weights, canceling any weights transition.
    pub fn set_border_values(&mut self, values: &[f64]) {
        let values = coerce_weights(values);
        self.weights_len = values.len();
        self.weights.snap(values);
    }

    /// Smoothly transition the segment weights to `values` over `duration` seconds.
    ///
    /// When the old and new vectors differ in length, both endpoints are zero-padded to the
    /// common length: appearing segments grow from zero sweep and disappearing segments shrink to
    /// zero, under the same interpolation rule as every other segment. Once the transition
    /// completes the vector is trimmed back to `values.len()`.
    ///
    /// Replacing an in-flight transition resumes from the currently interpolated weights, so
    /// chained calls are continuous. A non-positive `duration` is a snap.
    pub fn animate_to_border_values(&mut self, values: &[f64], duration: f64, now: f64) {
        let values = coerce_weights(values);
        self.weights_len = values.len();
        if !(duration > 0.0) {
            self.weights.snap(values);
            return;
        }

        let mut from = self.weights.sample(now);
        let mut to = values;
        let n = from.len().max(to.len());
        from.resize(n, 0.0);
        to.resize(n, 0.0);

        tracing::trace!(n, duration, "starting border values transition");
        self.weights.begin(from, to, now, duration, Ease::InOutCubic);
    }

    /// Set the nominal ring thickness.
    ///
    /// Also snaps the drawn stroke width to `width`, canceling any stroke-width transition; the
    /// two only diverge through [`BorderAnimator::set_border_stroke_width`] or
    /// [`BorderAnimator::animate_to_stroke_width`] afterwards.
    pub fn set_border_width(&mut self, width: f64) {
        let width = coerce_scalar(width);
        self.border_width = width;
        self.stroke.snap(width);
    }

    /// Instantaneously set the drawn stroke width without touching the nominal thickness.
    pub fn set_border_stroke_width(&mut self, width: f64) {
        self.stroke.snap(coerce_scalar(width));
    }

    /// Smoothly transition the drawn stroke width to `width` over `duration` seconds.
    pub fn animate_to_stroke_width(&mut self, width: f64, duration: f64, now: f64) {
        tracing::trace!(width, duration, "starting stroke width transition");
        self.stroke
            .animate(coerce_scalar(width), now, duration, Ease::InOutCubic);
    }

    /// Advance both tracks to `now`.
    ///
    /// The weights track is evaluated before the stroke track. Returns `true` when a redraw
    /// should be issued; at most one redraw is requested per tick regardless of how many tracks
    /// advanced. A track whose elapsed time has reached its duration snaps to its target exactly
    /// and goes idle.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut redraw = false;
        if self.weights.advance(now) {
            redraw = true;
            if !self.weights.is_animating() {
                let mut settled = self.weights.target().clone();
                settled.truncate(self.weights_len);
                self.weights.snap(settled);
                tracing::trace!(len = self.weights_len, "border values transition completed");
            }
        }
        if self.stroke.advance(now) {
            redraw = true;
        }
        redraw
    }

    /// The weight vector as it should be rendered at time `now`.
    ///
    /// While a transition is in flight this has the padded target's length and element order;
    /// trailing zero weights project to zero-length spans that the renderer skips.
    pub fn weights(&self, now: f64) -> Vec<f64> {
        self.weights.sample(now)
    }

    /// The weight vector the caller last requested, without transition padding.
    pub fn border_values(&self) -> &[f64] {
        let target = self.weights.target();
        &target[..self.weights_len.min(target.len())]
    }

    /// Nominal ring thickness.
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Drawn stroke width at time `now`.
    pub fn stroke_width(&self, now: f64) -> f64 {
        self.stroke.sample(now)
    }

    /// Whether either track has a transition in flight.
    pub fn is_animating(&self) -> bool {
        self.weights.is_animating() || self.stroke.is_animating()
    }
}

fn coerce_weights(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect()
}

fn coerce_scalar(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
