use smallvec::SmallVec;

/// Angle at the top of the circle, where the first segment starts by convention.
pub const TOP_ANGLE: f64 = -std::f64::consts::FRAC_PI_2;

/// Angular extent of the full ring.
pub const FULL_SWEEP: f64 = std::f64::consts::TAU;

/// One angular slice of the ring: the sweep from `start` to `end` assigned to segment `index`.
///
/// Angles are radians measured from the positive x-axis, increasing clockwise in the y-down
/// coordinate space of a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcSpan {
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
    /// Index of the weight (and color) this span belongs to.
    pub index: usize,
}

impl ArcSpan {
    /// Angular width of the span in radians.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the span has no angular extent and should not be drawn.
    pub fn is_empty(&self) -> bool {
        self.sweep() <= 0.0
    }
}

/// Project a weight vector onto consecutive angular spans of total extent `sweep`.
///
/// Each weight `w_i` receives sweep `sweep * w_i / S` where `S` is the coerced sum; negative and
/// non-finite weights count as zero. An empty or zero-sum vector projects to no spans. Spans are
/// produced by running accumulation so adjacent segments share their endpoint exactly, and the
/// final span's end is forced to `start_angle + sweep` so floating-point drift never opens a gap
/// at the seam.
pub fn project(weights: &[f64], start_angle: f64, sweep: f64) -> SmallVec<[ArcSpan; 8]> {
    let mut spans = SmallVec::new();

    let total: f64 = weights.iter().map(|&w| sanitize(w)).sum();
    if weights.is_empty() || !(total > 0.0) {
        return spans;
    }

    let mut acc = 0.0;
    let mut cursor = start_angle;
    let last = weights.len() - 1;
    for (i, &w) in weights.iter().enumerate() {
        acc += sanitize(w);
        let end = if i == last {
            start_angle + sweep
        } else {
            start_angle + sweep * (acc / total)
        };
        spans.push(ArcSpan {
            start: cursor,
            end,
            index: i,
        });
        cursor = end;
    }
    spans
}

fn sanitize(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spans.rs"]
mod tests;
