use crate::animation::ease::Ease;

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

/// Elementwise interpolation. Length mismatches are reconciled by treating missing trailing
/// elements as zero, so vectors of different lengths blend without special cases.
impl Lerp for Vec<f64> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let n = a.len().max(b.len());
        (0..n)
            .map(|i| {
                let av = a.get(i).copied().unwrap_or(0.0);
                let bv = b.get(i).copied().unwrap_or(0.0);
                av + (bv - av) * t
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
struct InFlight {
    start_time: f64,
    duration: f64,
    ease: Ease,
}

/// One independent animation channel: a `from`/`to` value pair plus an optional in-flight
/// transition between them.
///
/// Time is measured in seconds from an arbitrary monotonic epoch; the same epoch must be used for
/// every call on a given track. All operations are total: a non-positive (or non-finite) duration
/// collapses the transition to a snap.
#[derive(Clone, Debug)]
pub struct Track<T: Lerp + Clone> {
    from: T,
    to: T,
    anim: Option<InFlight>,
}

impl<T: Lerp + Clone> Track<T> {
    /// Create an idle track holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            anim: None,
        }
    }

    /// Instantaneously set the track value, canceling any in-flight transition.
    pub fn snap(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.anim = None;
    }

    /// Start a transition with an explicit `from` value.
    ///
    /// Callers that need continuity should pass `self.sample(now)` (or use [`Track::animate`],
    /// which does exactly that).
    pub fn begin(&mut self, from: T, to: T, now: f64, duration: f64, ease: Ease) {
        if !(duration > 0.0) {
            self.snap(to);
            return;
        }
        self.from = from;
        self.to = to;
        self.anim = Some(InFlight {
            start_time: now,
            duration,
            ease,
        });
    }

    /// Start a transition from the current interpolated value toward `to`.
    ///
    /// Replacing an in-flight transition resumes from its current value, not its original `from`,
    /// so chained animations do not jump.
    pub fn animate(&mut self, to: T, now: f64, duration: f64, ease: Ease) {
        let from = self.sample(now);
        self.begin(from, to, now, duration, ease);
    }

    /// The value the track is heading toward (equals the current value when idle).
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Current value at time `now`.
    ///
    /// At or past the end of a transition this returns the target value exactly (not a lerp
    /// landing one rounding step away from it).
    pub fn sample(&self, now: f64) -> T {
        let Some(anim) = self.anim else {
            return self.to.clone();
        };
        let u = ((now - anim.start_time) / anim.duration).clamp(0.0, 1.0);
        if u >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, anim.ease.apply(u))
    }

    /// Advance the track to `now`.
    ///
    /// Returns `true` when the tracked value moved this tick (including the final tick, where the
    /// track snaps to its target and goes idle). Idle tracks return `false`.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(anim) = self.anim else {
            return false;
        };
        if now - anim.start_time >= anim.duration {
            self.from = self.to.clone();
            self.anim = None;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
