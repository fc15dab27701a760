/// Interpolates a scroll offset from `from` to `to` over `duration_ms` of host clock.
///
/// Offsets are pixels (`f64`). Durations are clamped to at least one millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear progress in `0..=1` at `now_ms`, before easing.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Position at `now_ms`. Lands exactly on `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Redirects a tween that is still running.
    ///
    /// The new tween starts at `now_ms` from wherever this one currently is, so a second smooth
    /// scroll issued mid-flight continues from the visible offset instead of snapping back to
    /// `from`. The easing curve is kept.
    pub fn retarget(&mut self, now_ms: u64, new_to: f64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// Shape of a smooth scroll over its duration.
///
/// Every curve maps `0.0` to `0.0` and `1.0` to `1.0`, so a tween always starts at its current
/// offset and lands on its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Hermite `3t² - 2t³`: gentle start and stop.
    SmoothStep,
    /// Slower ends and a faster middle than `SmoothStep`. Used by [`crate::MemoryHost`] unless
    /// configured otherwise.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `0..=1` to eased progress.
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
