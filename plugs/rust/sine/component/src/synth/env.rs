use std::sync::atomic::Ordering;

use atomic_float::AtomicF32;

/// Level reached immediately on note on.
pub const SUSTAIN_LEVEL: f32 = 0.8;

/// A linear ramp down from a ceiling.
///
/// The instantaneous gain is the ceiling minus a timer that grows every
/// sample. Note off drops the ceiling to zero, so it cuts the sound
/// immediately rather than applying a release tail.
#[derive(Debug, Default)]
pub struct Envelope {
    level: AtomicF32,
    timer: AtomicF32,
}

impl Envelope {
    /// Jump to the sustain level and restart the ramp.
    pub fn on(&self) {
        self.level.store(SUSTAIN_LEVEL, Ordering::Relaxed);
        self.timer.store(0.0, Ordering::Relaxed);
    }

    pub fn off(&self) {
        self.level.store(0.0, Ordering::Relaxed);
    }

    /// Current gain, never negative.
    pub fn gain(&self) -> f32 {
        (self.level.load(Ordering::Relaxed) - self.timer.load(Ordering::Relaxed)).max(0.0)
    }

    /// Advance the timer by `amount`.
    ///
    /// This is an atomic add, so a concurrent `on` is never overwritten by a
    /// stale timer value.
    pub fn advance(&self, amount: f32) {
        self.timer.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.level.store(0.0, Ordering::Relaxed);
        self.timer.store(0.0, Ordering::Relaxed);
    }
}
