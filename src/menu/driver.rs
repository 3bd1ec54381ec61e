//! The transition driver: a reusable, single-target animated value generator.
//!
//! One driver animates one rotation property of one slot at a time. A menu
//! keeps at most one driver per direction (open and close each own theirs)
//! and retargets the same instance from slot to slot across a sequence, so a
//! long sequence allocates exactly one driver.

use crate::easing::Easing;
use crate::menu::slot::SlotProperty;

/// Result of advancing a driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverTick {
    /// The driver is not running (its current step already completed).
    Idle,
    /// The step is in flight; the interpolated value for the target slot.
    Running(f32),
    /// The step just completed; the final value (always `to`). Reported
    /// exactly once per step.
    Finished(f32),
}

/// Animates one scalar rotation property of a single slot from `from` to
/// `to` over a fixed duration.
///
/// Single-flight: while a step is running the driver must not be restarted
/// or retargeted. [`retarget`](Self::retarget) repoints a *finished* driver
/// at a new slot and restarts it with the same from/to/duration/easing.
#[derive(Debug, Clone)]
pub struct TransitionDriver {
    property: SlotProperty,
    from: f32,
    to: f32,
    duration_secs: f32,
    easing: Easing,
    target: usize,
    elapsed: f32,
    running: bool,
}

impl TransitionDriver {
    /// Creates a driver and starts its first step against `target`.
    ///
    /// `duration_ms` is the duration of one slot's transition, not of a whole
    /// sequence. A zero duration completes on the first tick.
    pub fn run(
        property: SlotProperty,
        from: f32,
        to: f32,
        duration_ms: u32,
        easing: Easing,
        target: usize,
    ) -> Self {
        Self {
            property,
            from,
            to,
            duration_secs: duration_ms as f32 / 1000.0,
            easing,
            target,
            elapsed: 0.0,
            running: true,
        }
    }

    /// The slot index this driver is (or was last) animating.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The rotation property this driver writes.
    pub fn property(&self) -> SlotProperty {
        self.property
    }

    /// True while the current step has not yet completed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Repoints the driver at a new slot and restarts the step.
    ///
    /// Must only be called after the previous step finished; the sequencer's
    /// one-at-a-time stepping guarantees this.
    pub fn retarget(&mut self, target: usize) {
        debug_assert!(!self.running, "retarget issued while a step is in flight");
        self.target = target;
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Advances the step by `dt` seconds and reports the interpolated value.
    pub fn tick(&mut self, dt: f32) -> DriverTick {
        if !self.running {
            return DriverTick::Idle;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration_secs {
            self.running = false;
            return DriverTick::Finished(self.to);
        }
        let t = self.elapsed / self.duration_secs;
        DriverTick::Running(self.from + (self.to - self.from) * self.easing.apply(t))
    }
}
