//! Push-button phase counter.
//!
//! The button interrupt is the only source of operator-driven phase
//! advances. The controller may also move the phase, but only through the
//! compare-and-swap helpers, so an automatic transition and a press racing
//! it are never both applied.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use super::phase::Phase;
use crate::config::ButtonConfig;

/// Debounced push-button holding the current [`Phase`].
pub struct ButtonInput {
    debounce_ms: AtomicU32,
    last_press_ms: AtomicU32,
    accepted_presses: AtomicU32,
    phase: AtomicU8,
}

impl ButtonInput {
    /// Create the button in [`Phase::Idle`]. `const` so it can live in a
    /// `static`.
    ///
    /// The press timestamp starts at zero, so presses within the first
    /// `debounce_ms` after the clock origin are ignored.
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms: AtomicU32::new(debounce_ms),
            last_press_ms: AtomicU32::new(0),
            accepted_presses: AtomicU32::new(0),
            phase: AtomicU8::new(Phase::Idle as u8),
        }
    }

    /// Apply a loaded configuration to a button that may already be shared
    /// with its interrupt handler.
    pub fn configure(&self, config: &ButtonConfig) {
        self.debounce_ms.store(config.debounce_ms, Ordering::Relaxed);
        debug!("button debounce {} ms", config.debounce_ms);
    }

    /// Minimum spacing between accepted presses.
    #[inline]
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms.load(Ordering::Relaxed)
    }

    /// Interrupt entry point for a rising edge on the button line.
    ///
    /// A press is accepted when more than the debounce window has passed
    /// since the previous press. Every press, accepted or not, restarts the
    /// window. Returns whether the phase advanced.
    pub fn on_press(&self, now_ms: u32) -> bool {
        let last = self.last_press_ms.swap(now_ms, Ordering::Relaxed);
        if now_ms.wrapping_sub(last) <= self.debounce_ms() {
            trace!("button press at {} ms ignored", now_ms);
            return false;
        }

        let previous = self
            .phase
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |index| {
                Some(Phase::from_index(index).next().index())
            })
            .unwrap_or_else(|index| index);
        self.accepted_presses.fetch_add(1, Ordering::Relaxed);

        debug!(
            "button press at {} ms: {} -> {}",
            now_ms,
            Phase::from_index(previous),
            Phase::from_index(previous).next()
        );
        true
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::from_index(self.phase.load(Ordering::Acquire))
    }

    /// Number of presses accepted so far. Never decreases.
    #[inline]
    pub fn accepted_presses(&self) -> u32 {
        self.accepted_presses.load(Ordering::Relaxed)
    }

    /// Advance to the next phase if the current one is still `expected`.
    ///
    /// Returns whether the advance happened.
    pub fn advance_from(&self, expected: Phase) -> bool {
        self.replace(expected, expected.next())
    }

    /// Jump back to [`Phase::Idle`] if the current phase is still
    /// `expected`.
    ///
    /// Returns whether the reset happened.
    pub fn reset_from(&self, expected: Phase) -> bool {
        self.replace(expected, Phase::Idle)
    }

    fn replace(&self, expected: Phase, new: Phase) -> bool {
        self.phase
            .compare_exchange(
                expected.index(),
                new.index(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl Default for ButtonInput {
    fn default() -> Self {
        Self::new(500)
    }
}
