//! Rotary encoder decoding.
//!
//! The clock-line interrupt handler feeds [`EncoderInput`]; the main loop
//! takes at most one pending turn per read. A turn and its direction share
//! one atomic byte. Only the interrupt stores it and only the main loop
//! swaps it back to empty, so each detent is delivered at most once.
//!
//! [`DebounceStrategy::SettleDelay`] works with a rising-edge clock
//! interrupt. [`DebounceStrategy::EdgeCompare`] needs to see the clock line
//! low between detents, so its interrupt must fire on both edges.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{DebounceStrategy, EncoderConfig};
use crate::error::{MotorError, Result};

/// Direction of one encoder detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Data line low when the clock line rises.
    Clockwise,
    /// Data line high when the clock line rises.
    CounterClockwise,
}

const NO_TURN: u8 = 0;
const TURN_CW: u8 = 1;
const TURN_CCW: u8 = 2;

const EDGE_COMPARE: u8 = 0;
const SETTLE_DELAY: u8 = 1;

const fn strategy_code(strategy: DebounceStrategy) -> u8 {
    match strategy {
        DebounceStrategy::EdgeCompare => EDGE_COMPARE,
        DebounceStrategy::SettleDelay => SETTLE_DELAY,
    }
}

/// Debounced encoder state shared between interrupt and main context.
pub struct EncoderInput {
    strategy: AtomicU8,
    settle_ms: AtomicU32,
    last_clk: AtomicBool,
    turn: AtomicU8,
}

impl EncoderInput {
    /// Create the decoder. `const` so it can live in a `static`.
    pub const fn new(config: EncoderConfig) -> Self {
        Self {
            strategy: AtomicU8::new(strategy_code(config.debounce)),
            settle_ms: AtomicU32::new(config.settle_ms),
            // Lines idle high behind pull-ups
            last_clk: AtomicBool::new(true),
            turn: AtomicU8::new(NO_TURN),
        }
    }

    /// Apply a loaded configuration to a decoder that may already be shared
    /// with its interrupt handler.
    pub fn configure(&self, config: &EncoderConfig) {
        self.settle_ms.store(config.settle_ms, Ordering::Relaxed);
        self.strategy
            .store(strategy_code(config.debounce), Ordering::Relaxed);
        debug!(
            "encoder debounce {} ({} ms settle)",
            config.debounce, config.settle_ms
        );
    }

    /// Debounce strategy in use.
    #[inline]
    pub fn strategy(&self) -> DebounceStrategy {
        match self.strategy.load(Ordering::Relaxed) {
            SETTLE_DELAY => DebounceStrategy::SettleDelay,
            _ => DebounceStrategy::EdgeCompare,
        }
    }

    /// Seed the remembered clock level, e.g. from a pin read at startup.
    pub fn prime(&self, clk_high: bool) {
        self.last_clk.store(clk_high, Ordering::Relaxed);
    }

    /// Interrupt entry point: read the lines and decode one clock edge
    /// using the configured strategy.
    ///
    /// With [`DebounceStrategy::SettleDelay`] this belongs in a rising-edge
    /// handler. With [`DebounceStrategy::EdgeCompare`] it must also run on
    /// falling edges, since a rising edge is only accepted after a low read.
    ///
    /// Returns whether a turn was registered.
    pub fn sample<CLK, DT, D>(&self, clk: &mut CLK, dt: &mut DT, delay: &mut D) -> Result<bool>
    where
        CLK: InputPin,
        DT: InputPin,
        D: DelayNs,
    {
        let strategy = self.strategy();
        if strategy == DebounceStrategy::SettleDelay {
            delay.delay_ms(self.settle_ms.load(Ordering::Relaxed));
        }

        let clk_high = clk.is_high().map_err(|_| MotorError::PinError)?;
        let dt_high = dt.is_high().map_err(|_| MotorError::PinError)?;

        Ok(match strategy {
            DebounceStrategy::EdgeCompare => self.on_clock_edge(clk_high, dt_high),
            DebounceStrategy::SettleDelay => self.on_settled_edge(clk_high, dt_high),
        })
    }

    /// Edge-compare decoding of already-sampled line levels.
    ///
    /// Accepts only a low-to-high clock transition relative to the previous
    /// sample; every sample, accepted or not, becomes the new reference.
    /// Can be called for edges of either polarity.
    pub fn on_clock_edge(&self, clk_high: bool, dt_high: bool) -> bool {
        let was_high = self.last_clk.swap(clk_high, Ordering::Relaxed);
        if clk_high && !was_high {
            self.register(dt_high);
            true
        } else {
            trace!("encoder edge rejected (clk {}, last {})", clk_high, was_high);
            false
        }
    }

    /// Settle-delay decoding of line levels read after the settle pause.
    ///
    /// Accepts the edge only if the clock line is still high.
    pub fn on_settled_edge(&self, clk_high: bool, dt_high: bool) -> bool {
        self.last_clk.store(clk_high, Ordering::Relaxed);
        if clk_high {
            self.register(dt_high);
            true
        } else {
            trace!("encoder edge rejected after settle");
            false
        }
    }

    /// Take the pending turn, if any. Clears it.
    pub fn try_take_turn(&self) -> Option<Rotation> {
        match self.turn.swap(NO_TURN, Ordering::AcqRel) {
            TURN_CW => Some(Rotation::Clockwise),
            TURN_CCW => Some(Rotation::CounterClockwise),
            _ => None,
        }
    }

    /// Whether a turn is waiting to be taken.
    #[inline]
    pub fn turn_pending(&self) -> bool {
        self.turn.load(Ordering::Acquire) != NO_TURN
    }

    fn register(&self, dt_high: bool) {
        let turn = if dt_high { TURN_CCW } else { TURN_CW };
        self.turn.store(turn, Ordering::Release);
    }
}

impl Default for EncoderInput {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}
