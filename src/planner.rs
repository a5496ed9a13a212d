//! Operator speed setting and travel-time estimate.
//!
//! The setting is a rail step rate in steps/s. It is shown to the operator
//! as a carriage speed and as the time the replay move will take.

use crate::config::units::{MillimetersPerSec, Steps, StepsPerSec};
use crate::config::SpeedConfig;
use crate::input::{EncoderInput, Rotation};

/// Estimated replay duration, in the unit it should be displayed in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TravelEstimate {
    /// One minute or less.
    Seconds(f32),
    /// More than one minute.
    Minutes(f32),
    /// Speed setting is zero: the move would never finish.
    Unbounded,
}

impl TravelEstimate {
    /// Estimate the time to cover `distance` at `setting` steps/s.
    pub fn new(distance: Steps, setting: u32) -> Self {
        if setting == 0 {
            return TravelEstimate::Unbounded;
        }

        let seconds = distance.abs() as f32 / setting as f32;
        let minutes = seconds / 60.0;
        if minutes > 1.0 {
            TravelEstimate::Minutes(minutes)
        } else {
            TravelEstimate::Seconds(seconds)
        }
    }

    /// Duration in seconds, `None` when unbounded.
    pub fn seconds(&self) -> Option<f32> {
        match *self {
            TravelEstimate::Seconds(s) => Some(s),
            TravelEstimate::Minutes(m) => Some(m * 60.0),
            TravelEstimate::Unbounded => None,
        }
    }
}

/// Everything the speed screen shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedReadout {
    /// Raw setting in steps/s.
    pub setting: u32,
    /// Carriage speed.
    pub carriage_speed: MillimetersPerSec,
    /// Rail travel of the replay move.
    pub distance: Steps,
    /// Estimated replay duration.
    pub estimate: TravelEstimate,
}

/// Encoder-adjusted speed setting.
#[derive(Debug, Clone)]
pub struct SpeedPlanner {
    setting: u32,
    default_setting: u32,
    increment: u32,
    steps_per_mm: f32,
}

impl SpeedPlanner {
    /// Build from the speed configuration, starting at the default setting.
    pub fn from_config(config: &SpeedConfig) -> Self {
        Self {
            setting: config.default_setting,
            default_setting: config.default_setting,
            increment: config.increment,
            steps_per_mm: config.steps_per_mm,
        }
    }

    /// Current setting in steps/s.
    #[inline]
    pub fn setting(&self) -> u32 {
        self.setting
    }

    /// Current setting as a rail step rate.
    #[inline]
    pub fn rate(&self) -> StepsPerSec {
        StepsPerSec(self.setting as f32)
    }

    /// Restore the default setting.
    pub fn reset(&mut self) {
        self.setting = self.default_setting;
    }

    /// Apply one encoder detent. Clockwise speeds up; the setting never
    /// drops below zero.
    pub fn adjust(&mut self, rotation: Rotation) -> u32 {
        self.setting = match rotation {
            Rotation::Clockwise => self.setting.saturating_add(self.increment),
            Rotation::CounterClockwise => self.setting.saturating_sub(self.increment),
        };
        self.setting
    }

    /// Consume at most one pending detent.
    ///
    /// Returns whether the setting was adjusted.
    pub fn poll(&mut self, encoder: &EncoderInput) -> bool {
        match encoder.try_take_turn() {
            Some(rotation) => {
                let setting = self.adjust(rotation);
                debug!("speed setting {}", setting);
                true
            }
            None => false,
        }
    }

    /// Carriage speed for the current setting.
    pub fn carriage_speed(&self) -> MillimetersPerSec {
        MillimetersPerSec::from_steps_per_sec(self.rate(), self.steps_per_mm)
    }

    /// Screen contents for a replay covering `distance` rail steps.
    pub fn readout(&self, distance: Steps) -> SpeedReadout {
        SpeedReadout {
            setting: self.setting,
            carriage_speed: self.carriage_speed(),
            distance: Steps(distance.0.abs()),
            estimate: TravelEstimate::new(distance, self.setting),
        }
    }
}
