//! Simulated slider hardware shared by the integration tests.
//!
//! The carriage and pan head are modelled as shared step counters driven by
//! the STEP/DIR pins, so the limit switch can observe where the rail really
//! is, independent of the position the drive believes in.

#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use cam_slider::config::units::StepsPerSec;
use cam_slider::{AxisDrive, AxisDriveBuilder, Clock, Display};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_mock::eh1::delay::NoopDelay;

// =============================================================================
// Mechanics
// =============================================================================

/// Physical position of one axis in steps, shared between its pins.
#[derive(Clone, Default)]
pub struct Mechanism {
    position: Rc<Cell<i64>>,
    dir_high: Rc<Cell<bool>>,
    pulses: Rc<Cell<u64>>,
}

impl Mechanism {
    pub fn at(position: i64) -> Self {
        let mechanism = Self::default();
        mechanism.position.set(position);
        mechanism
    }

    pub fn position(&self) -> i64 {
        self.position.get()
    }

    pub fn pulses(&self) -> u64 {
        self.pulses.get()
    }

    pub fn step_pin(&self) -> StepPin {
        StepPin {
            mechanism: self.clone(),
            high: false,
        }
    }

    pub fn dir_pin(&self) -> DirPin {
        DirPin {
            mechanism: self.clone(),
        }
    }
}

/// Moves the mechanism one step on each rising edge.
pub struct StepPin {
    mechanism: Mechanism,
    high: bool,
}

impl ErrorType for StepPin {
    type Error = Infallible;
}

impl OutputPin for StepPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        if !self.high {
            let delta = if self.mechanism.dir_high.get() { 1 } else { -1 };
            let position = &self.mechanism.position;
            position.set(position.get() + delta);
            self.mechanism.pulses.set(self.mechanism.pulses.get() + 1);
        }
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }
}

/// Latches the direction level.
pub struct DirPin {
    mechanism: Mechanism,
}

impl ErrorType for DirPin {
    type Error = Infallible;
}

impl OutputPin for DirPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.mechanism.dir_high.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.mechanism.dir_high.set(false);
        Ok(())
    }
}

/// Normally-open switch at the rail origin, pulled up: high until the
/// carriage reaches it.
pub struct LimitSwitch {
    pub rail: Mechanism,
}

impl ErrorType for LimitSwitch {
    type Error = Infallible;
}

impl InputPin for LimitSwitch {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.rail.position() > 0)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.rail.position() <= 0)
    }
}

pub type SimDrive = AxisDrive<StepPin, DirPin, NoopDelay>;

pub fn drive(axis: cam_slider::Axis, mechanism: &Mechanism, max_speed: f32) -> SimDrive {
    AxisDriveBuilder::new()
        .axis(axis)
        .max_speed(StepsPerSec(max_speed))
        .step_pin(mechanism.step_pin())
        .dir_pin(mechanism.dir_pin())
        .delay(NoopDelay::new())
        .build()
        .expect("all builder fields set")
}

// =============================================================================
// Time
// =============================================================================

/// Clock that advances a fixed amount on every read.
pub struct SimClock {
    now_us: Cell<u64>,
    tick_us: u64,
}

impl SimClock {
    pub fn new(tick_us: u64) -> Self {
        Self {
            now_us: Cell::new(0),
            tick_us,
        }
    }

    pub fn elapsed_us(&self) -> u64 {
        self.now_us.get()
    }
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        let now = self.now_us.get() + self.tick_us;
        self.now_us.set(now);
        now
    }
}

// =============================================================================
// Screen
// =============================================================================

/// One presented screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Printed text, one `|` between cursor moves.
    pub text: String,
    /// Bitmaps drawn.
    pub bitmaps: usize,
}

/// Keeps every presented frame.
#[derive(Default)]
pub struct RecordingDisplay {
    current: Frame,
    pub frames: Vec<Frame>,
}

impl RecordingDisplay {
    pub fn texts(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn last_text(&self) -> &str {
        self.frames.last().map(|f| f.text.as_str()).unwrap_or("")
    }

    pub fn shown(&self, text: &str) -> bool {
        self.frames.iter().any(|f| f.text == text)
    }
}

impl Display for RecordingDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.current = Frame::default();
        Ok(())
    }

    fn set_cursor(&mut self, _x: u16, _y: u16) -> Result<(), Infallible> {
        if !self.current.text.is_empty() {
            self.current.text.push('|');
        }
        Ok(())
    }

    fn set_text_size(&mut self, _size: u8) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_color(&mut self, _color: u8) -> Result<(), Infallible> {
        Ok(())
    }

    fn print_str(&mut self, text: &str) -> Result<(), Infallible> {
        self.current.text.push_str(text);
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        _x: u16,
        _y: u16,
        _bitmap: &[u8],
        _width: u16,
        _height: u16,
        _color: u8,
    ) -> Result<(), Infallible> {
        self.current.bitmaps += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.frames.push(self.current.clone());
        Ok(())
    }
}

// =============================================================================
// Encoder helpers
// =============================================================================

/// Feed one full detent through the edge-compare decoder.
pub fn turn(encoder: &cam_slider::EncoderInput, rotation: cam_slider::Rotation) {
    let dt_high = rotation == cam_slider::Rotation::CounterClockwise;
    encoder.on_clock_edge(false, dt_high);
    encoder.on_clock_edge(true, dt_high);
}
