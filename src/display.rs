//! Operator screen.
//!
//! [`Display`] is the drawing surface the controller talks to; a driver for
//! the actual panel implements it. The `show_*` functions lay out each
//! screen the slider presents.

use core::fmt::Write as _;

use crate::error::{DisplayError, Result};
use crate::input::Phase;
use crate::planner::{SpeedReadout, TravelEstimate};

/// Pixel colour used for all text and artwork.
pub const WHITE: u8 = 1;

/// Text size for prompts and the speed screen.
pub const TEXT_SIZE: u8 = 2;

/// Longest `{:.2}` rendering of an `f32`: sign, 39 integer digits, point
/// and two decimals.
const NUMBER_CAPACITY: usize = 43;

/// Drawing surface with a text cursor.
///
/// Drawing calls go to a back buffer; nothing is visible until
/// [`Display::present`].
pub trait Display {
    /// Driver error type.
    type Error;

    /// Blank the back buffer.
    fn clear(&mut self) -> core::result::Result<(), Self::Error>;

    /// Move the text cursor, in pixels.
    fn set_cursor(&mut self, x: u16, y: u16) -> core::result::Result<(), Self::Error>;

    /// Set the text scale factor.
    fn set_text_size(&mut self, size: u8) -> core::result::Result<(), Self::Error>;

    /// Set the text colour.
    fn set_color(&mut self, color: u8) -> core::result::Result<(), Self::Error>;

    /// Print text at the cursor and advance it.
    fn print_str(&mut self, text: &str) -> core::result::Result<(), Self::Error>;

    /// Print a number with two decimals.
    fn print_number(&mut self, value: f32) -> core::result::Result<(), Self::Error> {
        let mut text: heapless::String<NUMBER_CAPACITY> = heapless::String::new();
        if write!(text, "{:.2}", value).is_err() {
            warn!("number does not fit the display buffer");
        }
        self.print_str(&text)
    }

    /// Draw a 1-bit bitmap, rows packed MSB-first.
    fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        bitmap: &[u8],
        width: u16,
        height: u16,
        color: u8,
    ) -> core::result::Result<(), Self::Error>;

    /// Push the back buffer to the panel.
    fn present(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Full-screen artwork shown at fixed points of the cycle.
#[derive(Debug, Clone, Copy)]
pub struct SplashArt<'a> {
    /// Boot logo.
    pub boot: &'a [u8],
    /// "Begin setup" screen shown in Idle.
    pub begin_setup: &'a [u8],
    /// Shown while seeking the home switch.
    pub homing: &'a [u8],
}

impl<'a> SplashArt<'a> {
    /// Use the same bitmap for every screen.
    pub const fn uniform(bitmap: &'a [u8]) -> Self {
        Self {
            boot: bitmap,
            begin_setup: bitmap,
            homing: bitmap,
        }
    }
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

/// Cursor of the phase prompts.
const PROMPT_AT: (u16, u16) = (20, 10);
/// Cursor of the "Finish" prompt.
const FINISH_AT: (u16, u16) = (45, 14);

/// Prompt text for a phase that shows one, with its cursor.
pub fn prompt_text(phase: Phase) -> Option<(&'static str, (u16, u16))> {
    let text = match phase {
        Phase::JogXIn => "Set X In",
        Phase::JogYIn => "Set Y In",
        Phase::JogXOut => "Set X Out",
        Phase::JogYOut => "Set Y Out",
        Phase::SpeedMenu => "Set Speed",
        Phase::StartMenu => "Start",
        Phase::Running => "Running",
        Phase::Finished => return Some(("Finish", FINISH_AT)),
        _ => return None,
    };
    Some((text, PROMPT_AT))
}

fn driver<E>(_: E) -> crate::error::Error {
    DisplayError::DriverError.into()
}

/// Draw a full-screen bitmap and present it.
pub fn show_bitmap<D: Display>(display: &mut D, bitmap: &[u8], size: ScreenSize) -> Result<()> {
    display.clear().map_err(driver)?;
    display
        .draw_bitmap(0, 0, bitmap, size.width, size.height, WHITE)
        .map_err(driver)?;
    display.present().map_err(driver)
}

/// Blank the screen.
pub fn show_blank<D: Display>(display: &mut D) -> Result<()> {
    display.clear().map_err(driver)?;
    display.present().map_err(driver)
}

/// Show one line of text at `at`.
pub fn show_text<D: Display>(display: &mut D, text: &str, at: (u16, u16)) -> Result<()> {
    display.clear().map_err(driver)?;
    display.set_text_size(TEXT_SIZE).map_err(driver)?;
    display.set_color(WHITE).map_err(driver)?;
    display.set_cursor(at.0, at.1).map_err(driver)?;
    display.print_str(text).map_err(driver)?;
    display.present().map_err(driver)
}

/// Show the preview notice.
pub fn show_preview<D: Display>(display: &mut D) -> Result<()> {
    show_text(display, " Preview ", PROMPT_AT)
}

/// Show the speed-adjust screen.
///
/// Layout: "Speed", the carriage speed in mm/s, "Time", then the estimate in
/// minutes or seconds. A zero setting shows `--` in place of the time.
pub fn show_speed<D: Display>(display: &mut D, readout: &SpeedReadout) -> Result<()> {
    display.clear().map_err(driver)?;
    display.set_text_size(TEXT_SIZE).map_err(driver)?;
    display.set_color(WHITE).map_err(driver)?;

    display.set_cursor(30, 0).map_err(driver)?;
    display.print_str("Speed").map_err(driver)?;
    display.set_cursor(5, 16).map_err(driver)?;
    display
        .print_number(readout.carriage_speed.value())
        .map_err(driver)?;
    display.print_str(" mm/s").map_err(driver)?;

    display.set_cursor(35, 32).map_err(driver)?;
    display.print_str("Time").map_err(driver)?;
    display.set_cursor(8, 48).map_err(driver)?;
    match readout.estimate {
        TravelEstimate::Minutes(minutes) => {
            display.print_number(minutes).map_err(driver)?;
            display.print_str(" min").map_err(driver)?;
        }
        TravelEstimate::Seconds(seconds) => {
            display.print_number(seconds).map_err(driver)?;
            display.print_str(" sec").map_err(driver)?;
        }
        TravelEstimate::Unbounded => {
            display.print_str("--").map_err(driver)?;
        }
    }

    display.present().map_err(driver)
}
