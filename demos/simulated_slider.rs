//! Simulated slider example.
//!
//! Runs one complete cycle of the slider against simulated hardware: boot
//! and homing, teaching both waypoints with scripted encoder detents, the
//! preview, a speed change, the replay and the return home. Each screen the
//! controller presents is printed to the console.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use cam_slider::config::EncoderConfig;
use cam_slider::{
    Axis, AxisDriveBuilder, ButtonInput, Clock, Display, EncoderInput, Rotation, SliderConfig,
    SliderController, SliderHardware, SliderInputs, SplashArt, StepperAxis,
};

/// Shared with the interrupt handlers on real hardware. The controller
/// applies the configuration's encoder and button sections to them.
static ENCODER: EncoderInput = EncoderInput::new(EncoderConfig::DEFAULT);
static BUTTON: ButtonInput = ButtonInput::new(500);

/// Blank 256x128 artwork.
static ART: [u8; 256 * 128 / 8] = [0; 256 * 128 / 8];

/// Output pin that moves a simulated carriage on STEP rising edges.
struct SimPin {
    carriage: Rc<Cell<i64>>,
    dir: Rc<Cell<bool>>,
    is_step: bool,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.is_step {
            let delta = if self.dir.get() { 1 } else { -1 };
            self.carriage.set(self.carriage.get() + delta);
        } else {
            self.dir.set(true);
        }
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if !self.is_step {
            self.dir.set(false);
        }
        Ok(())
    }
}

/// Home switch at carriage position zero, pulled up.
struct SimSwitch(Rc<Cell<i64>>);

impl embedded_hal::digital::ErrorType for SimSwitch {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for SimSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get() > 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get() <= 0)
    }
}

/// Clock that advances 100 µs per read instead of waiting.
struct SimClock(Cell<u64>);

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        let now = self.0.get() + 100;
        self.0.set(now);
        now
    }
}

/// Delay that returns immediately.
struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Prints each presented screen.
#[derive(Default)]
struct ConsoleDisplay {
    line: String,
    bitmap: bool,
}

impl Display for ConsoleDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.line.clear();
        self.bitmap = false;
        Ok(())
    }

    fn set_cursor(&mut self, _x: u16, _y: u16) -> Result<(), Infallible> {
        if !self.line.is_empty() {
            self.line.push_str(" / ");
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
        self.line.push_str(text);
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
        self.bitmap = true;
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        if self.bitmap {
            println!("  [screen] <artwork>");
        } else {
            println!("  [screen] {}", self.line);
        }
        Ok(())
    }
}

fn axis_pins(carriage: &Rc<Cell<i64>>) -> (SimPin, SimPin) {
    let dir = Rc::new(Cell::new(false));
    (
        SimPin {
            carriage: carriage.clone(),
            dir: dir.clone(),
            is_step: true,
        },
        SimPin {
            carriage: carriage.clone(),
            dir,
            is_step: false,
        },
    )
}

/// One detent as the rising-edge handler sees it once the contacts settle.
fn turn(rotation: Rotation) {
    let dt_high = rotation == Rotation::CounterClockwise;
    ENCODER.on_settled_edge(true, dt_high);
}

fn main() -> cam_slider::Result<()> {
    println!("=== Simulated Camera Slider ===\n");

    let config = SliderConfig::default();
    cam_slider::validate_config(&config)?;

    let rail = Rc::new(Cell::new(4_000));
    let pan = Rc::new(Cell::new(0));

    let (x_step, x_dir) = axis_pins(&rail);
    let x = AxisDriveBuilder::new()
        .from_axis_config(Axis::X, &config.axes.x)
        .step_pin(x_step)
        .dir_pin(x_dir)
        .delay(NoDelay)
        .build()?;

    let (y_step, y_dir) = axis_pins(&pan);
    let y = AxisDriveBuilder::new()
        .from_axis_config(Axis::Y, &config.axes.y)
        .step_pin(y_step)
        .dir_pin(y_dir)
        .delay(NoDelay)
        .build()?;

    let hardware = SliderHardware {
        x,
        y,
        limit: SimSwitch(rail.clone()),
        display: ConsoleDisplay::default(),
        clock: SimClock(Cell::new(0)),
        delay: NoDelay,
    };
    let inputs = SliderInputs {
        encoder: &ENCODER,
        button: &BUTTON,
    };

    let mut slider = SliderController::new(config, hardware, inputs, SplashArt::uniform(&ART));

    println!("Boot (carriage starts {} steps from the switch)", rail.get());
    slider.start()?;

    // (detents, rotation) to apply in each teach phase
    let script = [
        (6, Rotation::Clockwise),
        (3, Rotation::Clockwise),
        (30, Rotation::Clockwise),
        (4, Rotation::CounterClockwise),
    ];

    let mut now_ms = 1_000;
    for (detents, rotation) in script {
        BUTTON.on_press(now_ms);
        now_ms += 1_000;
        println!("\nPhase {}", slider.poll()?);
        for _ in 0..detents {
            turn(rotation);
            slider.poll()?;
        }
        println!(
            "  x = {}, y = {}",
            slider.x().current_position().0,
            slider.y().current_position().0
        );
    }

    // SpeedMenu (preview runs on the way in), SpeedAdjust, StartMenu,
    // Running -> Finished, ReturnHome -> Idle
    for step in 0..5 {
        BUTTON.on_press(now_ms);
        now_ms += 1_000;
        let phase = slider.poll()?;
        println!("\nPhase {}", phase);

        if step == 1 {
            turn(Rotation::Clockwise);
            turn(Rotation::Clockwise);
            slider.poll()?;
            turn(Rotation::Clockwise);
            slider.poll()?;
            println!("  setting = {} steps/s", slider.planner().setting());
        }

        println!(
            "  x = {}, y = {}",
            slider.x().current_position().0,
            slider.y().current_position().0
        );
    }

    println!("\nCarriage back at {} steps from the switch", rail.get());
    println!("\n=== Example Complete ===");
    Ok(())
}
