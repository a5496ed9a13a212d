//! Phase-driven slider controller.
//!
//! The button interrupt owns the phase; [`SliderController::poll`] follows
//! it. Each call walks the controller's active phase forward one step at a
//! time until it matches the button's phase, running the exit action of
//! every phase it leaves and the entry action of every phase it enters,
//! then runs the tick action of the phase it ended up in. Moves block
//! inside the action that starts them.

mod homing;

pub use homing::{away_from_home, home_axis};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::units::Steps;
use crate::config::SliderConfig;
use crate::display::{self, Display, ScreenSize, SplashArt};
use crate::error::{Error, MotionError, Result};
use crate::hal::Clock;
use crate::input::{ButtonInput, EncoderInput, Phase};
use crate::motion::{Axis, SynchronizedMotion};
use crate::motor::StepperAxis;
use crate::planner::SpeedPlanner;
use crate::teach::{JogController, Waypoint, WaypointPair};

/// Devices the controller drives.
pub struct SliderHardware<X, Y, LIMIT, D, C, DELAY> {
    /// Rail axis.
    pub x: X,
    /// Pan axis.
    pub y: Y,
    /// Rail home switch.
    pub limit: LIMIT,
    /// Operator screen.
    pub display: D,
    /// Monotonic time source.
    pub clock: C,
    /// Blocking delays.
    pub delay: DELAY,
}

/// Operator inputs shared with interrupt handlers.
#[derive(Clone, Copy)]
pub struct SliderInputs<'a> {
    /// Rotary encoder.
    pub encoder: &'a EncoderInput,
    /// Push-button and phase.
    pub button: &'a ButtonInput,
}

/// Two-axis camera slider.
pub struct SliderController<'a, X, Y, LIMIT, D, C, DELAY>
where
    X: StepperAxis,
    Y: StepperAxis,
    LIMIT: InputPin,
    D: Display,
    C: Clock,
    DELAY: DelayNs,
{
    x: X,
    y: Y,
    limit: LIMIT,
    display: D,
    clock: C,
    delay: DELAY,
    inputs: SliderInputs<'a>,
    art: SplashArt<'a>,
    config: SliderConfig,
    screen: ScreenSize,
    waypoints: WaypointPair,
    planner: SpeedPlanner,
    jog_x: JogController,
    jog_y: JogController,
    active: Phase,
}

impl<'a, X, Y, LIMIT, D, C, DELAY> SliderController<'a, X, Y, LIMIT, D, C, DELAY>
where
    X: StepperAxis,
    Y: StepperAxis,
    LIMIT: InputPin,
    D: Display,
    C: Clock,
    DELAY: DelayNs,
{
    /// Assemble the controller and apply the encoder and button sections of
    /// `config` to the shared inputs. Nothing moves until [`Self::start`].
    pub fn new(
        config: SliderConfig,
        hardware: SliderHardware<X, Y, LIMIT, D, C, DELAY>,
        inputs: SliderInputs<'a>,
        art: SplashArt<'a>,
    ) -> Self {
        let SliderHardware {
            x,
            y,
            limit,
            display,
            clock,
            delay,
        } = hardware;

        inputs.encoder.configure(&config.encoder);
        inputs.button.configure(&config.button);

        Self {
            x,
            y,
            limit,
            display,
            clock,
            delay,
            inputs,
            art,
            screen: ScreenSize {
                width: config.display.width,
                height: config.display.height,
            },
            waypoints: WaypointPair::new(),
            planner: SpeedPlanner::from_config(&config.speed),
            jog_x: JogController::from_config(&config.axes.x),
            jog_y: JogController::from_config(&config.axes.y),
            active: Phase::Idle,
            config,
        }
    }

    /// Boot sequence: splash, home, then the Idle screen.
    pub fn start(&mut self) -> Result<()> {
        info!("cam slider starting");
        display::show_bitmap(&mut self.display, self.art.boot, self.screen)?;
        self.delay.delay_ms(self.config.display.splash_ms);

        self.home()?;

        self.active = Phase::Idle;
        self.enter(Phase::Idle)
    }

    /// Follow the button's phase and run one tick of the resulting phase.
    ///
    /// Returns the phase the controller is in afterwards.
    pub fn poll(&mut self) -> Result<Phase> {
        loop {
            let observed = self.inputs.button.phase();
            if observed == self.active {
                break;
            }

            let leaving = self.active;
            self.exit(leaving)?;
            self.active = leaving.next();
            info!("phase {} -> {}", leaving, self.active);
            self.enter(self.active)?;
        }

        self.tick(self.active)?;
        Ok(self.active)
    }

    /// Home the rail. Shows the homing screen if the carriage is away from
    /// the switch.
    pub fn home(&mut self) -> Result<()> {
        if away_from_home(&mut self.limit)? {
            display::show_bitmap(&mut self.display, self.art.homing, self.screen)?;
        }

        self.y.set_max_speed(self.config.axes.y.max_speed);
        home_axis(
            &mut self.x,
            &mut self.limit,
            &self.config.homing,
            self.config.axes.x.max_speed,
            &self.clock,
            &mut self.delay,
        )?;

        display::show_blank(&mut self.display)
    }

    /// Phase the controller last entered.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.active
    }

    /// Taught waypoints.
    #[inline]
    pub fn waypoints(&self) -> &WaypointPair {
        &self.waypoints
    }

    /// Speed setting.
    #[inline]
    pub fn planner(&self) -> &SpeedPlanner {
        &self.planner
    }

    /// Rail axis.
    #[inline]
    pub fn x(&self) -> &X {
        &self.x
    }

    /// Pan axis.
    #[inline]
    pub fn y(&self) -> &Y {
        &self.y
    }

    /// Operator screen.
    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Time source.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give the devices back.
    pub fn release(self) -> SliderHardware<X, Y, LIMIT, D, C, DELAY> {
        SliderHardware {
            x: self.x,
            y: self.y,
            limit: self.limit,
            display: self.display,
            clock: self.clock,
            delay: self.delay,
        }
    }

    fn exit(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::JogXIn | Phase::JogXOut => {
                if let Some((axis, waypoint)) = phase.teach_target() {
                    self.waypoints
                        .record(axis, waypoint, self.x.current_position());
                }
            }
            Phase::JogYIn => {
                // Pan has no home switch: its in position is the origin
                self.y.set_current_position(Steps(0));
                self.waypoints.record(Axis::Y, Waypoint::In, Steps(0));
            }
            Phase::JogYOut => {
                self.waypoints
                    .record(Axis::Y, Waypoint::Out, self.y.current_position());
                self.preview()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn enter(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::Idle => {
                self.planner.reset();
                display::show_bitmap(&mut self.display, self.art.begin_setup, self.screen)
            }
            Phase::SpeedAdjust => self.show_speed(),
            Phase::Running => {
                self.show_prompt(phase)?;
                self.replay()?;
                if !self.inputs.button.advance_from(Phase::Running) {
                    debug!("phase moved during replay");
                }
                Ok(())
            }
            Phase::ReturnHome => {
                display::show_blank(&mut self.display)?;
                self.home()?;
                if !self.inputs.button.reset_from(Phase::ReturnHome) {
                    debug!("phase moved during homing");
                }
                Ok(())
            }
            _ => self.show_prompt(phase),
        }
    }

    fn tick(&mut self, phase: Phase) -> Result<()> {
        match phase {
            Phase::JogXIn | Phase::JogXOut => {
                self.jog_x
                    .poll(&mut self.x, self.inputs.encoder, &self.clock)?;
            }
            Phase::JogYIn | Phase::JogYOut => {
                self.jog_y
                    .poll(&mut self.y, self.inputs.encoder, &self.clock)?;
            }
            Phase::SpeedAdjust => {
                if self.planner.poll(self.inputs.encoder) {
                    self.show_speed()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Move both axes to the in waypoints at preview speed.
    fn preview(&mut self) -> Result<()> {
        display::show_preview(&mut self.display)?;

        let preview_speed = self.config.speed.preview_max_speed;
        self.x.set_max_speed(preview_speed);
        self.y.set_max_speed(preview_speed);

        let targets = self.waypoints.targets(Waypoint::In);
        info!("preview to ({}, {})", targets[0].0, targets[1].0);
        self.sync_move(targets)
    }

    /// Replay the taught move to the out waypoints at the operator's speed.
    fn replay(&mut self) -> Result<()> {
        self.x.set_max_speed(self.planner.rate());
        self.y.set_max_speed(self.config.speed.run_y_max_speed);

        let targets = self.waypoints.targets(Waypoint::Out);
        info!(
            "replay to ({}, {}) at {} steps/s",
            targets[0].0,
            targets[1].0,
            self.planner.setting()
        );

        match self.sync_move(targets) {
            Err(Error::Motion(MotionError::ZeroMaxSpeed { axis })) => {
                warn!("replay skipped: {} speed is zero", axis);
                Ok(())
            }
            other => other,
        }
    }

    fn sync_move(&mut self, targets: [Steps; 2]) -> Result<()> {
        let mut motion = SynchronizedMotion::new([
            &mut self.x as &mut dyn StepperAxis,
            &mut self.y as &mut dyn StepperAxis,
        ]);
        motion.run_to(targets, &self.clock)
    }

    fn show_prompt(&mut self, phase: Phase) -> Result<()> {
        match display::prompt_text(phase) {
            Some((text, at)) => display::show_text(&mut self.display, text, at),
            None => Ok(()),
        }
    }

    fn show_speed(&mut self) -> Result<()> {
        let readout = self.planner.readout(self.waypoints.rail_distance());
        display::show_speed(&mut self.display, &readout)
    }
}
