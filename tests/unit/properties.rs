//! Property tests for synchronized motion and the speed planner.

use std::cell::Cell;
use std::convert::Infallible;

use cam_slider::config::units::{Steps, StepsPerSec};
use cam_slider::config::SpeedConfig;
use cam_slider::{
    AxisDrive, AxisDriveBuilder, Axis, Clock, SpeedPlanner, StepperAxis, SynchronizedMotion,
    TravelEstimate,
};
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;

struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl OutputPin for NullPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

struct TickClock(Cell<u64>);

impl Clock for TickClock {
    fn now_us(&self) -> u64 {
        let now = self.0.get() + 250;
        self.0.set(now);
        now
    }
}

fn drive(axis: Axis, max_speed: f32) -> AxisDrive<NullPin, NullPin, NoopDelay> {
    AxisDriveBuilder::new()
        .axis(axis)
        .max_speed(StepsPerSec(max_speed))
        .step_pin(NullPin)
        .dir_pin(NullPin)
        .delay(NoopDelay::new())
        .build()
        .expect("all builder fields set")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Planned speeds never exceed an axis maximum, and every moving axis
    /// needs the same time at its planned speed.
    #[test]
    fn planned_speeds_share_arrival_time(
        dx in -20_000i64..20_000,
        dy in -20_000i64..20_000,
        max_x in 50.0f32..1_000.0,
        max_y in 50.0f32..1_000.0,
    ) {
        let mut x = drive(Axis::X, max_x);
        let mut y = drive(Axis::Y, max_y);
        let mut motion = SynchronizedMotion::new([
            &mut x as &mut dyn StepperAxis,
            &mut y as &mut dyn StepperAxis,
        ]);

        let planned = motion.move_to([Steps(dx), Steps(dy)]).expect("speeds are positive");
        drop(motion);

        if dx == 0 && dy == 0 {
            prop_assert!(planned.is_none());
            return Ok(());
        }

        let time = planned.expect("some axis moves");
        for (axis, distance, max) in [(&x, dx, max_x), (&y, dy, max_y)] {
            let speed = axis.speed().0;
            prop_assert!(speed.abs() <= max * 1.0001);
            if distance != 0 {
                prop_assert_eq!(speed.signum(), (distance as f32).signum());
                let arrival = distance.abs() as f32 / speed.abs();
                prop_assert!((arrival - time).abs() <= time * 1e-3);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Running a planned move lands every axis exactly on target, after
    /// which the same move is a no-op.
    #[test]
    fn executed_move_arrives_and_is_idempotent(
        dx in -400i64..400,
        dy in -400i64..400,
    ) {
        let clock = TickClock(Cell::new(0));
        let mut x = drive(Axis::X, 800.0);
        let mut y = drive(Axis::Y, 800.0);
        let mut motion = SynchronizedMotion::new([
            &mut x as &mut dyn StepperAxis,
            &mut y as &mut dyn StepperAxis,
        ]);

        motion.run_to([Steps(dx), Steps(dy)], &clock).expect("move runs");
        prop_assert!(motion.move_to([Steps(dx), Steps(dy)]).expect("plan").is_none());
        drop(motion);

        prop_assert_eq!(x.current_position(), Steps(dx));
        prop_assert_eq!(y.current_position(), Steps(dy));
        prop_assert_eq!(x.distance_to_go(), 0);
        prop_assert_eq!(y.distance_to_go(), 0);
    }

    /// A faster setting never yields a longer estimate.
    #[test]
    fn faster_setting_never_takes_longer(
        distance in 1i64..100_000,
        slow in 1u32..5_000,
        extra in 1u32..5_000,
    ) {
        let slower = TravelEstimate::new(Steps(distance), slow)
            .seconds()
            .expect("non-zero setting");
        let faster = TravelEstimate::new(Steps(distance), slow + extra)
            .seconds()
            .expect("non-zero setting");
        prop_assert!(faster < slower);
    }

    /// Counter-clockwise detents never take the setting below zero.
    #[test]
    fn setting_stays_non_negative(detents in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut planner = SpeedPlanner::from_config(&SpeedConfig::default());
        for clockwise in detents {
            let before = planner.setting();
            let rotation = if clockwise {
                cam_slider::Rotation::Clockwise
            } else {
                cam_slider::Rotation::CounterClockwise
            };
            let after = planner.adjust(rotation);
            if clockwise {
                prop_assert_eq!(after, before + 30);
            } else {
                prop_assert_eq!(after, before.saturating_sub(30));
            }
        }
    }
}
