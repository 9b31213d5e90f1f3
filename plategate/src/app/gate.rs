use std::time::Duration;

use crate::hal::delay::Delay;
use crate::hal::indicator::Indicator;
use crate::hal::servo::{PulseWidth, Servo};
use crate::hal::{Leaf, Platform};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum GateState {
    #[default]
    Closed,
    Opening,
    OpenHeld,
    Closing,
}

struct GateChannel<'a> {
    servo: &'a dyn Servo,
    indicator: &'a dyn Indicator,
}

/// Both leaves of the gate, driven as a single unit.
///
/// Servo commands take effect immediately, so `Opening` and `Closing` only
/// last while the commands are issued. The open position is held by
/// blocking in [`GateActuator::cycle`].
pub struct GateActuator<'a> {
    channels: [GateChannel<'a>; 2],
    delay: &'a dyn Delay,
    open_angle: i32,
    close_angle: i32,
    state: GateState,
}

impl<'a> GateActuator<'a> {
    /// The gate is commanded closed, indicators off, before this returns.
    pub fn new(platform: &'a dyn Platform, open_angle: i32, close_angle: i32) -> Self {
        let channels = Leaf::ALL.map(|leaf| GateChannel {
            servo: platform.servo(leaf),
            indicator: platform.indicator(leaf),
        });

        let mut gate = Self {
            channels,
            delay: platform.delay(),
            open_angle,
            close_angle,
            state: GateState::Closing,
        };

        gate.close(None);
        gate
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn open(&mut self, angle: Option<i32>) {
        let angle = angle.unwrap_or(self.open_angle);
        self.set_state(GateState::Opening);

        for channel in &self.channels {
            channel.indicator.set_active(true);
        }
        self.set_angle(angle);

        self.set_state(GateState::OpenHeld);
    }

    pub fn close(&mut self, angle: Option<i32>) {
        let angle = angle.unwrap_or(self.close_angle);
        self.set_state(GateState::Closing);

        self.set_angle(angle);
        for channel in &self.channels {
            channel.indicator.set_active(false);
        }

        self.set_state(GateState::Closed);
    }

    /// Opens, holds for `hold`, closes. Nothing else is observed meanwhile.
    pub fn cycle(&mut self, open_angle: Option<i32>, close_angle: Option<i32>, hold: Duration) {
        self.open(open_angle);
        self.delay.delay(hold);
        self.close(close_angle);
    }

    fn set_angle(&self, angle: i32) {
        let pulse_width = PulseWidth::from_angle(angle);
        for channel in &self.channels {
            channel.servo.set_pulse_width(pulse_width);
        }
    }

    fn set_state(&mut self, state: GateState) {
        if state != self.state {
            log::debug!("gate {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
