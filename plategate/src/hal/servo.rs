//! Hobby servo drive signal.
//!
//! A standard servo expects a 50 Hz pulse train where the pulse width
//! selects the horn position: 0.5 ms at 0° up to 2.5 ms at 180°.

pub const SERVO_FREQ_HZ: u32 = 50;
pub const SERVO_PERIOD_NS: u32 = 1_000_000_000 / SERVO_FREQ_HZ;

pub const MIN_ANGLE: i32 = 0;
pub const MAX_ANGLE: i32 = 180;

const MIN_PULSE_NS: u32 = 500_000;
const MAX_PULSE_NS: u32 = 2_500_000;

pub trait Servo {
    fn set_pulse_width(&self, pulse_width: PulseWidth);
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct PulseWidth(u32);

impl PulseWidth {
    pub fn from_angle(angle: i32) -> Self {
        let angle = angle.clamp(MIN_ANGLE, MAX_ANGLE) as u32;
        let span = MAX_PULSE_NS - MIN_PULSE_NS;
        Self(MIN_PULSE_NS + span * angle / MAX_ANGLE as u32)
    }

    pub fn as_nanos(&self) -> u32 {
        self.0
    }

    /// Duty cycle for a PWM peripheral running at [`SERVO_FREQ_HZ`] whose
    /// full period is `max_duty` counts.
    pub fn duty(&self, max_duty: u32) -> u32 {
        (self.0 as u64 * max_duty as u64 / SERVO_PERIOD_NS as u64) as u32
    }
}
