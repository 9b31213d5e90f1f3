use std::cell::RefCell;

use esp_idf_hal::ledc::LedcDriver;
use plategate::hal::servo::{PulseWidth, Servo};

/// Servo on a LEDC channel. The timer must run at
/// [`plategate::hal::servo::SERVO_FREQ_HZ`].
pub struct EspServo {
    channel: RefCell<LedcDriver<'static>>,
}

impl EspServo {
    pub fn new(channel: LedcDriver<'static>) -> Self {
        Self {
            channel: RefCell::new(channel),
        }
    }
}

impl Servo for EspServo {
    fn set_pulse_width(&self, pulse_width: PulseWidth) {
        if let Ok(mut channel) = self.channel.try_borrow_mut() {
            let duty = pulse_width.duty(channel.get_max_duty());
            if let Err(e) = channel.set_duty(duty) {
                log::error!("Cannot set servo duty {duty}: {e}");
            }
        }
    }
}
