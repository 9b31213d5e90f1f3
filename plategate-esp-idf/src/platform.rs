use esp_idf_hal::gpio::{IOPin, OutputPin};
use esp_idf_hal::ledc::config::TimerConfig;
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use plategate::hal::button::Button;
use plategate::hal::delay::{Delay, StdDelay};
use plategate::hal::indicator::Indicator;
use plategate::hal::servo::{Servo, SERVO_FREQ_HZ};
use plategate::hal::wifi::Wifi;
use plategate::hal::{Leaf, Platform};
use plategate::svc::PlateRecognizer;

use crate::config::Config;
use crate::drivers::button::EspButton;
use crate::drivers::indicator::EspIndicator;
use crate::drivers::plate_recognizer::EspPlateRecognizer;
use crate::drivers::servo::EspServo;
use crate::drivers::wifi::EspStation;

/// Builds every driver without blocking: servo outputs must be driven
/// as soon as possible after boot.
///
/// Servo A GPIO18, servo B GPIO19, LED A GPIO2, LED B GPIO15, button GPIO4.
pub struct PlatformImpl {
    // Both servo channels run on this timer, it must outlive them.
    #[allow(dead_code)]
    servo_timer: LedcTimerDriver<'static>,
    servos: [EspServo; 2],
    indicators: [EspIndicator; 2],
    button: EspButton,
    wifi: EspStation,
    recognizer: EspPlateRecognizer,
    delay: StdDelay,
}

impl PlatformImpl {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let peripherals =
            Peripherals::take().ok_or_else(|| anyhow::anyhow!("Peripherals already taken"))?;
        let pins = peripherals.pins;

        let timer_config = TimerConfig::new()
            .frequency(SERVO_FREQ_HZ.Hz().into())
            .resolution(Resolution::Bits14);
        let servo_timer = LedcTimerDriver::new(peripherals.ledc.timer0, &timer_config)?;

        let servo_a = LedcDriver::new(peripherals.ledc.channel0, &servo_timer, pins.gpio18)?;
        let servo_b = LedcDriver::new(peripherals.ledc.channel1, &servo_timer, pins.gpio19)?;

        let indicator_a = EspIndicator::new(pins.gpio2.downgrade_output())?;
        let indicator_b = EspIndicator::new(pins.gpio15.downgrade_output())?;

        let button = EspButton::new(pins.gpio4.downgrade())?;

        // Joined later by the app, once the gate has been commanded closed.
        let wifi = EspStation::new(peripherals.modem)?;

        let recognizer = EspPlateRecognizer::new(config.app.recognizer.clone());

        Ok(Self {
            servo_timer,
            servos: [EspServo::new(servo_a), EspServo::new(servo_b)],
            indicators: [indicator_a, indicator_b],
            button,
            wifi,
            recognizer,
            delay: StdDelay,
        })
    }
}

impl Platform for PlatformImpl {
    fn button(&self) -> &(dyn Button + '_) {
        &self.button
    }

    fn delay(&self) -> &(dyn Delay + '_) {
        &self.delay
    }

    fn indicator(&self, leaf: Leaf) -> &(dyn Indicator + '_) {
        &self.indicators[leaf as usize]
    }

    fn recognizer(&self) -> &(dyn PlateRecognizer + '_) {
        &self.recognizer
    }

    fn servo(&self, leaf: Leaf) -> &(dyn Servo + '_) {
        &self.servos[leaf as usize]
    }

    fn wifi(&self) -> &(dyn Wifi + '_) {
        &self.wifi
    }
}
