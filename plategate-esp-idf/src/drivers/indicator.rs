use std::cell::RefCell;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use plategate::hal::indicator::Indicator;

pub struct EspIndicator {
    output: RefCell<PinDriver<'static, AnyOutputPin, Output>>,
}

impl EspIndicator {
    pub fn new(pin: AnyOutputPin) -> anyhow::Result<EspIndicator> {
        let mut output = PinDriver::output(pin)?;
        output.set_low()?;
        Ok(Self {
            output: RefCell::new(output),
        })
    }
}

impl Indicator for EspIndicator {
    fn set_active(&self, active: bool) {
        if let Ok(mut output) = self.output.try_borrow_mut() {
            let result = if active {
                output.set_high()
            } else {
                output.set_low()
            };

            if let Err(e) = result {
                log::error!("Cannot set indicator: {e}");
            }
        }
    }
}
