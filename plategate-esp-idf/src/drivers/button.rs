use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};
use plategate::hal::button::{Button, ButtonState};

/// Push button to ground with the internal pull-up enabled.
pub struct EspButton {
    input: PinDriver<'static, AnyIOPin, Input>,
}

impl EspButton {
    pub fn new(pin: AnyIOPin) -> anyhow::Result<EspButton> {
        let mut input = PinDriver::input(pin)?;
        input.set_pull(Pull::Up)?;
        Ok(Self { input })
    }
}

impl Button for EspButton {
    fn state(&self) -> ButtonState {
        ButtonState::from_level(self.input.is_low())
    }
}
