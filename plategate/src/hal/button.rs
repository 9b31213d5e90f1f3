/// Manual override input.
///
/// Implementations map the electrical level to a [`ButtonState`]: the button
/// is wired to ground with a pull-up, so a low level means pressed.
pub trait Button {
    fn is_pressed(&self) -> bool {
        self.state() == ButtonState::Pressed
    }

    fn state(&self) -> ButtonState;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn from_level(is_low: bool) -> Self {
        if is_low {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}
