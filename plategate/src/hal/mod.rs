use crate::hal::button::Button;
use crate::hal::delay::Delay;
use crate::hal::indicator::Indicator;
use crate::hal::servo::Servo;
use crate::hal::wifi::Wifi;
use crate::svc::PlateRecognizer;

pub mod button;
pub mod delay;
pub mod indicator;
pub mod servo;
pub mod wifi;

/// One wing of the double gate. Both leaves always move together.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Leaf {
    A,
    B,
}

impl Leaf {
    pub const ALL: [Leaf; 2] = [Leaf::A, Leaf::B];
}

pub trait Platform {
    fn button(&self) -> &(dyn Button + '_);
    fn delay(&self) -> &(dyn Delay + '_);
    fn indicator(&self, leaf: Leaf) -> &(dyn Indicator + '_);
    fn recognizer(&self) -> &(dyn PlateRecognizer + '_);
    fn servo(&self, leaf: Leaf) -> &(dyn Servo + '_);
    fn wifi(&self) -> &(dyn Wifi + '_);
}
