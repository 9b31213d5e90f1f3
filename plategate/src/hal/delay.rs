use std::time::Duration;

/// Blocking wait. Every suspension point of the control loop goes through
/// this trait so tests can run without sleeping.
pub trait Delay {
    fn delay(&self, duration: Duration);
}

#[derive(Default, Debug, Copy, Clone)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
