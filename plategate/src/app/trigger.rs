use std::time::Duration;

use crate::hal::button::Button;
use crate::hal::delay::Delay;
use crate::hal::Platform;

const RELEASE_POLL_PERIOD: Duration = Duration::from_millis(20);
const SETTLE_TIME: Duration = Duration::from_millis(200);

/// Manual override button.
///
/// Debounce is blocking: after a press has been acted upon the caller waits
/// in [`ManualTrigger::wait_for_release`], so holding the button or contact
/// chatter cannot start a second cycle.
pub struct ManualTrigger<'a> {
    button: &'a dyn Button,
    delay: &'a dyn Delay,
}

impl<'a> ManualTrigger<'a> {
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self {
            button: platform.button(),
            delay: platform.delay(),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    /// Returns the number of polls spent waiting for the release.
    pub fn wait_for_release(&self) -> usize {
        let mut polls = 0;

        while self.button.is_pressed() {
            self.delay.delay(RELEASE_POLL_PERIOD);
            polls += 1;
        }

        self.delay.delay(SETTLE_TIME);
        polls
    }
}
