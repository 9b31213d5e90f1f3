use std::time::Duration;

use crate::app::gate::GateActuator;
use crate::app::plate::normalize;
use crate::app::whitelist::Whitelist;
use crate::config::Config;
use crate::svc::Recognition;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Decision {
    Grant,
    Deny,
}

/// Turns a recognition result into a decision, and a granted decision into
/// one gate cycle.
pub struct AccessController {
    whitelist: Whitelist,
    open_angle: i32,
    close_angle: i32,
    hold_time: Duration,
}

impl AccessController {
    pub fn new(whitelist: Whitelist, config: &Config) -> Self {
        Self {
            whitelist,
            open_angle: config.open_angle,
            close_angle: config.close_angle,
            hold_time: config.hold_time(),
        }
    }

    /// No plate, or a plate with nothing left after normalization, is denied.
    pub fn decide(&self, recognition: Option<&Recognition>) -> Decision {
        let plate = normalize(recognition.map(|x| x.plate.as_str()));

        if self.whitelist.contains(&plate) {
            Decision::Grant
        } else {
            Decision::Deny
        }
    }

    pub fn evaluate(&self, recognition: Option<&Recognition>, gate: &mut GateActuator) -> Decision {
        let decision = self.decide(recognition);

        match recognition {
            Some(x) => log::info!(
                "Detected: {} | Normalized: {} | Score: {}",
                x.plate,
                normalize(Some(x.plate.as_str())),
                x.confidence
            ),
            None => log::info!("No plate detected"),
        }

        match decision {
            Decision::Grant => {
                log::info!("Authorized, opening ({}s)", self.hold_time.as_secs());
                gate.cycle(Some(self.open_angle), Some(self.close_angle), self.hold_time);
            }
            Decision::Deny => log::info!("Not authorized (or not detected)"),
        }

        decision
    }
}
