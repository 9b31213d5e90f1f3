use std::time::{Duration, Instant};

use crate::app::access::{AccessController, Decision};
use crate::app::gate::GateActuator;
use crate::app::trigger::ManualTrigger;
use crate::app::whitelist::Whitelist;
use crate::config::{Config, RunMode};
use crate::error::Result;
use crate::hal::wifi::WifiConfig;
use crate::hal::Platform;

pub mod access;
pub mod gate;
pub mod plate;
pub mod trigger;
pub mod whitelist;

const IDLE_PERIOD: Duration = Duration::from_millis(100);

/// What happened during one steady-state iteration.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub struct Tick {
    pub manual_cycle: bool,
    pub decision: Option<Decision>,
}

pub struct App<'a> {
    platform: &'a dyn Platform,
    config: Config,
    gate: GateActuator<'a>,
    trigger: ManualTrigger<'a>,
    access: AccessController,
    automated_checks: bool,
}

impl<'a> App<'a> {
    /// Closes the gate, validates `config`, then joins the network. The gate
    /// is commanded closed before anything that can block or fail.
    pub fn new(platform: &'a dyn Platform, config: Config, wifi: &WifiConfig) -> Result<Self> {
        let gate = GateActuator::new(platform, config.open_angle, config.close_angle);

        let whitelist = Whitelist::new(&config.authorized_plates);
        let plates: Vec<&str> = whitelist.iter().map(|x| x.as_str()).collect();
        log::info!("Whitelist: {plates:?}");

        config.validate()?;

        if let Err(e) = platform.wifi().setup(wifi) {
            log::error!("Cannot setup Wi-Fi: {e:#}");
        }

        let automated_checks = platform.wifi().is_connected();
        if !automated_checks {
            log::warn!("No Wi-Fi: manual mode only");
        }

        let trigger = ManualTrigger::new(platform);
        let access = AccessController::new(whitelist, &config);

        Ok(Self {
            platform,
            config,
            gate,
            trigger,
            access,
            automated_checks,
        })
    }

    pub fn automated_checks(&self) -> bool {
        self.automated_checks
    }

    pub fn gate(&self) -> &GateActuator<'a> {
        &self.gate
    }

    /// In single mode this is the only recognition the device performs.
    pub fn startup(&mut self) -> Option<Decision> {
        let decision = if self.config.run_mode == RunMode::Single && self.automated_checks {
            let decision = self.check_plate();
            log::info!("Single mode: recognition done, manual button still active");
            Some(decision)
        } else {
            None
        };

        log::info!("System ready. Button = manual; recognition per run mode");
        decision
    }

    /// One steady-state iteration. The button is always serviced before the
    /// recognition service, which may be slow or failing.
    pub fn update(&mut self) -> Tick {
        let mut tick = Tick::default();

        if self.trigger.is_pressed() {
            log::info!("Button: opening ({}s)", self.config.hold_time_s);
            self.gate.cycle(None, None, self.config.hold_time());
            let polls = self.trigger.wait_for_release();
            log::debug!("button released after {polls} polls");
            tick.manual_cycle = true;
        }

        if self.config.run_mode == RunMode::Loop && self.automated_checks {
            tick.decision = Some(self.check_plate());
            self.platform.delay().delay(self.config.loop_delay());
        } else {
            self.platform.delay().delay(IDLE_PERIOD);
        }

        tick
    }

    pub fn run(&mut self) -> ! {
        self.startup();

        loop {
            let start = Instant::now();
            let tick = self.update();
            log::trace!("{tick:?} took {}ms", start.elapsed().as_millis());
        }
    }

    fn check_plate(&mut self) -> Decision {
        let recognition = match self
            .platform
            .recognizer()
            .recognize(&self.config.image_url)
        {
            Ok(recognition) => recognition,
            Err(e) => {
                log::error!("{e}");
                None
            }
        };

        self.access.evaluate(recognition.as_ref(), &mut self.gate)
    }
}
