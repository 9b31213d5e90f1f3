//! Recording fakes for every platform collaborator.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::error::Result;
use crate::hal::button::{Button, ButtonState};
use crate::hal::delay::Delay;
use crate::hal::indicator::Indicator;
use crate::hal::servo::{PulseWidth, Servo};
use crate::hal::wifi::{Wifi, WifiConfig};
use crate::hal::{Leaf, Platform};
use crate::svc::{PlateRecognizer, Recognition};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetServo(Leaf, u32),
    SetIndicator(Leaf, bool),
    Wait(Duration),
    JoinWifi(String),
    Recognize(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct MockServo {
    leaf: Leaf,
    log: Log,
}

impl Servo for MockServo {
    fn set_pulse_width(&self, pulse_width: PulseWidth) {
        self.log
            .borrow_mut()
            .push(Event::SetServo(self.leaf, pulse_width.as_nanos()));
    }
}

struct MockIndicator {
    leaf: Leaf,
    log: Log,
}

impl Indicator for MockIndicator {
    fn set_active(&self, active: bool) {
        self.log
            .borrow_mut()
            .push(Event::SetIndicator(self.leaf, active));
    }
}

/// Replays scripted button samples, one per read, then stays released.
#[derive(Default)]
pub struct MockButton {
    samples: RefCell<VecDeque<ButtonState>>,
}

impl Button for MockButton {
    fn state(&self) -> ButtonState {
        self.samples.borrow_mut().pop_front().unwrap_or_default()
    }
}

/// Joining fails when the network is set as unreachable.
pub struct MockWifi {
    connected: Cell<bool>,
    log: Log,
}

impl Wifi for MockWifi {
    fn setup(&self, config: &WifiConfig) -> anyhow::Result<()> {
        self.log
            .borrow_mut()
            .push(Event::JoinWifi(config.ssid.to_owned()));

        if self.connected.get() {
            Ok(())
        } else {
            anyhow::bail!("no link to {}", config.ssid)
        }
    }

    fn is_connected(&self) -> bool {
        self.connected.get()
    }
}

pub struct MockPlatform {
    log: Log,
    servos: [MockServo; 2],
    indicators: [MockIndicator; 2],
    button: MockButton,
    wifi: MockWifi,
    answers: RefCell<VecDeque<Result<Option<Recognition>>>>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        let log = Log::default();

        Self {
            servos: Leaf::ALL.map(|leaf| MockServo {
                leaf,
                log: log.clone(),
            }),
            indicators: Leaf::ALL.map(|leaf| MockIndicator {
                leaf,
                log: log.clone(),
            }),
            button: MockButton::default(),
            wifi: MockWifi {
                connected: Cell::new(true),
                log: log.clone(),
            },
            answers: RefCell::default(),
            log,
        }
    }
}

impl MockPlatform {
    pub fn set_wifi_connected(&self, connected: bool) {
        self.wifi.connected.set(connected);
    }

    /// Queues button reads. `true` is a pressed sample.
    pub fn push_button_samples(&self, samples: &[bool]) {
        self.button
            .samples
            .borrow_mut()
            .extend(samples.iter().map(|&x| ButtonState::from_level(x)));
    }

    /// Queues one answer of the recognition service. Once the queue is empty
    /// the service finds no plate.
    pub fn push_recognition(&self, answer: Result<Option<Recognition>>) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn take_events(&self) -> Vec<Event> {
        self.log.take()
    }

    pub fn count(&self, f: impl Fn(&Event) -> bool) -> usize {
        self.log.borrow().iter().filter(|e| f(*e)).count()
    }
}

impl Delay for MockPlatform {
    fn delay(&self, duration: Duration) {
        self.log.borrow_mut().push(Event::Wait(duration));
    }
}

impl PlateRecognizer for MockPlatform {
    fn recognize(&self, image_url: &str) -> Result<Option<Recognition>> {
        self.log
            .borrow_mut()
            .push(Event::Recognize(image_url.to_owned()));
        self.answers.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}

impl Platform for MockPlatform {
    fn button(&self) -> &(dyn Button + '_) {
        &self.button
    }

    fn delay(&self) -> &(dyn Delay + '_) {
        self
    }

    fn indicator(&self, leaf: Leaf) -> &(dyn Indicator + '_) {
        &self.indicators[leaf as usize]
    }

    fn recognizer(&self) -> &(dyn PlateRecognizer + '_) {
        self
    }

    fn servo(&self, leaf: Leaf) -> &(dyn Servo + '_) {
        &self.servos[leaf as usize]
    }

    fn wifi(&self) -> &(dyn Wifi + '_) {
        &self.wifi
    }
}
