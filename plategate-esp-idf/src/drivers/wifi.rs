use std::cell::RefCell;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use embedded_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::EspWifi;
use plategate::hal::wifi::{Wifi, WifiConfig};

const LINK_POLL_PERIOD: Duration = Duration::from_millis(200);
const LINK_TIMEOUT: Duration = Duration::from_secs(8);

/// Wi-Fi station. `is_connected` means the interface has an IP address.
pub struct EspStation {
    wifi: RefCell<EspWifi<'static>>,
}

fn station_configuration(config: &WifiConfig) -> anyhow::Result<Configuration> {
    if config.ssid.is_empty() {
        bail!("Wi-Fi SSID must be non-empty")
    }

    let auth_method = if config.password.is_empty() {
        log::info!("Joining open network {}", config.ssid);
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    };

    Ok(Configuration::Client(ClientConfiguration {
        ssid: config.ssid.into(),
        password: config.password.into(),
        auth_method,
        ..Default::default()
    }))
}

impl EspStation {
    pub fn new(modem: Modem) -> anyhow::Result<EspStation> {
        let sys_loop = EspSystemEventLoop::take()?;
        let nvs = EspDefaultNvsPartition::take()?;
        let wifi = EspWifi::new(modem, sys_loop, Some(nvs))?;
        Ok(Self {
            wifi: RefCell::new(wifi),
        })
    }
}

impl Wifi for EspStation {
    /// Waits at most [`LINK_TIMEOUT`] for an IP address.
    fn setup(&self, config: &WifiConfig) -> anyhow::Result<()> {
        let configuration = station_configuration(config)?;
        let mut wifi = self.wifi.try_borrow_mut()?;

        wifi.set_configuration(&configuration)?;
        wifi.start().context("cannot start Wi-Fi")?;

        log::info!("Connecting to Wi-Fi {}...", config.ssid);
        wifi.connect().context("cannot connect Wi-Fi")?;

        let deadline = Instant::now() + LINK_TIMEOUT;
        while !wifi.is_up().unwrap_or(false) {
            if Instant::now() > deadline {
                bail!("no link to {} after {}s", config.ssid, LINK_TIMEOUT.as_secs());
            }
            std::thread::sleep(LINK_POLL_PERIOD);
        }

        log::info!("Wi-Fi: OK");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.wifi
            .try_borrow()
            .map(|wifi| wifi.is_up().unwrap_or(false))
            .unwrap_or(false)
    }
}
