/// Station-mode network link. Recognition needs an uplink, so the device
/// never runs its own access point.
pub trait Wifi {
    /// Associates with the configured network. May block for several
    /// seconds; a failure leaves the device in manual-only mode.
    fn setup(&self, config: &WifiConfig) -> anyhow::Result<()>;

    fn is_connected(&self) -> bool;
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct WifiConfig<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

impl<'a> WifiConfig<'a> {
    /// Parses `ssid:password`. The password is the remainder, so it may
    /// contain `:`; it may also be missing for an open network.
    fn try_from_str(s: &'a str) -> Result<Self, ()> {
        let (ssid, password) = s.split_once(':').unwrap_or((s, ""));

        if ssid.is_empty() {
            return Err(());
        }

        Ok(WifiConfig { ssid, password })
    }
}

impl WifiConfig<'static> {
    pub fn from_env_var() -> Result<Self, ()> {
        if let Some(s) = option_env!("PLATEGATE_WIFI_CONFIG") {
            WifiConfig::try_from_str(s)
        } else {
            Err(())
        }
    }
}

impl Default for WifiConfig<'_> {
    fn default() -> Self {
        WifiConfig {
            ssid: "Wokwi-GUEST",
            password: "",
        }
    }
}
