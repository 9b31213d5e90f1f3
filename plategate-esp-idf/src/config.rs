use plategate::config::{Config as AppConfig, RecognizerConfig};
use plategate::hal::wifi::WifiConfig;
use plategate::svc::plate_recognizer;

/// Compile-time settings, read from `cfg.toml`.
#[toml_cfg::toml_config]
pub struct TomlConfig {
    #[default("Wokwi-GUEST")]
    wifi_ssid: &'static str,
    #[default("")]
    wifi_password: &'static str,
    #[default("")]
    plate_recognizer_token: &'static str,
    #[default("ar")]
    regions: &'static str,
    #[default("")]
    image_url: &'static str,
    #[default("AH084IB")]
    authorized_plates: &'static str,
    #[default("single")]
    run_mode: &'static str,
    #[default(90)]
    open_angle: i32,
    #[default(0)]
    close_angle: i32,
    #[default(20)]
    hold_time_s: u64,
    #[default(12)]
    loop_delay_s: u64,
}

pub struct Config {
    pub wifi: WifiConfig<'static>,
    pub app: AppConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let wifi = WifiConfig::from_env_var().unwrap_or(WifiConfig {
            ssid: TOML_CONFIG.wifi_ssid,
            password: TOML_CONFIG.wifi_password,
        });

        let app = AppConfig {
            open_angle: TOML_CONFIG.open_angle,
            close_angle: TOML_CONFIG.close_angle,
            hold_time_s: TOML_CONFIG.hold_time_s,
            loop_delay_s: TOML_CONFIG.loop_delay_s,
            run_mode: TOML_CONFIG.run_mode.parse()?,
            authorized_plates: AppConfig::parse_plate_list(TOML_CONFIG.authorized_plates),
            image_url: TOML_CONFIG.image_url.to_owned(),
            recognizer: RecognizerConfig {
                url: plate_recognizer::DEFAULT_URL.to_owned(),
                token: TOML_CONFIG.plate_recognizer_token.to_owned(),
                regions: TOML_CONFIG.regions.to_owned(),
            },
        };

        Ok(Self { wifi, app })
    }
}
