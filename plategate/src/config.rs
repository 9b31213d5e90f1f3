use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::svc::plate_recognizer;

/// Token shipped in sample configurations. A device running with it would
/// only collect authentication failures.
const PLACEHOLDER_TOKEN: &str = "PASTE_YOUR_TOKEN_HERE";

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// One recognition at boot, then manual operation only.
    #[default]
    Single,
    /// Recognition every poll interval.
    Loop,
}

impl FromStr for RunMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RunMode::Single),
            "loop" => Ok(RunMode::Loop),
            other => Err(Error::ConfigurationInvalid(format!(
                "unknown run mode {other:?}, expected \"single\" or \"loop\""
            ))),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub url: String,
    pub token: String,
    /// Country hint forwarded to the service.
    pub regions: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            url: plate_recognizer::DEFAULT_URL.to_owned(),
            token: PLACEHOLDER_TOKEN.to_owned(),
            regions: "ar".to_owned(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub open_angle: i32,
    pub close_angle: i32,
    pub hold_time_s: u64,
    pub loop_delay_s: u64,
    pub run_mode: RunMode,
    pub authorized_plates: Vec<String>,
    pub image_url: String,
    pub recognizer: RecognizerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_angle: 90,
            close_angle: 0,
            hold_time_s: 20,
            loop_delay_s: 12,
            run_mode: RunMode::default(),
            authorized_plates: vec!["AH084IB".to_owned()],
            image_url: String::new(),
            recognizer: RecognizerConfig::default(),
        }
    }
}

impl Config {
    pub fn hold_time(&self) -> Duration {
        Duration::from_secs(self.hold_time_s)
    }

    pub fn loop_delay(&self) -> Duration {
        Duration::from_secs(self.loop_delay_s)
    }

    /// Splits a comma separated list, as stored in compile-time settings.
    pub fn parse_plate_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let token = self.recognizer.token.trim();

        if token.is_empty() || token == PLACEHOLDER_TOKEN {
            return Err(Error::ConfigurationInvalid(
                "a valid Plate Recognizer token must be set".to_owned(),
            ));
        }

        if self.recognizer.url.trim().is_empty() {
            return Err(Error::ConfigurationInvalid(
                "recognizer url must be non-empty".to_owned(),
            ));
        }

        if self.image_url.trim().is_empty() {
            return Err(Error::ConfigurationInvalid(
                "image url must be non-empty".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            image_url: "https://example.com/car.png".to_owned(),
            recognizer: RecognizerConfig {
                token: "0123abcd".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.open_angle, 90);
        assert_eq!(config.close_angle, 0);
        assert_eq!(config.hold_time(), Duration::from_secs(20));
        assert_eq!(config.loop_delay(), Duration::from_secs(12));
        assert_eq!(config.run_mode, RunMode::Single);
    }

    #[test]
    fn test_placeholder_token_is_rejected() {
        let config = Config {
            image_url: "https://example.com/car.png".to_owned(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigurationInvalid(_))
        ));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let mut config = valid_config();
        config.recognizer.token = "  ".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_image_url_is_rejected() {
        let mut config = valid_config();
        config.image_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_run_mode_from_str() {
        assert_eq!("single".parse::<RunMode>().unwrap(), RunMode::Single);
        assert_eq!(" LOOP ".parse::<RunMode>().unwrap(), RunMode::Loop);
        assert!("forever".parse::<RunMode>().is_err());
    }

    #[test]
    fn test_parse_plate_list() {
        assert_eq!(
            Config::parse_plate_list("AH084IB, ab-123-cd,,"),
            vec!["AH084IB".to_owned(), "ab-123-cd".to_owned()]
        );
        assert!(Config::parse_plate_list("").is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(
            r#"{"run_mode": "loop", "hold_time_s": 5, "recognizer": {"token": "t"}}"#,
        )
        .unwrap();
        assert_eq!(config.run_mode, RunMode::Loop);
        assert_eq!(config.hold_time(), Duration::from_secs(5));
        assert_eq!(config.recognizer.token, "t");
        assert_eq!(config.recognizer.regions, "ar");
        assert_eq!(config.open_angle, 90);
    }
}
