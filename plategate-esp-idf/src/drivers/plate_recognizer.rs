use anyhow::{bail, Context};
use embedded_svc::http::client::Client;
use embedded_svc::http::Status;
use embedded_svc::io::{Read, Write};
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
use plategate::config::RecognizerConfig;
use plategate::error::{Error, Result};
use plategate::svc::plate_recognizer::{headers, parse_response, request_body};
use plategate::svc::{PlateRecognizer, Recognition};

const MAX_RESPONSE_LEN: usize = 16 * 1024;

/// Plate Recognizer over HTTPS. A new connection is opened for every
/// request; nothing is retried.
pub struct EspPlateRecognizer {
    config: RecognizerConfig,
}

impl EspPlateRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    fn post(&self, image_url: &str) -> anyhow::Result<(u16, Vec<u8>)> {
        let connection = EspHttpConnection::new(&Configuration {
            crt_bundle_attach: Some(esp_idf_sys::esp_crt_bundle_attach),
            ..Default::default()
        })?;
        let mut client = Client::wrap(connection);

        let body = request_body(&self.config, image_url);
        let headers = headers(&self.config, &body);
        let headers: Vec<(&str, &str)> = headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();

        let mut request = client
            .post(&self.config.url, &headers)
            .context("cannot create request")?;
        request.write_all(body.as_bytes())?;
        request.flush()?;

        let mut response = request.submit().context("cannot submit request")?;
        let status = response.status();

        let mut data = Vec::new();
        let mut buf = [0u8; 512];
        loop {
            let n = response.read(&mut buf)?;
            if n == 0 {
                break;
            }
            if data.len() + n > MAX_RESPONSE_LEN {
                bail!("response larger than {MAX_RESPONSE_LEN} bytes");
            }
            data.extend_from_slice(&buf[..n]);
        }

        Ok((status, data))
    }
}

impl PlateRecognizer for EspPlateRecognizer {
    fn recognize(&self, image_url: &str) -> Result<Option<Recognition>> {
        let (status, body) = self
            .post(image_url)
            .map_err(|e| Error::RecognitionUnavailable(format!("{e:#}")))?;

        parse_response(status, &body)
    }
}
