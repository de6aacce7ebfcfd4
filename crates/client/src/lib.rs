use anyhow::{Result, bail};
use device_attestor::Device;
use reqwest::{Response, StatusCode};

/// HTTP client for the attestor service.
pub struct AttestorClient {
    client: reqwest::Client,
    url: String,
}

impl AttestorClient {
    pub fn new(url: impl ToString) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    /// Save a device record, returning it with its assigned id.
    pub async fn save_device(&self, device: &Device) -> Result<Device> {
        let response = self
            .client
            .post(format!("{}/api/devices", self.url))
            .json(device)
            .send()
            .await?;

        let response = Self::validate_response(response).await?;

        Ok(response.json().await?)
    }

    /// One base64 signature per saved device, in save order.
    pub async fn device_signatures(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/api/devices/signatures", self.url))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            bail!("no devices have been saved yet");
        }

        let response = Self::validate_response(response).await?;

        Ok(response.json().await?)
    }

    async fn validate_response(response: Response) -> Result<Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            bail!("server returned {status}: {body}");
        }

        Ok(response)
    }
}
