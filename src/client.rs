use reqwest::multipart;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{PredictionResponse, UploadedImage};

/// Thin client for the image-to-LaTeX prediction service.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the raw image bytes under multipart field `file` and return the
    /// string at `data.pred` in the JSON response.
    pub async fn predict(&self, image: &UploadedImage) -> Result<String, ApiError> {
        let part = multipart::Part::bytes(image.bytes.to_vec())
            .file_name(image.filename.clone())
            .mime_str(image.mime())?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamStatus(status));
        }

        let body = response.text().await?;
        let parsed: PredictionResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::UpstreamBody(e.to_string()))?;
        debug!(latex = %parsed.data.pred, "prediction received");
        Ok(parsed.data.pred)
    }
}
