//! Scoring API Client
//!
//! HTTP client for the external failure-prediction service.

use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{HEALTH_PATH, PREDICT_PATH};
use crate::error::{PredictError, PredictResult};

use super::request::PredictionRequest;
use super::types::{HealthStatus, PredictionResult};

/// Anything that can score a prediction request.
///
/// The HTTP client is the production implementation; tests plug in
/// in-process doubles.
pub trait Scorer {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = PredictResult<PredictionResult>> + Send;
}

/// Scoring API client
pub struct PredictionClient {
    config: Config,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new client
    pub fn new(config: Config) -> PredictResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check server health
    pub async fn health_check(&self) -> PredictResult<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        if response.status().is_success() {
            response.json().await
                .map_err(|e| PredictError::Parse(e.to_string()))
        } else {
            Err(PredictError::Server(response.status().as_u16()))
        }
    }

    /// Score one request. No retry: the first failure is final.
    pub async fn predict(&self, request: &PredictionRequest) -> PredictResult<PredictionResult> {
        let url = self.config.endpoint(PREDICT_PATH);

        let response = self.http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Prediction request to {} failed: {}", url, e);
                PredictError::Network(e.to_string())
            })?;

        if response.status().is_success() {
            response.json().await.map_err(|e| {
                log::error!("Prediction response could not be parsed: {}", e);
                PredictError::Parse(e.to_string())
            })
        } else {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Prediction failed ({}): {}", status, error_text);
            Err(PredictError::Server(status))
        }
    }
}

impl Scorer for PredictionClient {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = PredictResult<PredictionResult>> + Send {
        PredictionClient::predict(self, request)
    }
}
