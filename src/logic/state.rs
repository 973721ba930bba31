//! Dashboard State - explicitly owned application state
//!
//! Holds the form, the latest prediction, UI flags and the asset registry.
//! The registry only changes inside `complete_submission`, and only for the
//! most recent submission: every submission carries a sequence number and a
//! completion for an older number is dropped.

use serde::Serialize;
use validator::Validate;

use crate::constants::PREDICTION_UNAVAILABLE;
use crate::error::{IngestError, PredictError, PredictResult, SubmitError};
use crate::logic::features::RawReading;
use crate::logic::ingest;
use crate::logic::model::{PredictionRequest, PredictionResult, RiskThresholds, Scorer};
use crate::logic::registry::{Asset, AssetRegistry};
use crate::logic::views::{self, HealthSummary, KpiView};

/// One scoring attempt, issued by `begin_submission`
#[derive(Debug, Clone)]
pub struct Submission {
    seq: u64,
    reading: RawReading,
    request: PredictionRequest,
}

impl Submission {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn reading(&self) -> &RawReading {
        &self.reading
    }

    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

/// What `complete_submission` did with an outcome
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Registry updated
    Applied(PredictionResult),
    /// Scoring failed; registry untouched, last prediction cleared
    Failed(PredictError),
    /// A newer submission is outstanding; outcome dropped
    Superseded,
}

/// Result shown in the single prediction view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastPrediction {
    pub id: String,
    pub result: PredictionResult,
    /// Local bands agree with the service's risk level
    pub bands_agree: bool,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    form: RawReading,
    registry: AssetRegistry,
    last_prediction: Option<LastPrediction>,
    error: Option<String>,
    validation_error: Option<String>,
    thresholds: RiskThresholds,
    next_seq: u64,
    outstanding: Option<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------

    pub fn form(&self) -> &RawReading {
        &self.form
    }

    pub fn set_form(&mut self, reading: RawReading) {
        self.form = reading;
    }

    /// Load a single-row CSV into the form.
    ///
    /// On error only the validation message changes.
    pub fn ingest_csv(&mut self, text: &str) -> Result<RawReading, IngestError> {
        match ingest::parse_csv(text) {
            Ok(reading) => {
                log::info!("Loaded reading for machine {} from CSV", reading.id);
                self.form = reading.clone();
                self.validation_error = None;
                Ok(reading)
            }
            Err(e) => {
                log::warn!("CSV rejected: {}", e);
                self.validation_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Submission lifecycle
    // ------------------------------------------------------------------

    /// Validate the reading, build its payload and mark it outstanding.
    /// Any previously outstanding submission is superseded.
    pub fn begin_submission(&mut self, reading: RawReading) -> Result<Submission, SubmitError> {
        if let Err(e) = reading.validate() {
            self.validation_error = Some(e.to_string());
            return Err(e.into());
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        if let Some(previous) = self.outstanding.replace(seq) {
            log::debug!("Submission {} supersedes outstanding submission {}", seq, previous);
        }

        self.validation_error = None;
        self.error = None;
        self.form = reading.clone();

        log::debug!("Submission {} for machine {}", seq, reading.id);
        let request = PredictionRequest::from_reading(&reading);
        Ok(Submission {
            seq,
            reading,
            request,
        })
    }

    /// Apply a scoring outcome. The only place the registry is mutated.
    pub fn complete_submission(
        &mut self,
        submission: Submission,
        outcome: PredictResult<PredictionResult>,
    ) -> Completion {
        if self.outstanding != Some(submission.seq) {
            log::warn!(
                "Dropping result of submission {} for machine {}: superseded",
                submission.seq,
                submission.reading.id
            );
            return Completion::Superseded;
        }
        self.outstanding = None;

        match outcome {
            Ok(result) => {
                let bands_agree = self.thresholds.check(&result);
                log::info!(
                    "Machine {}: failure probability {} ({})",
                    submission.reading.id,
                    views::format_percent(result.failure_probability),
                    result.risk_level
                );
                self.registry
                    .upsert(Asset::from_prediction(&submission.reading, &result));
                self.last_prediction = Some(LastPrediction {
                    id: submission.reading.id,
                    result: result.clone(),
                    bands_agree,
                });
                Completion::Applied(result)
            }
            Err(e) => {
                log::error!("Prediction for machine {} failed: {}", submission.reading.id, e);
                self.error = Some(PREDICTION_UNAVAILABLE.to_string());
                self.last_prediction = None;
                Completion::Failed(e)
            }
        }
    }

    /// Validate, score and apply in one call
    pub async fn submit<S: Scorer>(
        &mut self,
        scorer: &S,
        reading: RawReading,
    ) -> Result<PredictionResult, SubmitError> {
        let submission = self.begin_submission(reading)?;
        let seq = submission.seq;
        let outcome = scorer.predict(submission.request()).await;

        match self.complete_submission(submission, outcome) {
            Completion::Applied(result) => Ok(result),
            Completion::Failed(e) => Err(SubmitError::PredictionUnavailable(e)),
            Completion::Superseded => Err(SubmitError::Superseded(seq)),
        }
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Generic scoring error from the last submission, if it failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn last_prediction(&self) -> Option<&LastPrediction> {
        self.last_prediction.as_ref()
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn kpi(&self) -> KpiView {
        views::kpi_view(self.registry.all())
    }

    pub fn summary(&self) -> HealthSummary {
        views::health_summary(self.registry.all())
    }

    pub fn table(&self) -> Vec<&Asset> {
        views::detailed_table(self.registry.all())
    }
}
