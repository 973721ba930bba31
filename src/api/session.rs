//! Interactive Session
//!
//! Owns the dashboard state for the lifetime of one operator session and
//! dispatches commands against it. Nothing survives the session.

use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::SubmitError;
use crate::logic::features::RawReading;
use crate::logic::model::PredictionClient;
use crate::logic::state::DashboardState;

use super::commands::{apply_form_edits, Command, HELP};
use super::render;

/// Text produced by one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub success: bool,
    pub quit: bool,
}

impl Reply {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            quit: false,
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            text: "Bye.".to_string(),
            success: true,
            quit: true,
        }
    }
}

pub struct Session {
    state: DashboardState,
    client: PredictionClient,
}

impl Session {
    pub fn new(client: PredictionClient) -> Self {
        Self {
            state: DashboardState::new(),
            client,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub async fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Predict(edits) => match apply_form_edits(self.state.form(), &edits) {
                Ok(reading) => self.submit(reading).await,
                Err(msg) => Reply::failed(format!("Validation error: {}", msg)),
            },
            Command::Load(path) => self.load(&path).await,
            Command::Kpi => Reply::ok(render::render_kpi(&self.state.kpi())),
            Command::Summary => Reply::ok(render::render_summary(&self.state.summary())),
            Command::Table => Reply::ok(render::render_table(&self.state.table())),
            Command::Last => Reply::ok(render::render_prediction(self.state.last_prediction())),
            Command::Health => match self.client.health_check().await {
                Ok(status) if status.is_ok() => {
                    Reply::ok(format!("Prediction API at {} is up", self.client.config().api_url))
                }
                Ok(status) => Reply::failed(format!("Prediction API reports '{}'", status.status)),
                Err(e) => {
                    log::error!("Health check failed: {}", e);
                    Reply::failed(e.user_message())
                }
            },
            Command::Help => Reply::ok(HELP),
            Command::Quit => Reply::quit(),
        }
    }

    async fn submit(&mut self, reading: RawReading) -> Reply {
        match self.state.submit(&self.client, reading).await {
            Ok(_) => Reply::ok(render::render_prediction(self.state.last_prediction())),
            Err(SubmitError::InvalidReading(e)) => Reply::failed(format!("Validation error: {}", e)),
            Err(e) => Reply::failed(e.to_string()),
        }
    }

    async fn load(&mut self, path: &Path) -> Reply {
        let text = match read_file(path).await {
            Ok(text) => text,
            Err(e) => return Reply::failed(format!("{:#}", e)),
        };
        match self.state.ingest_csv(&text) {
            Ok(reading) => self.submit(reading).await,
            Err(e) => Reply::failed(format!("Validation error: {}", e)),
        }
    }

    /// Read commands line by line until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(format!("{} v{} - type 'help' for commands\n", APP_NAME, APP_VERSION).as_bytes())
            .await?;

        let mut lines = input.lines();
        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => self.execute(command).await,
                Err(msg) => Reply::failed(msg),
            };
            output.write_all(reply.text.as_bytes()).await?;
            output.write_all(b"\n").await?;

            if reply.quit {
                break;
            }
        }

        output.flush().await?;
        log::info!("Session ended with {} assets", self.state.registry().len());
        Ok(())
    }
}

async fn read_file(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))
}
