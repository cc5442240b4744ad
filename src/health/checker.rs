// src/health/checker.rs
use super::{HealthResponse, Labels, Status};
use crate::config::Config;
use crate::error::PollError;
use crate::indicator::{render_status, StatusIndicator};
use crate::schedule::RepeatingTask;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fixed polling cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(15_000);

pub const HEALTH_PATH: &str = "/health";

pub struct StatusPoller {
    client: Client,
    health_url: Url,
    labels: Labels,
    server: Arc<dyn StatusIndicator>,
    database: Arc<dyn StatusIndicator>,
}

/// What one poll cycle rendered.
#[derive(Debug)]
pub enum PollOutcome {
    /// Server reachable, database reported `"ok"`.
    Healthy,
    /// Server reachable, database reported anything else.
    DatabaseUnavailable,
    /// Non-2xx or transport failure: server error, database unknown.
    Outage(PollError),
}

impl PollOutcome {
    pub fn server_status(&self) -> Status {
        match self {
            PollOutcome::Healthy | PollOutcome::DatabaseUnavailable => Status::Ok,
            PollOutcome::Outage(_) => Status::Error,
        }
    }

    pub fn database_status(&self) -> Status {
        match self {
            PollOutcome::Healthy => Status::Ok,
            PollOutcome::DatabaseUnavailable => Status::Error,
            PollOutcome::Outage(_) => Status::Unknown,
        }
    }
}

impl StatusPoller {
    pub fn new(
        base_url: &Url,
        labels: Labels,
        server: Arc<dyn StatusIndicator>,
        database: Arc<dyn StatusIndicator>,
    ) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let health_url = base_url
            .join(HEALTH_PATH)
            .context("Failed to build health URL")?;

        Ok(Self {
            client,
            health_url,
            labels,
            server,
            database,
        })
    }

    pub fn from_config(
        config: &Config,
        server: Arc<dyn StatusIndicator>,
        database: Arc<dyn StatusIndicator>,
    ) -> Result<Self> {
        Self::new(&config.base_url, config.locale.labels(), server, database)
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// Polls once immediately and then every [`POLL_INTERVAL`].
    pub fn start(self: Arc<Self>) -> RepeatingTask {
        RepeatingTask::start(POLL_INTERVAL, move || {
            let poller = self.clone();
            async move {
                poller.check_status().await;
            }
        })
    }

    /// Runs one poll cycle and renders both indicators. Never fails.
    pub async fn check_status(&self) -> PollOutcome {
        let outcome = match self.fetch_health().await {
            Ok(body) if body.database_ok() => PollOutcome::Healthy,
            Ok(body) => {
                debug!("Database reported {:?}", body.database);
                PollOutcome::DatabaseUnavailable
            }
            Err(e) => {
                warn!("Health check against {} failed: {}", self.health_url, e);
                PollOutcome::Outage(e)
            }
        };

        self.render(&outcome);
        debug!(
            server = %outcome.server_status(),
            database = %outcome.database_status(),
            "Health check complete"
        );
        outcome
    }

    async fn fetch_health(&self) -> Result<HealthResponse, PollError> {
        let response = self.client.get(self.health_url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Http(status));
        }

        let body = response.json::<Value>().await?;
        Ok(HealthResponse::from_json(body)?)
    }

    fn render(&self, outcome: &PollOutcome) {
        let labels = &self.labels;
        match outcome {
            PollOutcome::Healthy => {
                render_status(self.database.as_ref(), Status::Ok, labels.working);
                render_status(self.server.as_ref(), Status::Ok, labels.working);
            }
            PollOutcome::DatabaseUnavailable => {
                render_status(self.database.as_ref(), Status::Error, labels.error);
                render_status(self.server.as_ref(), Status::Ok, labels.working);
            }
            PollOutcome::Outage(_) => {
                render_status(self.server.as_ref(), Status::Error, labels.error);
                render_status(self.database.as_ref(), Status::Unknown, labels.unknown);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::MemoryIndicator;

    #[test]
    fn outcome_maps_to_indicator_states() {
        assert_eq!(PollOutcome::Healthy.server_status(), Status::Ok);
        assert_eq!(PollOutcome::Healthy.database_status(), Status::Ok);
        assert_eq!(PollOutcome::DatabaseUnavailable.server_status(), Status::Ok);
        assert_eq!(PollOutcome::DatabaseUnavailable.database_status(), Status::Error);

        let outage = PollOutcome::Outage(PollError::Http(reqwest::StatusCode::BAD_GATEWAY));
        assert_eq!(outage.server_status(), Status::Error);
        assert_eq!(outage.database_status(), Status::Unknown);
    }

    #[test]
    fn health_url_replaces_base_path() {
        let base = Url::parse("http://localhost:8000/interface/").unwrap();
        let poller = StatusPoller::new(
            &base,
            Labels::default(),
            Arc::new(MemoryIndicator::new("Неизвестно")),
            Arc::new(MemoryIndicator::new("Неизвестно")),
        )
        .unwrap();

        assert_eq!(poller.health_url().as_str(), "http://localhost:8000/health");
    }
}
