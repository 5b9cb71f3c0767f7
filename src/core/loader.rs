use crate::domain::model::Job;
use crate::domain::ports::JobSource;
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the job list from a fixed HTTP endpoint. Runs once per widget
/// lifetime; the payload must be a JSON array of job objects.
pub struct HttpJobSource {
    client: Client,
    endpoint: String,
}

impl HttpJobSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        tracing::debug!("Fetching job data from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let items = match payload {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(BoardError::PayloadError {
                    message: format!("expected a JSON array of jobs, got {}", kind_of(&other)),
                })
            }
        };

        let mut jobs = Vec::with_capacity(items.len());
        for item in items {
            // A single bad record degrades to a warning, not a failed load.
            match serde_json::from_value::<Job>(item) {
                Ok(job) => jobs.push(job),
                Err(e) => tracing::warn!("Skipping malformed job record: {}", e),
            }
        }

        tracing::debug!("Fetched {} job records", jobs.len());
        Ok(jobs)
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Loader boundary: any fetch or parse failure is logged and swallowed,
/// leaving the job list empty so the widget degrades instead of crashing.
pub async fn load_or_empty<S: JobSource>(source: &S) -> Vec<Job> {
    match source.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to load job data, showing empty board: {}", e);
            Vec::new()
        }
    }
}
