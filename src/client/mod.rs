// src/client/mod.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The structured report returned by the analysis service.
///
/// Each field is pre-formatted free text that the UI renders verbatim. A
/// response is only valid if all four fields are present; fields may still
/// be empty strings (e.g. a source with no comments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub symbol_table: String,
    pub constant_table: String,
    pub parsed_table: String,
    pub comments: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    code: &'a str,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analysis service returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Blocking HTTP client for the analysis service.
///
/// Each trigger clones the client into its worker thread; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submits `code` verbatim and parses the four-field report.
    ///
    /// Any transport error, non-2xx status, or body that does not
    /// deserialize into the full report shape is an error. The caller
    /// decides what to do with failures; the app drops them.
    pub fn analyze(&self, code: &str) -> Result<AnalysisReport, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { code })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text()?;
        let report = serde_json::from_str(&body)?;
        Ok(report)
    }
}
