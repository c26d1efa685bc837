use crate::client::config::ClientConfig;
use crate::common::models::{AnswerPayload, QueryRequest};
use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failures of a single query. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Error de conexión: tiempo de espera agotado.")]
    Timeout,
    #[error("Error de conexión: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            QueryError::Timeout
        } else {
            QueryError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Connection(e.to_string())
    }
}

/// What the controller stores after a query: the text to show and, on success,
/// the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub display_text: String,
    pub payload: Option<AnswerPayload>,
}

impl From<Result<AnswerPayload, QueryError>> for QueryOutcome {
    fn from(result: Result<AnswerPayload, QueryError>) -> Self {
        match result {
            Ok(payload) => QueryOutcome {
                display_text: payload.display_text(),
                payload: Some(payload),
            },
            Err(e) => QueryOutcome {
                display_text: e.to_string(),
                payload: None,
            },
        }
    }
}

/// Client for the answer endpoint. Cheap to clone: clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl QueryClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, QueryError> {
        Self::new(config.endpoint.clone(), config.timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One POST, no retries.
    pub async fn fetch(&self, question: &str, include_trace: bool) -> Result<AnswerPayload, QueryError> {
        info!("POST {} (trazas: {})", self.endpoint, include_trace);
        log::debug!("pregunta: {}", question);

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&QueryRequest::new(question, include_trace))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            return Err(QueryError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: serde_json::Value = serde_json::from_str(&text)?;
        Ok(AnswerPayload::from_envelope(envelope)?)
    }

    /// Runs [`fetch`](Self::fetch) and folds the result into what the form shows.
    pub async fn query(&self, question: &str, include_trace: bool) -> QueryOutcome {
        let result = self.fetch(question, include_trace).await;
        match &result {
            Ok(payload) => info!(
                "Risposta ricevuta (periodo: {}, traza: {})",
                payload.periodo.is_some(),
                payload.traza.is_some()
            ),
            Err(e) => warn!("Query fallita: {}", e),
        }
        QueryOutcome::from(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::PLACEHOLDER_ANSWER;

    #[test]
    fn error_messages_match_the_form_texts() {
        let e = QueryError::Status { status: 500, body: "oops".to_string() };
        assert_eq!(e.to_string(), "Error 500: oops");
        assert_eq!(QueryError::Timeout.to_string(), "Error de conexión: tiempo de espera agotado.");
        assert_eq!(
            QueryError::Connection("dns".to_string()).to_string(),
            "Error de conexión: dns"
        );
    }

    #[test]
    fn failed_result_drops_payload() {
        let outcome = QueryOutcome::from(Err(QueryError::Timeout));
        assert_eq!(outcome.payload, None);
        assert_eq!(outcome.display_text, QueryError::Timeout.to_string());
    }

    #[test]
    fn payload_without_answer_uses_placeholder() {
        let outcome = QueryOutcome::from(Ok(AnswerPayload::default()));
        assert_eq!(outcome.display_text, PLACEHOLDER_ANSWER);
        assert_eq!(outcome.payload, Some(AnswerPayload::default()));
    }
}
