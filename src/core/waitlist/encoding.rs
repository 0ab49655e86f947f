use serde::{Deserialize, Serialize};

use super::endpoint::{EndpointKind, WaitlistConfig};
use super::error::SubmissionError;
use super::record::SubmissionRecord;

/// Body of an outgoing waitlist request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Browser-native multipart form fields
    Multipart(Vec<(&'static str, String)>),
    /// Serialized JSON document
    Json(String),
}

/// A fully encoded waitlist request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSubmission {
    pub endpoint: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: RequestBody,
}

impl EncodedSubmission {
    /// Look up a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Encode a record for the configured endpoint
///
/// Multipart bodies never carry an explicit `Content-Type`: the browser adds
/// it together with the boundary.
pub fn encode_submission(
    config: &WaitlistConfig,
    record: &SubmissionRecord,
) -> Result<EncodedSubmission, SubmissionError> {
    let (headers, body) = match config.kind {
        EndpointKind::Formspree => (
            vec![("Accept", "application/json")],
            RequestBody::Multipart(record.form_fields()),
        ),
        EndpointKind::Json => {
            let json = serde_json::to_string(record)
                .map_err(|e| SubmissionError::Encode(e.to_string()))?;
            (
                vec![
                    ("Content-Type", "application/json"),
                    ("Accept", "application/json"),
                ],
                RequestBody::Json(json),
            )
        }
    };

    Ok(EncodedSubmission {
        endpoint: config.endpoint.clone(),
        headers,
        body,
    })
}

/// Response of a settled waitlist request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx status counts as accepted
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into a rejection
    pub fn into_result(self) -> Result<(), SubmissionError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: self.status,
                message: rejection_message(&self.body),
            })
        }
    }
}

/// Single entry of a formspree-style error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrorItem {
    pub message: String,
}

/// Formspree-style error payload: `{ "errors": [{ "message": ... }] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(default)]
    pub errors: Vec<FormErrorItem>,
}

impl FormErrors {
    /// Payload carrying a single message
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![FormErrorItem {
                message: message.into(),
            }],
        }
    }
}

/// Extract the joined error messages from a rejection body, if any
pub fn rejection_message(body: &str) -> Option<String> {
    let payload: FormErrors = serde_json::from_str(body).ok()?;
    let messages: Vec<&str> = payload
        .errors
        .iter()
        .map(|e| e.message.trim())
        .filter(|m| !m.is_empty())
        .collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}
