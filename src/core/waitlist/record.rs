use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Live values of the waitlist form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistDraft {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub use_case: String,
    pub estimated_volume: String,
    pub newsletter: bool,
}

impl WaitlistDraft {
    /// Capture the current field values as a submission made at `submitted_at`
    pub fn into_record(self, submitted_at: DateTime<Utc>) -> SubmissionRecord {
        SubmissionRecord {
            full_name: self.full_name,
            email: self.email,
            company: self.company,
            use_case: self.use_case,
            estimated_volume: self.estimated_volume,
            newsletter: self.newsletter,
            timestamp: iso_timestamp(submitted_at),
        }
    }

    /// Check whether every field still holds its initial value
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// One user's waitlist entries, captured at submit time
///
/// Field names serialize in camelCase so custom endpoints and the local
/// browser cache see the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub use_case: String,
    #[serde(default)]
    pub estimated_volume: String,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub timestamp: String,
}

impl SubmissionRecord {
    /// Flatten the record into multipart form fields
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fullName", self.full_name.clone()),
            ("email", self.email.clone()),
            ("company", self.company.clone()),
            ("useCase", self.use_case.clone()),
            ("estimatedVolume", self.estimated_volume.clone()),
            ("newsletter", self.newsletter.to_string()),
            ("timestamp", self.timestamp.clone()),
        ]
    }
}

/// Format a timestamp the way browsers do for `Date.toISOString()`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
