//! Local waitlist collection endpoint
//!
//! Used when no external form backend is configured. Sign-ups are kept in
//! memory only and vanish with the process.
//!
//! - POST /api/waitlist       - Join the waitlist (JSON submission record)
//! - GET  /api/waitlist/count - Number of sign-ups collected so far
//!
//! Errors use the formspree payload shape so the browser side handles both
//! backends the same way.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::validate_email;
use crate::core::waitlist::{FormErrors, SubmissionRecord};

// ============================================================================
// Application State
// ============================================================================

/// A sign-up accepted by the local endpoint
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub position: usize,
    pub record: SubmissionRecord,
}

/// Shared state of the local waitlist endpoint
#[derive(Clone)]
pub struct WaitlistState {
    /// Entries keyed by normalized email
    entries: Arc<DashMap<String, WaitlistEntry>>,
    /// Slots handed out so far; never exceeds `max_entries`
    next_position: Arc<AtomicUsize>,
    max_entries: usize,
}

impl WaitlistState {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            next_position: Arc::new(AtomicUsize::new(0)),
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by email (case-insensitive)
    pub fn get(&self, email: &str) -> Option<WaitlistEntry> {
        self.entries
            .get(&normalize_email(email))
            .map(|entry| entry.value().clone())
    }

    /// Add a record, returning the stored entry and whether it already existed
    pub fn join(&self, record: SubmissionRecord) -> Result<(WaitlistEntry, bool), WaitlistApiError> {
        validate_email(&record.email).map_err(|_| WaitlistApiError::InvalidEmail)?;

        match self.entries.entry(normalize_email(&record.email)) {
            Entry::Occupied(existing) => Ok((existing.get().clone(), true)),
            Entry::Vacant(slot) => {
                // The slot is reserved while the shard lock is held
                let taken = self
                    .next_position
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |taken| {
                        (taken < self.max_entries).then_some(taken + 1)
                    })
                    .map_err(|_| WaitlistApiError::Full)?;

                let entry = WaitlistEntry {
                    id: Uuid::new_v4(),
                    position: taken + 1,
                    record,
                };
                slot.insert(entry.clone());
                Ok((entry, false))
            }
        }
    }
}

impl Default for WaitlistState {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_MAX_ENTRIES)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ============================================================================
// Responses & Errors
// ============================================================================

/// Response to a successful join
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinResponse {
    pub ok: bool,
    pub id: Uuid,
    pub position: usize,
    pub duplicate: bool,
}

/// Response of the count endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

/// Waitlist API error types
#[derive(Debug, thiserror::Error)]
pub enum WaitlistApiError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("The waitlist is full right now. Please try again later.")]
    Full,

    /// Body missing, not JSON, or not a submission record
    #[error("Invalid submission: {message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for WaitlistApiError {
    fn from(rejection: JsonRejection) -> Self {
        WaitlistApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for WaitlistApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            WaitlistApiError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            WaitlistApiError::Full => StatusCode::SERVICE_UNAVAILABLE,
            WaitlistApiError::InvalidBody { status, .. } => *status,
        };

        (status, Json(FormErrors::single(self.to_string()))).into_response()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Create the waitlist API router
pub fn waitlist_router(state: WaitlistState) -> Router {
    Router::new()
        .route("/api/waitlist", post(join_waitlist))
        .route("/api/waitlist/count", get(count_waitlist))
        .with_state(state)
}

/// Join the waitlist
///
/// POST /api/waitlist
///
/// Response: JoinResponse (201 Created, or 200 OK when the email already
/// joined) or FormErrors (400 / 415 / 422 / 503)
async fn join_waitlist(
    State(state): State<WaitlistState>,
    payload: Result<Json<SubmissionRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<JoinResponse>), WaitlistApiError> {
    let Json(record) = payload.map_err(WaitlistApiError::from).inspect_err(|e| {
        tracing::warn!("Unreadable waitlist submission: {}", e);
    })?;
    let use_case = record.use_case.clone();

    let (entry, duplicate) = state.join(record).inspect_err(|e| {
        tracing::warn!("Waitlist submission rejected: {}", e);
    })?;

    let status = if duplicate {
        tracing::info!("Repeat waitlist sign-up at position {}", entry.position);
        StatusCode::OK
    } else {
        tracing::info!(
            "Waitlist sign-up #{} (use case: {:?}, newsletter: {})",
            entry.position,
            use_case,
            entry.record.newsletter
        );
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(JoinResponse {
            ok: true,
            id: entry.id,
            position: entry.position,
            duplicate,
        }),
    ))
}

/// Number of sign-ups
///
/// GET /api/waitlist/count
async fn count_waitlist(State(state): State<WaitlistState>) -> Json<CountResponse> {
    Json(CountResponse { count: state.len() })
}
