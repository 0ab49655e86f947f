//! Waitlist submission controller
//!
//! Drives one form through submit → validate → send → show result. The
//! controller knows nothing about the DOM: the page is reached through
//! [`WaitlistSurface`], the network through [`FormTransport`] and browser
//! storage through [`KeyValueStore`].
//!
//! The busy state is owned by a drop guard, so it is released on every exit
//! path once the request has been started.

use std::cell::Cell;

use chrono::{DateTime, Utc};

use super::encoding::{EncodedSubmission, TransportResponse, encode_submission};
use super::endpoint::WaitlistConfig;
use super::error::{SubmissionError, WaitlistError};
use super::record::{SubmissionRecord, WaitlistDraft};
use super::store::{KeyValueStore, record_success};
use crate::core::validation::validate_email;

/// Sends an encoded submission and reports how the endpoint answered
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    /// Perform one POST; `Err` only for transport faults, never for statuses
    async fn send(&self, request: EncodedSubmission) -> Result<TransportResponse, SubmissionError>;
}

/// The part of the page a submission is allowed to touch
pub trait WaitlistSurface {
    /// Disable/enable the submit control and swap its label for a spinner
    fn set_busy(&self, busy: bool);

    /// Hide the form and reveal the success panel
    fn show_success(&self);

    /// Clear every form field
    fn reset_fields(&self);

    /// Surface a blocking notice to the user
    fn show_notice(&self, notice: &str);

    /// Hook for analytics once a sign-up was accepted
    fn track_signup(&self, _record: &SubmissionRecord) {}
}

/// How a submit call ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Endpoint accepted the record and the success panel is showing
    Joined,
    /// Another submission was still in flight; nothing was done
    AlreadyInFlight,
}

/// Owns the submission flow of one waitlist form
pub struct WaitlistController<T, S> {
    config: WaitlistConfig,
    transport: T,
    store: S,
    in_flight: Cell<bool>,
}

impl<T, S> WaitlistController<T, S>
where
    T: FormTransport,
    S: KeyValueStore,
{
    pub fn new(config: WaitlistConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            store,
            in_flight: Cell::new(false),
        }
    }

    pub fn config(&self) -> &WaitlistConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a request is currently awaiting settlement
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit the draft captured at `submitted_at`
    ///
    /// Validation failures are reported before the busy state is entered and
    /// before anything is sent. Submission failures leave the fields intact
    /// so the user can edit and retry.
    pub async fn submit<U>(
        &self,
        surface: &U,
        draft: WaitlistDraft,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmitOutcome, WaitlistError>
    where
        U: WaitlistSurface + ?Sized,
    {
        if self.in_flight.get() {
            return Ok(SubmitOutcome::AlreadyInFlight);
        }

        let record = draft.into_record(submitted_at);

        if let Err(err) = validate_email(&record.email) {
            let err = WaitlistError::from(err);
            surface.show_notice(&err.notice());
            return Err(err);
        }

        let _busy = BusyGuard::engage(&self.in_flight, surface);

        match self.send(&record).await {
            Ok(()) => {
                surface.show_success();
                record_success(&self.store, &record);
                surface.track_signup(&record);
                surface.reset_fields();
                Ok(SubmitOutcome::Joined)
            }
            Err(err) => {
                let err = WaitlistError::from(err);
                surface.show_notice(&err.notice());
                Err(err)
            }
        }
    }

    async fn send(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        let request = encode_submission(&self.config, record)?;
        let response = self.transport.send(request).await?;
        response.into_result()
    }
}

/// Holds the busy state for the lifetime of one request
struct BusyGuard<'a, U: WaitlistSurface + ?Sized> {
    flag: &'a Cell<bool>,
    surface: &'a U,
}

impl<'a, U: WaitlistSurface + ?Sized> BusyGuard<'a, U> {
    fn engage(flag: &'a Cell<bool>, surface: &'a U) -> Self {
        flag.set(true);
        surface.set_busy(true);
        Self { flag, surface }
    }
}

impl<U: WaitlistSurface + ?Sized> Drop for BusyGuard<'_, U> {
    fn drop(&mut self) {
        self.flag.set(false);
        self.surface.set_busy(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waitlist::{MemoryStore, RequestBody, has_joined};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Busy(bool),
        Success,
        Reset,
        Notice(String),
        Tracked(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: RefCell<Vec<Event>>,
    }

    impl RecordingSurface {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    impl WaitlistSurface for RecordingSurface {
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(Event::Busy(busy));
        }

        fn show_success(&self) {
            self.events.borrow_mut().push(Event::Success);
        }

        fn reset_fields(&self) {
            self.events.borrow_mut().push(Event::Reset);
        }

        fn show_notice(&self, notice: &str) {
            self.events.borrow_mut().push(Event::Notice(notice.to_string()));
        }

        fn track_signup(&self, record: &SubmissionRecord) {
            self.events
                .borrow_mut()
                .push(Event::Tracked(record.use_case.clone()));
        }
    }

    struct StubTransport {
        reply: Result<TransportResponse, SubmissionError>,
        sent: RefCell<Vec<EncodedSubmission>>,
    }

    impl StubTransport {
        fn status(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(TransportResponse::new(status, body)),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn fault(message: &str) -> Self {
            Self {
                reply: Err(SubmissionError::Transport(message.to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for &StubTransport {
        async fn send(
            &self,
            request: EncodedSubmission,
        ) -> Result<TransportResponse, SubmissionError> {
            self.sent.borrow_mut().push(request);
            self.reply.clone()
        }
    }

    fn draft(email: &str) -> WaitlistDraft {
        WaitlistDraft {
            full_name: "Linus".to_string(),
            email: email.to_string(),
            use_case: "e-commerce".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_email_sends_nothing() {
        let transport = StubTransport::status(200, "");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());
        let surface = RecordingSurface::default();

        let result = block_on(controller.submit(&surface, draft("not-an-email"), Utc::now()));

        assert!(matches!(result, Err(WaitlistError::Validation(_))));
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(
            surface.events(),
            vec![Event::Notice("Please enter a valid email address.".to_string())]
        );
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_success_flow() {
        let transport = StubTransport::status(200, "{}");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());
        let surface = RecordingSurface::default();

        let result = block_on(controller.submit(&surface, draft("a@b.co"), Utc::now()));

        assert_eq!(result, Ok(SubmitOutcome::Joined));
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(
            surface.events(),
            vec![
                Event::Busy(true),
                Event::Success,
                Event::Tracked("e-commerce".to_string()),
                Event::Reset,
                Event::Busy(false),
            ]
        );
        assert!(has_joined(controller.store()));
    }

    #[test]
    fn test_rejection_keeps_form_and_releases_busy() {
        let transport =
            StubTransport::status(422, r#"{"errors":[{"message":"email already listed"}]}"#);
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());
        let surface = RecordingSurface::default();

        let result = block_on(controller.submit(&surface, draft("a@b.co"), Utc::now()));

        assert!(matches!(
            result,
            Err(WaitlistError::Submission(SubmissionError::Rejected { status: 422, .. }))
        ));
        assert_eq!(
            surface.events(),
            vec![
                Event::Busy(true),
                Event::Notice("email already listed".to_string()),
                Event::Busy(false),
            ]
        );
        assert!(!has_joined(controller.store()));
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_transport_fault_releases_busy() {
        let transport = StubTransport::fault("connection reset");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());
        let surface = RecordingSurface::default();

        let result = block_on(controller.submit(&surface, draft("a@b.co"), Utc::now()));

        assert_eq!(
            result,
            Err(WaitlistError::Submission(SubmissionError::Transport(
                "connection reset".to_string()
            )))
        );
        assert_eq!(surface.events().last(), Some(&Event::Busy(false)));
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_formspree_endpoint_gets_multipart() {
        let transport = StubTransport::status(200, "{\"ok\":true}");
        let controller = WaitlistController::new(
            WaitlistConfig::new("https://formspree.io/f/test"),
            &transport,
            MemoryStore::new(),
        );
        let surface = RecordingSurface::default();

        block_on(controller.submit(&surface, draft("a@b.co"), Utc::now())).unwrap();

        let sent = transport.sent.borrow();
        assert!(matches!(sent[0].body, RequestBody::Multipart(_)));
        assert_eq!(sent[0].endpoint, "https://formspree.io/f/test");
    }

    #[test]
    fn test_retry_after_failure_is_possible() {
        let failing = StubTransport::status(500, "");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &failing, MemoryStore::new());
        let surface = RecordingSurface::default();

        assert!(block_on(controller.submit(&surface, draft("a@b.co"), Utc::now())).is_err());
        assert!(block_on(controller.submit(&surface, draft("a@b.co"), Utc::now())).is_err());

        // Each attempt is one request; nothing is retried automatically
        assert_eq!(failing.sent.borrow().len(), 2);
    }
}
