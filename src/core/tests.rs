#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    use crate::core::{
        EncodedSubmission, FormTransport, GENERIC_FAILURE_NOTICE, MemoryStore, RequestBody,
        SUBMISSIONS_KEY, SubmissionError, SubmissionRecord, SubmitOutcome, TransportResponse,
        WaitlistConfig, WaitlistController, WaitlistDraft, WaitlistError, WaitlistSurface,
        cached_submissions, has_joined,
    };
    use crate::core::KeyValueStore;

    /// Page model mirroring what the binding layer renders
    #[derive(Default)]
    struct FakePage {
        busy: Cell<bool>,
        form_visible: Cell<bool>,
        success_visible: Cell<bool>,
        success_reveals: Cell<usize>,
        fields: RefCell<WaitlistDraft>,
        notices: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_fields(draft: WaitlistDraft) -> Rc<Self> {
            let page = Self::default();
            page.form_visible.set(true);
            *page.fields.borrow_mut() = draft;
            Rc::new(page)
        }
    }

    impl WaitlistSurface for FakePage {
        fn set_busy(&self, busy: bool) {
            self.busy.set(busy);
        }

        fn show_success(&self) {
            self.form_visible.set(false);
            self.success_visible.set(true);
            self.success_reveals.set(self.success_reveals.get() + 1);
        }

        fn reset_fields(&self) {
            *self.fields.borrow_mut() = WaitlistDraft::default();
        }

        fn show_notice(&self, notice: &str) {
            self.notices.borrow_mut().push(notice.to_string());
        }
    }

    /// Future that is pending exactly once
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Transport that observes the page while the request is in flight
    struct ObservingTransport {
        page: Rc<FakePage>,
        status: u16,
        body: &'static str,
        calls: Cell<usize>,
        busy_during_send: Cell<Option<bool>>,
        yield_first: bool,
    }

    impl ObservingTransport {
        fn new(page: Rc<FakePage>, status: u16, body: &'static str) -> Self {
            Self {
                page,
                status,
                body,
                calls: Cell::new(0),
                busy_during_send: Cell::new(None),
                yield_first: false,
            }
        }
    }

    impl FormTransport for &ObservingTransport {
        async fn send(
            &self,
            _request: EncodedSubmission,
        ) -> Result<TransportResponse, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            self.busy_during_send.set(Some(self.page.busy.get()));
            if self.yield_first {
                YieldOnce(false).await;
            }
            Ok(TransportResponse::new(self.status, self.body))
        }
    }

    fn filled_draft(email: &str) -> WaitlistDraft {
        WaitlistDraft {
            full_name: "Katherine Johnson".to_string(),
            email: email.to_string(),
            company: "NASA".to_string(),
            use_case: "research".to_string(),
            estimated_volume: "10k-100k".to_string(),
            newsletter: true,
        }
    }

    fn submit_current(
        controller: &WaitlistController<&ObservingTransport, MemoryStore>,
        page: &Rc<FakePage>,
    ) -> Result<SubmitOutcome, WaitlistError> {
        let draft = page.fields.borrow().clone();
        block_on(controller.submit(page.as_ref(), draft, Utc::now()))
    }

    #[test]
    fn test_rejected_emails_never_reach_the_network() {
        let invalid = ["", "nobody", "a@b", "a @b.co", "@b.co", "a@b.", "a@@b.co"];

        for email in invalid {
            let page = FakePage::with_fields(filled_draft(email));
            let transport = ObservingTransport::new(page.clone(), 200, "");
            let controller =
                WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());

            let result = submit_current(&controller, &page);

            assert!(
                matches!(result, Err(WaitlistError::Validation(_))),
                "'{}' should fail validation",
                email
            );
            assert_eq!(transport.calls.get(), 0);
            // Form state is untouched
            assert!(!page.busy.get());
            assert!(page.form_visible.get());
            assert_eq!(page.fields.borrow().email, email);
        }
    }

    #[test]
    fn test_accepted_email_is_sent_while_busy() {
        let page = FakePage::with_fields(filled_draft("a@b.co"));
        let transport = ObservingTransport::new(page.clone(), 201, "{}");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());

        let result = submit_current(&controller, &page);

        assert_eq!(result, Ok(SubmitOutcome::Joined));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(transport.busy_during_send.get(), Some(true));
        assert!(!page.busy.get());
    }

    #[test]
    fn test_success_hides_form_once_and_resets_fields() {
        let page = FakePage::with_fields(filled_draft("a@b.co"));
        let transport = ObservingTransport::new(page.clone(), 200, "{}");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());

        submit_current(&controller, &page).unwrap();

        assert!(!page.form_visible.get());
        assert!(page.success_visible.get());
        assert_eq!(page.success_reveals.get(), 1);
        assert!(page.fields.borrow().is_pristine());
        assert!(page.notices.borrow().is_empty());

        let store = controller.store();
        assert!(has_joined(store));
        let cached = cached_submissions(store);
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].company, "NASA");
    }

    #[test]
    fn test_failure_keeps_form_populated_and_enabled() {
        let page = FakePage::with_fields(filled_draft("a@b.co"));
        let transport = ObservingTransport::new(page.clone(), 503, "Service Unavailable");
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());

        let result = submit_current(&controller, &page);

        assert!(result.is_err());
        assert!(page.form_visible.get());
        assert!(!page.success_visible.get());
        assert!(!page.busy.get());
        assert_eq!(page.fields.borrow().email, "a@b.co");
        assert_eq!(*page.notices.borrow(), vec![GENERIC_FAILURE_NOTICE.to_string()]);
        assert!(controller.store().get_item(SUBMISSIONS_KEY).is_none());
    }

    #[test]
    fn test_formspree_errors_are_concatenated_into_notice() {
        let page = FakePage::with_fields(filled_draft("a@b.co"));
        let transport = ObservingTransport::new(
            page.clone(),
            422,
            r#"{"errors":[{"message":"Email is blocked"},{"message":"Form is disabled"}]}"#,
        );
        let controller = WaitlistController::new(
            WaitlistConfig::new("https://formspree.io/f/demo"),
            &transport,
            MemoryStore::new(),
        );

        submit_current(&controller, &page).unwrap_err();

        assert_eq!(
            *page.notices.borrow(),
            vec!["Email is blocked, Form is disabled".to_string()]
        );
    }

    #[test]
    fn test_double_submit_sends_one_request() {
        let page = FakePage::with_fields(filled_draft("a@b.co"));
        let mut transport = ObservingTransport::new(page.clone(), 200, "{}");
        transport.yield_first = true;
        let controller =
            WaitlistController::new(WaitlistConfig::default(), &transport, MemoryStore::new());

        let draft = page.fields.borrow().clone();
        let (first, second) = block_on(async {
            futures::join!(
                controller.submit(page.as_ref(), draft.clone(), Utc::now()),
                controller.submit(page.as_ref(), draft.clone(), Utc::now()),
            )
        });

        assert_eq!(first, Ok(SubmitOutcome::Joined));
        assert_eq!(second, Ok(SubmitOutcome::AlreadyInFlight));
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(page.success_reveals.get(), 1);
        assert!(!controller.is_in_flight());
    }

    #[test]
    fn test_json_body_matches_record() {
        let record = filled_draft("a@b.co")
            .into_record(Utc.with_ymd_and_hms(2025, 5, 5, 5, 5, 5).unwrap());
        let encoded =
            crate::core::encode_submission(&WaitlistConfig::default(), &record).unwrap();

        let RequestBody::Json(json) = encoded.body else {
            panic!("local endpoint must receive JSON");
        };
        let decoded: SubmissionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_notice_for_transport_fault() {
        let err = WaitlistError::from(SubmissionError::Transport("dns".to_string()));
        assert_eq!(err.notice(), GENERIC_FAILURE_NOTICE);
    }
}
