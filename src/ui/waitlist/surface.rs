//! Signal-backed page surface for the waitlist controller

use leptos::prelude::*;

use crate::core::{SubmissionRecord, WaitlistDraft, WaitlistSurface};

/// Live values of the waitlist form inputs
#[derive(Clone, Copy)]
pub struct WaitlistFields {
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub company: RwSignal<String>,
    pub use_case: RwSignal<String>,
    pub estimated_volume: RwSignal<String>,
    pub newsletter: RwSignal<bool>,
}

impl WaitlistFields {
    pub fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            use_case: RwSignal::new(String::new()),
            estimated_volume: RwSignal::new(String::new()),
            newsletter: RwSignal::new(false),
        }
    }

    /// Snapshot of the current values
    pub fn draft(&self) -> WaitlistDraft {
        WaitlistDraft {
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            company: self.company.get_untracked(),
            use_case: self.use_case.get_untracked(),
            estimated_volume: self.estimated_volume.get_untracked(),
            newsletter: self.newsletter.get_untracked(),
        }
    }

    pub fn reset(&self) {
        let empty = WaitlistDraft::default();
        self.full_name.set(empty.full_name);
        self.email.set(empty.email);
        self.company.set(empty.company);
        self.use_case.set(empty.use_case);
        self.estimated_volume.set(empty.estimated_volume);
        self.newsletter.set(empty.newsletter);
    }
}

impl Default for WaitlistFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the waitlist section renders from
#[derive(Clone, Copy)]
pub struct WaitlistView {
    pub fields: WaitlistFields,
    /// Submit control disabled, spinner shown
    pub busy: RwSignal<bool>,
    /// Form hidden, success panel shown
    pub joined: RwSignal<bool>,
    /// Last notice surfaced to the user
    pub notice: RwSignal<Option<String>>,
}

impl WaitlistView {
    pub fn new() -> Self {
        Self {
            fields: WaitlistFields::new(),
            busy: RwSignal::new(false),
            joined: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }
}

impl Default for WaitlistView {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistSurface for WaitlistView {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.notice.set(None);
        }
        self.busy.set(busy);
    }

    fn show_success(&self) {
        self.notice.set(None);
        self.joined.set(true);
    }

    fn reset_fields(&self) {
        self.fields.reset();
    }

    fn show_notice(&self, notice: &str) {
        self.notice.set(Some(notice.to_string()));

        #[cfg(not(feature = "ssr"))]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice);
        }
    }

    fn track_signup(&self, record: &SubmissionRecord) {
        leptos::logging::log!(
            "waitlist_signup: category=engagement label={}",
            record.use_case
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_fields_draft_and_reset() {
        let owner = Owner::new();
        owner.with(|| {
            let fields = WaitlistFields::new();
            fields.email.set("a@b.co".to_string());
            fields.use_case.set("research".to_string());
            fields.newsletter.set(true);

            let draft = fields.draft();
            assert_eq!(draft.email, "a@b.co");
            assert_eq!(draft.use_case, "research");
            assert!(draft.newsletter);

            fields.reset();
            assert!(fields.draft().is_pristine());
        });
    }

    #[test]
    fn test_surface_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let view = WaitlistView::new();

            view.show_notice("Please enter a valid email address.");
            assert_eq!(
                view.notice.get_untracked().as_deref(),
                Some("Please enter a valid email address.")
            );

            // Entering the busy state clears a stale notice
            view.set_busy(true);
            assert!(view.busy.get_untracked());
            assert!(view.notice.get_untracked().is_none());

            view.show_success();
            view.set_busy(false);
            assert!(view.joined.get_untracked());
            assert!(!view.busy.get_untracked());
        });
    }
}
