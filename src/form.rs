use crate::api::LeadsApi;
use crate::errors::ApiError;
use crate::models::LeadForm;
use crate::notice::{Notice, NoticeRegion, NoticeTheme};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time;
use tracing::{debug, info, warn};

pub const IDLE_LABEL: &str = "Register lead";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    pub fn idle() -> Self {
        Self {
            disabled: false,
            label: IDLE_LABEL,
        }
    }

    pub fn sending() -> Self {
        Self {
            disabled: true,
            label: SENDING_LABEL,
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle()
    }
}

/// Everything the form page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub form: LeadForm,
    pub control: SubmitControl,
    pub notice: NoticeRegion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Rejected(String),
    ConnectionFailed,
    /// The control was already disabled; nothing was sent.
    Ignored,
}

/// Shared handle on a form page's view state.
///
/// The lock is only held for short synchronous updates, never across the
/// request, so the disabled control is visible while a submission is pending.
#[derive(Debug, Clone)]
pub struct FormPage {
    view: Arc<Mutex<FormView>>,
    theme: NoticeTheme,
}

impl FormPage {
    pub fn new(theme: NoticeTheme) -> Self {
        Self::with_form(LeadForm::lead(), theme)
    }

    pub fn with_form(form: LeadForm, theme: NoticeTheme) -> Self {
        let view = FormView {
            form,
            ..FormView::default()
        };
        Self {
            view: Arc::new(Mutex::new(view)),
            theme,
        }
    }

    pub fn theme(&self) -> NoticeTheme {
        self.theme
    }

    pub fn fill(&self, name: &str, value: &str) {
        self.lock().form.set(name, value);
    }

    pub fn snapshot(&self) -> FormView {
        self.lock().clone()
    }

    /// Disables the control and captures the payload, or returns `None` when a
    /// submission is already pending.
    pub fn begin_submit(&self) -> Option<InFlight> {
        let mut view = self.lock();
        if view.control.disabled {
            return None;
        }
        view.control = SubmitControl::sending();
        let payload = view.form.clone();
        Some(InFlight {
            page: self.clone(),
            payload,
        })
    }

    fn apply(&self, outcome: &SubmitOutcome) {
        let mut view = self.lock();
        match outcome {
            SubmitOutcome::Created(message) => {
                view.notice.show(Notice::success(message.clone()));
                view.form.reset();
            }
            SubmitOutcome::Rejected(message) => {
                view.notice.show(Notice::error(message.clone()));
            }
            SubmitOutcome::ConnectionFailed => {
                view.notice.show(Notice::connection_error(self.theme));
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A pending submission. Dropping it re-enables the submit control.
#[derive(Debug)]
pub struct InFlight {
    page: FormPage,
    payload: LeadForm,
}

impl InFlight {
    pub fn payload(&self) -> &LeadForm {
        &self.payload
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.page.lock().control = SubmitControl::idle();
    }
}

pub async fn submit_lead(api: &dyn LeadsApi, page: &FormPage, timeout: Duration) -> SubmitOutcome {
    let Some(in_flight) = page.begin_submit() else {
        debug!("submission already in flight, ignoring");
        return SubmitOutcome::Ignored;
    };

    let outcome = match time::timeout(timeout, api.create_lead(in_flight.payload())).await {
        Ok(Ok(reply)) if reply.success => {
            info!("lead registered");
            SubmitOutcome::Created(reply.message)
        }
        Ok(Ok(reply)) => {
            info!(message = %reply.message, "lead rejected");
            SubmitOutcome::Rejected(reply.message)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "lead submission failed");
            SubmitOutcome::ConnectionFailed
        }
        Err(_) => {
            warn!(error = %ApiError::Timeout(timeout), "lead submission failed");
            SubmitOutcome::ConnectionFailed
        }
    };

    page.apply(&outcome);
    drop(in_flight);
    outcome
}
