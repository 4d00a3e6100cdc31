use crate::api::LeadsApi;
use crate::errors::ApiError;
use std::time::Duration;
use tokio::time;
use tracing::{info, warn};

pub const CONFIRM_PROMPT: &str = "Are you sure you want to delete this lead?";
pub const CONNECTION_ALERT: &str = "Connection error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: i64,
    pub prompt: &'static str,
}

/// What the page must do once a deletion settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    None,
    Reload,
    Alert(String),
}

/// Confirmation-gated deletion. Nothing is sent until `confirm` is called.
#[derive(Debug, Default)]
pub struct DeletionFlow {
    pending: Option<PendingDeletion>,
}

impl DeletionFlow {
    /// Opens the confirmation for `id`, replacing any earlier one.
    pub fn request(&mut self, id: i64) -> &PendingDeletion {
        self.pending.insert(PendingDeletion {
            id,
            prompt: CONFIRM_PROMPT,
        })
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) -> Option<PendingDeletion> {
        self.pending.take()
    }

    pub async fn confirm(&mut self, api: &dyn LeadsApi, timeout: Duration) -> PageEffect {
        let Some(pending) = self.pending.take() else {
            return PageEffect::None;
        };

        match time::timeout(timeout, api.delete_lead(pending.id)).await {
            Ok(Ok(reply)) if reply.success => {
                info!(id = pending.id, "lead deleted");
                PageEffect::Reload
            }
            Ok(Ok(reply)) => {
                info!(id = pending.id, message = %reply.message, "lead deletion refused");
                PageEffect::Alert(format!("Could not delete lead: {}", reply.message))
            }
            Ok(Err(err)) => {
                warn!(id = pending.id, error = %err, "lead deletion failed");
                PageEffect::Alert(CONNECTION_ALERT.to_string())
            }
            Err(_) => {
                warn!(id = pending.id, error = %ApiError::Timeout(timeout), "lead deletion failed");
                PageEffect::Alert(CONNECTION_ALERT.to_string())
            }
        }
    }
}
