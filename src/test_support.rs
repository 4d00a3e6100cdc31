use crate::api::LeadsApi;
use crate::errors::ApiError;
use crate::models::{ApiReply, LeadForm, LeadListing};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

fn decode_failure() -> ApiError {
    ApiError::Decode(serde_json::from_str::<ApiReply>("<html>").unwrap_err())
}

/// Answers create and delete with one reply and listings with another; `None`
/// stands for a transport failure.
#[derive(Default)]
pub struct ScriptedApi {
    reply: Option<ApiReply>,
    listing: Option<LeadListing>,
    pub calls: AtomicUsize,
    pub deleted: Mutex<Vec<i64>>,
    payloads: Mutex<Vec<LeadForm>>,
}

impl ScriptedApi {
    pub fn replying(success: bool, message: &str) -> Self {
        Self {
            reply: Some(ApiReply {
                success,
                message: message.to_string(),
            }),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, listing: LeadListing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn last_payload(&self) -> Option<LeadForm> {
        self.payloads.lock().unwrap().last().cloned()
    }

    fn answer(&self) -> Result<ApiReply, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(decode_failure)
    }
}

#[async_trait]
impl LeadsApi for ScriptedApi {
    async fn create_lead(&self, form: &LeadForm) -> Result<ApiReply, ApiError> {
        self.payloads.lock().unwrap().push(form.clone());
        self.answer()
    }

    async fn delete_lead(&self, id: i64) -> Result<ApiReply, ApiError> {
        self.deleted.lock().unwrap().push(id);
        self.answer()
    }

    async fn list_leads(&self) -> Result<LeadListing, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listing.clone().ok_or_else(decode_failure)
    }
}

/// Holds each request until `release` is notified.
#[derive(Default)]
pub struct GatedApi {
    pub entered: Notify,
    pub release: Notify,
    pub calls: AtomicUsize,
}

impl GatedApi {
    async fn hold(&self) -> Result<ApiReply, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(ApiReply {
            success: true,
            message: "done".into(),
        })
    }
}

#[async_trait]
impl LeadsApi for GatedApi {
    async fn create_lead(&self, _form: &LeadForm) -> Result<ApiReply, ApiError> {
        self.hold().await
    }

    async fn delete_lead(&self, _id: i64) -> Result<ApiReply, ApiError> {
        self.hold().await
    }

    async fn list_leads(&self) -> Result<LeadListing, ApiError> {
        self.hold().await.map(|_| LeadListing {
            success: true,
            ..LeadListing::default()
        })
    }
}
