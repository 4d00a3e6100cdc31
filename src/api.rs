use crate::errors::ApiError;
use crate::models::{ApiReply, LeadForm, LeadListing};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// The leads backend as seen by the pages.
///
/// Replies are accepted regardless of HTTP status; only the JSON body decides
/// between success and an application-level failure.
#[async_trait]
pub trait LeadsApi: Send + Sync {
    async fn create_lead(&self, form: &LeadForm) -> Result<ApiReply, ApiError>;

    async fn delete_lead(&self, id: i64) -> Result<ApiReply, ApiError>;

    async fn list_leads(&self) -> Result<LeadListing, ApiError>;
}

#[derive(Clone)]
pub struct HttpLeadsApi {
    client: Client,
    base_url: Url,
}

impl HttpLeadsApi {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl LeadsApi for HttpLeadsApi {
    async fn create_lead(&self, form: &LeadForm) -> Result<ApiReply, ApiError> {
        let url = self.endpoint("/api/leads")?;
        let response = self.client.post(url).json(form).send().await?;
        decode(response).await
    }

    async fn delete_lead(&self, id: i64) -> Result<ApiReply, ApiError> {
        let url = self.endpoint(&format!("/api/leads/{id}"))?;
        let response = self.client.delete(url).send().await?;
        decode(response).await
    }

    async fn list_leads(&self) -> Result<LeadListing, ApiError> {
        let url = self.endpoint("/api/leads")?;
        let response = self.client.get(url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    debug!(%status, bytes = body.len(), "leads api replied");
    Ok(serde_json::from_slice(&body)?)
}
