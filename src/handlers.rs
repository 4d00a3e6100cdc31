use crate::deletion::{DeletionFlow, PageEffect, PendingDeletion};
use crate::errors::AppError;
use crate::form::{submit_lead, FormPage};
use crate::models::{LeadForm, LeadSummary};
use crate::notice::{Notice, NoticeRegion};
use crate::state::AppState;
use crate::ui::{render_form_page, render_leads_page};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = FormPage::new(state.theme);
    Html(render_form_page(&page.snapshot(), state.theme))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Html<String> {
    let page = FormPage::with_form(LeadForm::from_fields(fields), state.theme);
    submit_lead(state.api.as_ref(), &page, state.request_timeout).await;
    Html(render_form_page(&page.snapshot(), state.theme))
}

pub async fn leads_list(State(state): State<AppState>) -> Html<String> {
    leads_page(&state, None, NoticeRegion::default()).await
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let mut flow = DeletionFlow::default();
    let pending = flow.request(id).clone();
    Ok(leads_page(&state, Some(&pending), NoticeRegion::default()).await)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let mut flow = DeletionFlow::default();
    flow.request(id);

    match flow.confirm(state.api.as_ref(), state.request_timeout).await {
        PageEffect::Reload | PageEffect::None => Ok(Redirect::to("/leads").into_response()),
        PageEffect::Alert(message) => {
            let mut notice = NoticeRegion::default();
            notice.show(Notice::error(message));
            Ok(leads_page(&state, None, notice).await.into_response())
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}

async fn leads_page(
    state: &AppState,
    pending: Option<&PendingDeletion>,
    mut notice: NoticeRegion,
) -> Html<String> {
    let leads = fetch_leads(state, &mut notice).await;
    Html(render_leads_page(&leads, pending, &notice, state.theme))
}

/// Loads the table. A listing failure only fills an empty notice region, so an
/// earlier alert on the same page is never replaced.
async fn fetch_leads(state: &AppState, notice: &mut NoticeRegion) -> Vec<LeadSummary> {
    let failure = match tokio::time::timeout(state.request_timeout, state.api.list_leads()).await {
        Ok(Ok(listing)) if listing.success => return listing.leads,
        Ok(Ok(listing)) => {
            info!(message = %listing.message, "lead listing refused");
            Notice::error(listing.message)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "could not load leads");
            Notice::connection_error(state.theme)
        }
        Err(_) => {
            warn!("loading leads timed out");
            Notice::connection_error(state.theme)
        }
    };

    if notice.current().is_none() {
        notice.show(failure);
    }
    Vec::new()
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("lead id must be a number"))
}
