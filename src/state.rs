use crate::api::LeadsApi;
use crate::notice::NoticeTheme;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn LeadsApi>,
    pub theme: NoticeTheme,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(api: Arc<dyn LeadsApi>, theme: NoticeTheme, request_timeout: Duration) -> Self {
        Self {
            api,
            theme,
            request_timeout,
        }
    }
}
