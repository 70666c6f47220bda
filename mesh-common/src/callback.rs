//! Completion callback notifier
//!
//! The callback is the last thing a task does. Nobody is left to report a
//! delivery failure to, so failures are logged and dropped. No retries.

use crate::api::CallbackPayload;
use async_trait::async_trait;
use tracing::{debug, error, warn};

/// One-shot delivery of a task's terminal status
#[async_trait]
pub trait CompletionNotifier: Send + Sync {
    async fn notify(&self, payload: &CallbackPayload);
}

/// POSTs the callback payload as JSON to the caller's callback URL
#[derive(Debug, Clone)]
pub struct HttpCallbackNotifier {
    http_client: reqwest::Client,
    callback_url: String,
}

impl HttpCallbackNotifier {
    pub fn new(http_client: reqwest::Client, callback_url: impl Into<String>) -> Self {
        Self {
            http_client,
            callback_url: callback_url.into(),
        }
    }
}

#[async_trait]
impl CompletionNotifier for HttpCallbackNotifier {
    async fn notify(&self, payload: &CallbackPayload) {
        let result = self
            .http_client
            .post(&self.callback_url)
            .json(payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!(
                    task_id = %payload.task_id,
                    status = ?payload.status,
                    "Callback delivered"
                );
            }
            Ok(response) => {
                warn!(
                    task_id = %payload.task_id,
                    callback_url = %self.callback_url,
                    http_status = response.status().as_u16(),
                    "Callback rejected by caller"
                );
            }
            Err(e) => {
                error!(
                    task_id = %payload.task_id,
                    callback_url = %self.callback_url,
                    error = %e,
                    "Callback error"
                );
            }
        }
    }
}
