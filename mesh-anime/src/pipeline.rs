//! Per-request processing
//!
//! video gate → classification → property writes → completion callback
//!
//! Writes are issued one after another and all finish before the callback
//! is sent, since the callback tells the orchestrator the item is done.

use futures::FutureExt;
use mesh_common::api::{CallbackPayload, ProcessRequest};
use mesh_common::callback::{CompletionNotifier, HttpCallbackNotifier};
use mesh_common::meta_core::{MetaCoreClient, MetadataStore};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{error, info};

use crate::config::WriteMode;
use crate::detection::{
    classify, ClassificationInput, ClassificationVerdict, KeywordSet, PropertyOp,
    PropertyWriteBatch,
};
use crate::AppState;

/// Reason reported for files the detector does not look at
pub const NOT_A_VIDEO_REASON: &str = "Not a video file";

/// Non-failing end of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped { reason: &'static str },
    /// Verdict applied; a negative verdict performed no writes
    Completed { verdict: ClassificationVerdict },
}

/// One accepted processing request
#[derive(Debug, Clone)]
pub struct Task {
    pub task_id: String,
    pub cid: String,
    pub input: ClassificationInput,
}

impl Task {
    pub fn from_request(request: &ProcessRequest) -> Self {
        Self {
            task_id: request.task_id.clone(),
            cid: request.cid.clone(),
            input: ClassificationInput::from_existing_meta(
                &request.file_path,
                request.existing_meta.as_ref(),
            ),
        }
    }
}

/// Gate, classify and write; no callback
///
/// The first failing write aborts the remaining ones.
pub async fn classify_and_write(
    task: &Task,
    keywords: &KeywordSet,
    store: &dyn MetadataStore,
    write_mode: WriteMode,
) -> mesh_common::Result<Outcome> {
    if !task.input.is_video() {
        return Ok(Outcome::Skipped {
            reason: NOT_A_VIDEO_REASON,
        });
    }

    let verdict = classify(&task.input, keywords);
    let batch = verdict.write_batch();

    if !batch.is_empty() {
        apply_batch(store, &task.cid, &batch, write_mode).await?;
        info!(
            task_id = %task.task_id,
            cid = %task.cid,
            file = %task.input.file_name,
            is_anime = verdict.is_anime,
            is_japanese = verdict.is_japanese,
            "Detected anime"
        );
    }

    Ok(Outcome::Completed { verdict })
}

/// Issue a batch against the store in order
pub async fn apply_batch(
    store: &dyn MetadataStore,
    cid: &str,
    batch: &PropertyWriteBatch,
    write_mode: WriteMode,
) -> mesh_common::Result<()> {
    match write_mode {
        WriteMode::Individual => {
            for op in batch.ops() {
                match op {
                    PropertyOp::Set { key, value } => store.set_property(cid, key, value).await?,
                    PropertyOp::AddToSet { key, value } => store.add_to_set(cid, key, value).await?,
                }
            }
        }
        WriteMode::Merged => {
            let properties = batch.set_properties();
            if !properties.is_empty() {
                store.merge_metadata(cid, &properties).await?;
            }
            for (key, value) in batch.set_additions() {
                store.add_to_set(cid, key, value).await?;
            }
        }
    }
    Ok(())
}

/// Run a task to its terminal status and send the callback
///
/// Store failures and panics both end as `failed`; nothing escapes. Returns
/// the payload that was sent.
pub async fn run(
    task: Task,
    keywords: &KeywordSet,
    store: &dyn MetadataStore,
    notifier: &dyn CompletionNotifier,
    write_mode: WriteMode,
    started: Instant,
) -> CallbackPayload {
    let result = AssertUnwindSafe(classify_and_write(&task, keywords, store, write_mode))
        .catch_unwind()
        .await;

    let elapsed = started.elapsed();
    let payload = match result {
        Ok(Ok(Outcome::Skipped { reason })) => {
            info!(task_id = %task.task_id, reason, "Task skipped");
            CallbackPayload::skipped(&task.task_id, elapsed, reason)
        }
        Ok(Ok(Outcome::Completed { .. })) => CallbackPayload::completed(&task.task_id, elapsed),
        Ok(Err(e)) => {
            error!(task_id = %task.task_id, cid = %task.cid, error = %e, "Task failed");
            CallbackPayload::failed(&task.task_id, elapsed, e.to_string())
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!(task_id = %task.task_id, cid = %task.cid, error = %message, "Task panicked");
            CallbackPayload::failed(&task.task_id, elapsed, message)
        }
    };

    notifier.notify(&payload).await;
    payload
}

/// Background entry point for an accepted `/process` request
pub async fn run_request(state: AppState, request: ProcessRequest) -> CallbackPayload {
    let started = Instant::now();
    let notifier = HttpCallbackNotifier::new(state.http_client.clone(), &request.callback_url);
    let task = Task::from_request(&request);

    let store = MetaCoreClient::with_http_client(state.http_client.clone(), &request.meta_core_url);
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            error!(task_id = %task.task_id, error = %e, "Cannot reach meta-core");
            let payload = CallbackPayload::failed(&task.task_id, started.elapsed(), e.to_string());
            notifier.notify(&payload).await;
            return payload;
        }
    };

    run(
        task,
        &state.keywords,
        &store,
        &notifier,
        state.settings.write_mode,
        started,
    )
    .await
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
