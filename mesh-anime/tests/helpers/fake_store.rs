//! In-memory meta-core and callback doubles
//!
//! `RecordingStore` applies writes with meta-core semantics (set replaces,
//! add is a set union) and records every call in order. It can be told to
//! fail or panic on the n-th call.

use async_trait::async_trait;
use mesh_common::api::CallbackPayload;
use mesh_common::callback::CompletionNotifier;
use mesh_common::meta_core::MetadataStore;
use mesh_common::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Set { cid: String, key: String, value: String },
    Add { cid: String, key: String, value: String },
    Merge { cid: String, metadata: BTreeMap<String, String> },
}

#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    properties: Mutex<HashMap<(String, String), String>>,
    sets: Mutex<HashMap<(String, String), Vec<String>>>,
    fail_on_call: Option<usize>,
    panic_on_call: Option<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls before `index` (0-based) succeed; call `index` fails with 503
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_on_call: Some(index),
            ..Self::default()
        }
    }

    pub fn panicking_at(index: usize) -> Self {
        Self {
            panic_on_call: Some(index),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn property(&self, cid: &str, key: &str) -> Option<String> {
        self.properties
            .lock()
            .unwrap()
            .get(&(cid.to_string(), key.to_string()))
            .cloned()
    }

    pub fn set_values(&self, cid: &str, key: &str) -> Vec<String> {
        self.sets
            .lock()
            .unwrap()
            .get(&(cid.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    /// Record the call, then apply failure/panic injection
    fn record(&self, call: StoreCall) -> Result<()> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call);
            calls.len() - 1
        };

        if self.panic_on_call == Some(index) {
            panic!("store exploded on call {}", index);
        }
        if self.fail_on_call == Some(index) {
            return Err(Error::Store {
                status: 503,
                message: "meta-core unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn apply_set(&self, cid: &str, key: &str, value: &str) {
        self.properties
            .lock()
            .unwrap()
            .insert((cid.to_string(), key.to_string()), value.to_string());
    }
}

#[async_trait]
impl MetadataStore for RecordingStore {
    async fn set_property(&self, cid: &str, key: &str, value: &str) -> Result<()> {
        self.record(StoreCall::Set {
            cid: cid.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })?;
        self.apply_set(cid, key, value);
        Ok(())
    }

    async fn add_to_set(&self, cid: &str, key: &str, value: &str) -> Result<()> {
        self.record(StoreCall::Add {
            cid: cid.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })?;
        let mut sets = self.sets.lock().unwrap();
        let values = sets.entry((cid.to_string(), key.to_string())).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
        Ok(())
    }

    async fn merge_metadata(&self, cid: &str, metadata: &BTreeMap<String, String>) -> Result<()> {
        self.record(StoreCall::Merge {
            cid: cid.to_string(),
            metadata: metadata.clone(),
        })?;
        for (key, value) in metadata {
            self.apply_set(cid, key, value);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    payloads: Mutex<Vec<CallbackPayload>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<CallbackPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionNotifier for RecordingNotifier {
    async fn notify(&self, payload: &CallbackPayload) {
        self.payloads.lock().unwrap().push(payload.clone());
    }
}
