//! API module for the shared plugin protocol
//!
//! # Design Principle
//!
//! This module contains ONLY shared wire types with no HTTP framework
//! dependencies. Each plugin wraps them with its own Axum handlers.

pub mod types;

pub use types::{
    CallbackPayload, ConfigureResponse, HealthResponse, PluginManifest, ProcessRequest,
    ProcessResponse, SchemaField, TaskStatus,
};
