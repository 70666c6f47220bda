//! # MetaMesh Common Library
//!
//! Shared code for MetaMesh plugin services including:
//! - Plugin protocol types (process request, callback payload, manifest)
//! - Configuration loading
//! - Meta-core metadata store client
//! - Completion callback notifier

pub mod api;
pub mod callback;
pub mod config;
pub mod error;
pub mod meta_core;

pub use error::{Error, Result};
