//! HTTP API handlers for mesh-anime

pub mod configure;
pub mod health;
pub mod manifest;
pub mod process;

pub use configure::configure_routes;
pub use health::health_routes;
pub use manifest::manifest_routes;
pub use process::process_routes;
