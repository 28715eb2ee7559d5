//! Client for the CVInsight resume parsing service.
//!
//! The [`controller::Controller`] owns the view state (selected file, last
//! upload response, stored records), talks to the service through
//! [`gateway::Gateway`] and exposes a pure [`render::render`] of that state.

pub mod config;
pub mod controller;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod render;
pub mod state;

pub use controller::{Controller, UploadOutcome};
pub use errors::ClientError;
pub use gateway::Gateway;
