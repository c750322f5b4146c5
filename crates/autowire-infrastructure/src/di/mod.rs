//! Composition root
//!
//! Builds the wiring engines from an [`AppConfig`](crate::config::AppConfig)
//! and the collaborator adapters.

pub mod bootstrap;

pub use bootstrap::{WiringContext, init_wiring};
