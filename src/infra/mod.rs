//! Infrastructure layer
//!
//! Real implementations of the collaborator contracts defined in
//! [`crate::core`]: process spawning, network notification, and
//! filesystem-based reload detection.
//!
//! # Submodules
//!
//! - [`invoker`] - External build tool invocation with per-configuration logs
//! - [`notifier`] - TCP notification of the running instrumented process
//! - [`reloader`] - Reload predicate and host reload hook

pub mod invoker;
pub mod notifier;
pub mod reloader;
