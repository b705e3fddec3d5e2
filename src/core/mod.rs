//! Core orchestration logic module
//!
//! This module contains the decision logic that sits between "user asked to
//! build" and "running process is told to reload". It performs no I/O of its
//! own - collaborators are injected as trait objects, and their real
//! implementations live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`action`] - Build action variants and the identifier parse boundary
//! - [`project`] - Project descriptor and build configuration types
//! - [`orchestrator`] - Build orchestration (descriptor check, invoker dispatch)
//! - [`coordinator`] - Post-build hot-reload coordination
//! - [`dispatch`] - Action-to-operation mapping and coordinator chaining
//! - [`debounce`] - Single-slot debounce timer

pub mod action;
pub mod coordinator;
pub mod debounce;
pub mod dispatch;
pub mod orchestrator;
pub mod project;
