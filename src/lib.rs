//! Buildwatch - Build orchestration and hot-reload coordination
//!
//! This library sits between "user asked to build" and "running process is
//! told to reload". It locates the project's buildable unit, invokes the
//! external build tool synchronously, and on success notifies a running
//! instrumented process and schedules a debounced host assembly reload.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Orchestration and coordination logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (process spawning, network, filesystem)
//! - [`config`] - Configuration loading and defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
