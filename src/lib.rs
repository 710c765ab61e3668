//! Tablo workflow - guest photo-selection engine for school yearbook projects
//!
//! This library provides:
//! - Schema definitions for progress records, users, config and responses
//! - Domain logic for step ordering, selections, cascades and finalization
//! - A store abstraction with in-memory and JSON-file implementations
//! - The workflow engine wrapping every operation in a JSON action response
//! - The `tablo` command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;

// Re-export commonly used types
pub use engine::WorkflowEngine;
pub use errors::{Result, TabloError};
pub use schemas::{ActionResponse, Config, User, WorkflowState, WorkflowStep};
pub use store::{InMemoryWorkflowStore, JsonFileStore, WorkflowStateStore};
