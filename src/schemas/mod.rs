//! Schema types for the tablo workflow
//!
//! All types serialize to the snake_case JSON used by the store and responses.

mod config;
mod progress;
mod response;
mod user;

pub use config::Config;
pub use progress::{MediaId, WorkflowState, WorkflowStatus, WorkflowStep, WorkflowStepsData};
pub use response::ActionResponse;
pub use user::{User, UserRole};
