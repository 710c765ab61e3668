//! Status and step-data commands

use std::path::Path;

use crate::cli::Target;
use crate::errors::Result;
use crate::schemas::WorkflowStep;

use super::{open_engine, print_response};

/// Show the progress of one user in one gallery
pub fn run(cwd: Option<&Path>, target: &Target) -> Result<bool> {
    let engine = open_engine(cwd)?;
    print_response(&engine.get_status(&target.user(), target.gallery))
}

pub fn step_data(cwd: Option<&Path>, target: &Target, step: WorkflowStep) -> Result<bool> {
    let engine = open_engine(cwd)?;
    print_response(&engine.get_step_data(&target.user(), target.gallery, step))
}
