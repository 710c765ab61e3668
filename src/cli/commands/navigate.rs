//! Navigation commands - next, previous, goto

use std::path::Path;

use crate::cli::Target;
use crate::errors::Result;
use crate::schemas::WorkflowStep;

use super::{open_engine, print_response};

pub fn next(cwd: Option<&Path>, target: &Target) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.next_step(&target.user(), target.gallery))
}

pub fn previous(cwd: Option<&Path>, target: &Target) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.previous_step(&target.user(), target.gallery))
}

pub fn goto(cwd: Option<&Path>, target: &Target, step: WorkflowStep) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.go_to_step(&target.user(), target.gallery, step))
}
