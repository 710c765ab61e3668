//! Finalize and request-modification commands

use std::path::Path;

use crate::cli::Target;
use crate::errors::Result;

use super::{open_engine, print_response};

pub fn finalize(cwd: Option<&Path>, target: &Target, comment: Option<String>) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.finalize(&target.user(), target.gallery, comment))
}

pub fn request_modification(cwd: Option<&Path>, target: &Target) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.request_modification(&target.user(), target.gallery))
}
