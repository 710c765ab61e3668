//! Selection commands - claim, retouch, tablo photo

use std::path::Path;

use crate::cli::Target;
use crate::errors::Result;
use crate::schemas::MediaId;

use super::{open_engine, print_response};

pub fn claim(cwd: Option<&Path>, target: &Target, ids: &[MediaId]) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.save_claiming_selection(&target.user(), target.gallery, ids))
}

pub fn retouch(cwd: Option<&Path>, target: &Target, ids: &[MediaId]) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.save_retouch_selection(&target.user(), target.gallery, ids))
}

pub fn tablo_photo(cwd: Option<&Path>, target: &Target, id: MediaId) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.save_tablo_photo(&target.user(), target.gallery, id))
}

pub fn clear_tablo(cwd: Option<&Path>, target: &Target) -> Result<bool> {
    let mut engine = open_engine(cwd)?;
    print_response(&engine.clear_tablo_photo(&target.user(), target.gallery))
}
