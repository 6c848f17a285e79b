//! JSON file loading for the CLI. The analysis core itself never touches
//! the filesystem; it only sees the deserialized structures.

use crate::error::AppError;
use crate::models::{Item, Match, TimelineFrame};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::JsonError(format!("{}: {}", path.display(), e)))
}

pub fn load_match(path: &Path) -> Result<Match, AppError> {
    read_json(path)
}

pub fn load_timeline(path: &Path) -> Result<Vec<TimelineFrame>, AppError> {
    read_json(path)
}

pub fn load_item(path: &Path) -> Result<Item, AppError> {
    read_json(path)
}
