use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::sidecar::SidecarRecord;

const INFO_FILE_SUFFIX: &str = "info";

/// Sidecar path for an item: same base name, `.info` in place of the
/// original extension (`photo.png` -> `photo.info`).
pub fn info_path(item_path: &Path) -> PathBuf {
    item_path.with_extension(INFO_FILE_SUFFIX)
}

/// Missing sidecar files read as an empty record; malformed JSON is a
/// fatal error, not silently recovered.
pub fn read_record(item_path: &Path) -> Result<SidecarRecord, AppError> {
    let info = info_path(item_path);
    if !info.exists() {
        return Ok(SidecarRecord::default());
    }

    let raw = fs::read_to_string(&info)?;
    let record: SidecarRecord = serde_json::from_str(&raw)?;
    Ok(record)
}

pub fn write_notes(item_path: &Path, notes: &str) -> Result<(), AppError> {
    let mut record = read_record(item_path)?;
    record.notes = notes.to_string();
    record.updated_at = Some(chrono::Utc::now().to_rfc3339());

    fs::write(
        info_path(item_path),
        serde_json::to_string_pretty(&record)?,
    )?;
    Ok(())
}
