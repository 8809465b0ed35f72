use std::fs;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use crate::error::AppError;
use crate::models::entry::{Entry, EntryKind, Listing};
use crate::models::folder::FolderType;
use crate::scope_path;
use crate::services::sidecar_service;
use crate::state::FolderRoots;

struct SnapshotItem {
    path: PathBuf,
    name: String,
    is_file: bool,
    size_bytes: u64,
    created_at: f64,
}

/// Lists the immediate children of `folder_path` under the root selected
/// by `folder_type`, directories ahead of files and newest first within
/// each group, with sidecar notes merged in.
///
/// A `folder_path` containing `..` yields `Listing::Rejected`; a missing
/// target directory yields an empty listing, indistinguishable from a
/// directory with no children.
pub fn list_folder(
    roots: &FolderRoots,
    folder_type: FolderType,
    folder_path: &str,
) -> Result<Listing, AppError> {
    if scope_path::is_traversal_attempt(folder_path) {
        return Ok(Listing::Rejected);
    }

    let target = roots.resolve(folder_type).join(folder_path);
    if !target.exists() {
        return Ok(Listing::Entries(Vec::new()));
    }

    // One enumeration pass, one stat per child. Ordering is computed from
    // this snapshot and never re-statted after the sort.
    let mut snapshot = Vec::new();
    for item in fs::read_dir(&target)? {
        let item = item?;
        let metadata = item.metadata()?;
        snapshot.push(SnapshotItem {
            path: item.path(),
            name: item.file_name().to_string_lossy().to_string(),
            is_file: metadata.is_file(),
            size_bytes: metadata.len(),
            created_at: created_at_secs(&metadata),
        });
    }

    snapshot.sort_by(|a, b| {
        a.is_file
            .cmp(&b.is_file)
            .then_with(|| b.created_at.total_cmp(&a.created_at))
    });

    let mut entries = Vec::new();
    for item in snapshot {
        // the directory may have mutated since enumeration
        if !item.path.exists() {
            continue;
        }

        let record = sidecar_service::read_record(&item.path)?;
        let (kind, size_bytes) = if item.is_file {
            (EntryKind::File, item.size_bytes)
        } else {
            (EntryKind::Dir, 0)
        };

        entries.push(Entry {
            kind,
            name: item.name,
            size_bytes,
            created_at: item.created_at,
            folder_path: folder_path.to_string(),
            notes: record.notes,
        });
    }

    Ok(Listing::Entries(entries))
}

fn created_at_secs(metadata: &fs::Metadata) -> f64 {
    // birth time is unavailable on some filesystems; fall back to mtime
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}
