use std::path::Path;

/// Checked on the raw request string, before any path joining.
pub fn is_traversal_attempt(path: &str) -> bool {
    path.contains("..")
}

/// Inserts a Unix-timestamp suffix ahead of the extension so saved copies
/// never collide: `photo.png` becomes `photo_1691403000.png`.
pub fn unique_filename(filename: &str) -> String {
    let path = Path::new(filename);
    let stamp = chrono::Utc::now().timestamp();

    match path.extension() {
        Some(ext) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            format!("{stem}_{stamp}.{}", ext.to_string_lossy())
        }
        None => format!("{filename}_{stamp}"),
    }
}
