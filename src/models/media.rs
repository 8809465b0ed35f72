use std::path::Path;

pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".safetensors"];

pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".webm", ".mkv"];

pub const DOCUMENT_EXTENSIONS: &[&str] = &[".json", ".html"];

/// Whether a file name carries an extension the host is willing to serve.
pub fn is_whitelisted(name: &str) -> bool {
    let ext = match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_ascii_lowercase()),
        None => return false,
    };

    DOCUMENT_EXTENSIONS.contains(&ext.as_str())
        || IMAGE_EXTENSIONS.contains(&ext.as_str())
        || VIDEO_EXTENSIONS.contains(&ext.as_str())
}
