pub mod git_service;
pub mod listing_service;
pub mod sidecar_service;
