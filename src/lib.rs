pub mod config;
pub mod error;
pub mod models;
pub mod scope_path;
pub mod services;
pub mod state;

pub use config::BrowserConfig;
pub use error::AppError;
pub use models::entry::{Entry, EntryKind, Listing};
pub use models::folder::FolderType;
pub use models::sidecar::SidecarRecord;
pub use services::git_service::init_repository;
pub use services::listing_service::list_folder;
pub use state::FolderRoots;
