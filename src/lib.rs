pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ListPostsCli, RemoveDuplicatesCli, SessionLoginCli};

pub use crate::core::engine::{DedupEngine, DedupSummary, ListingEngine};
pub use crate::core::{fetcher::fetch_all, grouper::group_duplicates, normalize::normalize};
pub use adapters::{LoginForm, LoginOutcome, SessionClient, WpRestClient};
pub use config::SiteConfig;
pub use domain::model::{DuplicateGroup, PostStatus, RemoteItem, StatusFilter};
pub use utils::error::{DedupError, Result};
