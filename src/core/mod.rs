pub mod deleter;
pub mod engine;
pub mod fetcher;
pub mod grouper;
pub mod normalize;
pub mod report;

pub use crate::domain::model::{DeletionReport, DuplicateGroup, RemoteItem};
pub use crate::domain::ports::{PageQuery, PostApi};
pub use crate::utils::error::Result;
