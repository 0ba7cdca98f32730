use crate::domain::model::{RemoteItem, StatusFilter};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 單頁查詢參數；排序固定為建立時間遞減
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: usize,
    pub status: StatusFilter,
}

impl PageQuery {
    pub const ORDER_BY: &'static str = "date";
    pub const ORDER: &'static str = "desc";
}

#[async_trait]
pub trait PostApi: Send + Sync {
    async fn list_posts(&self, query: &PageQuery) -> Result<Vec<RemoteItem>>;

    /// 永久刪除（`force=true`，不進垃圾桶）
    async fn delete_post(&self, id: u64) -> Result<()>;
}
