use crate::core::{PageQuery, PostApi};
use crate::domain::model::{RemoteItem, StatusFilter};

pub const PAGE_SIZE: usize = 100;

/// 逐頁抓取直到遇到不足一頁的回應。
///
/// 任何一頁失敗都只記錄錯誤並停止，回傳已累積的部分結果。
pub async fn fetch_all<A: PostApi + ?Sized>(api: &A, filter: StatusFilter) -> Vec<RemoteItem> {
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let query = PageQuery {
            page,
            per_page: PAGE_SIZE,
            status: filter,
        };

        tracing::debug!(
            "Fetching page {} (status={})",
            page,
            filter.as_query_value()
        );

        let batch = match api.list_posts(&query).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!("❌ Error fetching posts: {}", e);
                break;
            }
        };

        let received = batch.len();
        items.extend(batch);

        if received < PAGE_SIZE {
            break;
        }
        page += 1;
    }

    tracing::debug!("Fetched {} posts across {} page(s)", items.len(), page);
    items
}
