use crate::core::PostApi;
use crate::domain::model::{DeletionReport, RemoteItem};

/// 依序永久刪除每一篇候選文章，單筆失敗不影響後續。
pub async fn delete_all<A: PostApi + ?Sized>(api: &A, candidates: &[RemoteItem]) -> DeletionReport {
    let mut report = DeletionReport::default();

    for post in candidates {
        match api.delete_post(post.id).await {
            Ok(()) => {
                tracing::info!("✅ Deleted Post ID {}: \"{}\"", post.id, post.title);
                report.deleted_count += 1;
            }
            Err(e) => {
                tracing::error!("❌ Failed to delete Post ID {}: {}", post.id, e);
                report.failed_count += 1;
                report.failures.push((post.id, e.to_string()));
            }
        }
    }

    report
}
