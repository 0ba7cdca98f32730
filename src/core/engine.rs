use crate::core::deleter::delete_all;
use crate::core::fetcher::fetch_all;
use crate::core::grouper::group_duplicates;
use crate::core::report;
use crate::core::PostApi;
use crate::domain::model::{DuplicateGroup, PostStatus, StatusFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupSummary {
    pub fetched: usize,
    pub duplicate_groups: usize,
    pub candidates: usize,
    pub deleted: usize,
    pub failed: usize,
    pub kept: usize,
    pub dry_run: bool,
}

/// 重複草稿清理：抓取 → 分組 → 預覽 → 刪除 → 摘要
pub struct DedupEngine<A: PostApi> {
    api: A,
    dry_run: bool,
}

impl<A: PostApi> DedupEngine<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> DedupSummary {
        println!("🔍 Fetching all draft posts...\n");
        let drafts = fetch_all(&self.api, StatusFilter::Only(PostStatus::Draft)).await;
        println!("{}", report::render_fetch_summary(drafts.len(), "draft"));

        let groups = group_duplicates(&drafts);
        println!("{}", report::render_duplicate_preview(&groups));

        let candidates = DuplicateGroup::candidates(&groups);
        let mut summary = DedupSummary {
            fetched: drafts.len(),
            duplicate_groups: groups.len(),
            candidates: candidates.len(),
            kept: groups.len(),
            dry_run: self.dry_run,
            ..Default::default()
        };

        if groups.is_empty() {
            return summary;
        }

        if self.dry_run {
            tracing::info!(
                "Dry run: skipping deletion of {} post(s)",
                candidates.len()
            );
            return summary;
        }

        println!("\n🗑️  Starting deletion...\n");
        let deletion = delete_all(&self.api, &candidates).await;
        println!("\n{}", report::render_deletion_summary(&deletion, groups.len()));

        summary.deleted = deletion.deleted_count;
        summary.failed = deletion.failed_count;
        summary
    }
}

/// 列出所有狀態的文章並檢查重複標題，不做任何刪除
pub struct ListingEngine<A: PostApi> {
    api: A,
}

impl<A: PostApi> ListingEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run(&self) -> Vec<DuplicateGroup> {
        println!("📋 Fetching all posts from WordPress...\n");
        let posts = fetch_all(&self.api, StatusFilter::Any).await;
        println!("{}", report::render_status_listing(&posts));

        let groups = group_duplicates(&posts);
        println!("\n{}", report::render_duplicate_titles(&groups, &posts));
        groups
    }
}
