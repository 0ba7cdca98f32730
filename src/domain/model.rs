use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WordPress 文章狀態（REST API 的字串值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[serde(rename = "publish")]
    Published,
    Draft,
    Private,
    Pending,
    #[serde(rename = "future")]
    Scheduled,
    #[serde(rename = "trash")]
    Trashed,
    #[serde(other)]
    Other,
}

impl PostStatus {
    /// 列表報表中顯示狀態的順序
    pub const DISPLAY_ORDER: [PostStatus; 6] = [
        PostStatus::Published,
        PostStatus::Draft,
        PostStatus::Private,
        PostStatus::Pending,
        PostStatus::Scheduled,
        PostStatus::Trashed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Private => "private",
            PostStatus::Pending => "pending",
            PostStatus::Scheduled => "future",
            PostStatus::Trashed => "trash",
            PostStatus::Other => "unknown",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `status` query 參數
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Only(PostStatus),
    Any,
}

impl StatusFilter {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            StatusFilter::Only(status) => status.as_str(),
            StatusFilter::Any => "any",
        }
    }
}

/// `title` 欄位可能是 `{rendered, raw}` 物件，也可能是純字串
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTitle {
    Structured {
        #[serde(default)]
        rendered: Option<String>,
        #[serde(default)]
        raw: Option<String>,
    },
    Plain(String),
}

impl RawTitle {
    /// 依序取 rendered、raw、純字串中第一個非空值
    pub fn resolve(self) -> String {
        match self {
            RawTitle::Structured { rendered, raw } => [rendered, raw]
                .into_iter()
                .flatten()
                .find(|s| !s.is_empty())
                .unwrap_or_default(),
            RawTitle::Plain(s) => s,
        }
    }
}

/// `/wp/v2/posts` 回傳的單筆 JSON（只取用得到的欄位）
#[derive(Debug, Clone, Deserialize)]
pub struct WpPost {
    pub id: u64,
    #[serde(default)]
    pub title: Option<RawTitle>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteItem {
    pub id: u64,
    pub title: String,
    pub status: PostStatus,
    pub created_at: Option<NaiveDateTime>,
    pub modified_at: Option<NaiveDateTime>,
    pub slug: Option<String>,
}

impl From<WpPost> for RemoteItem {
    fn from(post: WpPost) -> Self {
        let created_at = post.date.as_deref().and_then(parse_wp_timestamp);
        let modified_at = post
            .modified
            .as_deref()
            .and_then(parse_wp_timestamp)
            .or(created_at);

        Self {
            id: post.id,
            title: post.title.map(RawTitle::resolve).unwrap_or_default(),
            status: post.status.unwrap_or(PostStatus::Other),
            created_at,
            modified_at,
            slug: post.slug.filter(|s| !s.is_empty()),
        }
    }
}

/// WordPress 的 `date` 是站台時區的 naive 時間；帶時區的 RFC 3339 轉成 UTC
pub fn parse_wp_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub normalized_title: String,
    pub keep: RemoteItem,
    pub to_delete: Vec<RemoteItem>,
}

impl DuplicateGroup {
    /// 依分組順序展開所有待刪除的文章
    pub fn candidates(groups: &[DuplicateGroup]) -> Vec<RemoteItem> {
        groups
            .iter()
            .flat_map(|group| group.to_delete.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionReport {
    pub deleted_count: usize,
    pub failed_count: usize,
    pub failures: Vec<(u64, String)>,
}

impl DeletionReport {
    pub fn attempted(&self) -> usize {
        self.deleted_count + self.failed_count
    }
}
