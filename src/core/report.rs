use crate::domain::model::{DeletionReport, DuplicateGroup, PostStatus, RemoteItem};
use chrono::NaiveDateTime;
use std::collections::HashSet;

const WIDE_RULE: usize = 100;
const NARROW_RULE: usize = 80;

fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        "No title"
    } else {
        title
    }
}

pub fn render_fetch_summary(count: usize, label: &str) -> String {
    format!("📊 Found {} {} posts\n", count, label)
}

/// 刪除前的預覽：每組保留哪篇、刪掉哪些
pub fn render_duplicate_preview(groups: &[DuplicateGroup]) -> String {
    if groups.is_empty() {
        return "✅ No duplicate draft posts found!".to_string();
    }

    let mut lines = vec![format!(
        "⚠️  Found {} duplicate title(s) in drafts:\n",
        groups.len()
    )];

    let mut total_to_delete = 0;
    for (index, group) in groups.iter().enumerate() {
        lines.push(format!("{}. \"{}\"", index + 1, group.keep.title));
        lines.push(format!(
            "   Keeping: Post ID {} (created: {})",
            group.keep.id,
            format_timestamp(group.keep.created_at)
        ));
        lines.push(format!("   Deleting: {} duplicate(s)", group.to_delete.len()));
        for post in &group.to_delete {
            lines.push(format!(
                "      - Post ID {} (created: {})",
                post.id,
                format_timestamp(post.created_at)
            ));
        }
        lines.push(String::new());
        total_to_delete += group.to_delete.len();
    }

    lines.push(format!(
        "📋 Summary: Will delete {} duplicate draft post(s), keeping {} original(s)",
        total_to_delete,
        groups.len()
    ));

    lines.join("\n")
}

pub fn render_deletion_summary(report: &DeletionReport, kept: usize) -> String {
    let rule = "═".repeat(NARROW_RULE);
    let mut lines = vec![
        rule.clone(),
        "📊 DELETION SUMMARY:".to_string(),
        rule,
        format!("✅ Successfully deleted: {} post(s)", report.deleted_count),
    ];

    if report.failed_count > 0 {
        lines.push(format!("❌ Failed to delete: {} post(s)", report.failed_count));
        for (id, message) in &report.failures {
            lines.push(format!("   - Post ID {}: {}", id, message));
        }
    }
    lines.push(format!("📝 Kept: {} original post(s)", kept));

    lines.join("\n")
}

/// 依狀態分類列出所有文章，最後附上各狀態數量
pub fn render_status_listing(items: &[RemoteItem]) -> String {
    let wide = "═".repeat(WIDE_RULE);
    let thin = "-".repeat(WIDE_RULE);

    let mut lines = vec![
        format!("📊 Total posts found: {}\n", items.len()),
        wide.clone(),
        "ALL POSTS:".to_string(),
        wide.clone(),
    ];

    let mut counts = Vec::new();
    for status in PostStatus::DISPLAY_ORDER {
        let bucket: Vec<&RemoteItem> = items.iter().filter(|p| p.status == status).collect();
        if bucket.is_empty() {
            continue;
        }
        counts.push((status, bucket.len()));

        let heading = match status {
            PostStatus::Published => format!("✅ PUBLISHED POSTS ({}):", bucket.len()),
            PostStatus::Draft => format!("📝 DRAFT POSTS ({}):", bucket.len()),
            other => format!(
                "{} POSTS ({}):",
                other.as_str().to_uppercase(),
                bucket.len()
            ),
        };
        lines.push(String::new());
        lines.push(heading);
        lines.push(thin.clone());

        for (index, post) in bucket.iter().enumerate() {
            lines.push(format!(
                "{}. [ID: {}] {}",
                index + 1,
                post.id,
                display_title(&post.title)
            ));
            let slug = post.slug.as_deref().unwrap_or("N/A");
            match status {
                PostStatus::Published => lines.push(format!(
                    "   Date: {} | Slug: {}",
                    format_timestamp(post.created_at),
                    slug
                )),
                PostStatus::Draft => lines.push(format!(
                    "   Modified: {} | Slug: {}",
                    format_timestamp(post.modified_at),
                    slug
                )),
                _ => {}
            }
        }
    }

    lines.push(String::new());
    lines.push(wide.clone());
    lines.push("SUMMARY:".to_string());
    lines.push(wide);
    for (status, count) in counts {
        lines.push(format!("{}: {}", status.as_str().to_uppercase(), count));
    }

    lines.join("\n")
}

/// 列表模式的重複標題報告（不刪除）
///
/// 每組成員依抓取順序列出，標題取最先抓到的那篇。
pub fn render_duplicate_titles(groups: &[DuplicateGroup], fetched: &[RemoteItem]) -> String {
    let wide = "═".repeat(WIDE_RULE);
    let mut lines = vec![wide.clone(), "CHECKING FOR DUPLICATE TITLES:".to_string(), wide];

    if groups.is_empty() {
        lines.push("✅ No duplicate titles found".to_string());
        return lines.join("\n");
    }

    for group in groups {
        let member_ids: HashSet<u64> = std::iter::once(&group.keep)
            .chain(group.to_delete.iter())
            .map(|post| post.id)
            .collect();
        let members: Vec<&RemoteItem> = fetched
            .iter()
            .filter(|post| member_ids.contains(&post.id))
            .collect();
        let heading = members.first().copied().unwrap_or(&group.keep);

        lines.push(String::new());
        lines.push(format!("⚠️  DUPLICATE TITLE: \"{}\"", heading.title));
        for post in members {
            lines.push(format!("   - Post ID {} ({})", post.id, post.status));
        }
    }

    lines.push(String::new());
    lines.push(format!("⚠️  Found {} duplicate title(s)", groups.len()));
    lines.join("\n")
}
