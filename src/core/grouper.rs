use crate::core::normalize::normalize;
use crate::domain::model::{DuplicateGroup, RemoteItem};
use std::collections::HashMap;

/// 依正規化標題分組，只回傳兩篇以上的群組。
///
/// 群組依標題第一次出現的順序輸出；每組以建立時間遞增做穩定排序，
/// 最早的一篇保留，其餘列入刪除。沒有建立時間的文章排在最後。
pub fn group_duplicates(items: &[RemoteItem]) -> Vec<DuplicateGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut by_title: HashMap<String, Vec<&RemoteItem>> = HashMap::new();

    for item in items {
        let key = normalize(&item.title);
        if key.is_empty() {
            continue;
        }

        by_title
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(item);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let mut members = by_title.remove(&key)?;
            if members.len() < 2 {
                return None;
            }

            // sort_by_key 是穩定排序，同時間的保留先抓到的那篇
            members.sort_by_key(|item| (item.created_at.is_none(), item.created_at));

            let mut members = members.into_iter().cloned();
            let keep = members.next()?;
            Some(DuplicateGroup {
                normalized_title: key,
                keep,
                to_delete: members.collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{parse_wp_timestamp, PostStatus};
    use std::collections::HashSet;

    fn item(id: u64, title: &str, date: Option<&str>) -> RemoteItem {
        let created_at = date.and_then(parse_wp_timestamp);
        RemoteItem {
            id,
            title: title.to_string(),
            status: PostStatus::Draft,
            created_at,
            modified_at: created_at,
            slug: None,
        }
    }

    #[test]
    fn test_keeps_earliest_created() {
        let items = vec![
            item(1, "Foo", Some("2024-02-01T00:00:00")),
            item(2, "foo", Some("2024-01-01T00:00:00")),
        ];

        let groups = group_duplicates(&items);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].normalized_title, "foo");
        assert_eq!(groups[0].keep.id, 2);
        let deleted: Vec<u64> = groups[0].to_delete.iter().map(|i| i.id).collect();
        assert_eq!(deleted, vec![1]);
    }

    #[test]
    fn test_unique_titles_yield_no_groups() {
        let items = vec![
            item(1, "Alpha", Some("2024-01-01T00:00:00")),
            item(2, "Beta", Some("2024-01-02T00:00:00")),
            item(3, "Gamma", Some("2024-01-03T00:00:00")),
        ];

        assert!(group_duplicates(&items).is_empty());
    }

    #[test]
    fn test_empty_normalized_titles_are_ignored() {
        let items = vec![
            item(1, "", Some("2024-01-01T00:00:00")),
            item(2, "<br/>", Some("2024-01-02T00:00:00")),
            item(3, "&nbsp;", Some("2024-01-03T00:00:00")),
        ];

        assert!(group_duplicates(&items).is_empty());
    }

    #[test]
    fn test_three_drafts_with_whitespace_variants() {
        let items = vec![
            item(10, "My Post", Some("2024-03-03T00:00:00")),
            item(11, "My Post", Some("2024-03-01T00:00:00")),
            item(12, "my   post", Some("2024-03-02T00:00:00")),
        ];

        let groups = group_duplicates(&items);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].keep.id, 11);
        let deleted: Vec<u64> = groups[0].to_delete.iter().map(|i| i.id).collect();
        assert_eq!(deleted, vec![12, 10]);
    }

    #[test]
    fn test_tie_keeps_first_fetched() {
        let items = vec![
            item(5, "Same", Some("2024-01-01T00:00:00")),
            item(4, "same", Some("2024-01-01T00:00:00")),
            item(3, "SAME", Some("2024-01-01T00:00:00")),
        ];

        let groups = group_duplicates(&items);

        assert_eq!(groups[0].keep.id, 5);
        let deleted: Vec<u64> = groups[0].to_delete.iter().map(|i| i.id).collect();
        assert_eq!(deleted, vec![4, 3]);
    }

    #[test]
    fn test_undated_items_never_kept_over_dated() {
        let items = vec![
            item(1, "Post", None),
            item(2, "Post", Some("2024-06-01T00:00:00")),
        ];

        let groups = group_duplicates(&items);

        assert_eq!(groups[0].keep.id, 2);
        assert_eq!(groups[0].to_delete[0].id, 1);
    }

    #[test]
    fn test_each_item_in_at_most_one_group() {
        let items = vec![
            item(1, "A", Some("2024-01-01T00:00:00")),
            item(2, "B", Some("2024-01-02T00:00:00")),
            item(3, "a", Some("2024-01-03T00:00:00")),
            item(4, "b", Some("2024-01-04T00:00:00")),
            item(5, "C", Some("2024-01-05T00:00:00")),
            item(6, "<b>A</b>", Some("2024-01-06T00:00:00")),
        ];

        let groups = group_duplicates(&items);
        assert_eq!(groups.len(), 2);

        let mut seen = HashSet::new();
        for group in &groups {
            assert!(group.to_delete.len() + 1 >= 2);
            assert!(!group.to_delete.iter().any(|i| i.id == group.keep.id));
            assert!(seen.insert(group.keep.id));
            for doomed in &group.to_delete {
                assert!(seen.insert(doomed.id));
            }
        }
        assert!(!seen.contains(&5));

        let a = groups.iter().find(|g| g.normalized_title == "a").unwrap();
        assert_eq!(a.keep.id, 1);
        assert_eq!(a.to_delete.len(), 2);
    }
}
