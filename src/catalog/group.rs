//! Skill grouping and extraction.
//!
//! Both operations are pure folds over the static catalog:
//!
//! - [`group_by_category`]: skills per category, first-seen category order
//! - [`distinct_sorted_tags`]: every tag used by a project, deduplicated and sorted

use super::types::{Category, Tag, WorkItem};
use serde::Serialize;
use std::collections::BTreeSet;

/// Skills grouped by category.
///
/// Categories iterate in the order they first appear in the source sequence;
/// skills keep their source order within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryGroups<'a> {
    groups: Vec<CategoryGroup<'a>>,
}

/// One category and its skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub tags: Vec<&'a Tag>,
}

impl<'a> CategoryGroups<'a> {
    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group skills by category, preserving first occurrence order.
pub fn group_by_category(tags: &[Tag]) -> CategoryGroups<'_> {
    let groups = tags.iter().fold(Vec::<CategoryGroup<'_>>::new(), |mut acc, tag| {
        match acc.iter_mut().find(|g| g.category == tag.category) {
            Some(group) => group.tags.push(tag),
            None => acc.push(CategoryGroup {
                category: tag.category,
                tags: vec![tag],
            }),
        }
        acc
    });
    CategoryGroups { groups }
}

/// Distinct tags used by any project, sorted by UTF-16 code unit.
///
/// Deduplication is by exact string: "React" and "react" are both kept.
/// UTF-16 order matches byte order except for characters beyond the Basic
/// Multilingual Plane, which sort before U+E000..=U+FFFF.
pub fn distinct_sorted_tags(items: &[WorkItem]) -> Vec<&str> {
    let mut tags: Vec<&str> = items
        .iter()
        .flat_map(|item| item.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    tags.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    tags
}
