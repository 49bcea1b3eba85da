//! Project filtering by skill.
//!
//! The selected skill is passed in explicitly; keeping it in sync with the
//! `skill` query parameter is the router's job (see `route::Selection`).

use super::types::WorkItem;

/// Items carrying `selected` (ignoring case), or every item when nothing is selected.
///
/// Relative order is preserved in both cases. Takes any iterator of
/// references so a filtered result can be filtered again.
pub fn filter_items<'a, I>(items: I, selected: Option<&str>) -> Vec<&'a WorkItem>
where
    I: IntoIterator<Item = &'a WorkItem>,
{
    match selected {
        None => items.into_iter().collect(),
        Some(skill) => items.into_iter().filter(|item| item.has_tag(skill)).collect(),
    }
}

/// Result of filtering, together with the selection that produced it.
///
/// Distinguishes "no filter applied" from "filter matched nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a> {
    selected: Option<&'a str>,
    items: Vec<&'a WorkItem>,
}

impl<'a> Filtered<'a> {
    pub fn new(items: &'a [WorkItem], selected: Option<&'a str>) -> Self {
        Self {
            selected,
            items: filter_items(items, selected),
        }
    }

    pub const fn selected(&self) -> Option<&'a str> {
        self.selected
    }

    pub fn items(&self) -> &[&'a WorkItem] {
        &self.items
    }

    /// A skill was selected, whatever the outcome.
    pub const fn is_filtered(&self) -> bool {
        self.selected.is_some()
    }

    /// Nothing to show. Only possible when filtered or the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, tags: &[&str]) -> WorkItem {
        WorkItem {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            image: format!("{id}.jpg"),
            live_url: None,
            source_url: None,
            featured: false,
        }
    }

    fn ids(items: &[&WorkItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn sample() -> Vec<WorkItem> {
        vec![item("a", &["React", "Python"]), item("b", &["Go"])]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let items = sample();
        assert_eq!(ids(&filter_items(&items, Some("python"))), ["a"]);
        assert_eq!(ids(&filter_items(&items, Some("GO"))), ["b"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = sample();
        assert!(filter_items(&items, Some("Rust")).is_empty());
    }

    #[test]
    fn test_filter_absent_returns_all_in_order() {
        let items = sample();
        assert_eq!(ids(&filter_items(&items, None)), ["a", "b"]);
    }

    #[test]
    fn test_filter_exact_tag_only() {
        // "Node" must not match "Node.js"
        let items = vec![item("a", &["Node.js"]), item("b", &["Node"])];
        assert_eq!(ids(&filter_items(&items, Some("node"))), ["b"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![
            item("c", &["Docker"]),
            item("a", &["React"]),
            item("b", &["docker", "Go"]),
        ];
        assert_eq!(ids(&filter_items(&items, Some("Docker"))), ["c", "b"]);
    }

    #[test]
    fn test_filter_only_matching_items() {
        let items = vec![
            item("a", &["React", "Python"]),
            item("b", &["Go"]),
            item("c", &["python", "Django"]),
            item("d", &["TypeScript"]),
        ];
        for skill in ["python", "GO", "django", "Rust", "react"] {
            for found in filter_items(&items, Some(skill)) {
                assert!(found.has_tag(skill), "{} lacks {skill}", found.id);
            }
        }
    }

    #[test]
    fn test_filter_idempotent() {
        let items = vec![
            item("a", &["React", "Python"]),
            item("b", &["Go"]),
            item("c", &["PYTHON"]),
        ];
        for selected in [None, Some("python"), Some("Go"), Some("Rust")] {
            let once = filter_items(&items, selected);
            let twice = filter_items(once.iter().copied(), selected);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filtered_distinguishes_empty_from_unfiltered() {
        let items = sample();

        let all = Filtered::new(&items, None);
        assert!(!all.is_filtered());
        assert_eq!(all.len(), 2);

        let none = Filtered::new(&items, Some("Rust"));
        assert!(none.is_filtered());
        assert!(none.is_empty());
        assert_eq!(none.selected(), Some("Rust"));

        let empty_catalog = Filtered::new(&[], None);
        assert!(!empty_catalog.is_filtered());
        assert!(empty_catalog.is_empty());
    }
}
