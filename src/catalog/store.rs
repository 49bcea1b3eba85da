//! Catalog loading and validation.
//!
//! The catalog is read once at startup from `portfolio.toml` and never
//! mutated afterwards. Every command shares it through an `Arc`.

use super::{
    filter::Filtered,
    group::{CategoryGroups, distinct_sorted_tags, group_by_category},
    types::{Profile, Tag, WorkItem},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Catalog parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),

    #[error("duplicate skill `{0}`")]
    DuplicateSkill(String),

    #[error("project `{0}` has no skills")]
    UntaggedProject(String),
}

/// Profile, skills and projects of one portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub profile: Profile,

    #[serde(default)]
    pub skills: Vec<Tag>,

    #[serde(default)]
    pub projects: Vec<WorkItem>,
}

impl Catalog {
    /// Parse and validate a catalog from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from file path.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content =
            fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Reject duplicate ids, duplicate skill names and untagged projects.
    ///
    /// Project tags missing from `skills` are fine: the two lists are
    /// maintained independently.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProject(project.id.clone()));
            }
            if project.tags.is_empty() {
                return Err(CatalogError::UntaggedProject(project.id.clone()));
            }
        }

        let mut names = HashSet::new();
        for skill in &self.skills {
            if !names.insert(skill.name.as_str()) {
                return Err(CatalogError::DuplicateSkill(skill.name.clone()));
            }
        }

        Ok(())
    }

    /// Skills grouped by category for the About page.
    pub fn skill_groups(&self) -> CategoryGroups<'_> {
        group_by_category(&self.skills)
    }

    /// Skills actually used by projects, for the filter chips.
    pub fn project_tags(&self) -> Vec<&str> {
        distinct_sorted_tags(&self.projects)
    }

    /// Every skill name a page links to: listed skills in source order, then
    /// project tags. Exact duplicates are dropped.
    pub fn linked_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.skills
            .iter()
            .map(|skill| skill.name.as_str())
            .chain(self.project_tags())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Projects matching an optional skill selection.
    pub fn filter<'a>(&'a self, selected: Option<&'a str>) -> Filtered<'a> {
        Filtered::new(&self.projects, selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    const MINIMAL: &str = r#"
        [profile]
        name = "Alex Chen"
        title = "Developer"
        email = "alex@example.com"
        short_bio = "Builds things."
    "#;

    #[test]
    fn test_minimal_catalog() {
        let catalog = Catalog::from_str(MINIMAL).unwrap();
        assert_eq!(catalog.profile.name, "Alex Chen");
        assert!(catalog.skills.is_empty());
        assert!(catalog.projects.is_empty());
        assert!(catalog.profile.github.is_none());
    }

    #[test]
    fn test_full_entries() {
        let content = format!(
            r#"{MINIMAL}
            [[skills]]
            name = "Python"
            category = "Languages"
            count = 8

            [[projects]]
            id = "gan"
            title = "Sketch-to-Image GAN"
            description = "Sketches to photos."
            tags = ["Python", "GAN"]
            image = "images/project1.jpg"
            live_url = "https://example.com"
            featured = true

            [[projects]]
            id = "chat"
            title = "Chat"
            description = "Realtime chat."
            tags = ["React"]
            image = "images/project3.jpg"
            "#
        );
        let catalog = Catalog::from_str(&content).unwrap();

        assert_eq!(catalog.skills[0].category, Category::Languages);
        assert_eq!(catalog.skills[0].count, 8);
        assert!(catalog.projects[0].featured);
        assert!(!catalog.projects[1].featured);
        assert_eq!(catalog.projects[1].live_url, None);
        assert_eq!(catalog.projects[1].title, "Chat");
        // GAN has no [[skills]] entry; that is allowed
        assert_eq!(catalog.project_tags(), ["GAN", "Python", "React"]);
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let content = format!(
            r#"{MINIMAL}
            [[projects]]
            id = "x"
            title = "X"
            description = ""
            tags = ["Go"]
            image = "x.jpg"

            [[projects]]
            id = "x"
            title = "X again"
            description = ""
            tags = ["Go"]
            image = "x.jpg"
            "#
        );
        let err = Catalog::from_str(&content).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateProject(ref id) if id == "x"));
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let content = format!(
            r#"{MINIMAL}
            [[skills]]
            name = "Go"
            category = "Languages"

            [[skills]]
            name = "Go"
            category = "Tools"
            "#
        );
        let err = Catalog::from_str(&content).unwrap_err();
        assert_eq!(err.to_string(), "duplicate skill `Go`");
    }

    #[test]
    fn test_untagged_project_rejected() {
        let content = format!(
            r#"{MINIMAL}
            [[projects]]
            id = "bare"
            title = "Bare"
            description = ""
            tags = []
            image = "x.jpg"
            "#
        );
        let err = Catalog::from_str(&content).unwrap_err();
        assert!(matches!(err, CatalogError::UntaggedProject(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let content = format!("{MINIMAL}\nwebsite = \"https://example.com\"\n");
        // Lands in [profile], which denies unknown fields
        assert!(Catalog::from_str(&content).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(err.to_string().contains("portfolio.toml"));
    }

    #[test]
    fn test_default_catalog_parses() {
        let catalog = Catalog::from_str(super::super::DEFAULT_CATALOG).unwrap();
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.skills.len(), 19);
        assert_eq!(catalog.skill_groups().iter().count(), 4);
        assert_eq!(catalog.filter(Some("python")).len(), 3);
        assert_eq!(catalog.linked_skills().len(), 29);
    }

    #[test]
    fn test_linked_skills() {
        let mut catalog = Catalog::from_str(super::super::DEFAULT_CATALOG).unwrap();
        catalog.skills.truncate(2);
        catalog.projects.truncate(1);

        let first = catalog.skills[0].name.clone();
        let second = catalog.skills[1].name.clone();
        catalog.projects[0].tags = vec!["Zig".into(), first.clone(), "Ada".into()];

        assert_eq!(catalog.linked_skills(), [first.as_str(), second.as_str(), "Ada", "Zig"]);
    }
}
