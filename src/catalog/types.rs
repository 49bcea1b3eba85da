//! Data types for the portfolio catalog.
//!
//! These types are deserialized from `portfolio.toml` and serialized again
//! into the `_data/*.json` exports of a static build.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed partition of skills for grouped display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Languages,
    Frameworks,
    Tools,
    Databases,
}

impl Category {
    /// Display name, identical to the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frameworks => "Frameworks",
            Self::Tools => "Tools",
            Self::Databases => "Databases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A skill label, one entry of `[[skills]]`.
///
/// `count` is an author-supplied display weight. It is never derived from
/// the tags used by projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub count: u32,
}

/// A portfolio entry, one entry of `[[projects]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkItem {
    /// Unique identifier, e.g. "realtime-chat-app"
    pub id: String,

    pub title: String,

    pub description: String,

    /// Skills in display form ("Node.js", "PostgreSQL")
    pub tags: Vec<String>,

    /// Image path relative to the assets directory
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
}

impl WorkItem {
    /// Whether any tag equals `skill`, ignoring case.
    pub fn has_tag(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase() == skill)
    }
}

/// `[profile]` section: who the portfolio belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,

    /// Headline, e.g. "Full-Stack Developer & AI Engineer"
    pub title: String,

    pub email: String,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub linkedin: Option<String>,

    pub short_bio: String,

    /// Paragraphs separated by blank lines
    #[serde(default)]
    pub long_bio: String,

    #[serde(default)]
    pub soft_skills: Vec<String>,

    /// Profile picture, relative to the assets directory
    #[serde(default)]
    pub avatar: Option<String>,

    /// Downloadable resume, relative to the assets directory
    #[serde(default)]
    pub resume: Option<String>,
}

impl Profile {
    /// Split the long bio into trimmed, non-empty paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.long_bio
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
