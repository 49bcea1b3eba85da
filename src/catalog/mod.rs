//! Portfolio catalog: profile, skills and projects.
//!
//! # Data flow
//!
//! ```text
//! portfolio.toml ──► Catalog::from_path() ──► Arc<Catalog>
//!                                                │
//!              ┌─────────────────────────────────┼──────────────────────┐
//!              ▼                                 ▼                      ▼
//!      skill_groups()                     project_tags()          filter(skill)
//!   (About: by category)             (Projects: filter chips)   (Projects: grid)
//! ```
//!
//! # File layout
//!
//! ```toml
//! [profile]
//! name = "Alex Chen"
//! title = "Full-Stack Developer"
//! email = "alex@example.com"
//! short_bio = "..."
//!
//! [[skills]]
//! name = "Python"
//! category = "Languages"   # Languages | Frameworks | Tools | Databases
//! count = 8
//!
//! [[projects]]
//! id = "sketch-to-image-gan"
//! title = "Sketch-to-Image GAN"
//! description = "..."
//! tags = ["Python", "TensorFlow"]
//! image = "images/project1.jpg"
//! featured = true
//! ```

mod filter;
mod group;
mod store;
mod types;

pub use filter::Filtered;
pub use group::{CategoryGroup, CategoryGroups};
pub use store::{Catalog, CatalogError};
pub use types::{Category, Profile, Tag, WorkItem};

/// Sample catalog written by `folio init`.
pub const DEFAULT_CATALOG: &str = include_str!("../embed/portfolio.toml");
