//! URL routing and skill selection state.
//!
//! | Path        | Route      | Query                  |
//! |-------------|------------|------------------------|
//! | `/`         | Home       | -                      |
//! | `/about`    | About      | -                      |
//! | `/projects` | Projects   | `skill=<name>`         |
//! | `/contact`  | Contact    | `sent=ok` / `sent=failed` |
//! | anything    | NotFound   | -                      |
//!
//! Trailing slashes and a trailing `index.html` segment are ignored, so the
//! paths written by a static build (`/about/index.html`) resolve to the same
//! routes.
//!
//! A static build has no query string to read, so it links each skill to a
//! pre-rendered page instead (see [`LinkStyle`]).

use crate::contact::Notice;
use std::borrow::Cow;

/// Name of the query parameter mirroring the selected skill.
pub const SKILL_PARAM: &str = "skill";

// ============================================================================
// Route
// ============================================================================

/// A resolved page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects(Selection),
    Contact(Option<Notice>),
    /// Unmatched path, kept for the 404 message
    NotFound(String),
}

impl Route {
    /// Resolve a request URL (path plus optional query string).
    pub fn parse(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        // Paths are percent-encoded only; `+` stays literal
        let path = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));
        let trimmed = path.trim_matches('/');
        let trimmed = match trimmed.strip_suffix("index.html") {
            Some(rest) if rest.is_empty() || rest.ends_with('/') => rest.trim_end_matches('/'),
            _ => trimmed,
        };

        match trimmed {
            "" => Self::Home,
            "about" => Self::About,
            "projects" => Self::Projects(Selection::from_query(query)),
            "contact" => Self::Contact(query_param(query, "sent").and_then(|v| Notice::parse(&v))),
            _ => Self::NotFound(format!("/{trimmed}")),
        }
    }

    /// Canonical path, without query.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects(_) => "/projects",
            Self::Contact(_) => "/contact",
            Self::NotFound(path) => path,
        }
    }

    /// Navigation label, also used in the page title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects(_) => "Projects",
            Self::Contact(_) => "Contact",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    /// Same page, ignoring query state.
    pub fn same_page(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Routes linked from the navigation bar, in display order.
    pub fn navigation() -> [Self; 4] {
        [
            Self::Home,
            Self::About,
            Self::Projects(Selection::none()),
            Self::Contact(None),
        ]
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The currently selected skill on the Projects page, if any.
///
/// Mirrored into the URL as `?skill=<name>`; this is the only state carried
/// across navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn of(skill: impl Into<String>) -> Self {
        Self(Some(skill.into()))
    }

    /// Read the `skill` parameter; an empty value means no selection.
    pub fn from_query(query: &str) -> Self {
        Self(query_param(query, SKILL_PARAM).filter(|s| !s.is_empty()))
    }

    pub fn skill(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Exact match against the selected skill (chip highlighting).
    pub fn is_selected(&self, skill: &str) -> bool {
        self.skill() == Some(skill)
    }

    /// Selection after clicking `skill`: clicking the selected skill clears it.
    pub fn toggle(&self, skill: &str) -> Self {
        if self.is_selected(skill) {
            Self::none()
        } else {
            Self::of(skill)
        }
    }

    /// Link to the Projects page with this selection.
    pub fn href(&self) -> String {
        match self.skill() {
            Some(skill) => format!("/projects?{SKILL_PARAM}={}", urlencoding::encode(skill)),
            None => "/projects".to_owned(),
        }
    }

    /// Link to the Projects page in the given style.
    pub fn href_with(&self, style: LinkStyle) -> String {
        match (style, self.skill()) {
            (LinkStyle::Query, _) => self.href(),
            (LinkStyle::Static, Some(skill)) => format!("/projects/{}/", skill_slug(skill)),
            (LinkStyle::Static, None) => "/projects/".to_owned(),
        }
    }
}

/// How skill links address the filtered Projects page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/projects?skill=<name>`, resolved per request by `folio serve`
    #[default]
    Query,
    /// `/projects/<slug>/`, one pre-rendered page per skill
    Static,
}

/// Directory name for a skill's pre-rendered Projects page.
///
/// Alphanumerics are lowercased, `+` becomes `p` and `#` becomes `sharp`;
/// anything else collapses into a single `-`. `C++` → `cpp`, `Node.js` → `node-js`.
pub fn skill_slug(skill: &str) -> String {
    let mut slug = String::with_capacity(skill.len());
    for c in skill.chars() {
        match c {
            '+' => slug.push('p'),
            '#' => slug.push_str("sharp"),
            c if c.is_alphanumeric() => slug.extend(c.to_lowercase()),
            _ if slug.is_empty() || slug.ends_with('-') => {}
            _ => slug.push('-'),
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "skill".to_owned()
    } else {
        trimmed.to_owned()
    }
}

// ============================================================================
// Query Strings
// ============================================================================

/// Decode one `application/x-www-form-urlencoded` component (`+` is a space).
fn decode_component(s: &str) -> Cow<'_, str> {
    if !s.contains(['+', '%']) {
        return Cow::Borrowed(s);
    }
    let spaced = s.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Owned(spaced),
    }
}

/// Decoded `key=value` pairs of a query string or form body, in order.
pub fn parse_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                decode_component(key).into_owned(),
                decode_component(value).into_owned(),
            )
        })
}

/// First value of `name` in a query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    parse_pairs(query)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
