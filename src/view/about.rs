use super::{PageContext, heading};
use crate::route::Selection;
use maud::{Markup, html};

/// Long bio, soft skills, and technical skills grouped by category.
///
/// Each technical skill links to the Projects page filtered by it.
pub fn about(ctx: PageContext<'_>) -> Markup {
    let profile = &ctx.catalog.profile;
    let groups = ctx.catalog.skill_groups();

    html! {
        (heading("About", "Me", "Get to know more about my journey and expertise"))

        section.glass-card {
            h2.gradient-text { "My Story" }
            @for paragraph in profile.paragraphs() {
                p { (paragraph) }
            }
        }

        @if !profile.soft_skills.is_empty() {
            section.glass-card {
                h2.gradient-text { "Soft Skills" }
                div.chips {
                    @for skill in &profile.soft_skills {
                        span.chip { (skill) }
                    }
                }
            }
        }

        @if !groups.is_empty() {
            section.glass-card {
                h2.gradient-text { "Technical Skills" }
                p.hint { "Click a skill to see related projects" }
                div.skill-groups {
                    @for group in groups.iter() {
                        div.skill-group {
                            h3 { (group.category) }
                            ul {
                                @for tag in &group.tags {
                                    li {
                                        a.skill href=(ctx.projects_href(&Selection::of(tag.name.as_str()))) {
                                            span { (tag.name) }
                                            span.count { (tag.count) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{Catalog, DEFAULT_CATALOG},
        config::SiteConfig,
    };

    fn render() -> String {
        let config = SiteConfig::default();
        let catalog = Catalog::from_str(DEFAULT_CATALOG).unwrap();
        about(PageContext::new(&config, &catalog)).into_string()
    }

    #[test]
    fn test_about_categories_in_source_order() {
        let html = render();
        let positions: Vec<_> = ["Languages", "Frameworks", "Tools", "Databases"]
            .iter()
            .map(|c| html.find(&format!("<h3>{c}</h3>")).unwrap())
            .collect();
        assert!(positions.is_sorted());
    }

    #[test]
    fn test_about_skill_links() {
        let html = render();
        assert!(html.contains(r#"href="/projects?skill=Next.js""#));
        assert!(html.contains(r#"href="/projects?skill=Python""#));
    }

    #[test]
    fn test_about_static_skill_links() {
        let config = SiteConfig::default();
        let catalog = Catalog::from_str(DEFAULT_CATALOG).unwrap();
        let html = about(PageContext::for_static_site(&config, &catalog)).into_string();
        assert!(html.contains(r#"href="/projects/next-js/""#));
        assert!(html.contains(r#"href="/projects/python/""#));
        assert!(!html.contains("?skill="));
    }

    #[test]
    fn test_about_bio_paragraphs() {
        let html = render();
        assert_eq!(html.matches("<p>").count(), 3);
        assert!(html.contains("Problem Solving"));
    }
}
