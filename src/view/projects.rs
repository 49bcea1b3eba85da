use super::{PageContext, asset_url, heading};
use crate::{
    catalog::WorkItem,
    route::{LinkStyle, SKILL_PARAM, Selection},
};
use maud::{Markup, PreEscaped, html};
use std::collections::BTreeMap;

/// Filter chips plus the (possibly filtered) project grid.
pub fn projects(ctx: PageContext<'_>, selection: &Selection) -> Markup {
    let catalog = ctx.catalog;
    let filtered = catalog.filter(selection.skill());
    let redirect = if ctx.links == LinkStyle::Static && !filtered.is_filtered() {
        query_redirect(ctx)
    } else {
        None
    };

    html! {
        (heading("My", "Projects", "A collection of my work showcasing various technologies and skills"))

        section.glass-card.filter {
            div.filter-header {
                span { "Filter by skill:" }
                @if filtered.is_filtered() {
                    a.clear href=(ctx.projects_href(&Selection::none())) { "Clear Filter" }
                }
            }
            div.chips {
                @for tag in catalog.project_tags() {
                    a.chip.active[selection.is_selected(tag)] href=(ctx.projects_href(&selection.toggle(tag))) { (tag) }
                }
            }
        }

        @if filtered.is_empty() {
            div.glass-card.empty {
                h3 { "No projects found" }
                @if let Some(skill) = filtered.selected() {
                    p { "No projects match the selected skill: " strong { (skill) } }
                    a.button href=(ctx.projects_href(&Selection::none())) { "Clear Filter" }
                } @else {
                    p { "There are no projects to show yet." }
                }
            }
        } @else {
            @if filtered.is_filtered() {
                p.hint { "Showing " (filtered.len()) " of " (catalog.projects.len()) " projects" }
            }
            div.grid {
                @for item in filtered.items() {
                    (card(item))
                }
            }
        }

        @if let Some(script) = redirect {
            script { (PreEscaped(script)) }
        }
    }
}

/// Script sending `?skill=<name>` links to the matching pre-rendered page.
///
/// A static host ignores the query string, so without it such links would
/// show every project. Skill names match case-insensitively.
fn query_redirect(ctx: PageContext<'_>) -> Option<String> {
    let targets: BTreeMap<String, String> = ctx
        .catalog
        .linked_skills()
        .into_iter()
        .map(|skill| (skill.to_lowercase(), ctx.projects_href(&Selection::of(skill))))
        .collect();
    if targets.is_empty() {
        return None;
    }
    let targets = serde_json::to_string(&targets).ok()?.replace("</", "<\\/");

    Some(format!(
        "(function(){{var s=new URLSearchParams(location.search).get(\"{SKILL_PARAM}\");\
         var t={targets};\
         if(s&&t[s.toLowerCase()])location.replace(t[s.toLowerCase()]);}})();"
    ))
}

fn card(item: &WorkItem) -> Markup {
    html! {
        article.glass-card.project {
            div.thumbnail {
                img src=(asset_url(&item.image)) alt=(item.title) loading="lazy";
                @if item.featured {
                    span.badge { "Featured" }
                }
            }
            h3 { (item.title) }
            p { (item.description) }
            ul.tags {
                @for tag in &item.tags {
                    li { (tag) }
                }
            }
            div.links {
                @if let Some(url) = &item.live_url {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Live Demo" }
                }
                @if let Some(url) = &item.source_url {
                    a href=(url) target="_blank" rel="noopener noreferrer" { "Source" }
                }
            }
        }
    }
}
