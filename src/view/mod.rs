//! HTML views, one per route.
//!
//! Every view is a pure function of the catalog, the config and the route
//! state; the same markup is served by `folio serve` and written by
//! `folio build`. The only difference is how skill links are addressed
//! (see [`LinkStyle`]).

use crate::{
    catalog::Catalog,
    config::SiteConfig,
    route::{LinkStyle, Route, Selection},
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

mod about;
mod contact;
mod home;
mod not_found;
mod projects;

/// Stylesheet inlined into every page (embedded at compile time)
const STYLE: &str = include_str!("../embed/style.css");

/// Everything a view may read.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub links: LinkStyle,
}

impl<'a> PageContext<'a> {
    /// Context for pages rendered per request, linking skills by query string.
    pub const fn new(config: &'a SiteConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog, links: LinkStyle::Query }
    }

    /// Context for `folio build`, linking skills to their pre-rendered pages.
    pub const fn for_static_site(config: &'a SiteConfig, catalog: &'a Catalog) -> Self {
        Self { config, catalog, links: LinkStyle::Static }
    }

    /// Link to the Projects page with `selection`.
    fn projects_href(&self, selection: &Selection) -> String {
        selection.href_with(self.links)
    }
}

/// Render a route to a complete HTML document.
pub fn render(route: &Route, ctx: PageContext<'_>) -> Markup {
    let content = match route {
        Route::Home => home::home(ctx),
        Route::About => about::about(ctx),
        Route::Projects(selection) => projects::projects(ctx, selection),
        Route::Contact(notice) => contact::contact(ctx, *notice),
        Route::NotFound(path) => not_found::not_found(path),
    };
    page(ctx, route, content)
}

/// Shared document shell: head, navigation bar and footer.
fn page(ctx: PageContext<'_>, route: &Route, content: Markup) -> Markup {
    let base = &ctx.config.base;
    let profile = &ctx.catalog.profile;

    html! {
        (DOCTYPE)
        html lang=(base.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (route.title()) " | " (base.title) }
                @if !base.description.is_empty() {
                    meta name="description" content=(base.description);
                }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header.navbar {
                    a.brand href="/" { (profile.name) }
                    nav {
                        @for item in Route::navigation() {
                            a.active[item.same_page(route)] href=(item.path()) { (item.title()) }
                        }
                    }
                }
                main { (content) }
                footer {
                    @if base.copyright.is_empty() {
                        "© " (profile.name)
                    } @else {
                        "© " (base.copyright)
                    }
                }
            }
        }
    }
}

/// Section heading used at the top of every page: `<h1>` plus subtitle.
fn heading(plain: &str, highlighted: &str, subtitle: &str) -> Markup {
    html! {
        div.heading {
            h1 { (plain) " " span.gradient-text { (highlighted) } }
            p.subtitle { (subtitle) }
        }
    }
}

/// Public URL of a file in the assets directory. Absolute URLs pass through.
fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        format!("/{}", path.trim_start_matches('/'))
    }
}
