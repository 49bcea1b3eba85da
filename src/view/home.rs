use super::{PageContext, asset_url};
use maud::{Markup, html};

/// Landing page: picture, headline, short bio and calls to action.
pub fn home(ctx: PageContext<'_>) -> Markup {
    let profile = &ctx.catalog.profile;

    html! {
        section.hero {
            @if let Some(avatar) = &profile.avatar {
                div.glass-card.avatar {
                    img src=(asset_url(avatar)) alt=(profile.name);
                }
            }
            div.bio {
                h1 { "Hi, I'm " span.gradient-text { (profile.name) } }
                h2 { (profile.title) }
                p { (profile.short_bio) }
                div.actions {
                    a.button href="/projects" { "View My Work →" }
                    a.button.outline href="/contact" { "Get In Touch" }
                    @if let Some(resume) = &profile.resume {
                        a.button.outline href=(asset_url(resume)) download=(resume_file_name(&profile.name)) {
                            "Download Resume"
                        }
                    }
                }
            }
        }
    }
}

/// "Alex Chen" → "alex-chen-resume.pdf"
fn resume_file_name(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}-resume.pdf")
}
