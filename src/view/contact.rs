use super::{PageContext, heading};
use crate::contact::Notice;
use maud::{Markup, html};

/// Contact details and the message form. A `notice` is shown after a submission.
pub fn contact(ctx: PageContext<'_>, notice: Option<Notice>) -> Markup {
    let profile = &ctx.catalog.profile;
    let mailto = format!("mailto:{}", profile.email);

    html! {
        (heading("Get In", "Touch", "Have a project in mind or want to collaborate? I'd love to hear from you!"))

        @if let Some(notice) = notice {
            div.notice.success[notice == Notice::Sent].failure[notice == Notice::Failed] role="status" {
                h4 { (notice.title()) }
                p { (notice.description()) }
            }
        }

        div.contact {
            section.glass-card.info {
                h2.gradient-text { "Contact Information" }
                p { "Feel free to reach out through any of these channels." }
                a href=(mailto) { (profile.email) }
                div.social {
                    @if let Some(url) = &profile.linkedin {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "LinkedIn" }
                    }
                    @if let Some(url) = &profile.github {
                        a href=(url) target="_blank" rel="noopener noreferrer" { "GitHub" }
                    }
                    a href=(mailto) { "Email" }
                }
            }

            form.glass-card method="post" action="/contact" {
                label for="name" { "Name" }
                input id="name" type="text" name="name" placeholder="Your name" required;
                label for="email" { "Email" }
                input id="email" type="email" name="email" placeholder="your.email@example.com" required;
                label for="message" { "Message" }
                textarea id="message" name="message" rows="6" placeholder="Tell me about your project..." required {}
                button.button type="submit" { "Send Message" }
            }
        }
    }
}
