use maud::{Markup, html};

pub fn not_found(path: &str) -> Markup {
    html! {
        div.glass-card.not-found {
            h1.gradient-text { "404" }
            h2 { "Page Not Found" }
            p { "The page " code { (path) } " doesn't exist or has been moved." }
            a.button href="/" { "Back to Home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_escapes_path() {
        let html = not_found("/<script>").into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"href="/""#));
    }
}
