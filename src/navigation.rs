/// Element id an in-page link points at, if `href` is a non-empty `#fragment`
/// or a `/#fragment` on the home page.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('/')
        .unwrap_or(href)
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
}

/// `href` value for a section id. Works from any route since sections live on `/`.
pub fn anchor_href(id: &str) -> String {
    format!("/#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragments_are_targets() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("/#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/"), None);
        assert_eq!(anchor_target("/blog/post"), None);
        assert_eq!(anchor_target("/blog/#about"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
    }

    #[test]
    fn href_round_trips_through_target() {
        let href = anchor_href("contact");
        assert_eq!(href, "/#contact");
        assert_eq!(anchor_target(&href), Some("contact"));
    }
}
