//! Exact-match rewrite rules applied to link destinations before navigation.

/// In-page anchors on the about page that may stand in for a bare home link.
pub const ABOUT_ANCHORS: [&str; 3] = [
    "aboutus/#who-we-are",
    "aboutus/#what-we-do",
    "aboutus/#meet-our-team",
];

/// Rewrites a requested path to its canonical route.
///
/// The table is exact-match only: `/ourwork` folds into the home page and the
/// legacy map URL moves under its new name. Everything else, the about-page
/// anchors included, passes through unchanged.
pub fn rewrite_href(href: &str) -> &str {
    match href {
        "/ourwork" => "/",
        "/contactus/maplocation" => "/contactus/map",
        _ => href,
    }
}

/// Resolves the final navigation target for a link.
///
/// An anchor override replaces a bare home href when it names one of
/// [`ABOUT_ANCHORS`]; every other combination falls through to
/// [`rewrite_href`].
pub fn resolve_href(href: &str, anchor: Option<&str>) -> String {
    if href == "/" {
        if let Some(anchor) = anchor {
            if ABOUT_ANCHORS.contains(&anchor) {
                return anchor.to_string();
            }
        }
    }
    rewrite_href(href).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_known_routes() {
        assert_eq!(rewrite_href("/ourwork"), "/");
        assert_eq!(rewrite_href("/contactus/maplocation"), "/contactus/map");
    }

    #[test]
    fn leaves_unknown_routes_alone() {
        assert_eq!(rewrite_href("/"), "/");
        assert_eq!(rewrite_href("/contactus"), "/contactus");
        assert_eq!(rewrite_href("/ourwork/"), "/ourwork/");
        assert_eq!(rewrite_href("aboutus/#who-we-are"), "aboutus/#who-we-are");
    }

    #[test]
    fn rewrite_is_idempotent() {
        for href in ["/ourwork", "/contactus/maplocation", "/", "/donate"] {
            let once = rewrite_href(href);
            assert_eq!(rewrite_href(once), once);
        }
    }

    #[test]
    fn anchor_override_replaces_a_bare_home_link() {
        assert_eq!(
            resolve_href("/", Some("aboutus/#who-we-are")),
            "aboutus/#who-we-are"
        );
        assert_eq!(
            resolve_href("/", Some("aboutus/#meet-our-team")),
            "aboutus/#meet-our-team"
        );
    }

    #[test]
    fn anchor_override_requires_a_known_anchor() {
        assert_eq!(resolve_href("/", Some("aboutus/#history")), "/");
        assert_eq!(resolve_href("/", Some("")), "/");
    }

    #[test]
    fn anchor_override_only_applies_to_the_home_href() {
        assert_eq!(resolve_href("/ourwork", Some("aboutus/#who-we-are")), "/");
        assert_eq!(
            resolve_href("/donate", Some("aboutus/#what-we-do")),
            "/donate"
        );
    }

    #[test]
    fn resolve_applies_the_rewrite_table() {
        assert_eq!(resolve_href("/contactus/maplocation", None), "/contactus/map");
        assert_eq!(resolve_href("/donate", None), "/donate");
    }
}
