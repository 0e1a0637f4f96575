//! Page links under the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/busbook` when the site is
//! served from a subdirectory). Without it every link is root-anchored.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Absolute URL path for a relative page link such as
/// `payment?busName=Super%20Bus`. An empty link is the Book Now page.
#[must_use]
pub fn page_url(href: &str) -> String {
    join(public_url(), href)
}

/// Router basename, `None` when the site lives at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    Some(trim_base(public_url()))
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// `path` relative to the deployment base, always starting with `/`.
#[must_use]
pub fn strip_base(path: &str) -> String {
    strip_base_with(public_url(), path)
}

fn strip_base_with(base: &str, path: &str) -> String {
    let base = trim_base(base);
    let rest = path.strip_prefix(base).unwrap_or(path);
    format!("/{}", rest.trim_start_matches('/'))
}

fn trim_base(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

fn join(base: &str, href: &str) -> String {
    format!("{}/{}", trim_base(base), href.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_are_root_anchored_without_base() {
        assert_eq!(page_url("login"), "/login");
        assert_eq!(page_url(""), "/");
        assert_eq!(
            page_url("payment?busName=Super%20Bus&seatNumbers=2,7"),
            "/payment?busName=Super%20Bus&seatNumbers=2,7"
        );
        assert_eq!(router_base(), None);
    }

    #[test]
    fn links_are_prefixed_with_the_base() {
        assert_eq!(
            join("/busbook/", "seat-selection?busId=1"),
            "/busbook/seat-selection?busId=1"
        );
        assert_eq!(join("/busbook", "/search"), "/busbook/search");
        assert_eq!(join("/busbook", ""), "/busbook/");
    }

    #[test]
    fn served_paths_lose_the_base() {
        assert_eq!(strip_base_with("/busbook", "/busbook/"), "/");
        assert_eq!(strip_base_with("/busbook/", "/busbook/payment"), "/payment");
        assert_eq!(strip_base_with("", "/search.html"), "/search.html");
        assert_eq!(strip_base_with("/busbook", "/other/login"), "/other/login");
    }

    #[test]
    fn base_is_trimmed() {
        assert_eq!(trim_base(" /busbook/ "), "/busbook");
        assert_eq!(trim_base("/"), "");
    }
}
