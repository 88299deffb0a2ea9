//! Top-level routes, matched against the browser pathname.

/// One top-level content subtree. Exactly one matches any path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    TableView,
    About,
    Resources,
    Press,
    SiteInformation,
    /// Map and list. Catch-all.
    Home,
}

impl Route {
    /// Match order. [`Route::Home`] is last and matches everything.
    pub const ORDER: [Route; 6] = [
        Route::TableView,
        Route::About,
        Route::Resources,
        Route::Press,
        Route::SiteInformation,
        Route::Home,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::TableView => "/table-view",
            Self::About => "/about",
            Self::Resources => "/resources",
            Self::Press => "/press",
            Self::SiteInformation => "/site-information",
            Self::Home => "/",
        }
    }

    /// First route whose pattern prefixes `pathname` on a segment boundary,
    /// ignoring ASCII case.
    ///
    /// Query strings and fragments are ignored.
    pub fn match_path(pathname: &str) -> Self {
        let path = pathname
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        Self::ORDER
            .into_iter()
            .find(|route| route.matches(path))
            .unwrap_or(Self::Home)
    }

    fn matches(&self, path: &str) -> bool {
        let pattern = self.path();
        if pattern == "/" {
            return true;
        }
        let Some(head) = path.as_bytes().get(..pattern.len()) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(pattern.as_bytes()) {
            return false;
        }
        // `head` matched ASCII bytes, so `pattern.len()` is a char boundary.
        let rest = &path[pattern.len()..];
        rest.is_empty() || rest.starts_with('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::match_path("/"), Route::Home);
        assert_eq!(Route::match_path(""), Route::Home);
        assert_eq!(Route::match_path("/about"), Route::About);
        assert_eq!(Route::match_path("/about/"), Route::About);
        assert_eq!(Route::match_path("/table-view"), Route::TableView);
        assert_eq!(Route::match_path("/resources/food"), Route::Resources);
        assert_eq!(Route::match_path("/press"), Route::Press);
        assert_eq!(Route::match_path("/site-information"), Route::SiteInformation);
    }

    #[test]
    fn test_route_segment_boundary() {
        assert_eq!(Route::match_path("/aboutus"), Route::Home);
        assert_eq!(Route::match_path("/pressroom"), Route::Home);
        assert_eq!(Route::match_path("/unknown/page"), Route::Home);
    }

    #[test]
    fn test_route_ignores_case() {
        assert_eq!(Route::match_path("/About"), Route::About);
        assert_eq!(Route::match_path("/TABLE-VIEW/"), Route::TableView);
        assert_eq!(Route::match_path("/Site-Information?x=1"), Route::SiteInformation);
        assert_eq!(Route::match_path("/Aboutus"), Route::Home);
        assert_eq!(Route::match_path("/ab\u{e9}"), Route::Home);
    }

    #[test]
    fn test_route_ignores_query_and_hash() {
        assert_eq!(Route::match_path("/about?lang=es"), Route::About);
        assert_eq!(Route::match_path("/press#coverage"), Route::Press);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ORDER {
            assert_eq!(Route::match_path(route.path()), route);
        }
    }
}
