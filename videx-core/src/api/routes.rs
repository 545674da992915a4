macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Liveness probe for process supervisors.
pub const HEALTH: &str = "/health";

/// Public HTML pages.
///
/// Detail pages accept four URL shapes: with or without a trailing slug
/// segment, each with or without a trailing slash. Only the `{id}` segment is
/// used for lookup.
pub mod site {
    pub const HOME: &str = "/";

    pub mod category {
        pub const LIST: &str = "/category/";
        pub const LIST_NO_SLASH: &str = "/category";
        pub const DETAIL_PATTERNS: [&str; 4] = [
            "/category/{id}",
            "/category/{id}/",
            "/category/{id}/{slug}",
            "/category/{id}/{slug}/",
        ];
    }

    pub mod speaker {
        pub const LIST: &str = "/speaker/";
        pub const LIST_NO_SLASH: &str = "/speaker";
        /// Query parameter selecting the leading character bucket.
        pub const CHARACTER_PARAM: &str = "character";
        pub const DETAIL_PATTERNS: [&str; 4] = [
            "/speaker/{id}",
            "/speaker/{id}/",
            "/speaker/{id}/{slug}",
            "/speaker/{id}/{slug}/",
        ];
    }

    pub mod video {
        pub const DETAIL_PATTERNS: [&str; 4] = [
            "/video/{id}",
            "/video/{id}/",
            "/video/{id}/{slug}",
            "/video/{id}/{slug}/",
        ];
    }

    pub mod search {
        pub const RESULTS: &str = "/search/";
        pub const RESULTS_NO_SLASH: &str = "/search";
        pub const QUERY_PARAM: &str = "q";
        pub const OPENSEARCH: &str = "/opensearch/";
        pub const SUGGESTIONS: &str = "/opensearch/suggestions/";
    }
}

/// Versioned JSON API route definitions.
pub mod v1 {
    pub const ROOT: &str = "/api/v1";

    pub mod category {
        pub const COLLECTION: &str = v1_path!("/category");
        pub const ITEM: &str = v1_path!("/category/{id}");
    }

    pub mod speaker {
        pub const COLLECTION: &str = v1_path!("/speaker");
        pub const ITEM: &str = v1_path!("/speaker/{id}");
    }

    pub mod video {
        pub const ITEM: &str = v1_path!("/video/{id}");
    }
}

pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Append query parameters to the provided route.
    pub fn with_query(route: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return route.to_string();
        }

        let mut path =
            String::with_capacity(route.len() + 1 + params.len() * 8);
        path.push_str(route);
        path.push('?');

        for (i, (key, value)) in params.iter().enumerate() {
            if i > 0 {
                path.push('&');
            }
            path.push_str(key);
            path.push('=');
            path.push_str(value);
        }

        path
    }

    /// Strip the `/api/<version>` prefix so a route can be registered on a
    /// nested router.
    pub fn relative_to_root<'a>(route: &'a str, root: &str) -> &'a str {
        route.strip_prefix(root).unwrap_or(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_routes_share_the_versioned_root() {
        assert_eq!(v1::category::ITEM, "/api/v1/category/{id}");
        assert_eq!(
            utils::relative_to_root(v1::video::ITEM, v1::ROOT),
            "/video/{id}"
        );
    }

    #[test]
    fn with_query_appends_parameters_in_order() {
        assert_eq!(
            utils::with_query(site::search::RESULTS, &[("q", "pypy"), ("page", "2")]),
            "/search/?q=pypy&page=2"
        );
        assert_eq!(utils::with_query("/x", &[]), "/x");
    }
}
