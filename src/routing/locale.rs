//! Locale-prefix decision logic.
//!
//! # Responsibilities
//! - Detect whether a path already carries a supported locale prefix
//! - Compute the default-locale redirect target for unprefixed paths
//! - Preserve the query string across redirects
//!
//! # Design Decisions
//! - Pure function of (path, query) and static configuration; no I/O
//! - Total: empty or malformed paths redirect to the default-locale root
//! - Idempotent: the redirect target is itself a pass-through path

use crate::config::LocaleConfig;

/// Outcome of evaluating a request path against the locale rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Path already carries a supported locale prefix; proceed unmodified.
    PassThrough,
    /// Path carries no locale; redirect to this locale-prefixed target.
    Redirect(String),
}

/// Stateless locale router compiled from configuration at startup.
#[derive(Debug, Clone)]
pub struct LocaleRouter {
    supported: Vec<String>,
    default_locale: String,
}

impl LocaleRouter {
    /// Create a router for the given supported locales and default locale.
    pub fn new(supported: Vec<String>, default_locale: impl Into<String>) -> Self {
        Self {
            supported,
            default_locale: default_locale.into(),
        }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(config.supported.clone(), config.default_locale.clone())
    }

    /// Supported locale codes.
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// The locale assumed when a path carries none.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns true if the path starts with `/<locale>/` or equals
    /// `/<locale>` for any supported locale.
    pub fn has_locale(&self, path: &str) -> bool {
        self.split_locale(path).is_some()
    }

    /// Split a locale-prefixed path into (locale, remainder).
    ///
    /// The remainder always starts with `/`; a bare `/<locale>` yields `/`.
    pub fn split_locale<'a>(&self, path: &'a str) -> Option<(&str, &'a str)> {
        let trimmed = path.strip_prefix('/')?;
        for locale in &self.supported {
            if let Some(rest) = trimmed.strip_prefix(locale.as_str()) {
                if rest.is_empty() {
                    return Some((locale, "/"));
                }
                if rest.starts_with('/') {
                    return Some((locale, rest));
                }
            }
        }
        None
    }

    /// Evaluate the locale rule for a request path.
    ///
    /// The query string, when present, is carried over to the redirect
    /// target unchanged.
    pub fn decide(&self, path: &str, query: Option<&str>) -> RouteDecision {
        if self.has_locale(path) {
            return RouteDecision::PassThrough;
        }

        // Paths missing the leading slash are treated as unprefixed and
        // anchored at the default-locale root.
        let target = if path.starts_with('/') {
            format!("/{}{}", self.default_locale, path)
        } else {
            format!("/{}/{}", self.default_locale, path)
        };

        let target = match query {
            Some(q) if !q.is_empty() => format!("{}?{}", target, q),
            _ => target,
        };

        RouteDecision::Redirect(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> LocaleRouter {
        LocaleRouter::new(vec!["en".into(), "ar".into()], "en")
    }

    #[test]
    fn test_prefixed_paths_pass_through() {
        let r = router();
        assert_eq!(r.decide("/en/services", None), RouteDecision::PassThrough);
        assert_eq!(r.decide("/ar/services", None), RouteDecision::PassThrough);
        assert_eq!(r.decide("/en", None), RouteDecision::PassThrough);
        assert_eq!(r.decide("/ar", None), RouteDecision::PassThrough);
    }

    #[test]
    fn test_unprefixed_path_redirects() {
        let r = router();
        assert_eq!(
            r.decide("/services", None),
            RouteDecision::Redirect("/en/services".into())
        );
    }

    #[test]
    fn test_root_redirects_to_locale_root() {
        let r = router();
        assert_eq!(r.decide("/", None), RouteDecision::Redirect("/en/".into()));
    }

    #[test]
    fn test_empty_path_redirects_to_locale_root() {
        let r = router();
        assert_eq!(r.decide("", None), RouteDecision::Redirect("/en/".into()));
    }

    #[test]
    fn test_query_string_preserved() {
        let r = router();
        assert_eq!(
            r.decide("/services", Some("ref=nav")),
            RouteDecision::Redirect("/en/services?ref=nav".into())
        );
    }

    #[test]
    fn test_locale_must_be_full_segment() {
        let r = router();
        // "english" shares a prefix with "en" but is not a locale segment.
        assert_eq!(
            r.decide("/english", None),
            RouteDecision::Redirect("/en/english".into())
        );
    }

    #[test]
    fn test_redirect_target_is_fixed_point() {
        let r = router();
        for path in ["/", "/services", "/about/team", ""] {
            match r.decide(path, None) {
                RouteDecision::Redirect(target) => {
                    assert_eq!(
                        r.decide(&target, None),
                        RouteDecision::PassThrough,
                        "re-running the rule on {} must pass through",
                        target
                    );
                }
                RouteDecision::PassThrough => panic!("{} should redirect", path),
            }
        }
    }

    #[test]
    fn test_split_locale() {
        let r = router();
        assert_eq!(r.split_locale("/en/services"), Some(("en", "/services")));
        assert_eq!(r.split_locale("/ar"), Some(("ar", "/")));
        assert_eq!(r.split_locale("/services"), None);
        assert_eq!(r.split_locale("en/services"), None);
    }
}
