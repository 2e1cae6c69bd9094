//! Path exclusion rules.
//!
//! # Responsibilities
//! - Keep internal, API, and admin paths out of the locale rule
//! - Skip the favicon and anything that looks like a static file
//!
//! # Design Decisions
//! - Evaluated by the middleware before the locale rule runs
//! - Reserved-segment checks are leading-prefix tests, mirroring the
//!   anchored matcher pattern they replace
//! - "Contains a dot" is the static-file heuristic; it has known false
//!   positives (e.g. a versioned segment like `/v1.0/page`) which are
//!   accepted rather than special-cased

use crate::config::RoutingConfig;

/// Ordered exclusion predicates applied ahead of locale routing.
#[derive(Debug, Clone)]
pub struct PathExclusions {
    skip_segments: Vec<String>,
}

impl PathExclusions {
    /// Create exclusions for the given reserved leading segments.
    pub fn new(skip_segments: Vec<String>) -> Self {
        Self { skip_segments }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.skip_segments.clone())
    }

    /// Returns true if the path must not be evaluated by the locale rule.
    pub fn is_excluded(&self, path: &str) -> bool {
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        if self
            .skip_segments
            .iter()
            .any(|segment| trimmed.starts_with(segment.as_str()))
        {
            return true;
        }

        if trimmed == "favicon.ico" {
            return true;
        }

        // Static file heuristic: any dot in the path.
        path.contains('.')
    }
}

impl Default for PathExclusions {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}
