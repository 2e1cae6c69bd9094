//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (exclusion predicates: reserved segments, static files)
//!     → locale.rs (locale-prefix decision)
//!     → Return: PassThrough or Redirect(target)
//!
//! Compilation (at startup):
//!     LocaleConfig + RoutingConfig
//!     → LocaleRouter / PathExclusions (immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Exclusions are evaluated before the locale rule ever runs
//! - No regex in the hot path (prefix and equality tests only)
//! - Deterministic and stateless: same path always yields same decision
//! - Ordering among locales is irrelevant (membership test, not priority)

pub mod locale;
pub mod matcher;
