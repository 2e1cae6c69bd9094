//! Localized content subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     dictionary files (<locale>.json) or built-in maps
//!         → dictionary.rs (Dictionaries)
//!     config page entries or default site
//!         → store.rs (MemoryPageStore)
//!
//! Per request (after locale routing):
//!     (locale, path)
//!         → store.rs fetch by key
//!         → dictionary.rs UI strings, default-locale fallback
//! ```
//!
//! # Design Decisions
//! - Content is loaded once at startup and immutable at runtime
//! - Both collaborators expose a plain fetch-by-key contract; the page
//!   store is a trait so a real document backend can replace it
//! - Dictionary lookups fall back to the default locale, never fail

pub mod dictionary;
pub mod store;

pub use dictionary::Dictionaries;
pub use store::{MemoryPageStore, Page, PageStore};
