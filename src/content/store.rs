//! Page store with a fetch-by-key contract.
//!
//! The rendering layer behind the locale router only needs "give me the
//! document for (locale, path)". The trait keeps that seam explicit; the
//! in-memory implementation is seeded from config or with a small default
//! site.

use std::collections::HashMap;

use crate::config::PageConfig;

/// A renderable page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

/// Fetch-by-key contract for page content.
pub trait PageStore: Send + Sync {
    /// Fetch the page for a locale and path under the locale prefix.
    fn fetch(&self, locale: &str, path: &str) -> Option<Page>;
}

/// In-memory page store keyed by (locale, path).
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: HashMap<(String, String), Page>,
}

impl MemoryPageStore {
    pub fn from_config(pages: &[PageConfig]) -> Self {
        let mut store = Self::default();
        for page in pages {
            store.insert(
                &page.locale,
                &page.path,
                Page {
                    title: page.title.clone(),
                    body: page.body.clone(),
                },
            );
        }
        store
    }

    /// Seed a minimal brochure site (home, services, about) per locale.
    pub fn default_site(locales: &[String]) -> Self {
        let mut store = Self::default();
        for locale in locales {
            for (path, title, body) in default_pages(locale) {
                store.insert(
                    locale,
                    path,
                    Page {
                        title: title.to_string(),
                        body: body.to_string(),
                    },
                );
            }
        }
        store
    }

    pub fn insert(&mut self, locale: &str, path: &str, page: Page) {
        self.pages
            .insert((locale.to_string(), path.to_string()), page);
    }
}

impl PageStore for MemoryPageStore {
    fn fetch(&self, locale: &str, path: &str) -> Option<Page> {
        self.pages
            .get(&(locale.to_string(), path.to_string()))
            .cloned()
    }
}

fn default_pages(locale: &str) -> [(&'static str, &'static str, &'static str); 3] {
    match locale {
        "ar" => [
            ("/", "الرئيسية", "حلول رقمية لنمو أعمالك."),
            ("/services", "خدماتنا", "تطوير الويب والتسويق الرقمي."),
            ("/about", "من نحن", "فريق من الخبراء في التحول الرقمي."),
        ],
        _ => [
            ("/", "Home", "Digital solutions to grow your business."),
            ("/services", "Services", "Web development and digital marketing."),
            ("/about", "About Us", "A team of digital transformation experts."),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_fetch() {
        let store = MemoryPageStore::default_site(&["en".into(), "ar".into()]);
        assert!(store.fetch("en", "/services").is_some());
        assert!(store.fetch("ar", "/").is_some());
        assert_eq!(store.fetch("en", "/missing"), None);
    }

    #[test]
    fn test_from_config() {
        let pages = vec![PageConfig {
            locale: "en".into(),
            path: "/blog".into(),
            title: "Blog".into(),
            body: "Latest posts.".into(),
        }];
        let store = MemoryPageStore::from_config(&pages);
        assert_eq!(
            store.fetch("en", "/blog").unwrap().title,
            "Blog".to_string()
        );
        assert_eq!(store.fetch("ar", "/blog"), None);
    }
}
