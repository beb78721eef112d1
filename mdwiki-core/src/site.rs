use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::url::{self, Crumb};

/// What a page renders from: a markdown file on disk, or nothing at all
/// for folder indexes synthesized from the URL structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Content { path: PathBuf },
    Folder,
}

#[derive(Debug, Clone)]
pub struct Page {
    /// Canonical absolute URL. Folder pages end with `/`, content pages
    /// with `.html`; the root is `/`.
    pub url: String,
    pub source: PageSource,
}

impl Page {
    /// Page backed by a markdown file, addressed by its path relative to
    /// the content root.
    pub fn from_markdown(relative_path: &Path) -> Self {
        Self {
            url: url::page_url(relative_path),
            source: PageSource::Content {
                path: relative_path.to_path_buf(),
            },
        }
    }

    /// Synthesized folder index page.
    pub fn folder(url: String) -> Self {
        Self {
            url,
            source: PageSource::Folder,
        }
    }

    /// True for folder URLs, whether backed by an `index.md` or synthesized.
    pub fn is_folder(&self) -> bool {
        self.url.ends_with('/')
    }

    pub fn title(&self) -> String {
        url::page_title(&self.url, self.is_folder())
    }

    pub fn breadcrumb(&self) -> Vec<Crumb> {
        url::breadcrumb(&self.url, self.is_folder())
    }

    pub fn parent_folder_urls(&self) -> Vec<String> {
        url::parent_folder_urls(&self.url, self.is_folder())
    }
}

#[derive(Debug)]
pub enum RegistryError {
    /// Two distinct source files claim the same URL. Never resolved by
    /// overwriting; the build aborts with both contenders.
    DuplicateUrl {
        url: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateUrl { url, first, second } => write!(
                f,
                "URL {} is claimed by both {} and {}",
                url,
                first.display(),
                second.display()
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Every page of the site, keyed by URL, in insertion order: content pages
/// in traversal order, then synthesized folder pages in discovery order.
///
/// Built in two phases. `register_content` takes every explicit page
/// first; `close_folders` then fills in an index page for each ancestor
/// folder URL nothing claimed. Only after both phases does every page's
/// `parent_folder_urls` resolve, so nothing may render before the second
/// phase runs.
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
    by_url: HashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase one: register a content page, rejecting URL collisions.
    pub fn register_content(&mut self, page: Page) -> Result<(), RegistryError> {
        if let Some(&existing) = self.by_url.get(&page.url) {
            let second = source_path(&page);
            return Err(RegistryError::DuplicateUrl {
                url: page.url,
                first: source_path(&self.pages[existing]),
                second,
            });
        }
        self.insert(page);
        Ok(())
    }

    /// Phase two: synthesize a folder page for every ancestor folder URL
    /// no registered page claims.
    pub fn close_folders(&mut self) {
        let mut missing: Vec<String> = Vec::new();
        for page in &self.pages {
            for parent in page.parent_folder_urls() {
                if !self.by_url.contains_key(&parent) && !missing.contains(&parent) {
                    missing.push(parent);
                }
            }
        }
        for folder_url in missing {
            self.insert(Page::folder(folder_url));
        }
    }

    fn insert(&mut self, page: Page) {
        self.by_url.insert(page.url.clone(), self.pages.len());
        self.pages.push(page);
    }

    pub fn get(&self, url: &str) -> Option<&Page> {
        self.by_url.get(url).map(|&i| &self.pages[i])
    }

    pub fn contains(&self, url: &str) -> bool {
        self.by_url.contains_key(url)
    }

    /// All pages in insertion order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Resolves a wiki-link label to the URL of the first registered page
    /// whose title equals it, case-sensitively. When several pages share a
    /// title, whichever was registered first wins; no further tie-break is
    /// defined.
    pub fn resolve_label(&self, label: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|page| page.title() == label)
            .map(|page| page.url.as_str())
    }

    /// `(url, title)` pairs for the direct children of a folder URL, sorted
    /// alphabetically by title. A child is any page exactly one path
    /// segment below the folder; grandchildren are excluded.
    pub fn folder_listing(&self, folder_url: &str) -> Vec<(String, String)> {
        let mut links: Vec<(String, String)> = Vec::new();
        for page in &self.pages {
            if page.url == folder_url || !page.url.starts_with(folder_url) {
                continue;
            }
            let rest = page.url[folder_url.len()..].trim_end_matches('/');
            if !rest.is_empty() && !rest.contains('/') {
                links.push((page.url.clone(), page.title()));
            }
        }
        links.sort_by(|a, b| a.1.cmp(&b.1));
        links
    }
}

fn source_path(page: &Page) -> PathBuf {
    match &page.source {
        PageSource::Content { path } => path.clone(),
        PageSource::Folder => PathBuf::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(paths: &[&str]) -> PageRegistry {
        let mut registry = PageRegistry::new();
        for path in paths {
            registry
                .register_content(Page::from_markdown(Path::new(path)))
                .unwrap();
        }
        registry.close_folders();
        registry
    }

    #[test]
    fn explicit_indexes_leave_nothing_to_synthesize() {
        let registry = registry_of(&["index.md", "docs/index.md", "docs/guide.md"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("/"));
        assert!(registry.contains("/docs/"));
        assert!(registry.contains("/docs/guide.html"));
        assert_eq!(
            registry.get("/docs/").unwrap().source,
            PageSource::Content {
                path: PathBuf::from("docs/index.md")
            }
        );
    }

    #[test]
    fn missing_ancestors_are_synthesized() {
        let registry = registry_of(&["a/b/page.md"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("/a/b/page.html"));
        assert_eq!(registry.get("/a/").unwrap().source, PageSource::Folder);
        assert_eq!(registry.get("/a/b/").unwrap().source, PageSource::Folder);
    }

    #[test]
    fn every_parent_folder_resolves_after_close() {
        let registry = registry_of(&["a/b/c.md", "docs/index.md", "docs/deep/leaf.md"]);
        for page in registry.pages() {
            for parent in page.parent_folder_urls() {
                assert!(registry.contains(&parent), "missing {parent}");
            }
        }
    }

    #[test]
    fn duplicate_urls_are_rejected_with_both_paths() {
        let mut registry = PageRegistry::new();
        registry
            .register_content(Page::from_markdown(Path::new("docs/guide.md")))
            .unwrap();
        let err = registry
            .register_content(Page {
                url: "/docs/guide.html".to_string(),
                source: PageSource::Content {
                    path: PathBuf::from("other/guide.md"),
                },
            })
            .unwrap_err();
        let RegistryError::DuplicateUrl { url, first, second } = err;
        assert_eq!(url, "/docs/guide.html");
        assert_eq!(first, PathBuf::from("docs/guide.md"));
        assert_eq!(second, PathBuf::from("other/guide.md"));
    }

    #[test]
    fn listing_contains_direct_children_only() {
        let registry = registry_of(&["docs/guide.md", "docs/sub/deep.md"]);
        let listing = registry.folder_listing("/docs/");
        let urls: Vec<&str> = listing.iter().map(|(url, _)| url.as_str()).collect();
        assert!(urls.contains(&"/docs/guide.html"));
        assert!(urls.contains(&"/docs/sub/"));
        assert!(!urls.contains(&"/docs/sub/deep.html"));
    }

    #[test]
    fn listing_is_sorted_by_title() {
        let registry = registry_of(&["docs/zebra.md", "docs/apple.md", "docs/mango.md"]);
        let listing = registry.folder_listing("/docs/");
        let titles: Vec<&str> = listing.iter().map(|(_, title)| title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn labels_resolve_by_exact_title() {
        let registry = registry_of(&["index.md", "docs/guide.md"]);
        assert_eq!(registry.resolve_label("guide"), Some("/docs/guide.html"));
        assert_eq!(registry.resolve_label("Guide"), None);
        assert_eq!(registry.resolve_label("nowhere"), None);
    }

    #[test]
    fn colliding_titles_resolve_to_one_of_the_pages() {
        // Tie-break among same-titled pages is first-registered-wins and
        // otherwise undefined; only membership is asserted.
        let registry = registry_of(&["a/notes.md", "b/notes.md"]);
        let resolved = registry.resolve_label("notes").unwrap();
        assert!(resolved == "/a/notes.html" || resolved == "/b/notes.html");
    }
}
