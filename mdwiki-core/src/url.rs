use std::path::{Path, PathBuf};

/// Link target substituted when a wiki-link label matches no page title.
pub const FALLBACK_URL: &str = "/404.html";

/// One link in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub url: String,
}

/// Canonical URL for a markdown file, given its path relative to the
/// content root.
///
/// The markdown extension is stripped. A file whose stem's final component
/// is exactly `index` addresses its directory: `docs/index.md` becomes
/// `/docs/` and a root `index.md` becomes `/`. Everything else becomes
/// `/<stem>.html`. Path separators are normalized to `/`.
pub fn page_url(relative_path: &Path) -> String {
    let stem = relative_path.with_extension("");
    let components: Vec<String> = stem
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    match components.split_last() {
        Some((last, dirs)) if last == "index" => {
            if dirs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}/", dirs.join("/"))
            }
        }
        _ => format!("/{}.html", components.join("/")),
    }
}

/// URL split on `/` with the leading empty segment dropped. Folder URLs
/// keep their trailing empty segment, so `/docs/` yields `["docs", ""]`.
pub fn url_segments(url: &str) -> Vec<String> {
    url.split('/').skip(1).map(str::to_string).collect()
}

/// Breadcrumb trail for a URL, root first, always starting with the fixed
/// Home link. A folder's own name is excluded, as is a content page's
/// filename segment. Cumulative ancestor URLs longer than `/` get a
/// trailing slash, making every non-root crumb target a folder URL.
pub fn breadcrumb(url: &str, is_folder: bool) -> Vec<Crumb> {
    let segments = url_segments(url);
    let skip_tail = if is_folder { 2 } else { 1 };

    let mut trail = vec![Crumb {
        label: "Home".to_string(),
        url: "/".to_string(),
    }];
    for i in 0..segments.len().saturating_sub(skip_tail) {
        let mut target = format!("/{}", segments[..=i].join("/"));
        if target.len() > 1 {
            target.push('/');
        }
        trail.push(Crumb {
            label: segments[i].clone(),
            url: target,
        });
    }

    trail
}

/// Ancestor folder URLs implied by a page's breadcrumb trail. The root
/// `/` is not an ancestor; it only exists when a root index file does.
pub fn parent_folder_urls(url: &str, is_folder: bool) -> Vec<String> {
    breadcrumb(url, is_folder)
        .into_iter()
        .skip(1)
        .map(|crumb| crumb.url)
        .collect()
}

/// Display title for a URL: `Home` for the root, the folder's own name
/// for folders, the filename minus `.html` for content pages.
pub fn page_title(url: &str, is_folder: bool) -> String {
    if url == "/" {
        return "Home".to_string();
    }
    let segments = url_segments(url);
    if is_folder {
        segments.iter().rev().nth(1).cloned().unwrap_or_default()
    } else {
        segments
            .last()
            .map(|s| s.strip_suffix(".html").unwrap_or(s).to_string())
            .unwrap_or_default()
    }
}

/// Filesystem path for a URL, relative to the output root. Folder URLs
/// map to an `index.html` inside their directory.
pub fn output_path(url: &str) -> PathBuf {
    let relative = if url.ends_with('/') {
        format!("{url}index.html")
    } else {
        url.to_string()
    };
    PathBuf::from(relative.trim_start_matches('/'))
}
