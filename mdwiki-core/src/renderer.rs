use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Context;

use crate::markdown;
use crate::site::{Page, PageRegistry, PageSource};
use crate::template::{TemplateError, TemplateRenderer};
use crate::url::{self, Crumb};

#[derive(Debug)]
pub enum RenderError {
    Template(TemplateError),
    Io(std::io::Error),
}

impl From<TemplateError> for RenderError {
    fn from(err: TemplateError) -> Self {
        RenderError::Template(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Template(e) => write!(f, "Template error: {}", e),
            RenderError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

/// One row of a folder listing, handed to `folder_listing.html`.
#[derive(Debug, Serialize)]
struct FolderLink {
    url: String,
    title: String,
}

/// Renders pages against a read-only, fully built registry.
pub struct PageRenderer {
    templates: TemplateRenderer,
    content_dir: PathBuf,
    syntax_theme: String,
}

impl PageRenderer {
    pub fn new(
        theme_dir: &Path,
        content_dir: &Path,
        syntax_theme: &str,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            templates: TemplateRenderer::new(theme_dir)?,
            content_dir: content_dir.to_path_buf(),
            syntax_theme: syntax_theme.to_string(),
        })
    }

    /// Full HTML document for a page: body rendered from its source (or
    /// from the registry for folder pages), composed with title and
    /// breadcrumb through the base template.
    pub fn render(&self, page: &Page, registry: &PageRegistry) -> Result<String, RenderError> {
        let body = match &page.source {
            PageSource::Content { path } => {
                let source = std::fs::read_to_string(self.content_dir.join(path))?;
                markdown::render_markdown(&source, &self.syntax_theme, |label| {
                    match registry.resolve_label(label) {
                        Some(target) => target.to_string(),
                        None => {
                            eprintln!("Warning: no page found for label {label}");
                            url::FALLBACK_URL.to_string()
                        }
                    }
                })
            }
            PageSource::Folder => {
                let links: Vec<FolderLink> = registry
                    .folder_listing(&page.url)
                    .into_iter()
                    .map(|(url, title)| FolderLink { url, title })
                    .collect();
                let mut context = Context::new();
                context.insert("links", &links);
                self.templates.render("folder_listing.html", &context)?
            }
        };

        let mut context = Context::new();
        context.insert("title", &page.title());
        context.insert("breadcrumb", &breadcrumb_html(&page.breadcrumb()));
        context.insert("content", &body);
        Ok(self.templates.render("base.html", &context)?)
    }
}

/// Breadcrumb trail as an HTML chain of anchors. The trail already starts
/// with the Home crumb; labels and targets are escaped here, so the result
/// is trusted markup for the template layer.
pub fn breadcrumb_html(trail: &[Crumb]) -> String {
    let mut html = String::new();
    for (i, crumb) in trail.iter().enumerate() {
        if i > 0 {
            html.push_str(" &gt; ");
        }
        html.push_str(&format!(
            "<a href='{}'>{}</a>",
            html_escape::encode_quoted_attribute(&crumb.url),
            html_escape::encode_text(&crumb.label)
        ));
    }
    html
}
