use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::renderer::{PageRenderer, RenderError};
use crate::scanner::{ContentScanner, ScanError};
use crate::site::{Page, PageRegistry, RegistryError};
use crate::{assets, output};

#[derive(Debug)]
pub enum BuildError {
    Scan(ScanError),
    Registry(RegistryError),
    Render(RenderError),
    Io(std::io::Error),
}

impl From<ScanError> for BuildError {
    fn from(err: ScanError) -> Self {
        BuildError::Scan(err)
    }
}

impl From<RegistryError> for BuildError {
    fn from(err: RegistryError) -> Self {
        BuildError::Registry(err)
    }
}

impl From<RenderError> for BuildError {
    fn from(err: RenderError) -> Self {
        BuildError::Render(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Scan(e) => write!(f, "Scan error: {}", e),
            BuildError::Registry(e) => write!(f, "Registry error: {}", e),
            BuildError::Render(e) => write!(f, "Render error: {}", e),
            BuildError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

/// What a completed build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages_written: usize,
    pub files_copied: usize,
}

/// One-shot site build: scan the content tree, build the page registry,
/// render and write every page, copy assets.
pub struct SiteBuilder {
    content_dir: PathBuf,
    output_dir: PathBuf,
    theme_dir: PathBuf,
    config: SiteConfig,
}

impl SiteBuilder {
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            output_dir: PathBuf::from("./out"),
            theme_dir: PathBuf::from("./theme"),
            config: SiteConfig::default(),
        }
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn theme_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.theme_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn site_config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the whole build and reports counts. Aborts on the first
    /// unrecoverable error; unresolved wiki-links only warn.
    pub fn build(self) -> Result<BuildReport, BuildError> {
        // Phase one: every explicit content page, in traversal order.
        let scanner =
            ContentScanner::new(&self.content_dir).with_extension(&self.config.markdown_extension);
        let mut registry = PageRegistry::new();
        for relative in scanner.scan()? {
            registry.register_content(Page::from_markdown(&relative))?;
        }

        // Phase two: folder pages for unclaimed ancestors. Must complete
        // before any rendering, since folder listings and link resolution
        // read the finished registry.
        registry.close_folders();

        let renderer =
            PageRenderer::new(&self.theme_dir, &self.content_dir, &self.config.syntax_theme)?;

        std::fs::create_dir_all(&self.output_dir)?;
        let mut report = BuildReport::default();
        for page in registry.pages() {
            let html = renderer.render(page, &registry)?;
            output::write_page(&self.output_dir, &page.url, &html)?;
            report.pages_written += 1;
        }

        report.files_copied += assets::copy_theme_styles(&self.theme_dir, &self.output_dir)?;
        report.files_copied += assets::copy_content_assets(
            &self.content_dir,
            &self.output_dir,
            &self.config.markdown_extension,
        )?;

        Ok(report)
    }
}
