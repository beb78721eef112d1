pub mod assets;
pub mod builder;
pub mod config;
pub mod markdown;
pub mod output;
pub mod renderer;
pub mod scanner;
pub mod site;
pub mod template;
pub mod url;

// Re-export main types
pub use builder::{BuildError, BuildReport, SiteBuilder};
pub use markdown::render_markdown;
pub use site::{Page, PageRegistry, PageSource, RegistryError};
