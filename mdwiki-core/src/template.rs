use std::path::Path;
use tera::{Context, Tera};

#[derive(Debug)]
pub enum TemplateError {
    Tera(tera::Error),
    Io(std::io::Error),
}

impl From<tera::Error> for TemplateError {
    fn from(err: tera::Error) -> Self {
        TemplateError::Tera(err)
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        TemplateError::Io(err)
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::Tera(e) => write!(f, "Template error: {}", e),
            TemplateError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Theme templates loaded from a directory of `.html` files.
///
/// Templates are addressed by file name relative to the theme directory.
/// Tera autoescapes interpolated values in `.html` templates; fragments
/// the renderer has already escaped are inserted with `| safe`.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new(theme_dir: &Path) -> Result<Self, TemplateError> {
        let glob = theme_dir.join("**/*.html");
        let tera = Tera::new(&glob.to_string_lossy())?;

        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, context)?)
    }
}
