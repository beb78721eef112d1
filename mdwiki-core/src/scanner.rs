use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    Io(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        ScanError::Io(err.into())
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// Recursive markdown discovery under a content root.
pub struct ContentScanner {
    content_dir: PathBuf,
    extension: String,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            content_dir: path.as_ref().to_path_buf(),
            extension: "md".to_string(),
        }
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    /// Markdown files under the content root, as paths relative to it, in
    /// traversal order. An unreadable directory aborts the scan.
    pub fn scan(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.content_dir.is_dir() {
            return Err(ScanError::InvalidPath(self.content_dir.clone()));
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.content_dir) {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            let relative = path
                .strip_prefix(&self.content_dir)
                .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;
            paths.push(relative.to_path_buf());
        }

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_markdown_recursively_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/sub")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# Home").unwrap();
        std::fs::write(dir.path().join("docs/guide.md"), "# Guide").unwrap();
        std::fs::write(dir.path().join("docs/sub/deep.md"), "# Deep").unwrap();
        std::fs::write(dir.path().join("docs/style.css"), "body {}").unwrap();

        let mut found = ContentScanner::new(dir.path()).scan().unwrap();
        found.sort();
        assert_eq!(
            found,
            vec![
                PathBuf::from("docs/guide.md"),
                PathBuf::from("docs/sub/deep.md"),
                PathBuf::from("index.md"),
            ]
        );
    }

    #[test]
    fn missing_content_dir_is_an_error() {
        let err = ContentScanner::new("/no/such/dir").scan().unwrap_err();
        assert!(matches!(err, ScanError::InvalidPath(_)));
    }
}
