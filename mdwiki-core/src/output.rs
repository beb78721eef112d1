use std::path::{Path, PathBuf};

use crate::url;

/// Writes rendered HTML to the output path for `url`, creating intermediate
/// directories. Existing files are overwritten unconditionally; this is a
/// one-shot batch build with no staleness tracking.
pub fn write_page(out_dir: &Path, url: &str, html: &str) -> std::io::Result<PathBuf> {
    let path = out_dir.join(url::output_path(url));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, html)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_url_lands_in_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_page(dir.path(), "/docs/", "<html></html>").unwrap();
        assert_eq!(written, dir.path().join("docs/index.html"));
        assert!(written.is_file());
    }

    #[test]
    fn intermediate_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_page(dir.path(), "/a/b/c.html", "x").unwrap();
        assert!(written.is_file());
    }

    #[test]
    fn existing_files_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), "/page.html", "old").unwrap();
        let written = write_page(dir.path(), "/page.html", "new").unwrap();
        assert_eq!(std::fs::read_to_string(written).unwrap(), "new");
    }
}
