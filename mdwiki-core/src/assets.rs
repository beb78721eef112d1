use std::path::Path;
use walkdir::WalkDir;

/// Copies theme stylesheets flat into the output root. Nested theme asset
/// directories are not supported. Returns the number of files copied.
pub fn copy_theme_styles(theme_dir: &Path, out_dir: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in std::fs::read_dir(theme_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("css") {
            continue;
        }
        if let Some(name) = path.file_name() {
            std::fs::copy(&path, out_dir.join(name))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Copies every non-markdown file under the content root to the same
/// relative path in the output tree. A file is only copied when its
/// destination directory already exists, i.e. when a page was written
/// alongside it; assets in directories with no page are skipped silently.
/// Returns the number of files copied.
pub fn copy_content_assets(
    content_dir: &Path,
    out_dir: &Path,
    markdown_extension: &str,
) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(content_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(markdown_extension) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };
        let dest = out_dir.join(relative);
        match dest.parent() {
            Some(parent) if parent.is_dir() => {
                std::fs::copy(path, &dest)?;
                copied += 1;
            }
            _ => {}
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_copy_flat() {
        let theme = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(theme.path().join("wiki.css"), "body {}").unwrap();
        std::fs::write(theme.path().join("base.html"), "<html>").unwrap();

        let copied = copy_theme_styles(theme.path(), out.path()).unwrap();
        assert_eq!(copied, 1);
        assert!(out.path().join("wiki.css").is_file());
        assert!(!out.path().join("base.html").exists());
    }

    #[test]
    fn assets_copy_only_where_pages_were_written() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(content.path().join("docs")).unwrap();
        std::fs::create_dir_all(content.path().join("orphan")).unwrap();
        std::fs::write(content.path().join("docs/page.md"), "# P").unwrap();
        std::fs::write(content.path().join("docs/diagram.svg"), "<svg/>").unwrap();
        std::fs::write(content.path().join("orphan/lost.svg"), "<svg/>").unwrap();
        // Simulate the page write having created docs/ in the output.
        std::fs::create_dir_all(out.path().join("docs")).unwrap();

        let copied = copy_content_assets(content.path(), out.path(), "md").unwrap();
        assert_eq!(copied, 1);
        assert!(out.path().join("docs/diagram.svg").is_file());
        assert!(!out.path().join("orphan/lost.svg").exists());
    }

    #[test]
    fn markdown_sources_are_never_copied() {
        let content = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(content.path().join("page.md"), "# P").unwrap();

        let copied = copy_content_assets(content.path(), out.path(), "md").unwrap();
        assert_eq!(copied, 0);
        assert!(!out.path().join("page.md").exists());
    }
}
