use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use crate::error::{Result, SitemapError};

pub const HTML_EXTENSION: &str = ".html";

/// Lists every `.html` file under `source_dir`, depth first, with each
/// directory's entries visited in file-name order. Directories are never returned.
pub fn collect_html_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    fn traverse(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| SitemapError::io(dir, e))? {
            let entry = entry.map_err(|e| SitemapError::io(dir, e))?;
            entries.push(entry.path());
        }
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in entries {
            if path.is_dir() {
                traverse(&path, files)?;
            } else if is_html_file(&path) {
                files.push(path);
            }
        }
        Ok(())
    }

    traverse(source_dir, &mut files)?;
    Ok(files)
}

fn is_html_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(HTML_EXTENSION))
        .unwrap_or(false)
}

/// Root-relative URL path for `file`, e.g. `/en/post.html`, joined with `/`
/// whatever the host separator is.
pub fn url_path(source_dir: &Path, file: &Path) -> String {
    let rel_path = pathdiff::diff_paths(file, source_dir).unwrap_or_else(|| file.to_path_buf());

    let components: Vec<String> = rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(os_str) => Some(os_str.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    format!("/{}", components.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    fn rel_paths(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|f| url_path(root, f)).collect()
    }

    #[test]
    fn finds_nested_html_files_only() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "index.html");
        touch(root, "style.css");
        touch(root, "en/post.html");
        touch(root, "en/deep/er/nested.html");
        touch(root, "img/logo.png");
        touch(root, "notes.html.bak");

        let files = collect_html_files(root).unwrap();

        assert_eq!(
            rel_paths(root, &files),
            vec!["/en/deep/er/nested.html", "/en/post.html", "/index.html"]
        );
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn directories_named_like_html_are_traversed_not_returned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "archive.html/inner.html");

        let files = collect_html_files(root).unwrap();

        assert_eq!(rel_paths(root, &files), vec!["/archive.html/inner.html"]);
    }

    #[test]
    fn visits_entries_in_name_order_depth_first() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "b.html");
        touch(root, "a/z.html");
        touch(root, "a/b/c.html");
        touch(root, "c.html");

        let files = collect_html_files(root).unwrap();

        assert_eq!(
            rel_paths(root, &files),
            vec!["/a/b/c.html", "/a/z.html", "/b.html", "/c.html"]
        );
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect_html_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = collect_html_files(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SitemapError::Io { .. }));
    }

    #[test]
    fn url_path_is_slash_separated_with_leading_slash() {
        let root = Path::new("/srv/docs");
        assert_eq!(url_path(root, &root.join("about.html")), "/about.html");
        assert_eq!(
            url_path(root, &root.join("pt").join("blog").join("x.html")),
            "/pt/blog/x.html"
        );
    }
}
