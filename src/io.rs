use crate::config::{ConfigLayer, COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use crate::error::{Result, SitemapError};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

pub fn read_config_file(config_path: &Path, verbose: bool) -> Result<ConfigLayer> {
    if verbose {
        print_info(&format!(
            "Reading configuration from: {}",
            config_path.display()
        ));
    }

    let raw = fs::read_to_string(config_path).map_err(|e| SitemapError::io(config_path, e))?;

    serde_json::from_str(&raw).map_err(|source| SitemapError::ConfigParse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Reads a whole HTML file as UTF-8 text.
pub fn read_html(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            SitemapError::InvalidUtf8(path.to_path_buf())
        } else {
            SitemapError::io(path, e)
        }
    })
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path, verbose: bool) -> Result<()> {
    if verbose {
        if dir.is_dir() {
            print_info(&format!("Output directory exists: {}", dir.display()));
        } else {
            print_info(&format!("Creating output directory: {}", dir.display()));
        }
    }
    fs::create_dir_all(dir).map_err(|e| SitemapError::io(dir, e))
}

/// Writes `contents` to a hidden sibling file, then renames it over `path`,
/// so readers only ever see the old or the complete new document.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = temp_sibling(path);

    let written = fs::File::create(&tmp_path).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(SitemapError::io(&tmp_path, e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SitemapError::io(path, e)
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
