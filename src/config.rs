use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Result, SitemapError};

pub const DEFAULT_SOURCE_DIR: &str = "docs";
pub const DEFAULT_TARGET_DIR: &str = "docs/sitemap";
pub const DEFAULT_BASE_URL: &str = "https://healthandlongevity.reviewnexus.blog";
pub const DEFAULT_INDEX_FILE: &str = "sitemap_index.xml";

pub const POST_SITEMAP_FILE: &str = "post-sitemap.xml";
pub const PAGE_SITEMAP_FILE: &str = "page-sitemap.xml";

/// Path segment under the site root where the generated sitemaps are served.
pub const SITEMAP_URL_DIR: &str = "/sitemap/";

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";

/// Resolved configuration for one generation run.
#[derive(Debug, Clone)]
pub struct Args {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Absolute URL prefix, never ending in `/`.
    pub base_url: String,
    pub index_file: String,
    pub verbose: bool,
}

/// One partial layer of configuration: a config file or the command line.
/// Unset fields fall through to the layer below.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub base_url: Option<String>,
    pub index_file: Option<String>,
    pub verbose: Option<bool>,
}

impl ConfigLayer {
    /// Fields set in `self` win over those in `lower`.
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            source: self.source.or(lower.source),
            target: self.target.or(lower.target),
            base_url: self.base_url.or(lower.base_url),
            index_file: self.index_file.or(lower.index_file),
            verbose: self.verbose.or(lower.verbose),
        }
    }
}

impl Args {
    /// Fills the remaining gaps in `layer` with the built-in defaults and validates the result.
    pub fn resolve(layer: ConfigLayer) -> Result<Args> {
        let base_url = layer
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = validate_base_url(&base_url)?;

        let index_file = layer
            .index_file
            .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string());
        validate_index_file(&index_file)?;

        Ok(Args {
            source: layer
                .source
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR)),
            target: layer
                .target
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR)),
            base_url,
            index_file,
            verbose: layer.verbose.unwrap_or(false),
        })
    }
}

fn validate_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(SitemapError::InvalidConfig(format!(
            "base URL must be an absolute http(s) URL, got {:?}",
            base_url
        ))),
    }
}

fn validate_index_file(index_file: &str) -> Result<()> {
    if index_file.contains(['/', '\\']) || !index_file.ends_with(".xml") || index_file == ".xml" {
        return Err(SitemapError::InvalidConfig(format!(
            "index file must be a bare .xml file name, got {:?}",
            index_file
        )));
    }
    if index_file == POST_SITEMAP_FILE || index_file == PAGE_SITEMAP_FILE {
        return Err(SitemapError::InvalidConfig(format!(
            "index file {:?} would overwrite a bucket sitemap",
            index_file
        )));
    }
    Ok(())
}

/// The two groups pages are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Posts,
    Pages,
}

impl Bucket {
    /// Generation order; the index lists sitemaps in this order too.
    pub const ALL: [Bucket; 2] = [Bucket::Posts, Bucket::Pages];

    pub fn name(self) -> &'static str {
        match self {
            Bucket::Posts => "posts",
            Bucket::Pages => "pages",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Bucket::Posts => POST_SITEMAP_FILE,
            Bucket::Pages => PAGE_SITEMAP_FILE,
        }
    }
}

/// One discovered HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    // Root-relative, `/`-separated, always starting with `/`.
    pub rel_path: String,
    pub last_modified: String,
    // Verbatim `src` values in document order.
    pub images: Vec<String>,
}
