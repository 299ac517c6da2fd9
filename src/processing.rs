use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

use crate::config::{Args, Bucket, PageRecord};
use crate::error::Result;
use crate::html::extract_images;
use crate::io::{ensure_dir, print_info, print_warning, read_html, write_atomic};
use crate::site_map::{collect_html_files, url_path};
use crate::xml::{render_sitemap_index, render_urlset};

/// Language directories whose pages are treated as posts.
const POST_SEGMENTS: [&str; 2] = ["en", "pt"];

/// What one run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub posts: usize,
    pub pages: usize,
    pub images: usize,
    pub written: Vec<PathBuf>,
}

/// `posts` if a directory segment of `rel_path` is `en` or `pt` (any case),
/// otherwise `pages`. The final segment is the file name and never counts.
pub fn classify(rel_path: &str) -> Bucket {
    let segments: Vec<&str> = rel_path.split('/').collect();
    if segments.len() < 3 {
        return Bucket::Pages;
    }

    let is_post = segments[1..segments.len() - 1].iter().any(|segment| {
        POST_SEGMENTS
            .iter()
            .any(|post| segment.eq_ignore_ascii_case(post))
    });

    if is_post {
        Bucket::Posts
    } else {
        Bucket::Pages
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2026-10-16T08:30:00.123Z`.
pub fn format_timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn build_page_record(args: &Args, path: &Path, last_modified: &str) -> Result<PageRecord> {
    let rel_path = url_path(&args.source, path);
    let html = read_html(path)?;
    let images = extract_images(&html);

    if args.verbose && images.is_empty() {
        print_info(&format!("No images found in {}", rel_path));
    }

    Ok(PageRecord {
        rel_path,
        last_modified: last_modified.to_string(),
        images,
    })
}

/// Scans `args.source` and writes both bucket sitemaps plus the index into `args.target`.
pub fn generate_sitemaps(args: &Args, generated_at: DateTime<Utc>) -> Result<GenerationSummary> {
    ensure_dir(&args.target, args.verbose)?;

    let last_modified = format_timestamp(generated_at);
    let html_files = collect_html_files(&args.source)?;
    if args.verbose {
        print_info(&format!(
            "Found {} HTML files under {}",
            html_files.len(),
            args.source.display()
        ));
    }

    let mut posts = Vec::new();
    let mut pages = Vec::new();

    for path in &html_files {
        let record = build_page_record(args, path, &last_modified)?;
        let bucket = classify(&record.rel_path);

        if args.verbose {
            print_info(&format!(
                "{} -> {} ({} images)",
                record.rel_path,
                bucket.name(),
                record.images.len()
            ));
        }

        match bucket {
            Bucket::Posts => posts.push(record),
            Bucket::Pages => pages.push(record),
        }
    }

    let mut summary = GenerationSummary {
        posts: posts.len(),
        pages: pages.len(),
        images: posts.iter().chain(&pages).map(|r| r.images.len()).sum(),
        written: Vec::new(),
    };

    // Render everything before the first write.
    let mut documents = Vec::new();
    for bucket in Bucket::ALL {
        let records = match bucket {
            Bucket::Posts => &posts,
            Bucket::Pages => &pages,
        };
        if records.is_empty() {
            print_warning(&format!(
                "No {} found; writing an empty {}",
                bucket.name(),
                bucket.file_name()
            ));
        }
        documents.push((bucket.file_name(), render_urlset(records, &args.base_url)?));
    }

    let file_names: Vec<&str> = Bucket::ALL.iter().map(|b| b.file_name()).collect();
    documents.push((
        args.index_file.as_str(),
        render_sitemap_index(&file_names, &args.base_url, &last_modified)?,
    ));

    for (file_name, xml) in documents {
        let path = args.target.join(file_name);
        write_atomic(&path, &xml)?;
        if args.verbose {
            print_info(&format!("Wrote {}", path.display()));
        }
        summary.written.push(path);
    }

    Ok(summary)
}
