use crate::config::{PageRecord, IMAGE_NS, SITEMAP_NS, SITEMAP_URL_DIR};
use crate::error::{Result, SitemapError};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Renders one `urlset` document with an entry per record, in input order.
pub fn render_urlset(records: &[PageRecord], base_url: &str) -> Result<String> {
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let mut entry = format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n",
            escape_xml(&format!("{}{}", base_url, record.rel_path))?,
            escape_xml(&record.last_modified)?
        );
        for image in &record.images {
            entry.push_str(&format!(
                "    <image:image>\n      <image:loc>{}</image:loc>\n    </image:image>\n",
                escape_xml(&image_location(base_url, image))?
            ));
        }
        entry.push_str("  </url>\n");
        entries.push(entry);
    }

    Ok(format!(
        "{}\n<urlset xmlns=\"{}\" xmlns:image=\"{}\">\n{}</urlset>\n",
        XML_DECLARATION,
        SITEMAP_NS,
        IMAGE_NS,
        entries.concat()
    ))
}

/// Renders the `sitemapindex` document pointing at `file_names` under `/sitemap/`.
pub fn render_sitemap_index(file_names: &[&str], base_url: &str, last_modified: &str) -> Result<String> {
    let last_modified = escape_xml(last_modified)?;
    let mut entries = String::new();

    for file_name in file_names {
        entries.push_str(&format!(
            "  <sitemap>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </sitemap>\n",
            escape_xml(&format!("{}{}{}", base_url, SITEMAP_URL_DIR, file_name))?,
            last_modified
        ));
    }

    Ok(format!(
        "{}\n<sitemapindex xmlns=\"{}\">\n{}</sitemapindex>\n",
        XML_DECLARATION, SITEMAP_NS, entries
    ))
}

/// Absolute location for an extracted image reference.
///
/// References that already name a scheme are kept as they are, protocol-relative
/// ones borrow the base URL's scheme, and everything else is appended to the base URL.
pub fn image_location(base_url: &str, image: &str) -> String {
    if image.starts_with("//") {
        let scheme = base_url.split_once("://").map_or("https", |(scheme, _)| scheme);
        return format!("{}:{}", scheme, image);
    }
    if has_url_scheme(image) {
        return image.to_string();
    }
    format!("{}{}", base_url, image)
}

fn has_url_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Escapes text content, rejecting characters XML 1.0 cannot represent.
pub fn escape_xml(value: &str) -> Result<String> {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_xml_char(c) => escaped.push(c),
            c => {
                return Err(SitemapError::InvalidXmlChar {
                    ch: c,
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(escaped)
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
