use regex::Regex;
use std::sync::LazyLock;

// Shallow match: `src="..."` anywhere after `<img` within the same tag.
static IMG_SRC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("valid image regex"));

/// Returns every `<img src="...">` value in document order, verbatim.
/// Markup that does not fit the pattern is skipped, never an error.
pub fn extract_images(html: &str) -> Vec<String> {
    IMG_SRC_REGEX
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_img_tags_means_no_images() {
        assert!(extract_images("").is_empty());
        assert!(extract_images("<p>hello <a href=\"/x.png\">x</a></p>").is_empty());
        assert!(extract_images("<script src=\"/app.js\"></script>").is_empty());
    }

    #[test]
    fn returns_sources_in_document_order_without_dedup() {
        let html = r#"
            <img src="/img/1.png">
            <p>text</p>
            <img alt="two" class="wide" src="https://cdn.example.com/2.jpg" />
            <img src="/img/1.png">
            <img src="relative/3.gif">
        "#;

        assert_eq!(
            extract_images(html),
            vec![
                "/img/1.png",
                "https://cdn.example.com/2.jpg",
                "/img/1.png",
                "relative/3.gif",
            ]
        );
    }

    #[test]
    fn tag_and_attribute_names_are_case_sensitive() {
        assert!(extract_images(r#"<IMG src="/a.png">"#).is_empty());
        assert!(extract_images(r#"<img SRC="/a.png">"#).is_empty());
    }

    #[test]
    fn unusual_quoting_is_skipped() {
        assert!(extract_images("<img src='/single.png'>").is_empty());
        assert!(extract_images("<img src=/bare.png>").is_empty());
        assert!(extract_images(r#"<img src="">"#).is_empty());
        assert_eq!(
            extract_images(r#"<img src='/a.png'><img src="/b.png">"#),
            vec!["/b.png"]
        );
    }

    #[test]
    fn data_src_attributes_also_match_shallowly() {
        assert_eq!(
            extract_images(r#"<img data-src="/lazy.png">"#),
            vec!["/lazy.png"]
        );
    }
}
