//! Page path and title helpers shared by every backend.

/// Normalize an authored page reference to a page path.
///
/// Examples:
/// - `"/guide/"` -> `"guide"`
/// - `"guide.md"` -> `"guide"`
/// - `"guide.html"` -> `"guide"`
/// - `"domain/index.md"` -> `"domain"`
/// - `"index"` -> `""`
pub fn normalize_page_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    let without_ext = trimmed
        .strip_suffix(".md")
        .or_else(|| trimmed.strip_suffix(".html"))
        .unwrap_or(trimmed);

    let path_part = if without_ext == "index" {
        ""
    } else if let Some(without_index) = without_ext.strip_suffix("/index") {
        without_index
    } else {
        without_ext
    };

    path_part.to_owned()
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Only the last path segment is used, so `"getting-started/intro"` becomes
/// `"Intro"`. An empty slug yields `"Untitled"`.
pub fn titlecase_from_slug(slug: &str) -> String {
    let last = slug.rsplit_once('/').map_or(slug, |(_, last)| last);
    let mut result = String::with_capacity(last.len());
    for word in last.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_first_into(word, &mut result);
    }
    if result.is_empty() {
        result.push_str("Untitled");
    }
    result
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page_path() {
        assert_eq!(normalize_page_path("getting-started/intro"), "getting-started/intro");
        assert_eq!(normalize_page_path("/guide/"), "guide");
        assert_eq!(
            normalize_page_path("getting-started/installation.html"),
            "getting-started/installation"
        );
        assert_eq!(normalize_page_path("index.html"), "");
        assert_eq!(normalize_page_path("guide.md"), "guide");
        assert_eq!(normalize_page_path("domain/index.md"), "domain");
        assert_eq!(normalize_page_path("index"), "");
        assert_eq!(normalize_page_path(""), "");
    }

    #[test]
    fn test_titlecase_from_slug() {
        assert_eq!(titlecase_from_slug("setup-guide"), "Setup Guide");
        assert_eq!(titlecase_from_slug("my_page"), "My Page");
        assert_eq!(titlecase_from_slug("getting-started/intro"), "Intro");
        assert_eq!(titlecase_from_slug(""), "Untitled");
    }
}
