//! Blob name transformation.

/// Rewrite a relative file path into its clean object key.
///
/// Paths ending in `.html` (case-insensitive) lose the suffix, so
/// `about.html` is served at `/about` by hosting platforms that resolve
/// implicit-extension requests. All other paths, and a bare `.html`
/// whose clean name would be empty, pass through unchanged. Directory
/// separators are preserved verbatim.
pub fn blob_name(relative_path: &str) -> String {
    let len = relative_path.len();
    // An ASCII `.html` suffix always starts on a char boundary; anything
    // else (e.g. a multibyte character straddling len - 5) cannot match.
    if len > 5 && relative_path.is_char_boundary(len - 5) {
        let (stem, suffix) = relative_path.split_at(len - 5);
        if suffix.eq_ignore_ascii_case(".html") && !stem.ends_with('/') {
            return stem.to_string();
        }
    }

    relative_path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_suffix() {
        assert_eq!(blob_name("index.html"), "index");
        assert_eq!(blob_name("about/team.html"), "about/team");
    }

    #[test]
    fn test_case_insensitive_suffix() {
        assert_eq!(blob_name("About.HTML"), "About");
        assert_eq!(blob_name("a.Html"), "a");
    }

    #[test]
    fn test_non_html_unchanged() {
        assert_eq!(blob_name("style.css"), "style.css");
        assert_eq!(blob_name("img/logo.png"), "img/logo.png");
    }

    #[test]
    fn test_strips_only_one_suffix() {
        assert_eq!(blob_name("page.html.html"), "page.html");
    }

    #[test]
    fn test_multibyte_names() {
        // Non-html names whose last five bytes split a multibyte
        // character must pass through, not panic.
        assert_eq!(blob_name("é.css"), "é.css");
        assert_eq!(blob_name("日本語"), "日本語");
        // Multibyte stems still get the suffix stripped.
        assert_eq!(blob_name("café.html"), "café");
        assert_eq!(blob_name("blog/日記.html"), "blog/日記");
    }

    #[test]
    fn test_bare_html_name_is_kept() {
        // Blob names must never be empty.
        assert_eq!(blob_name(".html"), ".html");
        assert_eq!(blob_name("sub/.html"), "sub/.html");
    }
}
