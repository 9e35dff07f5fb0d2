//! Content-type resolution.
//!
//! A fixed, closed extension table: every deployable file kind is listed
//! here, and anything else fails the run before it is uploaded.

use std::collections::HashMap;

use thiserror::Error;

/// A file whose extension has no entry in the MIME table.
///
/// Also raised for files without any extension; such files are an
/// intentional hard error, not a pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no MIME type defined for '{path}'")]
pub struct UnknownExtensionError {
    /// The offending file name or relative path.
    pub path: String,
}

/// Immutable extension → MIME type lookup table.
///
/// Constructed once at startup and passed by reference; there is no way
/// to add entries afterwards.
#[derive(Debug, Clone)]
pub struct MimeTypeTable {
    entries: HashMap<&'static str, &'static str>,
}

impl MimeTypeTable {
    /// Build the fixed table.
    pub fn new() -> Self {
        let entries = HashMap::from([
            (".1", "text/html"),
            (".atom", "application/atom+xml"),
            (".css", "text/css"),
            (".eot", "application/vnd.ms-fontobject"),
            (".html", "text/html"),
            (".ico", "image/x-icon"),
            (".jpg", "image/jpeg"),
            (".js", "application/javascript"),
            (".map", "application/octet-stream"),
            (".otf", "font/otf"),
            (".png", "image/png"),
            (".rss", "application/rss+xml"),
            (".svg", "image/svg+xml"),
            (".ttf", "font/ttf"),
            (".txt", "text/plain"),
            (".woff", "font/woff"),
            (".woff2", "font/woff2"),
            (".xml", "text/xml"),
            (".zip", "application/x-zip-compressed"),
        ]);

        Self { entries }
    }

    /// Resolve the MIME type for a file name or relative path.
    ///
    /// The extension is the substring of the final path segment starting
    /// at its last `.`, compared case-insensitively.
    pub fn resolve(&self, path: &str) -> Result<&'static str, UnknownExtensionError> {
        let file_name = path.rsplit('/').next().unwrap_or(path);

        let extension = file_name
            .rfind('.')
            .map(|i| file_name[i..].to_ascii_lowercase());

        extension
            .and_then(|ext| self.entries.get(ext.as_str()).copied())
            .ok_or_else(|| UnknownExtensionError {
                path: path.to_string(),
            })
    }
}

impl Default for MimeTypeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_resolves() {
        let table = MimeTypeTable::new();
        let expected = [
            (".1", "text/html"),
            (".atom", "application/atom+xml"),
            (".css", "text/css"),
            (".eot", "application/vnd.ms-fontobject"),
            (".html", "text/html"),
            (".ico", "image/x-icon"),
            (".jpg", "image/jpeg"),
            (".js", "application/javascript"),
            (".map", "application/octet-stream"),
            (".otf", "font/otf"),
            (".png", "image/png"),
            (".rss", "application/rss+xml"),
            (".svg", "image/svg+xml"),
            (".ttf", "font/ttf"),
            (".txt", "text/plain"),
            (".woff", "font/woff"),
            (".woff2", "font/woff2"),
            (".xml", "text/xml"),
            (".zip", "application/x-zip-compressed"),
        ];

        for (ext, mime) in expected {
            let resolved = table.resolve(&format!("file{ext}")).expect(ext);
            assert_eq!(resolved, mime, "extension {ext}");
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = MimeTypeTable::new();
        assert_eq!(table.resolve("INDEX.HTML").expect("resolve"), "text/html");
        assert_eq!(table.resolve("logo.PNG").expect("resolve"), "image/png");
    }

    #[test]
    fn test_resolve_uses_last_extension() {
        let table = MimeTypeTable::new();
        assert_eq!(
            table.resolve("app.min.js").expect("resolve"),
            "application/javascript"
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        let table = MimeTypeTable::new();
        assert_eq!(
            table.resolve("blog/post.html").expect("resolve"),
            "text/html"
        );
    }

    #[test]
    fn test_dot_in_directory_name_is_ignored() {
        let table = MimeTypeTable::new();
        // Only the final segment carries the extension.
        assert!(table.resolve("assets.v2/README").is_err());
    }

    #[test]
    fn test_unknown_extension_fails() {
        let table = MimeTypeTable::new();
        let err = table.resolve("file.unknownext").expect_err("must fail");
        assert_eq!(err.path, "file.unknownext");
    }

    #[test]
    fn test_missing_extension_fails() {
        let table = MimeTypeTable::new();
        assert!(table.resolve("LICENSE").is_err());
        assert!(table.resolve("trailing.").is_err());
    }
}
