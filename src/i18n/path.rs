//! Language prefixes in URL paths
//!
//! The default language is served unprefixed (`/blog/post-1`); every other
//! language lives under its code (`/es/blog/post-1`). A leading segment that
//! happens to equal a language code is always read as a language, so content
//! cannot use those names as top-level paths.

use super::registry;

/// First non-empty segment of a path
fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|s| !s.is_empty())
}

/// Language addressed by a path, or the default language
///
/// # Examples
/// ```ignore
/// decode("/es/blog/post-1") // -> "es"
/// decode("/blog/post-1")    // -> "en"
/// ```
pub fn decode(path: &str) -> &'static str {
    first_segment(path)
        .and_then(registry::language_by_code)
        .map(|lang| lang.code)
        .unwrap_or_else(registry::default_code)
}

/// Whether the path names its language explicitly
///
/// `/en/` counts as explicit even though `en` is the default language.
pub fn has_explicit_language(path: &str) -> bool {
    let default = registry::default_code();
    decode(path) != default || path.starts_with(&format!("/{}/", default))
}

/// Remove a leading language segment, if it is a recognized code
pub fn strip(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.first() {
        Some(first) if registry::is_supported(first) => format!("/{}", segments[1..].join("/")),
        _ => path.to_string(),
    }
}

/// Address `path` in the language `code`
///
/// # Examples
/// ```ignore
/// encode("/blog/", "es")   // -> "/es/blog/"
/// encode("/", "es")        // -> "/es"
/// encode("/es/blog", "en") // -> "/blog"
/// ```
pub fn encode(path: &str, code: &str) -> String {
    let clean = strip(path);
    if code == registry::default_code() {
        return clean;
    }

    match clean.as_str() {
        "" | "/" => format!("/{}", code),
        p if p.starts_with('/') => format!("/{}{}", code, p),
        p => format!("/{}/{}", code, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(decode("/es/blog/post-1"), "es");
        assert_eq!(decode("/blog/post-1"), "en");
        assert_eq!(decode("/en/"), "en");
        assert_eq!(decode("es"), "es");
    }

    #[test]
    fn test_decode_degenerate_paths() {
        assert_eq!(decode(""), "en");
        assert_eq!(decode("/"), "en");
        assert_eq!(decode("////"), "en");
        assert_eq!(decode("//es//x"), "es");
        assert_eq!(decode("/fr/blog"), "en");
    }

    #[test]
    fn test_has_explicit_language() {
        assert!(has_explicit_language("/en/"));
        assert!(has_explicit_language("/en/blog"));
        assert!(has_explicit_language("/es/blog"));
        assert!(has_explicit_language("/es"));
        assert!(!has_explicit_language("/en"));
        assert!(!has_explicit_language("/blog"));
        assert!(!has_explicit_language(""));
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("/es/blog/post-1"), "/blog/post-1");
        assert_eq!(strip("/es"), "/");
        assert_eq!(strip("/en/"), "/");
        assert_eq!(strip("/blog/post-1"), "/blog/post-1");
        assert_eq!(strip("/fr/blog"), "/fr/blog");
        assert_eq!(strip(""), "");
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("/blog/post-1", "es"), "/es/blog/post-1");
        assert_eq!(encode("/", "es"), "/es");
        assert_eq!(encode("", "es"), "/es");
        assert_eq!(encode("/en/blog", "es"), "/es/blog");
        assert_eq!(encode("/es/blog", "en"), "/blog");
        assert_eq!(encode("/blog", "en"), "/blog");
    }

    #[test]
    fn test_round_trip() {
        let paths = ["/", "/blog", "/blog/post-1", "/es/blog", "/en/tags/rust/"];
        for lang in registry::languages() {
            for path in paths {
                let encoded = encode(path, lang.code);
                assert_eq!(decode(&encoded), lang.code, "{} -> {}", path, encoded);
                assert_eq!(
                    strip(&encoded).trim_end_matches('/'),
                    strip(path).trim_end_matches('/'),
                );
            }
        }
    }
}
