//! UI string table
//!
//! Every key must be defined for the default language. Other languages may
//! be partial; lookups fall back to the default language's text.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::registry;

/// Closed set of translatable UI strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    ShareMessage,
    ReadingTime,
    RelatedPosts,
    Home,
    About,
    Tags,
    Categories,
    Blog,
    SearchPlaceholder,
    NoPostsFound,
    Language,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 11] = [
        TranslationKey::ShareMessage,
        TranslationKey::ReadingTime,
        TranslationKey::RelatedPosts,
        TranslationKey::Home,
        TranslationKey::About,
        TranslationKey::Tags,
        TranslationKey::Categories,
        TranslationKey::Blog,
        TranslationKey::SearchPlaceholder,
        TranslationKey::NoPostsFound,
        TranslationKey::Language,
    ];

    /// Key name as used by templates
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKey::ShareMessage => "shareMessage",
            TranslationKey::ReadingTime => "readingTime",
            TranslationKey::RelatedPosts => "relatedPosts",
            TranslationKey::Home => "home",
            TranslationKey::About => "about",
            TranslationKey::Tags => "tags",
            TranslationKey::Categories => "categories",
            TranslationKey::Blog => "blog",
            TranslationKey::SearchPlaceholder => "searchPlaceholder",
            TranslationKey::NoPostsFound => "noPostsFound",
            TranslationKey::Language => "language",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TranslationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown translation key: {}", s))
    }
}

type Table = HashMap<&'static str, HashMap<TranslationKey, &'static str>>;

lazy_static! {
    static ref TRANSLATIONS: Table = {
        use TranslationKey::*;

        let mut table = HashMap::new();
        table.insert(
            "en",
            HashMap::from([
                (ShareMessage, "Share this post"),
                (ReadingTime, "min read"),
                (RelatedPosts, "Related Posts"),
                (Home, "Home"),
                (About, "About"),
                (Tags, "Tags"),
                (Categories, "Categories"),
                (Blog, "Blog"),
                (SearchPlaceholder, "Search posts..."),
                (NoPostsFound, "No posts found"),
                (Language, "Language"),
            ]),
        );
        table.insert(
            "es",
            HashMap::from([
                (ShareMessage, "Compartir este post"),
                (ReadingTime, "min de lectura"),
                (RelatedPosts, "Posts Relacionados"),
                (Home, "Inicio"),
                (About, "Acerca de"),
                (Tags, "Etiquetas"),
                (Categories, "Categorías"),
                (Blog, "Blog"),
                (SearchPlaceholder, "Buscar posts..."),
                (NoPostsFound, "No se encontraron posts"),
                (Language, "Idioma"),
            ]),
        );
        table
    };
}

/// Get the UI string for `key` in the language `code`
///
/// Falls back to the default language for unknown codes and for keys the
/// language does not define.
pub fn translation(code: &str, key: TranslationKey) -> &'static str {
    lookup(&TRANSLATIONS, code, key)
}

fn lookup(table: &Table, code: &str, key: TranslationKey) -> &'static str {
    if let Some(text) = table.get(code).and_then(|strings| strings.get(&key)) {
        return *text;
    }

    table
        .get(registry::default_code())
        .and_then(|strings| strings.get(&key))
        .copied()
        .unwrap_or_else(|| key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_defines_every_key() {
        let default = TRANSLATIONS.get(registry::default_code()).unwrap();
        for key in TranslationKey::ALL {
            assert!(default.contains_key(&key), "missing {}", key);
        }
    }

    #[test]
    fn test_get_translation() {
        assert_eq!(translation("en", TranslationKey::Home), "Home");
        assert_eq!(translation("es", TranslationKey::Home), "Inicio");
        assert_eq!(
            translation("es", TranslationKey::ShareMessage),
            "Compartir este post"
        );
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert_eq!(translation("fr", TranslationKey::Tags), "Tags");
        assert_eq!(translation("", TranslationKey::Blog), "Blog");
    }

    #[test]
    fn test_partial_language_falls_back() {
        let mut table: Table = HashMap::new();
        table.insert(
            "en",
            HashMap::from([
                (TranslationKey::Home, "Home"),
                (TranslationKey::About, "About"),
            ]),
        );
        table.insert("es", HashMap::from([(TranslationKey::Home, "Inicio")]));

        assert_eq!(lookup(&table, "es", TranslationKey::Home), "Inicio");
        assert_eq!(lookup(&table, "es", TranslationKey::About), "About");
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in TranslationKey::ALL {
            assert_eq!(key.as_str().parse::<TranslationKey>().unwrap(), key);
        }
        assert!("share_message".parse::<TranslationKey>().is_err());
    }
}
