//! Language preference, path prefixes, and UI strings

use anyhow::Result;

use crate::i18n::{
    self, path, ClientEnvironment, FixedClient, LanguageResolver, SystemLocale, TranslationKey,
};
use crate::Blog;

/// Print the active language
///
/// `accept` stands in for the client's reported language; without it the
/// system locale is used.
pub fn current(blog: &Blog, accept: Option<&str>) -> Result<()> {
    let mut prefs = blog.preferences();
    let fixed = accept.map(|tag| FixedClient(tag.to_string()));
    let client: &dyn ClientEnvironment = match &fixed {
        Some(client) => client,
        None => &SystemLocale,
    };

    let resolver = LanguageResolver::new(Some(&mut prefs), Some(client));
    let code = resolver.current_language();
    let language = i18n::language_by_code(code).unwrap_or_else(i18n::default_language);

    let site = blog.config.localized(language.code);

    println!("{} {} ({})", language.flag, language.display_name, language.code);
    println!("  lang: {}", site.lang);
    println!("  og_locale: {}", site.og_locale);
    println!("  share_message: {}", site.share_message);
    if let Some(stored) = resolver.stored_language() {
        println!("  stored: {}", stored);
    }
    Ok(())
}

/// Store an explicit language choice
pub fn set(blog: &Blog, code: &str) -> Result<()> {
    let mut prefs = blog.preferences();
    LanguageResolver::new(Some(&mut prefs), None).set_stored_language(code)?;

    if !i18n::registry::is_supported(code) {
        tracing::warn!("`{}` is not a supported language and will be ignored", code);
    }
    println!("Stored language preference: {}", code);
    Ok(())
}

/// Show how a path decodes, and its form in another language
pub fn inspect_path(url_path: &str, to: Option<&str>) {
    println!("language: {}", path::decode(url_path));
    println!("explicit: {}", path::has_explicit_language(url_path));
    println!("stripped: {}", path::strip(url_path));

    match to {
        Some(code) => println!("encoded:  {}", path::encode(url_path, code)),
        None => {
            for lang in i18n::languages() {
                println!("{:>8}: {}", lang.code, path::encode(url_path, lang.code));
            }
        }
    }
}

/// Print a UI string, or every string when no key is given
pub fn translate(key: Option<&str>, language: &str) -> Result<()> {
    match key {
        Some(key) => {
            let key: TranslationKey = key.parse()?;
            println!("{}", i18n::translation(language, key));
        }
        None => {
            for key in TranslationKey::ALL {
                println!("{:>18}: {}", key.as_str(), i18n::translation(language, key));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolver::PREFERENCE_KEY;
    use crate::i18n::PreferenceStore;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_current() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        set(&blog, "es").unwrap();
        assert_eq!(blog.preferences().get(PREFERENCE_KEY), Some("es".to_string()));
        assert!(current(&blog, Some("en-US")).is_ok());
        assert!(current(&blog, None).is_ok());
    }

    #[test]
    fn test_translate_rejects_unknown_key() {
        assert!(translate(Some("noSuchKey"), "es").is_err());
        assert!(translate(None, "es").is_ok());
    }
}
