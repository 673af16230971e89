//! Front-matter parsing

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a blog entry
///
/// Required fields stay optional here so a missing one is reported by name
/// instead of as a generic YAML error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub hero_image: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub draft: bool,
    pub language: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            bail!("Missing front-matter");
        };
        let rest = rest.trim_start_matches([' ', '\t']).trim_start_matches(['\n', '\r']);

        let (yaml, body) = match rest.find("\n---") {
            Some(end_pos) => (&rest[..end_pos], &rest[end_pos + 4..]),
            None => bail!("Unterminated front-matter"),
        };
        let body = body.trim_start_matches(['-']).trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml).context("Invalid front-matter")?;
        Ok((fm, body))
    }

    /// Parse the publication date
    pub fn parse_pub_date(&self) -> Option<DateTime<Utc>> {
        self.pub_date.as_deref().and_then(parse_date_string)
    }

    /// Take a required field, naming it when absent or blank
    pub fn require(field: &Option<String>, name: &str) -> Result<String> {
        field
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Missing required field `{}`", name))
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Explicit offsets, including the space-separated YAML timestamp form
    let offset_formats = [
        "%Y-%m-%d %H:%M:%S %:z",
        "%Y-%m-%d %H:%M:%S%.f %:z",
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%b %d %Y", "%B %d %Y", "%B %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
