use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PromoAdminError, Result};

/// Languages a blog post can be translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Es,
    Pt,
    De,
    Ja,
    Hi,
    Ru,
}

impl Language {
    pub const ALL: [Self; 8] = [
        Self::En,
        Self::Fr,
        Self::Es,
        Self::Pt,
        Self::De,
        Self::Ja,
        Self::Hi,
        Self::Ru,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::De => "de",
            Self::Ja => "ja",
            Self::Hi => "hi",
            Self::Ru => "ru",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "French",
            Self::Es => "Spanish",
            Self::Pt => "Portuguese",
            Self::De => "German",
            Self::Ja => "Japanese",
            Self::Hi => "Hindi",
            Self::Ru => "Russian",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown language: {s}"))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Localized text of a post in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub title: String,
    pub content: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub slug: String,
    #[serde(default)]
    pub translations: BTreeMap<Language, Translation>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub category: String,
    /// Comma separated, as entered.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Title in `lang`, or an empty string when that translation is missing.
    #[must_use]
    pub fn title(&self, lang: Language) -> &str {
        self.translations
            .get(&lang)
            .map_or("", |t| t.title.as_str())
    }

    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Languages with a non-blank title.
    #[must_use]
    pub fn translated_languages(&self) -> Vec<Language> {
        self.translations
            .iter()
            .filter(|(_, t)| !t.title.trim().is_empty())
            .map(|(lang, _)| *lang)
            .collect()
    }
}

/// Input for creating a post. Ids and timestamps are assigned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostDraft {
    pub slug: String,
    pub translations: BTreeMap<Language, Translation>,
    pub author: String,
    pub featured_image: String,
    pub category: String,
    pub tags: String,
    pub published: bool,
    pub featured: bool,
}

impl BlogPostDraft {
    #[must_use]
    pub fn english_title(&self) -> &str {
        self.translations
            .get(&Language::En)
            .map_or("", |t| t.title.as_str())
    }

    #[must_use]
    pub fn into_post(self, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            slug: self.slug,
            translations: self.translations,
            author: self.author,
            featured_image: self.featured_image,
            category: self.category,
            tags: self.tags,
            published: self.published,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
}

/// Partial update. Absent fields are left untouched; translations merge per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostPatch {
    pub slug: Option<String>,
    pub translations: BTreeMap<Language, TranslationPatch>,
    pub author: Option<String>,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

impl BlogPostPatch {
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
        for (lang, patch) in self.translations {
            let entry = post.translations.entry(lang).or_default();
            if let Some(title) = patch.title {
                entry.title = title;
            }
            if let Some(content) = patch.content {
                entry.content = content;
            }
            if let Some(excerpt) = patch.excerpt {
                entry.excerpt = excerpt;
            }
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(image) = self.featured_image {
            post.featured_image = image;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        if let Some(featured) = self.featured {
            post.featured = featured;
        }
    }
}

/// Presence check shared by create and update.
///
/// # Errors
/// Returns a validation error if the slug or the English title is blank.
pub fn require_slug_and_title(slug: &str, english_title: &str) -> Result<()> {
    if slug.trim().is_empty() || english_title.trim().is_empty() {
        return Err(PromoAdminError::Validation(
            "Slug and English title are required".to_string(),
        ));
    }
    Ok(())
}

/// Derives URL slugs from titles.
pub struct SlugGenerator {
    disallowed: Regex,
    whitespace: Regex,
    dashes: Regex,
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            disallowed: Regex::new(r"[^a-z0-9\s-]").expect("Invalid regex"),
            whitespace: Regex::new(r"\s+").expect("Invalid regex"),
            dashes: Regex::new(r"-+").expect("Invalid regex"),
        }
    }

    /// `"  Hello, World! "` → `"hello-world"`. Non-ASCII letters are dropped.
    #[must_use]
    pub fn generate(&self, title: &str) -> String {
        let lowered = title.to_lowercase();
        let cleaned = self.disallowed.replace_all(lowered.trim(), "");
        let dashed = self.whitespace.replace_all(&cleaned, "-");
        self.dashes.replace_all(&dashed, "-").into_owned()
    }
}

#[cfg(test)]
#[path = "blog_tests.rs"]
mod tests;
