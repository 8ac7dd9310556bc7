use std::str::FromStr;

use indexmap::IndexSet;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PromoAdminError, RecordKind, Result};
use crate::model::{
    BlogPost, BlogPostDraft, BlogPostPatch, Language, SlugGenerator, require_slug_and_title,
};
use crate::store::{BlogPostStore, Clock, SystemClock};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishStatus {
    #[default]
    All,
    Published,
    Draft,
}

impl PublishStatus {
    #[must_use]
    pub const fn matches(self, published: bool) -> bool {
        match self {
            Self::All => true,
            Self::Published => published,
            Self::Draft => !published,
        }
    }
}

impl FromStr for PublishStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "draft" | "drafts" => Ok(Self::Draft),
            _ => Err(format!(
                "Unknown status: {s}. Expected one of: all, published, draft"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// `None` means every category.
    pub category: Option<String>,
    pub status: PublishStatus,
}

impl BlogFilter {
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        self.category.as_ref().is_none_or(|c| *c == post.category)
            && self.status.matches(post.published)
    }
}

/// Distinct non-empty categories, in order of first appearance.
#[must_use]
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    posts
        .iter()
        .map(|p| p.category.trim())
        .filter(|c| !c.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Multilingual blog post management on top of an injected store.
pub struct BlogService<S, C = SystemClock> {
    store: S,
    clock: C,
    slugs: SlugGenerator,
}

impl<S: BlogPostStore> BlogService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: BlogPostStore, C: Clock> BlogService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            slugs: SlugGenerator::new(),
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub fn generate_slug(&self, title: &str) -> String {
        self.slugs.generate(title)
    }

    /// Every post, most recently updated first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn refresh(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.store.fetch_posts()?;
        posts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        debug!(count = posts.len(), "blog posts refreshed");
        Ok(posts)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn list(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>> {
        Ok(self
            .refresh()?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    /// Categories in use, most recently updated post first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(categories(&self.refresh()?))
    }

    /// # Errors
    /// Returns `NotFound` if no post has this id.
    pub fn get(&self, id: Uuid) -> Result<BlogPost> {
        self.store
            .fetch_posts()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        Ok(self
            .store
            .fetch_posts()?
            .into_iter()
            .find(|p| p.slug == slug))
    }

    /// Create a post. A blank slug is derived from the English title.
    ///
    /// # Errors
    /// Returns a validation error if the slug or English title is blank and
    /// `DuplicateSlug` if the slug is taken.
    pub fn create(&mut self, mut draft: BlogPostDraft) -> Result<BlogPost> {
        draft.slug = draft.slug.trim().to_string();
        if draft.slug.is_empty() {
            draft.slug = self.slugs.generate(draft.english_title());
        }
        require_slug_and_title(&draft.slug, draft.english_title())?;

        let post = draft.into_post(self.clock.now());
        self.store.insert_post(post.clone())?;
        info!(id = %post.id, slug = %post.slug, "blog post created");
        Ok(post)
    }

    /// # Errors
    /// Returns `NotFound` for an unknown id, a validation error if the result
    /// lacks a slug or English title, and `DuplicateSlug` on a slug collision.
    pub fn update(&mut self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost> {
        let mut post = self.get(id)?;
        patch.apply(&mut post);
        post.slug = post.slug.trim().to_string();
        require_slug_and_title(&post.slug, post.title(Language::En))?;

        post.updated_at = self.clock.now();
        self.store.replace_post(post.clone())?;
        info!(id = %post.id, slug = %post.slug, "blog post updated");
        Ok(post)
    }

    /// # Errors
    /// Returns `NotFound` if no post has this id.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        self.store.delete_post(id)?;
        info!(%id, "blog post deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> PromoAdminError {
    PromoAdminError::NotFound {
        kind: RecordKind::BlogPost,
        id: id.to_string(),
    }
}

#[cfg(test)]
#[path = "blog_tests.rs"]
mod tests;
