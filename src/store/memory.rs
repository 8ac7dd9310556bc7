use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PromoAdminError, RecordKind, Result};
use crate::model::{BlogPost, PromoCode};

use super::{BlogPostStore, PromoCodeStore};

/// Rows held in process. Also the in-memory half of [`super::JsonFileStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rows(promo_codes: Vec<PromoCode>, blog_posts: Vec<BlogPost>) -> Self {
        Self {
            promo_codes,
            blog_posts,
        }
    }

    fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> bool {
        self.blog_posts
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != except)
    }
}

impl PromoCodeStore for MemoryStore {
    fn fetch_codes(&self) -> Result<Vec<PromoCode>> {
        Ok(self.promo_codes.clone())
    }

    fn insert_codes(&mut self, codes: Vec<PromoCode>) -> Result<()> {
        let mut seen: HashSet<&str> = self.promo_codes.iter().map(|c| c.code.as_str()).collect();
        for code in &codes {
            if !seen.insert(code.code.as_str()) {
                return Err(PromoAdminError::DuplicateCode(code.code.clone()));
            }
        }

        self.promo_codes.extend(codes);
        Ok(())
    }

    fn delete_codes(&mut self, ids: &[Uuid]) -> Result<usize> {
        if let Some(missing) = ids
            .iter()
            .find(|id| !self.promo_codes.iter().any(|c| c.id == **id))
        {
            return Err(PromoAdminError::NotFound {
                kind: RecordKind::PromoCode,
                id: missing.to_string(),
            });
        }

        let before = self.promo_codes.len();
        self.promo_codes.retain(|c| !ids.contains(&c.id));
        Ok(before - self.promo_codes.len())
    }
}

impl BlogPostStore for MemoryStore {
    fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        Ok(self.blog_posts.clone())
    }

    fn insert_post(&mut self, post: BlogPost) -> Result<()> {
        if self.slug_taken(&post.slug, None) {
            return Err(PromoAdminError::DuplicateSlug(post.slug));
        }
        self.blog_posts.push(post);
        Ok(())
    }

    fn replace_post(&mut self, post: BlogPost) -> Result<()> {
        if self.slug_taken(&post.slug, Some(post.id)) {
            return Err(PromoAdminError::DuplicateSlug(post.slug));
        }
        let slot = self
            .blog_posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| PromoAdminError::NotFound {
                kind: RecordKind::BlogPost,
                id: post.id.to_string(),
            })?;
        *slot = post;
        Ok(())
    }

    fn delete_post(&mut self, id: Uuid) -> Result<()> {
        let before = self.blog_posts.len();
        self.blog_posts.retain(|p| p.id != id);
        if self.blog_posts.len() == before {
            return Err(PromoAdminError::NotFound {
                kind: RecordKind::BlogPost,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
