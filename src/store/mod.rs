//! Data-access seam between the admin services and wherever records live.
//!
//! Services only see the [`PromoCodeStore`] and [`BlogPostStore`] traits and
//! are handed a concrete store by their caller. [`MemoryStore`] keeps rows in
//! process; [`JsonFileStore`] persists them to a snapshot file.

mod memory;
mod snapshot;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::model::{BlogPost, CodeRecord, PromoCode};

pub use memory::MemoryStore;
pub use snapshot::{JsonFileStore, SNAPSHOT_VERSION, Snapshot};

pub trait PromoCodeStore {
    /// All stored codes, in storage order.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn fetch_codes(&self) -> Result<Vec<PromoCode>>;

    /// The `(type, region, used)` projection of every stored code.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn fetch_records(&self) -> Result<Vec<CodeRecord>> {
        Ok(self.fetch_codes()?.iter().map(PromoCode::record).collect())
    }

    /// Insert a batch. Either every code is stored or none is.
    ///
    /// # Errors
    /// Returns `DuplicateCode` if any code is already stored or repeated in the batch.
    fn insert_codes(&mut self, codes: Vec<PromoCode>) -> Result<()>;

    /// Delete codes by id and return how many were removed.
    ///
    /// # Errors
    /// Returns `NotFound` for the first unknown id; nothing is deleted in that case.
    fn delete_codes(&mut self, ids: &[Uuid]) -> Result<usize>;
}

pub trait BlogPostStore {
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn fetch_posts(&self) -> Result<Vec<BlogPost>>;

    /// # Errors
    /// Returns `DuplicateSlug` if another post already uses the slug.
    fn insert_post(&mut self, post: BlogPost) -> Result<()>;

    /// Replace the stored post with the same id.
    ///
    /// # Errors
    /// Returns `NotFound` for an unknown id, `DuplicateSlug` on a slug collision.
    fn replace_post(&mut self, post: BlogPost) -> Result<()>;

    /// # Errors
    /// Returns `NotFound` for an unknown id.
    fn delete_post(&mut self, id: Uuid) -> Result<()>;
}

/// Source of "now" for created/updated timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
