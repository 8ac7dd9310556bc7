use std::cmp::Ordering;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PromoAdminError, Result};
use crate::model::{CodeType, PromoCode, Region};
use crate::store::{Clock, PromoCodeStore, SystemClock};

/// Split pasted input into codes: one per line, trimmed, blank lines dropped.
#[must_use]
pub fn parse_code_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` on either axis means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeFilter {
    pub code_type: Option<CodeType>,
    pub region: Option<Region>,
}

impl CodeFilter {
    #[must_use]
    pub fn matches(&self, code: &PromoCode) -> bool {
        self.code_type.as_ref().is_none_or(|t| *t == code.code_type)
            && self.region.as_ref().is_none_or(|r| *r == code.region)
    }
}

/// Filtered codes split by redemption state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeListing {
    pub unused: Vec<PromoCode>,
    pub used: Vec<PromoCode>,
}

impl CodeListing {
    #[must_use]
    pub fn len(&self) -> usize {
        self.unused.len() + self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unused.is_empty() && self.used.is_empty()
    }
}

/// Newest first; ties by code.
fn by_creation(a: &PromoCode, b: &PromoCode) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.code.cmp(&b.code))
}

/// Most recently redeemed first, codes without a redeem date last; ties by code, then id.
fn by_redemption(a: &PromoCode, b: &PromoCode) -> Ordering {
    let dates = match (a.redeem_date, b.redeem_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    dates
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.id.cmp(&b.id))
}

/// Bulk management of promo codes on top of an injected store.
pub struct PromoCodeService<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: PromoCodeStore> PromoCodeService<S> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: PromoCodeStore, C: Clock> PromoCodeService<S, C> {
    pub const fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Fetch every code, newest first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn refresh(&self) -> Result<Vec<PromoCode>> {
        let mut codes = self.store.fetch_codes()?;
        codes.sort_by(by_creation);
        debug!(count = codes.len(), "promo codes refreshed");
        Ok(codes)
    }

    /// Add a batch of codes of one type and region, all unredeemed.
    ///
    /// Each code is trimmed and blank entries are skipped. Returns how many
    /// codes were stored.
    ///
    /// # Errors
    /// Returns a validation error for an empty batch and `DuplicateCode` if a
    /// code already exists; in both cases nothing is stored.
    pub fn add_codes<T: AsRef<str>>(
        &mut self,
        codes: &[T],
        code_type: &CodeType,
        region: &Region,
    ) -> Result<usize> {
        let now = self.clock.now();
        let rows: Vec<PromoCode> = codes
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .map(|c| PromoCode::new(c, code_type.clone(), region.clone(), now))
            .collect();

        if rows.is_empty() {
            return Err(PromoAdminError::Validation(
                "Please enter at least one promo code".to_string(),
            ));
        }

        let count = rows.len();
        self.store.insert_codes(rows)?;
        info!(count, %code_type, %region, "promo codes added");
        Ok(count)
    }

    /// # Errors
    /// Returns `NotFound` for the first unknown id; nothing is deleted then.
    pub fn delete_codes(&mut self, ids: &[Uuid]) -> Result<usize> {
        let removed = self.store.delete_codes(ids)?;
        info!(removed, "promo codes deleted");
        Ok(removed)
    }

    /// Filtered codes, unused ones newest first and used ones by redemption.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn list(&self, filter: &CodeFilter) -> Result<CodeListing> {
        let (mut used, unused): (Vec<_>, Vec<_>) = self
            .refresh()?
            .into_iter()
            .filter(|c| filter.matches(c))
            .partition(|c| c.is_used);
        used.sort_by(by_redemption);
        Ok(CodeListing { unused, used })
    }

    /// Redeemed codes matching `filter`, most recently redeemed first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn used_codes(&self, filter: &CodeFilter) -> Result<Vec<PromoCode>> {
        let mut used: Vec<PromoCode> = self
            .store
            .fetch_codes()?
            .into_iter()
            .filter(|c| c.is_used && filter.matches(c))
            .collect();
        used.sort_by(by_redemption);
        Ok(used)
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;
