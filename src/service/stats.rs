use tracing::debug;

use crate::error::Result;
use crate::stats::{Breakdown, GroupOrder, StatsReport};
use crate::store::PromoCodeStore;

/// Recomputes usage statistics from the store on demand.
///
/// Holds no cached numbers: each [`StatsService::refresh`] reads a fresh
/// snapshot of code records and aggregates it from scratch.
pub struct StatsService<S> {
    store: S,
}

impl<S: PromoCodeStore> StatsService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Overall numbers plus region and type breakdowns, first-seen order.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn refresh(&self) -> Result<StatsReport> {
        self.refresh_with(Breakdown::All, GroupOrder::FirstSeen)
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn refresh_with(&self, breakdown: Breakdown, order: GroupOrder) -> Result<StatsReport> {
        let records = self.store.fetch_records()?;
        debug!(records = records.len(), ?breakdown, ?order, "computing stats");

        Ok(StatsReport::new(&records)
            .with_breakdown(&records, breakdown)
            .ordered(order))
    }
}
