use std::cmp::Ordering;

use crate::error::{PortalError, PortalResult};
use crate::models::medal::MedalStanding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedalCounts {
    pub gold: i32,
    pub silver: i32,
    pub bronze: i32,
}

impl MedalCounts {
    pub fn new(gold: i32, silver: i32, bronze: i32) -> PortalResult<Self> {
        let counts = Self { gold, silver, bronze };
        counts.ensure_non_negative()?;
        counts.ensure_total_fits()?;
        Ok(counts)
    }

    /// Widened so rows written outside `new` still sum safely.
    pub fn total(&self) -> i64 {
        i64::from(self.gold) + i64::from(self.silver) + i64::from(self.bronze)
    }

    /// Overwrite only the provided counts.
    pub fn with_updates(
        self,
        gold: Option<i32>,
        silver: Option<i32>,
        bronze: Option<i32>,
    ) -> PortalResult<Self> {
        Self::new(
            gold.unwrap_or(self.gold),
            silver.unwrap_or(self.silver),
            bronze.unwrap_or(self.bronze),
        )
    }

    /// Table order: more gold first, then silver, then bronze.
    pub fn table_order(&self, other: &Self) -> Ordering {
        other
            .gold
            .cmp(&self.gold)
            .then(other.silver.cmp(&self.silver))
            .then(other.bronze.cmp(&self.bronze))
    }

    fn ensure_non_negative(&self) -> PortalResult<()> {
        if self.gold < 0 || self.silver < 0 || self.bronze < 0 {
            return Err(PortalError::validation("Medal counts cannot be negative"));
        }
        Ok(())
    }

    fn ensure_total_fits(&self) -> PortalResult<()> {
        self.gold
            .checked_add(self.silver)
            .and_then(|sum| sum.checked_add(self.bronze))
            .map(drop)
            .ok_or_else(|| PortalError::validation("Medal counts are too large"))
    }
}

/// Sort standings into medal-table order.
///
/// The sort is stable, so entries tied on all three counts keep the order
/// they came in with.
pub fn rank_standings<T, F>(mut entries: Vec<T>, standing: F) -> Vec<T>
where
    F: Fn(&T) -> &MedalStanding,
{
    entries.sort_by(|a, b| standing(a).counts().table_order(&standing(b).counts()));
    entries
}
