//! Sector allocation breakdown.
//!
//! Groups holdings by their upstream-supplied sector label and sums
//! allocation weights per group. Purely descriptive; no sufficiency gate
//! applies since weights are always present.

use fundlab_core::types::{weight_as_f64, Fund};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated weight for one sector bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorBucket {
    /// Number of holdings in this bucket.
    pub count: usize,

    /// Combined allocation weight, in percent of the fund.
    pub weight_pct: f64,
}

impl SectorBucket {
    /// Returns true if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Distribution of fund weight across sectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    /// Buckets keyed by sector label.
    pub by_sector: HashMap<String, SectorBucket>,

    /// Holdings without a sector classification.
    pub uncategorized: SectorBucket,

    /// Total allocated weight across all holdings, in percent.
    pub total_weight: f64,
}

impl SectorAllocation {
    /// Returns metrics for a specific sector.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorBucket> {
        self.by_sector.get(sector)
    }

    /// Weight not covered by any holding, floored at zero.
    #[must_use]
    pub fn unallocated_pct(&self) -> f64 {
        (100.0 - self.total_weight).max(0.0)
    }

    /// All sectors with their buckets, sorted by weight descending.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(&str, &SectorBucket)> {
        let mut result: Vec<_> = self
            .by_sector
            .iter()
            .map(|(s, b)| (s.as_str(), b))
            .collect();
        result.sort_by(|a, b| {
            b.1.weight_pct
                .partial_cmp(&a.1.weight_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        result
    }
}

/// Buckets a fund's holdings by sector label.
#[must_use]
pub fn allocate_by_sector(fund: &Fund) -> SectorAllocation {
    let mut allocation = SectorAllocation::default();

    for holding in &fund.holdings {
        let weight = weight_as_f64(holding.weight);
        allocation.total_weight += weight;

        let bucket = match &holding.sector {
            Some(sector) => allocation.by_sector.entry(sector.clone()).or_default(),
            None => &mut allocation.uncategorized,
        };
        bucket.count += 1;
        bucket.weight_pct += weight;
    }

    allocation
}
