//! Dashboard aggregation over the offers collection.
//!
//! The admin dashboard plots how many offers sit in each stage of the
//! predicted → confirmed → claimed → delivered funnel. Quantities are summed
//! per unit because "12 kg" and "40 servings" do not add up.

use crate::{Offer, OfferStatus};

use std::collections::BTreeMap;

use serde::Serialize;

/// Count and per-unit quantity for one status bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusTotals {
    pub count: usize,
    pub quantity_by_unit: BTreeMap<String, f64>,
}

impl StatusTotals {
    fn add(&mut self, offer: &Offer) {
        self.count += 1;
        *self
            .quantity_by_unit
            .entry(offer.unit.clone())
            .or_insert(0.0) += offer.quantity;
    }
}

/// Offers per category, used for the dashboard breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowSummary {
    pub predicted: StatusTotals,
    pub confirmed: StatusTotals,
    pub claimed: StatusTotals,
    pub delivered: StatusTotals,
    pub total_offers: usize,
    /// Sorted by descending count, ties broken by category name
    pub categories: Vec<CategoryCount>,
}

impl FlowSummary {
    pub fn from_offers<'a, I>(offers: I) -> Self
    where
        I: IntoIterator<Item = &'a Offer>,
    {
        let mut summary = FlowSummary::default();
        let mut categories: BTreeMap<String, usize> = BTreeMap::new();

        for offer in offers {
            summary.bucket_mut(offer.status).add(offer);
            summary.total_offers += 1;
            *categories.entry(offer.category.clone()).or_insert(0) += 1;
        }

        let mut categories: Vec<CategoryCount> = categories
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
        summary.categories = categories;

        summary
    }

    pub fn totals_for(&self, status: OfferStatus) -> &StatusTotals {
        match status {
            OfferStatus::Predicted => &self.predicted,
            OfferStatus::Confirmed => &self.confirmed,
            OfferStatus::Claimed => &self.claimed,
            OfferStatus::Delivered => &self.delivered,
        }
    }

    fn bucket_mut(&mut self, status: OfferStatus) -> &mut StatusTotals {
        match status {
            OfferStatus::Predicted => &mut self.predicted,
            OfferStatus::Confirmed => &mut self.confirmed,
            OfferStatus::Claimed => &mut self.claimed,
            OfferStatus::Delivered => &mut self.delivered,
        }
    }
}
