//! Rank tables: explicit label -> position orderings for categorical fields.

use crate::enums::{DealStage, DiscoveryCategory, FaqCategory, ObjectionCategory, RankedEnum};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// An explicit enum-label -> integer mapping used to sort a categorical field
/// in business order instead of alphabetically.
#[derive(Debug, Clone)]
pub struct RankTable {
    name: &'static str,
    labels: Vec<&'static str>,
    ranks: HashMap<&'static str, usize>,
}

impl RankTable {
    /// Build a table from labels given in rank order. A repeated label keeps
    /// its first position.
    pub fn new(name: &'static str, labels: &[&'static str]) -> Self {
        let mut ordered = Vec::with_capacity(labels.len());
        let mut ranks = HashMap::with_capacity(labels.len());
        for label in labels {
            if !ranks.contains_key(label) {
                ranks.insert(*label, ordered.len());
                ordered.push(*label);
            }
        }
        Self {
            name,
            labels: ordered,
            ranks,
        }
    }

    /// Build the table declared by a ranked enum.
    pub fn of<T: RankedEnum>() -> Self {
        Self::new(T::NAME, &T::labels())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Position of `label`, or `None` when the label is not part of the table.
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.ranks.get(label).copied()
    }

    /// Labels in rank order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub static DEAL_STAGE_RANK: Lazy<RankTable> = Lazy::new(RankTable::of::<DealStage>);
pub static OBJECTION_CATEGORY_RANK: Lazy<RankTable> =
    Lazy::new(RankTable::of::<ObjectionCategory>);
pub static FAQ_CATEGORY_RANK: Lazy<RankTable> = Lazy::new(RankTable::of::<FaqCategory>);
pub static DISCOVERY_CATEGORY_RANK: Lazy<RankTable> =
    Lazy::new(RankTable::of::<DiscoveryCategory>);
