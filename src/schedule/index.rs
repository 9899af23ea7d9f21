//! Range index over fee rules, grouped by fee type

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{FeeRule, RateTable};

/// Index mapping each fee type to its rules, sorted ascending by `from`.
///
/// Built once per published schedule and replaced wholesale on the next
/// upload; it is the only structure consulted at query time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeIndex {
    groups: HashMap<String, Vec<FeeRule>>,
}

impl FeeIndex {
    /// Build an index from a parsed rate table.
    ///
    /// Partitions rules by fee type preserving relative input order, then
    /// sorts each group by `from`. `Vec::sort_by` is stable, so rules sharing
    /// a `from` keep their input order.
    pub fn build(table: RateTable) -> Self {
        let mut groups: HashMap<String, Vec<FeeRule>> = HashMap::new();

        for rule in table {
            groups.entry(rule.fee_type.clone()).or_default().push(rule);
        }

        // Sort each group by 'from' so lookups can binary search
        for rules in groups.values_mut() {
            rules.sort_by(|a, b| a.from.cmp(&b.from));
        }

        Self { groups }
    }

    /// Rules for a fee type, sorted ascending by `from`
    pub fn group(&self, fee_type: &str) -> Option<&[FeeRule]> {
        self.groups.get(fee_type).map(Vec::as_slice)
    }

    /// Number of distinct fee types
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of rules across all fee types
    pub fn rule_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether the index holds no rules at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over the known fee types, in no particular order
    pub fn fee_types(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
