//! Move catalog aggregator
//!
//! Collapses a creature's per-version-group move-learn records into one
//! canonical entry per move, then supports method filtering and level
//! sorting over the result. Pure and synchronous; no I/O and no failure
//! modes — empty input yields an empty catalog.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::api::types::MoveLearnset;

/// Canonical catalog entry: exactly one per distinct move name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub name: String,
    pub level: u32,
    pub method: String,
}

/// Aggregate raw learnsets into the canonical move catalog.
///
/// Candidate selection per move: its version-group details sorted descending
/// by learn level, index 0 seeds the map; a later candidate for the same
/// move replaces the stored entry only when its level is strictly lower.
/// That scan is order-dependent on ties and deliberately kept over a plain
/// minimum — it is the observable behavior for creatures with inconsistent
/// per-version data.
pub fn aggregate(learnsets: &[MoveLearnset], method_filter: Option<&str>) -> Vec<MoveEntry> {
    let mut by_name: HashMap<String, MoveEntry> = HashMap::new();

    for learnset in learnsets {
        let mut details = learnset.version_group_details.clone();
        details.sort_by(|a, b| b.level_learned_at.cmp(&a.level_learned_at));
        let Some(candidate) = details.first() else {
            continue;
        };

        let entry = MoveEntry {
            name: learnset.move_ref.name.clone(),
            level: candidate.level_learned_at,
            method: candidate.move_learn_method.name.clone(),
        };

        match by_name.entry(learnset.move_ref.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().level > entry.level {
                    slot.insert(entry);
                }
            }
        }
    }

    let mut entries: Vec<MoveEntry> = by_name
        .into_values()
        .filter(|e| method_filter.map_or(true, |m| e.method == m))
        .collect();
    entries.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Distinct learn methods across every version-group detail, in first-seen
/// order. Feeds the selectable filter options, so it must include methods
/// that lost out during aggregation.
pub fn learn_methods(learnsets: &[MoveLearnset]) -> Vec<String> {
    let mut methods = Vec::new();
    for learnset in learnsets {
        for detail in &learnset.version_group_details {
            let method = &detail.move_learn_method.name;
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }
    }
    methods
}
