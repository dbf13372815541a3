//! Grouping Engine — partitions canonical records into (city, state) buckets
//! with deterministic ordering for display.

use std::collections::HashMap;

use crate::directory::text::title_case;
use crate::models::business::{CanonicalBusinessRecord, CityGroup};

/// Policy knobs for the historically divergent front-end variants, collapsed
/// into one parameterized engine.
#[derive(Debug, Clone)]
pub struct GroupingOptions {
    /// When false (caller already filtered to one state), groups sort by city
    /// only.
    pub sort_by_state: bool,
    pub blank_city_fallback: String,
    pub blank_state_fallback: String,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            sort_by_state: true,
            blank_city_fallback: "Unknown City".to_string(),
            blank_state_fallback: "??".to_string(),
        }
    }
}

impl GroupingOptions {
    /// Variant for data already filtered to a single state upstream, where
    /// state-level sorting is a no-op.
    pub fn state_filtered() -> Self {
        Self {
            sort_by_state: false,
            ..Self::default()
        }
    }
}

/// Partitions records into city/state groups, sorts members by name
/// (case-insensitive, stable) and groups by state then city (or city only).
///
/// Total membership across groups always equals the input length: blank
/// city/state records collapse into the fallback bucket, never get dropped.
/// The key is compared component-wise, so no delimiter can collide with a
/// real city name.
pub fn group(records: Vec<CanonicalBusinessRecord>, opts: &GroupingOptions) -> Vec<CityGroup> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<CityGroup> = Vec::new();

    for record in records {
        let city = {
            let c = title_case(record.city.trim());
            if c.is_empty() {
                opts.blank_city_fallback.clone()
            } else {
                c
            }
        };
        let state = {
            let s = record.state.trim().to_string();
            if s.is_empty() {
                opts.blank_state_fallback.clone()
            } else {
                s
            }
        };

        let key = (city.to_lowercase(), state.to_lowercase());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(CityGroup {
                city,
                state,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(record);
    }

    for g in &mut groups {
        // Stable sort: equal names keep their input order.
        g.members.sort_by_key(|m| m.name.to_lowercase());
    }

    if opts.sort_by_state {
        groups.sort_by_key(|g| (g.state.to_lowercase(), g.city.to_lowercase()));
    } else {
        groups.sort_by_key(|g| g.city.to_lowercase());
    }

    groups
}

/// Sum of member counts across groups; must equal the input record count.
pub fn member_total(groups: &[CityGroup]) -> usize {
    groups.iter().map(|g| g.members.len()).sum()
}
