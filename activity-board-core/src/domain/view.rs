use crate::domain::{Activity, ActivityName, FilterCriteria, Snapshot, SortKey};
use std::cmp::Ordering;

/// Filtered, sorted subset of a snapshot. Recomputed on every control change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityView {
    entries: Vec<(ActivityName, Activity)>,
}

impl ActivityView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Turn the view back into a snapshot (keeps view order)
    pub fn into_snapshot(self) -> Snapshot {
        self.entries.into_iter().collect()
    }
}

/// Derive the displayed view from a snapshot.
///
/// Keeps an activity when its category matches (or no category is set) and
/// the search text is a case-insensitive substring of its name, description
/// or schedule. The sort is stable.
pub fn derive_view(snapshot: &Snapshot, criteria: &FilterCriteria) -> ActivityView {
    let needle = criteria.needle();

    let mut entries: Vec<(ActivityName, Activity)> = snapshot
        .iter()
        .filter(|(_, activity)| match &criteria.category {
            Some(category) => activity.category == *category,
            None => true,
        })
        .filter(|(name, activity)| activity.matches_search(name, &needle))
        .map(|(name, activity)| (name.to_string(), activity.clone()))
        .collect();

    entries.sort_by(|(name_a, a), (name_b, b)| compare(criteria.sort_key, name_a, a, name_b, b));

    tracing::debug!(
        total = snapshot.len(),
        shown = entries.len(),
        sort = %criteria.sort_key,
        "Derived activity view"
    );

    ActivityView { entries }
}

fn compare(key: SortKey, name_a: &str, a: &Activity, name_b: &str, b: &Activity) -> Ordering {
    match key {
        SortKey::Name => name_a.cmp(name_b),
        SortKey::Time => a.schedule.cmp(&b.schedule),
        SortKey::Availability => b.spots_left().cmp(&a.spots_left()),
    }
}
