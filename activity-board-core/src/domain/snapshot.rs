use crate::domain::{Activity, ActivityName};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Client-side copy of the server's activities as of the last fetch.
///
/// Entries keep the order in which the server listed them. A snapshot is
/// only ever replaced as a whole; the client never edits one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(ActivityName, Activity)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated name replaces the earlier value in place.
    pub fn insert(&mut self, name: impl Into<ActivityName>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn with(mut self, name: impl Into<ActivityName>, activity: Activity) -> Self {
        self.insert(name, activity);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

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

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Distinct non-empty categories, sorted
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, activity)| activity.category.as_str())
            .filter(|category| !category.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl FromIterator<(ActivityName, Activity)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (ActivityName, Activity)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (name, activity) in iter {
            snapshot.insert(name, activity);
        }
        snapshot
    }
}

impl IntoIterator for Snapshot {
    type Item = (ActivityName, Activity);
    type IntoIter = std::vec::IntoIter<(ActivityName, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Snapshot, M::Error> {
                let mut snapshot = Snapshot::new();
                while let Some((name, activity)) = access.next_entry::<ActivityName, Activity>()? {
                    snapshot.insert(name, activity);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

impl JsonSchema for Snapshot {
    fn schema_name() -> String {
        "Snapshot".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <BTreeMap<ActivityName, Activity>>::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "Code", "category": "Academic", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "Chess", "category": "Games", "schedule": "Fri", "max_participants": 12, "participants": []},
            "Art Studio": {"description": "Paint", "category": "Arts", "schedule": "Wed", "max_participants": 15, "participants": []}
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        let names: Vec<_> = snapshot.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
    }

    #[test]
    fn test_repeated_name_replaces_in_place() {
        let snapshot = Snapshot::new()
            .with("Chess Club", Activity::new("old", "Games", "Fri", 10))
            .with("Art Studio", Activity::new("paint", "Arts", "Wed", 5))
            .with("Chess Club", Activity::new("new", "Games", "Fri", 12));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.names().next(), Some("Chess Club"));
        assert_eq!(snapshot.get("Chess Club").unwrap().description, "new");
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let snapshot = Snapshot::new()
            .with("Chess Club", Activity::new("", "Games", "", 1))
            .with("Drama", Activity::new("", "Arts", "", 1))
            .with("Go Club", Activity::new("", "Games", "", 1))
            .with("Misc", Activity::new("", "", "", 1));

        assert_eq!(snapshot.categories(), vec!["Arts", "Games"]);
    }

    #[test]
    fn test_rejects_non_map_body() {
        let result = serde_json::from_str::<Snapshot>("[1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let snapshot = Snapshot::new()
            .with("Zumba", Activity::new("", "Sports", "", 1))
            .with("Archery", Activity::new("", "Sports", "", 1));

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.find("Zumba").unwrap() < json.find("Archery").unwrap());
    }
}
