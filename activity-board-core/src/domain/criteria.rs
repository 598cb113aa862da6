use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order of the derived view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by activity name
    #[default]
    Name,
    /// Ascending by raw schedule text (not a parsed time)
    Time,
    /// Descending by spots left
    Availability,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Time, SortKey::Availability];

    /// Value carried by the sort control
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Time => "time",
            SortKey::Availability => "availability",
        }
    }

    /// Label shown next to the sort control
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Time => "Time",
            SortKey::Availability => "Available spots",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "time" => Ok(SortKey::Time),
            "availability" => Ok(SortKey::Availability),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Current state of the three filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact-match category; `None` keeps every category
    pub category: Option<String>,

    pub sort_key: SortKey,

    /// Raw search text as typed
    pub search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw control values.
    ///
    /// An empty category means "all categories"; an unrecognised sort value
    /// falls back to sorting by name.
    pub fn from_controls(category: &str, sort: &str, search: &str) -> Self {
        Self::new()
            .with_category(category)
            .with_sort_key(sort.parse().unwrap_or_default())
            .with_search(search)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
    }

    /// Lowercased search needle
    pub fn needle(&self) -> String {
        self.search.to_lowercase()
    }

    pub fn category_value(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
