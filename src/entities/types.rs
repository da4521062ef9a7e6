use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Date,
}

impl EntityCategory {
    pub const ALL: [EntityCategory; 4] = [
        EntityCategory::Person,
        EntityCategory::Organization,
        EntityCategory::Location,
        EntityCategory::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Person => "PERSON",
            EntityCategory::Organization => "ORGANIZATION",
            EntityCategory::Location => "LOCATION",
            EntityCategory::Date => "DATE",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub category: EntityCategory,
}

impl EntityRecord {
    pub fn new(name: impl Into<String>, category: EntityCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Named entities grouped by category, deduplicated within each category.
///
/// Every category is present (possibly empty). Ordering is an implementation
/// detail kept stable so repeated runs render identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySet {
    groups: BTreeMap<EntityCategory, BTreeSet<String>>,
}

impl Default for EntitySet {
    fn default() -> Self {
        Self {
            groups: EntityCategory::ALL
                .into_iter()
                .map(|c| (c, BTreeSet::new()))
                .collect(),
        }
    }
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already present in that category.
    pub fn insert(&mut self, category: EntityCategory, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() {
            return false;
        }
        self.groups.entry(category).or_default().insert(name)
    }

    pub fn with(mut self, category: EntityCategory, name: impl Into<String>) -> Self {
        self.insert(category, name);
        self
    }

    pub fn get(&self, category: EntityCategory) -> impl Iterator<Item = &str> {
        self.groups
            .get(&category)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    pub fn contains(&self, category: EntityCategory, name: &str) -> bool {
        self.groups
            .get(&category)
            .is_some_and(|names| names.contains(name))
    }

    /// Non-empty categories with their names.
    pub fn groups(&self) -> impl Iterator<Item = (EntityCategory, Vec<&str>)> {
        self.groups
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(c, names)| (*c, names.iter().map(String::as_str).collect()))
    }

    /// Flattened records, categories in declaration order.
    pub fn records(&self) -> Vec<EntityRecord> {
        self.groups
            .iter()
            .flat_map(|(c, names)| names.iter().map(|n| EntityRecord::new(n.clone(), *c)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<EntityRecord> for EntitySet {
    fn from_iter<T: IntoIterator<Item = EntityRecord>>(iter: T) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record.category, record.name);
        }
        set
    }
}
