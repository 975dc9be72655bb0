use serde::{Deserialize, Serialize};

/// A named grouping of entity sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContainer {
    /// Container name
    pub name: String,
    /// Entity sets in declaration order
    #[serde(default)]
    pub entity_sets: Vec<EntitySet>,
}

/// A named, queryable collection of entities of one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    /// Name, unique within the container
    pub name: String,
    /// Qualified name (`Namespace.TypeName`) of the entity type.
    ///
    /// Not checked against the declared entity types; a set may point into a schema that is
    /// served elsewhere.
    pub entity_type: String,
}

impl EntityContainer {
    /// Creates an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        EntityContainer {
            name: name.into(),
            entity_sets: Vec::new(),
        }
    }

    /// Appends an entity set.
    #[must_use]
    pub fn with_entity_set(mut self, entity_set: EntitySet) -> Self {
        self.entity_sets.push(entity_set);
        self
    }

    /// Looks up an entity set by name.
    #[must_use]
    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|set| set.name == name)
    }
}

impl EntitySet {
    /// Creates an entity set of `entity_type`.
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        EntitySet {
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }
}
