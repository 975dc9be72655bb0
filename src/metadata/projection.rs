//! Query-facing projection of metadata.
//!
//! The projection is what query construction consumes: a flat map of entity types keyed by
//! qualified name and a flat map of entity sets keyed by name. Nullability and keys are not
//! part of it; each property is reduced to its name and type.
//!
//! A projection is produced either by reading a document ([`crate::read_metadata`]) or
//! directly from an authoring model ([`Metadata::project`]). For any model `m`,
//! `read_metadata(&write_metadata(m)?)? == Metadata::project(m)`.
//!
//! Both maps are ordered so the JSON form (`entityTypes`, `entitySets`, `qualifiedName`,
//! `entityType`) is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    metadata::{
        edm::EdmType,
        model::{EntityContainer, EntityType, Property, Schema},
        reader::read_metadata,
    },
    Result,
};

/// Separator between namespace and local name in a qualified name.
pub const QUALIFIED_NAME_SEPARATOR: char = '.';

/// Forms the qualified name `namespace.local_name`.
#[must_use]
pub fn qualified_name(namespace: &str, local_name: &str) -> String {
    let mut name = String::with_capacity(namespace.len() + local_name.len() + 1);
    name.push_str(namespace);
    name.push(QUALIFIED_NAME_SEPARATOR);
    name.push_str(local_name);
    name
}

/// Flattened metadata, keyed for lookups during query construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Entity types by qualified name
    pub entity_types: BTreeMap<String, EntityTypeInfo>,
    /// Entity sets by name
    pub entity_sets: BTreeMap<String, EntitySetInfo>,
}

/// An entity type as seen by query construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeInfo {
    /// Local name
    pub name: String,
    /// `Namespace.Name`
    pub qualified_name: String,
    /// Properties in document order
    pub properties: Vec<PropertyInfo>,
}

/// A property reduced to name and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property name
    pub name: String,
    /// Type name, copied verbatim
    #[serde(rename = "type")]
    pub type_name: String,
}

/// An entity set and the qualified name of its entity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySetInfo {
    /// Entity set name
    pub name: String,
    /// Qualified entity type name, copied verbatim
    pub entity_type: String,
}

impl Metadata {
    /// Projects an authoring model.
    ///
    /// Entity types are keyed by `namespace.name`, entity sets by name. Nullability and keys
    /// are dropped. A later entry with a colliding key replaces an earlier one, exactly as
    /// when reading the written document back.
    #[must_use]
    pub fn project(schemas: &[Schema]) -> Self {
        let mut metadata = Metadata::default();
        for schema in schemas {
            for entity_type in &schema.entity_types {
                let info = EntityTypeInfo::project(&schema.namespace, entity_type);
                metadata.insert_entity_type(info);
            }
            if let Some(container) = &schema.entity_container {
                metadata.project_container(container);
            }
        }
        metadata
    }

    fn project_container(&mut self, container: &EntityContainer) {
        for entity_set in &container.entity_sets {
            self.insert_entity_set(EntitySetInfo::new(&entity_set.name, &entity_set.entity_type));
        }
    }

    /// Parses an EDMX document with the default reader configuration.
    ///
    /// # Errors
    ///
    /// See [`read_metadata`].
    pub fn from_xml(xml: &str) -> Result<Self> {
        read_metadata(xml)
    }

    /// Stores an entity type under its qualified name, returning the entry it replaced.
    pub fn insert_entity_type(&mut self, entity_type: EntityTypeInfo) -> Option<EntityTypeInfo> {
        self.entity_types
            .insert(entity_type.qualified_name.clone(), entity_type)
    }

    /// Stores an entity set under its name, returning the entry it replaced.
    pub fn insert_entity_set(&mut self, entity_set: EntitySetInfo) -> Option<EntitySetInfo> {
        self.entity_sets.insert(entity_set.name.clone(), entity_set)
    }

    /// Looks up an entity type by qualified name.
    #[must_use]
    pub fn entity_type(&self, qualified_name: &str) -> Option<&EntityTypeInfo> {
        self.entity_types.get(qualified_name)
    }

    /// Looks up an entity set by name.
    #[must_use]
    pub fn entity_set(&self, name: &str) -> Option<&EntitySetInfo> {
        self.entity_sets.get(name)
    }

    /// Resolves the entity type backing an entity set.
    ///
    /// Returns `None` if the set is unknown or its type is not declared in this document.
    #[must_use]
    pub fn entity_type_of(&self, entity_set: &str) -> Option<&EntityTypeInfo> {
        self.entity_set(entity_set)
            .and_then(|set| self.entity_type(&set.entity_type))
    }

    /// Returns `true` if the document declared no entity types and no entity sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entity_types.is_empty() && self.entity_sets.is_empty()
    }
}

impl From<&[Schema]> for Metadata {
    fn from(schemas: &[Schema]) -> Self {
        Metadata::project(schemas)
    }
}

impl EntityTypeInfo {
    /// Creates an entity type record qualified by `namespace`.
    pub fn new(namespace: &str, name: impl Into<String>, properties: Vec<PropertyInfo>) -> Self {
        let name = name.into();
        EntityTypeInfo {
            qualified_name: qualified_name(namespace, &name),
            name,
            properties,
        }
    }

    fn project(namespace: &str, entity_type: &EntityType) -> Self {
        EntityTypeInfo::new(
            namespace,
            entity_type.name.as_str(),
            entity_type.properties.iter().map(PropertyInfo::from).collect(),
        )
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Properties usable as the time column of a time series (`Edm.DateTimeOffset`).
    pub fn time_properties(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties
            .iter()
            .filter(|property| property.edm_type() == Some(EdmType::DateTimeOffset))
    }
}

impl PropertyInfo {
    /// Creates a property record.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        PropertyInfo {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// The primitive type of this property, if it is one.
    #[must_use]
    pub fn edm_type(&self) -> Option<EdmType> {
        EdmType::from_type_name(&self.type_name)
    }
}

impl From<&Property> for PropertyInfo {
    fn from(property: &Property) -> Self {
        PropertyInfo::new(property.name.as_str(), property.type_name.as_str())
    }
}

impl EntitySetInfo {
    /// Creates an entity set record.
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        EntitySetInfo {
            name: name.into(),
            entity_type: entity_type.into(),
        }
    }
}
