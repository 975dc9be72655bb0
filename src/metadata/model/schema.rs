use serde::{Deserialize, Serialize};

use crate::{
    metadata::{
        model::{EntityContainer, EntityType},
        projection::{qualified_name, Metadata},
        writer::write_metadata,
    },
    Result,
};

/// A namespace holding entity types and, optionally, one entity container.
///
/// A schema may declare only types, only a container, both, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Namespace, non-empty and unique within a document
    pub namespace: String,
    /// Entity types in declaration order; empty when the schema declares none
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,
    /// The entity container, if the schema declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_container: Option<EntityContainer>,
}

/// An ordered sequence of schemas forming one metadata document.
///
/// Order is kept when writing but carries no meaning beyond readability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataServices {
    /// Schemas in document order
    pub schemas: Vec<Schema>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new(namespace: impl Into<String>) -> Self {
        Schema {
            namespace: namespace.into(),
            entity_types: Vec::new(),
            entity_container: None,
        }
    }

    /// Appends an entity type.
    #[must_use]
    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_types.push(entity_type);
        self
    }

    /// Sets the entity container, replacing any previous one.
    #[must_use]
    pub fn with_entity_container(mut self, container: EntityContainer) -> Self {
        self.entity_container = Some(container);
        self
    }

    /// Qualifies `local_name` with this schema's namespace.
    #[must_use]
    pub fn qualified_name(&self, local_name: &str) -> String {
        qualified_name(&self.namespace, local_name)
    }

    /// Looks up an entity type by its local name.
    #[must_use]
    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|entity| entity.name == name)
    }
}

impl DataServices {
    /// Wraps an ordered list of schemas.
    #[must_use]
    pub fn new(schemas: Vec<Schema>) -> Self {
        DataServices { schemas }
    }

    /// Appends a schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Renders the EDMX document for these schemas.
    ///
    /// # Errors
    ///
    /// See [`write_metadata`].
    pub fn to_xml(&self) -> Result<String> {
        write_metadata(&self.schemas)
    }

    /// The query-facing view of these schemas, identical to reading back [`Self::to_xml`].
    #[must_use]
    pub fn project(&self) -> Metadata {
        Metadata::project(&self.schemas)
    }
}

impl From<Vec<Schema>> for DataServices {
    fn from(schemas: Vec<Schema>) -> Self {
        DataServices::new(schemas)
    }
}
