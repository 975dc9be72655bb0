use serde::{Deserialize, Serialize};

use crate::metadata::edm::EdmType;

/// A named record shape with a single-property key and an ordered list of typed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    /// Name, unique within the owning schema
    pub name: String,
    /// The key; its property reference names one of `properties`
    pub key: Key,
    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// The key of an [`EntityType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// The key property
    pub property_ref: PropertyRef,
}

/// Reference to a property by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    /// Name of the referenced property
    pub name: String,
}

/// A structural property of an [`EntityType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Type name, usually an EDM primitive such as `Edm.Double`
    #[serde(rename = "type")]
    pub type_name: String,
    /// Written as `"true"` / `"false"` in the `Nullable` attribute
    #[serde(
        serialize_with = "nullable::serialize",
        deserialize_with = "nullable::deserialize"
    )]
    pub nullable: bool,
}

impl EntityType {
    /// Creates an entity type keyed by `key_property`, without any properties yet.
    ///
    /// The key property still has to be added through [`EntityType::with_property`].
    pub fn new(name: impl Into<String>, key_property: impl Into<String>) -> Self {
        EntityType {
            name: name.into(),
            key: Key::new(key_property),
            properties: Vec::new(),
        }
    }

    /// Appends a property.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The property the key refers to, if it is declared.
    #[must_use]
    pub fn key_property(&self) -> Option<&Property> {
        self.property(&self.key.property_ref.name)
    }
}

impl Key {
    /// Creates a key referring to `property`.
    pub fn new(property: impl Into<String>) -> Self {
        Key {
            property_ref: PropertyRef {
                name: property.into(),
            },
        }
    }
}

impl Property {
    /// Creates a property.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Property {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
        }
    }

    /// Creates a property of a primitive type.
    pub fn primitive(name: impl Into<String>, edm_type: EdmType, nullable: bool) -> Self {
        Self::new(name, edm_type.as_ref(), nullable)
    }

    /// The primitive type of this property, if it is one.
    #[must_use]
    pub fn edm_type(&self) -> Option<EdmType> {
        EdmType::from_type_name(&self.type_name)
    }

    /// Value of the `Nullable` attribute.
    #[must_use]
    pub fn nullable_attr(&self) -> &'static str {
        if self.nullable {
            "true"
        } else {
            "false"
        }
    }
}

/// Fixtures spell nullability the way the document does, as `"true"`/`"false"`.
mod nullable {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bool(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"\"true\" or \"false\"",
                )),
            },
        }
    }
}
