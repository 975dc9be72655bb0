//! # odatascope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the odatascope library. Import this module to get quick access to the model, the
//! projection, and the reader and writer entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all odatascope operations
pub use crate::Error;

/// The result type used throughout odatascope
pub use crate::Result;

/// Configuration for reading metadata documents
pub use crate::{DuplicatePolicy, ReaderConfig};

// ================================================================================================
// Entry Points
// ================================================================================================

/// Reading EDMX documents into the projection
pub use crate::{read_metadata, read_metadata_with, EdmxReader};

/// Writing the authoring model as EDMX
pub use crate::{write_metadata, EdmxWriter};

// ================================================================================================
// Authoring Model
// ================================================================================================

/// Schemas, entity types, properties, keys, containers and entity sets
pub use crate::metadata::model::{
    DataServices, EntityContainer, EntitySet, EntityType, Key, Property, PropertyRef, Schema,
};

// ================================================================================================
// Query-Facing Projection
// ================================================================================================

/// Flattened metadata consumed by query construction
pub use crate::metadata::projection::{
    qualified_name, EntitySetInfo, EntityTypeInfo, Metadata, PropertyInfo,
};

// ================================================================================================
// EDM Vocabulary
// ================================================================================================

/// EDM primitive types and the column shapes they map to
pub use crate::metadata::edm::{EdmType, FieldKind};
