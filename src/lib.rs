// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # odatascope
//!
//! Reading and writing OData EDMX/CSDL metadata documents.
//!
//! An OData service describes itself in a `$metadata` document: schemas declaring entity
//! types with typed properties, and entity containers exposing entity sets. `odatascope`
//! turns that document into a flat, query-facing [`Metadata`] projection, and renders an
//! authoring model back into a document. It does no networking; it only transforms
//! text ⇄ model.
//!
//! ## Features
//!
//! - **Permissive reader** - unknown elements are skipped, missing optional structure yields
//!   empty collections, only broken XML fails
//! - **Deterministic writer** - the same model always produces the same bytes
//! - **Round trip** - reading a written model gives exactly [`Metadata::project`] of that model
//! - **JSON shape** - the projection serializes as `{ entityTypes, entitySets }`
//!
//! ## Quick Start
//!
//! ```rust
//! use odatascope::prelude::*;
//!
//! let xml = r#"<?xml version="1.0" encoding="utf-8"?>
//! <edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
//!   <edmx:DataServices>
//!     <Schema Namespace="GrafanaMock" xmlns="https://docs.oasis-open.org/odata/ns/edm">
//!       <EntityType Name="Temperature">
//!         <Key><PropertyRef Name="Id"/></Key>
//!         <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
//!         <Property Name="Time" Type="Edm.DateTimeOffset" Nullable="false"/>
//!         <Property Name="Value1" Type="Edm.Double" Nullable="false"/>
//!       </EntityType>
//!     </Schema>
//!     <Schema Namespace="Default" xmlns="https://docs.oasis-open.org/odata/ns/edm">
//!       <EntityContainer Name="Container">
//!         <EntitySet Name="Temperatures" EntityType="GrafanaMock.Temperature"/>
//!       </EntityContainer>
//!     </Schema>
//!   </edmx:DataServices>
//! </edmx:Edmx>"#;
//!
//! let metadata = read_metadata(xml)?;
//! let temperature = metadata.entity_type_of("Temperatures").unwrap();
//! assert_eq!(temperature.qualified_name, "GrafanaMock.Temperature");
//! assert_eq!(temperature.properties.len(), 3);
//! # Ok::<(), odatascope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). A document that cannot be parsed is
//! reported as an error for which [`Error::is_parse_error`] holds, while a well-formed
//! document without entities is an empty [`Metadata`]:
//!
//! ```rust
//! use odatascope::{read_metadata, Error};
//!
//! match read_metadata("<edmx:Edmx/>") {
//!     Ok(metadata) if metadata.is_empty() => println!("this service has no entities"),
//!     Ok(_) => println!("metadata loaded"),
//!     Err(Error::Malformed { message, .. }) => println!("metadata could not be parsed: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: skipped entries and
//! overwritten duplicates at `warn`, document summaries at `debug`. Install any logger to
//! see them.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use odatascope::prelude::*;
///
/// let schemas = vec![Schema::new("Empty")];
/// let metadata = read_metadata(&write_metadata(&schemas)?)?;
/// assert!(metadata.is_empty());
/// # Ok::<(), odatascope::Error>(())
/// ```
pub mod prelude;

/// EDMX/CSDL metadata model, reader and writer.
///
/// # Key Components
///
/// - [`metadata::model`] - Authoring model consumed by the writer
/// - [`metadata::projection`] - Query-facing projection produced by the reader
/// - [`metadata::reader`] - [`EdmxReader`] and [`read_metadata`]
/// - [`metadata::writer`] - [`EdmxWriter`] and [`write_metadata`]
/// - [`metadata::edm`] - EDM primitive type names
pub mod metadata;

/// `odatascope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `odatascope` Error type
///
/// See [`Error::is_parse_error`] to separate unreadable documents from other failures.
pub use error::Error;

/// The query-facing projection and its records.
pub use metadata::projection::{EntitySetInfo, EntityTypeInfo, Metadata, PropertyInfo};

/// Document reading.
pub use metadata::reader::{
    read_metadata, read_metadata_with, DuplicatePolicy, EdmxReader, ReaderConfig,
};

/// Document writing.
pub use metadata::writer::{write_metadata, EdmxWriter, CONTENT_TYPE};
