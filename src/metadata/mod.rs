//! OData metadata model, reader and writer.
//!
//! # Key Components
//!
//! - [`model`] - Authoring model: schemas, entity types with keys and nullability, containers
//! - [`projection`] - Query-facing view: entity types by qualified name, entity sets by name
//! - [`reader`] - EDMX/CSDL text → [`projection::Metadata`]
//! - [`writer`] - [`model::Schema`] slice → EDMX/CSDL text
//! - [`edm`] - EDM primitive type vocabulary
//!
//! # Data Flow
//!
//! ```text
//! model::Schema[] ──writer──▶ EDMX text ──(network)──▶ EDMX text ──reader──▶ Metadata
//!        │                                                                   ▲
//!        └──────────────────────── Metadata::project ───────────────────────┘
//! ```
//!
//! Both paths produce the same [`projection::Metadata`] for the same model.
//!
//! # Examples
//!
//! ```rust
//! use odatascope::metadata::{
//!     model::{DataServices, EntityContainer, EntitySet, EntityType, Property, Schema},
//!     reader::read_metadata,
//! };
//!
//! let services = DataServices::new(vec![
//!     Schema::new("Sensors").with_entity_type(
//!         EntityType::new("Reading", "Id")
//!             .with_property(Property::new("Id", "Edm.Int64", false))
//!             .with_property(Property::new("Time", "Edm.DateTimeOffset", false)),
//!     ),
//!     Schema::new("Default").with_entity_container(
//!         EntityContainer::new("Container")
//!             .with_entity_set(EntitySet::new("Readings", "Sensors.Reading")),
//!     ),
//! ]);
//!
//! let metadata = read_metadata(&services.to_xml()?)?;
//! assert_eq!(metadata, services.project());
//!
//! let reading = metadata.entity_type_of("Readings").unwrap();
//! assert_eq!(reading.time_properties().count(), 1);
//! # Ok::<(), odatascope::Error>(())
//! ```

pub mod edm;
pub mod model;
pub mod projection;
pub mod reader;
pub mod writer;
