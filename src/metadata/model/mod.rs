//! Authoring-side metadata model.
//!
//! These types describe a metadata document the way it is written: schemas own entity types
//! (with keys and nullability) and at most one entity container. They are the input of
//! [`crate::metadata::writer`] and the source of [`crate::Metadata::project`].
//!
//! A model is built once and not mutated while it is being served; all types are plain owned
//! data and therefore [`Send`] and [`Sync`].
//!
//! # Examples
//!
//! ```rust
//! use odatascope::metadata::edm::EdmType;
//! use odatascope::metadata::model::{
//!     DataServices, EntityContainer, EntitySet, EntityType, Property, Schema,
//! };
//!
//! let services = DataServices::new(vec![
//!     Schema::new("GrafanaMock").with_entity_type(
//!         EntityType::new("Temperature", "Id")
//!             .with_property(Property::primitive("Id", EdmType::Guid, false))
//!             .with_property(Property::primitive("Value1", EdmType::Double, false)),
//!     ),
//!     Schema::new("Default").with_entity_container(
//!         EntityContainer::new("Container")
//!             .with_entity_set(EntitySet::new("Temperatures", "GrafanaMock.Temperature")),
//!     ),
//! ]);
//!
//! let xml = services.to_xml()?;
//! assert!(xml.contains(r#"<EntitySet Name="Temperatures" EntityType="GrafanaMock.Temperature"/>"#));
//! # Ok::<(), odatascope::Error>(())
//! ```

mod container;
mod entitytype;
mod schema;

pub use container::{EntityContainer, EntitySet};
pub use entitytype::{EntityType, Key, Property, PropertyRef};
pub use schema::{DataServices, Schema};
