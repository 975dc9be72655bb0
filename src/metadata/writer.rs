//! EDMX/CSDL document writer.
//!
//! Renders an authoring model (an ordered slice of [`Schema`]) as an EDMX 4.0 document:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
//!   <edmx:DataServices>
//!     <Schema Namespace="..." xmlns="https://docs.oasis-open.org/odata/ns/edm">
//!       <EntityType Name="...">
//!         <Key>
//!           <PropertyRef Name="..."/>
//!         </Key>
//!         <Property Name="..." Type="..." Nullable="..."/>
//!       </EntityType>
//!       <EntityContainer Name="...">
//!         <EntitySet Name="..." EntityType="..."/>
//!       </EntityContainer>
//!     </Schema>
//!   </edmx:DataServices>
//! </edmx:Edmx>
//! ```
//!
//! Schemas, entity types, properties and entity sets are written in input order; attributes
//! always in the order shown. Output is a pure function of the input, so writing the same
//! model twice yields identical bytes.
//!
//! The writer does not check that an entity set's `EntityType` names a declared type; a
//! document may legitimately reference types served in another document.

use std::io::Write;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, Event},
    Writer,
};

use crate::{
    metadata::model::{EntityContainer, EntityType, Schema},
    Result,
};

/// Namespace bound to the `edmx` prefix.
pub const EDMX_NAMESPACE: &str = "https://docs.oasis-open.org/odata/ns/edmx";
/// Default namespace of each `Schema` element.
pub const EDM_NAMESPACE: &str = "https://docs.oasis-open.org/odata/ns/edm";
/// Value of the `Version` attribute on `edmx:Edmx`.
pub const EDMX_VERSION: &str = "4.0";
/// Content type of a response carrying the document.
pub const CONTENT_TYPE: &str = "application/xml";

const INDENT_SIZE: usize = 2;

/// Streams an EDMX document into an [`std::io::Write`] sink.
pub struct EdmxWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> EdmxWriter<W> {
    /// Creates a writer over `sink`, indenting nested elements by two spaces.
    pub fn new(sink: W) -> Self {
        EdmxWriter {
            xml: Writer::new_with_indent(sink, b' ', INDENT_SIZE),
        }
    }

    /// Writes the complete document and hands back the sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink fails.
    pub fn write(mut self, schemas: &[Schema]) -> Result<W> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.start(
            BytesStart::new("edmx:Edmx")
                .with_attributes([("Version", EDMX_VERSION), ("xmlns:edmx", EDMX_NAMESPACE)]),
        )?;
        self.start(BytesStart::new("edmx:DataServices"))?;

        for schema in schemas {
            self.write_schema(schema)?;
        }

        self.end("edmx:DataServices")?;
        self.end("edmx:Edmx")?;
        Ok(self.xml.into_inner())
    }

    fn write_schema(&mut self, schema: &Schema) -> Result<()> {
        self.start(BytesStart::new("Schema").with_attributes([
            ("Namespace", schema.namespace.as_str()),
            ("xmlns", EDM_NAMESPACE),
        ]))?;

        for entity_type in &schema.entity_types {
            self.write_entity_type(entity_type)?;
        }
        if let Some(container) = &schema.entity_container {
            self.write_entity_container(container)?;
        }

        self.end("Schema")
    }

    fn write_entity_type(&mut self, entity_type: &EntityType) -> Result<()> {
        self.start(
            BytesStart::new("EntityType").with_attributes([("Name", entity_type.name.as_str())]),
        )?;

        self.start(BytesStart::new("Key"))?;
        self.empty(
            BytesStart::new("PropertyRef")
                .with_attributes([("Name", entity_type.key.property_ref.name.as_str())]),
        )?;
        self.end("Key")?;

        for property in &entity_type.properties {
            self.empty(BytesStart::new("Property").with_attributes([
                ("Name", property.name.as_str()),
                ("Type", property.type_name.as_str()),
                ("Nullable", property.nullable_attr()),
            ]))?;
        }

        self.end("EntityType")
    }

    fn write_entity_container(&mut self, container: &EntityContainer) -> Result<()> {
        self.start(
            BytesStart::new("EntityContainer").with_attributes([("Name", container.name.as_str())]),
        )?;

        for entity_set in &container.entity_sets {
            self.empty(BytesStart::new("EntitySet").with_attributes([
                ("Name", entity_set.name.as_str()),
                ("EntityType", entity_set.entity_type.as_str()),
            ]))?;
        }

        self.end("EntityContainer")
    }

    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.xml.write_event(Event::Start(element))?;
        Ok(())
    }

    fn empty(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.xml.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

/// Renders `schemas` as an EDMX document.
///
/// # Errors
///
/// Writing into memory does not fail in practice; the signature carries the sink errors of
/// [`EdmxWriter::write`].
pub fn write_metadata(schemas: &[Schema]) -> Result<String> {
    let bytes = EdmxWriter::new(Vec::new()).write(schemas)?;
    let xml = String::from_utf8(bytes)?;
    log::debug!(
        "Wrote {} schemas into a {} byte metadata document",
        schemas.len(),
        xml.len()
    );
    Ok(xml)
}
