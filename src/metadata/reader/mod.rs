//! EDMX/CSDL document reader.
//!
//! Turns a metadata document, as published by an OData service under `$metadata`, into the
//! query-facing [`Metadata`] projection.
//!
//! # Walk
//!
//! ```text
//! root (edmx:Edmx)                   must have at least one child element
//!  └─ edmx:DataServices              first child named DataServices; none → empty result
//!      └─ Schema @Namespace          each Schema child
//!          ├─ EntityType @Name       → entity_types["Namespace.Name"]
//!          │   └─ Property @Name @Type   in document order
//!          └─ EntityContainer
//!              └─ EntitySet @Name @EntityType  → entity_sets[Name]
//! ```
//!
//! `DataServices` is looked up by name among the root's children rather than taken to be the
//! first child, so `edmx:Reference` elements ahead of it are fine. A root whose children are
//! all something else (a wrapper around `Schema`, say) yields an empty result.
//!
//! Elements are matched by local name, so the `edmx:` prefix (or any other) does not matter.
//! Unknown elements at every level (`edmx:Reference`, `Key`, `NavigationProperty`,
//! `Annotation`, `Singleton`, `FunctionImport`, ...) are skipped. Entries missing an
//! identifying attribute are skipped with a warning. Colliding keys are resolved according to
//! [`ReaderConfig::duplicates`].
//!
//! Each call builds and returns its own result; a reader holds only its configuration and can
//! be shared freely between threads.
//!
//! # Examples
//!
//! ```rust
//! use odatascope::read_metadata;
//!
//! let metadata = read_metadata(
//!     r#"<edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
//!          <edmx:DataServices>
//!            <Schema Namespace="GrafanaMock" xmlns="https://docs.oasis-open.org/odata/ns/edm">
//!              <EntityType Name="Temperature">
//!                <Key><PropertyRef Name="Id"/></Key>
//!                <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
//!              </EntityType>
//!            </Schema>
//!          </edmx:DataServices>
//!        </edmx:Edmx>"#,
//! )?;
//!
//! assert!(metadata.entity_types.contains_key("GrafanaMock.Temperature"));
//! # Ok::<(), odatascope::Error>(())
//! ```

mod config;
mod dom;
mod tag;

pub use config::{DuplicatePolicy, ReaderConfig};
pub use dom::{Document, Element, RETAINED_DEPTH};
pub use tag::CsdlTag;

use crate::{
    metadata::projection::{EntitySetInfo, EntityTypeInfo, Metadata, PropertyInfo},
    Error, Result,
};

/// Reads EDMX documents into [`Metadata`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmxReader {
    config: ReaderConfig,
}

impl EdmxReader {
    /// Creates a reader with the default (last-write-wins) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with the given configuration.
    #[must_use]
    pub fn with_config(config: ReaderConfig) -> Self {
        EdmxReader { config }
    }

    /// The configuration of this reader.
    #[must_use]
    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    /// Reads one document.
    ///
    /// # Errors
    ///
    /// * Any error from [`Document::parse`] if the text is not well-formed XML
    /// * [`Error::Malformed`] if the root element has no child element
    /// * [`Error::DuplicateEntityType`] / [`Error::DuplicateEntitySet`] with
    ///   [`DuplicatePolicy::Reject`]
    pub fn read(&self, xml: &str) -> Result<Metadata> {
        let document = Document::parse(xml)?;
        self.read_document(&document)
    }

    /// Reads an already parsed document.
    ///
    /// # Errors
    ///
    /// Same as [`EdmxReader::read`], minus the XML errors.
    pub fn read_document(&self, document: &Document) -> Result<Metadata> {
        let root = document.root();
        if root.tag() != CsdlTag::Edmx {
            log::debug!("Root element <{}> is not edmx:Edmx", root.name());
        }
        if root.first_child().is_none() {
            return Err(malformed_error!(
                "root element <{}> has no child element",
                root.name()
            ));
        }

        let mut metadata = Metadata::default();
        match root
            .children()
            .find(|child| child.tag() == CsdlTag::DataServices)
        {
            Some(data_services) => self.read_data_services(data_services, &mut metadata)?,
            None => log::warn!("<{}> has no DataServices element", root.name()),
        }

        log::debug!(
            "Read {} entity types and {} entity sets",
            metadata.entity_types.len(),
            metadata.entity_sets.len()
        );
        Ok(metadata)
    }

    fn read_data_services(&self, data_services: &Element, metadata: &mut Metadata) -> Result<()> {
        for child in data_services.children() {
            match child.tag() {
                CsdlTag::Schema => self.read_schema(child, metadata)?,
                _ => skip(child),
            }
        }
        Ok(())
    }

    fn read_schema(&self, schema: &Element, metadata: &mut Metadata) -> Result<()> {
        let namespace = schema.attribute("Namespace");
        for child in schema.children() {
            match (child.tag(), namespace) {
                (CsdlTag::EntityType, Some(namespace)) => {
                    self.read_entity_type(child, namespace, metadata)?;
                }
                (CsdlTag::EntityType, None) => {
                    log::warn!(
                        "Skipping EntityType {:?} in a Schema without Namespace",
                        child.attribute("Name").unwrap_or_default()
                    );
                }
                (CsdlTag::EntityContainer, _) => self.read_entity_container(child, metadata)?,
                _ => skip(child),
            }
        }
        Ok(())
    }

    fn read_entity_type(
        &self,
        entity_type: &Element,
        namespace: &str,
        metadata: &mut Metadata,
    ) -> Result<()> {
        let Some(name) = entity_type.attribute("Name") else {
            log::warn!("Skipping EntityType without Name in Schema {namespace}");
            return Ok(());
        };

        let properties = entity_type
            .children()
            .filter_map(|child| match child.tag() {
                CsdlTag::Property => read_property(child),
                _ => {
                    skip(child);
                    None
                }
            })
            .collect();

        let info = EntityTypeInfo::new(namespace, name, properties);
        if let Some(previous) = metadata.insert_entity_type(info) {
            self.on_duplicate(Error::DuplicateEntityType(previous.qualified_name))?;
        }
        Ok(())
    }

    fn read_entity_container(&self, container: &Element, metadata: &mut Metadata) -> Result<()> {
        for child in container.children() {
            match child.tag() {
                CsdlTag::EntitySet => {
                    let Some(entity_set) = read_entity_set(child) else {
                        continue;
                    };
                    if let Some(previous) = metadata.insert_entity_set(entity_set) {
                        self.on_duplicate(Error::DuplicateEntitySet(previous.name))?;
                    }
                }
                _ => skip(child),
            }
        }
        Ok(())
    }

    fn on_duplicate(&self, error: Error) -> Result<()> {
        match self.config.duplicates {
            DuplicatePolicy::LastWriteWins => {
                log::warn!("{error}, keeping the last declaration");
                Ok(())
            }
            DuplicatePolicy::Reject => Err(error),
        }
    }
}

fn read_property(property: &Element) -> Option<PropertyInfo> {
    match (property.attribute("Name"), property.attribute("Type")) {
        (Some(name), Some(type_name)) => Some(PropertyInfo::new(name, type_name)),
        (name, _) => {
            log::warn!(
                "Skipping Property {:?} without Name or Type",
                name.unwrap_or_default()
            );
            None
        }
    }
}

fn read_entity_set(entity_set: &Element) -> Option<EntitySetInfo> {
    match (
        entity_set.attribute("Name"),
        entity_set.attribute("EntityType"),
    ) {
        (Some(name), Some(entity_type)) => Some(EntitySetInfo::new(name, entity_type)),
        (name, _) => {
            log::warn!(
                "Skipping EntitySet {:?} without Name or EntityType",
                name.unwrap_or_default()
            );
            None
        }
    }
}

fn skip(element: &Element) {
    log::trace!("Skipping <{}>", element.name());
}

/// Reads a document with the default configuration.
///
/// # Errors
///
/// See [`EdmxReader::read`].
pub fn read_metadata(xml: &str) -> Result<Metadata> {
    EdmxReader::new().read(xml)
}

/// Reads a document with the given configuration.
///
/// # Errors
///
/// See [`EdmxReader::read`].
pub fn read_metadata_with(xml: &str, config: ReaderConfig) -> Result<Metadata> {
    EdmxReader::with_config(config).read(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edmx(schemas: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
  <edmx:DataServices>{schemas}</edmx:DataServices>
</edmx:Edmx>"#
        )
    }

    #[test]
    fn qualified_key() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema Namespace="GrafanaMock">
                 <EntityType Name="Temperature">
                   <Property Name="Id" Type="Edm.Guid"/>
                 </EntityType>
               </Schema>"#,
        ))?;

        let temperature = metadata.entity_type("GrafanaMock.Temperature").unwrap();
        assert_eq!(temperature.name, "Temperature");
        assert_eq!(temperature.qualified_name, "GrafanaMock.Temperature");
        assert!(metadata.entity_type("grafanamock.temperature").is_none());
        assert!(metadata.entity_sets.is_empty());
        Ok(())
    }

    #[test]
    fn property_order() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema Namespace="Ns">
                 <EntityType Name="T">
                   <Property Name="C" Type="Edm.String"/>
                   <Property Name="A" Type="Edm.Int32" Nullable="true"/>
                   <Property Name="B" Type="Edm.Double"/>
                 </EntityType>
               </Schema>"#,
        ))?;

        let entity_type = metadata.entity_type("Ns.T").unwrap();
        let names: Vec<_> = entity_type.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        Ok(())
    }

    #[test]
    fn container_only() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema Namespace="Default">
                 <EntityContainer Name="Container">
                   <EntitySet Name="Temperatures" EntityType="GrafanaMock.Temperature"/>
                 </EntityContainer>
               </Schema>"#,
        ))?;

        assert!(metadata.entity_types.is_empty());
        assert_eq!(
            metadata.entity_set("Temperatures"),
            Some(&EntitySetInfo::new("Temperatures", "GrafanaMock.Temperature"))
        );
        Ok(())
    }

    #[test]
    fn types_only() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema Namespace="Ns"><EntityType Name="T"/></Schema>"#,
        ))?;

        assert!(metadata.entity_sets.is_empty());
        assert!(metadata.entity_type("Ns.T").unwrap().properties.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_elements_are_skipped() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Unknown Namespace="X"><EntityType Name="Hidden"/></Unknown>
               <Schema Namespace="Ns">
                 <Annotations Target="Ns.T"/>
                 <EnumType Name="Color"><Member Name="Red"/></EnumType>
                 <EntityType Name="T">
                   <Key><PropertyRef Name="Id"/></Key>
                   <Property Name="Id" Type="Edm.Int32"/>
                   <NavigationProperty Name="Parent" Type="Ns.T"/>
                   <Frobnicate/>
                 </EntityType>
                 <EntityContainer Name="C">
                   <Singleton Name="Me" Type="Ns.T"/>
                   <EntitySet Name="Ts" EntityType="Ns.T"><NavigationPropertyBinding Path="Parent" Target="Ts"/></EntitySet>
                   <FunctionImport Name="F" Function="Ns.F"/>
                 </EntityContainer>
               </Schema>"#,
        ))?;

        assert_eq!(metadata.entity_types.len(), 1);
        assert_eq!(
            metadata.entity_type("Ns.T").unwrap().properties,
            vec![PropertyInfo::new("Id", "Edm.Int32")]
        );
        assert_eq!(metadata.entity_sets.len(), 1);
        assert!(metadata.entity_set("Me").is_none());
        Ok(())
    }

    #[test]
    fn missing_data_services() -> Result<()> {
        let metadata = read_metadata(
            r#"<edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
                 <edmx:Reference Uri="https://example.com/vocabularies/Core.xml"/>
               </edmx:Edmx>"#,
        )?;
        assert!(metadata.is_empty());
        Ok(())
    }

    #[test]
    fn wrapper_is_not_data_services() -> Result<()> {
        let metadata = read_metadata(
            r#"<edmx:Edmx>
                 <Wrapper><Schema Namespace="X"><EntityType Name="T"/></Schema></Wrapper>
               </edmx:Edmx>"#,
        )?;
        assert!(metadata.is_empty());
        Ok(())
    }

    #[test]
    fn data_services_after_reference() -> Result<()> {
        let metadata = read_metadata(
            r#"<edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx">
                 <edmx:Reference Uri="https://example.com/vocabularies/Core.xml">
                   <edmx:Include Namespace="Org.OData.Core.V1" Alias="Core"/>
                 </edmx:Reference>
                 <edmx:DataServices>
                   <Schema Namespace="Ns"><EntityType Name="T"/></Schema>
                 </edmx:DataServices>
               </edmx:Edmx>"#,
        )?;
        assert!(metadata.entity_type("Ns.T").is_some());
        Ok(())
    }

    #[test]
    fn root_without_child() {
        let error = read_metadata(
            r#"<edmx:Edmx Version="4.0" xmlns:edmx="https://docs.oasis-open.org/odata/ns/edmx"/>"#,
        )
        .unwrap_err();
        assert!(matches!(error, Error::Malformed { .. }));
        assert!(error.is_parse_error());

        assert!(matches!(
            read_metadata("<edmx:Edmx>just text</edmx:Edmx>"),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn not_well_formed() {
        let error = read_metadata(&edmx("<Schema Namespace=\"Ns\">")).unwrap_err();
        assert!(error.is_parse_error());
        assert!(read_metadata("").unwrap_err().is_parse_error());
    }

    #[test]
    fn empty_schema_is_not_an_error() -> Result<()> {
        let metadata = read_metadata(&edmx(r#"<Schema Namespace="Ns"/>"#))?;
        assert!(metadata.is_empty());
        Ok(())
    }

    #[test]
    fn missing_attributes() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema>
                 <EntityType Name="NoNamespace"/>
                 <EntityContainer Name="C">
                   <EntitySet Name="Kept" EntityType="Ns.T"/>
                 </EntityContainer>
               </Schema>
               <Schema Namespace="Ns">
                 <EntityType>
                   <Property Name="Orphan" Type="Edm.String"/>
                 </EntityType>
                 <EntityType Name="T">
                   <Property Name="NoType"/>
                   <Property Type="Edm.String"/>
                   <Property Name="Ok" Type="Edm.String"/>
                 </EntityType>
                 <EntityContainer Name="C2">
                   <EntitySet Name="NoType"/>
                   <EntitySet EntityType="Ns.T"/>
                 </EntityContainer>
               </Schema>"#,
        ))?;

        assert_eq!(metadata.entity_types.len(), 1);
        assert_eq!(
            metadata.entity_type("Ns.T").unwrap().properties,
            vec![PropertyInfo::new("Ok", "Edm.String")]
        );
        assert_eq!(metadata.entity_sets.len(), 1);
        assert!(metadata.entity_set("Kept").is_some());
        Ok(())
    }

    #[test]
    fn escaped_attributes() -> Result<()> {
        let metadata = read_metadata(&edmx(
            r#"<Schema Namespace="Ns">
                 <EntityContainer Name="C">
                   <EntitySet Name="R&amp;D" EntityType="Ns.&quot;T&quot;"/>
                 </EntityContainer>
               </Schema>"#,
        ))?;
        assert_eq!(metadata.entity_set("R&D").unwrap().entity_type, "Ns.\"T\"");
        Ok(())
    }

    const DUPLICATES: &str = r#"
        <Schema Namespace="Ns">
          <EntityType Name="T"><Property Name="First" Type="Edm.String"/></EntityType>
          <EntityContainer Name="A"><EntitySet Name="Ts" EntityType="Ns.T"/></EntityContainer>
        </Schema>
        <Schema Namespace="Ns">
          <EntityType Name="T"><Property Name="Second" Type="Edm.Int64"/></EntityType>
          <EntityContainer Name="B"><EntitySet Name="Ts" EntityType="Other.T"/></EntityContainer>
        </Schema>"#;

    #[test]
    fn duplicates_last_write_wins() -> Result<()> {
        let metadata = read_metadata(&edmx(DUPLICATES))?;
        assert_eq!(
            metadata.entity_type("Ns.T").unwrap().properties,
            vec![PropertyInfo::new("Second", "Edm.Int64")]
        );
        assert_eq!(metadata.entity_set("Ts").unwrap().entity_type, "Other.T");
        Ok(())
    }

    #[test]
    fn duplicates_rejected() {
        let error = read_metadata_with(&edmx(DUPLICATES), ReaderConfig::strict()).unwrap_err();
        assert!(matches!(error, Error::DuplicateEntityType(ref name) if name == "Ns.T"));

        let sets_only = r#"
            <Schema Namespace="Ns">
              <EntityContainer Name="A">
                <EntitySet Name="Ts" EntityType="Ns.T"/>
                <EntitySet Name="Ts" EntityType="Ns.U"/>
              </EntityContainer>
            </Schema>"#;
        let error = EdmxReader::with_config(ReaderConfig::strict())
            .read(&edmx(sets_only))
            .unwrap_err();
        assert!(matches!(error, Error::DuplicateEntitySet(ref name) if name == "Ts"));
    }

    #[test]
    fn fresh_result_per_call() -> Result<()> {
        let reader = EdmxReader::new();
        let first = reader.read(&edmx(r#"<Schema Namespace="A"><EntityType Name="T"/></Schema>"#))?;
        let second = reader.read(&edmx(r#"<Schema Namespace="B"><EntityType Name="T"/></Schema>"#))?;

        assert_eq!(first.entity_types.len(), 1);
        assert_eq!(second.entity_types.len(), 1);
        assert!(second.entity_type("A.T").is_none());
        assert_eq!(reader.config(), ReaderConfig::default());
        Ok(())
    }

    #[test]
    fn concurrent_readers() {
        let xml = edmx(r#"<Schema Namespace="Ns"><EntityType Name="T"/></Schema>"#);
        let reader = EdmxReader::new();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| reader.read(&xml).unwrap()))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().entity_type("Ns.T").is_some());
            }
        });
    }
}
