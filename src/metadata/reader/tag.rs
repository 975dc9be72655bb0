/// The element names the reader acts on, matched by local name.
///
/// Everything else is [`CsdlTag::Other`] and is skipped wherever it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsdlTag {
    /// `edmx:Edmx`
    Edmx,
    /// `edmx:DataServices`
    DataServices,
    /// `Schema`
    Schema,
    /// `EntityType`
    EntityType,
    /// `Property`
    Property,
    /// `EntityContainer`
    EntityContainer,
    /// `EntitySet`
    EntitySet,
    /// Any other element
    Other,
}

impl CsdlTag {
    /// Classifies an element by its local name (prefix already removed).
    #[must_use]
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "Edmx" => CsdlTag::Edmx,
            "DataServices" => CsdlTag::DataServices,
            "Schema" => CsdlTag::Schema,
            "EntityType" => CsdlTag::EntityType,
            "Property" => CsdlTag::Property,
            "EntityContainer" => CsdlTag::EntityContainer,
            "EntitySet" => CsdlTag::EntitySet,
            _ => CsdlTag::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(CsdlTag::from_local_name("Edmx"), CsdlTag::Edmx);
        assert_eq!(CsdlTag::from_local_name("DataServices"), CsdlTag::DataServices);
        assert_eq!(CsdlTag::from_local_name("EntitySet"), CsdlTag::EntitySet);
        assert_eq!(CsdlTag::from_local_name("NavigationProperty"), CsdlTag::Other);
        assert_eq!(CsdlTag::from_local_name("Key"), CsdlTag::Other);
        assert_eq!(CsdlTag::from_local_name("entitytype"), CsdlTag::Other);
    }
}
