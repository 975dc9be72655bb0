use crate::metadata::{
    edm::EdmType,
    model::{DataServices, EntityContainer, EntitySet, EntityType, Property, Schema},
};

// The `Temperature` entity type of the mock service, keyed by `key`
pub fn temperature(key: &str) -> EntityType {
    EntityType::new("Temperature", key)
        .with_property(Property::primitive(key, EdmType::Guid, false))
        .with_property(Property::primitive("Time", EdmType::DateTimeOffset, false))
        .with_property(Property::primitive("Epoch", EdmType::Int64, false))
        .with_property(Property::primitive("Value1", EdmType::Double, false))
        .with_property(Property::primitive("Value2", EdmType::Double, false))
        .with_property(Property::primitive("Value3", EdmType::Double, false))
}

// Two schemas: one with the entity type, one with the container pointing at it
pub fn grafana_mock() -> DataServices {
    DataServices::new(vec![
        Schema::new("GrafanaMock").with_entity_type(temperature("Id")),
        Schema::new("Default").with_entity_container(
            EntityContainer::new("Container")
                .with_entity_set(EntitySet::new("Temperatures", "GrafanaMock.Temperature")),
        ),
    ])
}
