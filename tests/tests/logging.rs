use reshape::{FieldRule, Mapper, ObjectMapping};
use tests::entity::Author;
use tests::mapping;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn missing_property_is_logged() {
    let declaration = ObjectMapping::of::<Author>()
        .property("nonThere", FieldRule::leaf())
        .build()
        .unwrap();
    let mapper = Mapper::<Author>::new(declaration).unwrap();

    assert!(mapper.transform(&Author::new("Gijs")).is_err());
    assert!(logs_contain("mapped property missing on entity"));
}

#[test]
#[traced_test]
fn unmapped_properties_are_logged() {
    let declaration = ObjectMapping::of::<Author>()
        .property("uuid", FieldRule::leaf())
        .build()
        .unwrap();
    let mapper = Mapper::<Author>::new(declaration).unwrap();

    assert!(mapper.transform(&Author::new("Gijs")).is_err());
    assert!(logs_contain("entity has unmapped properties"));
}

#[test]
#[traced_test]
fn missing_key_is_logged() {
    let mapper = Mapper::<Author>::new(mapping::author()).unwrap();

    assert!(mapper.reverse_transform(&reshape::object! {}).is_err());
    assert!(logs_contain("mapped key missing in object"));
}
