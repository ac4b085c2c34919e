use pretty_assertions::assert_eq;
use reshape::{
    object, Discriminator, Entity, FieldRule, Mapper, ObjectMapping, Polymorphic, Value,
};
use tests::entity::{Attribute, Color, Feature, Product};
use tests::{mapping, Identifier};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Label {
    text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Badge {
    text: String,
    icon: String,
}

#[derive(Debug, Clone, PartialEq, Polymorphic)]
enum Marker {
    Label(Label),
    Badge(Badge),
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Board {
    #[entity(nested)]
    markers: Vec<Marker>,
}

fn board_mapping(discriminator: Discriminator) -> reshape::Result<ObjectMapping> {
    let label = ObjectMapping::of::<Label>()
        .property("text", FieldRule::leaf())
        .build()?;
    let badge = ObjectMapping::of::<Badge>()
        .property("text", FieldRule::leaf())
        .property("icon", FieldRule::leaf())
        .build()?;

    ObjectMapping::of::<Board>()
        .property(
            "markers",
            FieldRule::polymorphic(discriminator)
                .variant(label)
                .variant(badge),
        )
        .build()
}

fn product() -> Product {
    let mut product = Product::new("Some product");
    product.add_attribute(Color {
        uuid: Identifier::new(),
        name: "Green".to_string(),
    });
    product.add_attribute(Feature {
        uuid: Identifier::new(),
        title: "Some feature".to_string(),
    });
    product.add_attribute(Color {
        uuid: Identifier::new(),
        name: "Yellow".to_string(),
    });
    product
}

fn uuid_of(attribute: &Attribute) -> String {
    match attribute {
        Attribute::Color(color) => color.uuid.to_string(),
        Attribute::Feature(feature) => feature.uuid.to_string(),
    }
}

#[test]
fn transform_by_shape() {
    let product = product();
    let mapper = Mapper::<Product>::new(mapping::product(Discriminator::Shape)).unwrap();

    let object = mapper.transform(&product).unwrap();

    let attributes = object.get("attributes").and_then(Value::as_list).unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), ["_id", "name", "attributes"]);
    assert_eq!(
        attributes[0].as_object().unwrap().keys().collect::<Vec<_>>(),
        ["_id", "name"]
    );
    assert_eq!(
        attributes[1].as_object().unwrap().keys().collect::<Vec<_>>(),
        ["_id", "title"]
    );

    assert_eq!(
        object,
        object! {
            "_id" => product.uuid.to_string(),
            "name" => "Some product",
            "attributes" => vec![
                Value::from(object! {
                    "_id" => uuid_of(&product.attributes[0]),
                    "name" => "Green",
                }),
                Value::from(object! {
                    "_id" => uuid_of(&product.attributes[1]),
                    "title" => "Some feature",
                }),
                Value::from(object! {
                    "_id" => uuid_of(&product.attributes[2]),
                    "name" => "Yellow",
                }),
            ],
        }
    );
}

#[test]
fn reverse_by_shape_restores_concrete_types() {
    let product = product();
    let mapper = Mapper::<Product>::new(mapping::product(Discriminator::Shape)).unwrap();

    let object = mapper.transform(&product).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert!(matches!(back.attributes[0], Attribute::Color(_)));
    assert!(matches!(back.attributes[1], Attribute::Feature(_)));
    assert!(matches!(back.attributes[2], Attribute::Color(_)));
    assert_eq!(back, product);
}

#[test]
fn transform_by_key_writes_tag_first() {
    let product = product();
    let mapper =
        Mapper::<Product>::new(mapping::product(Discriminator::Key("kind".into()))).unwrap();

    let object = mapper.transform(&product).unwrap();
    let attributes = object.get("attributes").and_then(Value::as_list).unwrap();

    let feature = attributes[1].as_object().unwrap();
    assert_eq!(feature.keys().collect::<Vec<_>>(), ["kind", "_id", "title"]);
    assert_eq!(feature.get("kind"), Some(&Value::from("Feature")));

    let back = mapper.reverse_transform(&object).unwrap();
    assert_eq!(back, product);
}

#[test]
fn unknown_tag_is_not_resolved() {
    let mapper =
        Mapper::<Product>::new(mapping::product(Discriminator::Key("kind".into()))).unwrap();

    let object = object! {
        "_id" => Identifier::new().to_string(),
        "name" => "Some product",
        "attributes" => vec![Value::from(object! {
            "kind" => "Size",
            "_id" => Identifier::new().to_string(),
            "name" => "XL",
        })],
    };

    let err = mapper.reverse_transform(&object).unwrap_err();
    assert!(err.is_variant_not_resolved());
}

#[test]
fn unmatched_shape_is_not_resolved() {
    let mapper = Mapper::<Product>::new(mapping::product(Discriminator::Shape)).unwrap();

    let object = object! {
        "_id" => Identifier::new().to_string(),
        "name" => "Some product",
        "attributes" => vec![Value::from(object! { "_id" => Identifier::new().to_string() })],
    };

    let err = mapper.reverse_transform(&object).unwrap_err();
    assert!(err.is_variant_not_resolved());
    assert_eq!(
        err.to_string(),
        format!(
            "no entity variant matches object: {}",
            object.get("attributes").unwrap().as_list().unwrap()[0]
        )
    );
}

#[test]
fn shape_contained_in_another_variant_is_rejected() {
    let err = board_mapping(Discriminator::Shape).unwrap_err();

    assert!(err.is_invalid_mapping());
    assert!(err
        .to_string()
        .contains("cannot tell entity `Label` from entity `Badge` by shape"));
}

#[test]
fn overlapping_shapes_round_trip_with_tag_key() {
    let mapping = board_mapping(Discriminator::Key("kind".into())).unwrap();
    let mapper = Mapper::<Board>::new(mapping).unwrap();

    let board = Board {
        markers: vec![
            Marker::Badge(Badge {
                text: "new".into(),
                icon: "star".into(),
            }),
            Marker::Label(Label {
                text: "sale".into(),
            }),
        ],
    };

    let object = mapper.transform(&board).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert_eq!(back, board);
}
