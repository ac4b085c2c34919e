use pretty_assertions::assert_eq;
use reshape::convert::{self, DateTimeToString, UuidToString};
use reshape::{object, Converter, Entity, FieldRule, Mapper, ObjectMapping, Value};
use tests::entity::Comment;
use tests::Identifier;

#[test]
fn uuid_round_trip() {
    for _ in 0..16 {
        let id = Value::Uuid(uuid::Uuid::new_v4());
        let external = UuidToString.transform(id.clone()).unwrap();
        assert_eq!(UuidToString.reverse_transform(external).unwrap(), id);
    }
}

#[test]
fn date_time_round_trip() {
    let now = Value::DateTime(tests::now());
    let external = DateTimeToString.transform(now.clone()).unwrap();

    assert!(external.as_str().unwrap().ends_with('Z'));
    assert_eq!(DateTimeToString.reverse_transform(external).unwrap(), now);
}

#[test]
fn closure_converter_in_mapping() {
    let shout = convert::from_fn(
        |value| Ok(Value::from(value.into_string()?.to_uppercase())),
        |value| Ok(Value::from(value.into_string()?.to_lowercase())),
    );

    let declaration = ObjectMapping::of::<Comment>()
        .property("uuid", FieldRule::leaf())
        .property("message", FieldRule::leaf().converter(shout))
        .property("createdAt", FieldRule::leaf())
        .build()
        .unwrap();
    let mapper = Mapper::<Comment>::new(declaration).unwrap();

    let comment = Comment::new("quiet please");
    let object = mapper.transform(&comment).unwrap();
    assert_eq!(object.get("message"), Some(&Value::from("QUIET PLEASE")));

    let back = mapper.reverse_transform(&object).unwrap();
    assert_eq!(back, comment);
}

#[test]
fn converter_applies_to_each_list_element() {
    let upper = convert::from_fn(
        |value| Ok(Value::from(value.into_string()?.to_uppercase())),
        |value| Ok(Value::from(value.into_string()?.to_lowercase())),
    );

    #[derive(Debug, Default, PartialEq, Entity)]
    struct Labels {
        labels: Vec<String>,
        note: Option<String>,
    }

    let declaration = ObjectMapping::of::<Labels>()
        .property("labels", FieldRule::leaf().converter(upper.clone()))
        .property("note", FieldRule::leaf().converter(upper))
        .build()
        .unwrap();
    let mapper = Mapper::<Labels>::new(declaration).unwrap();

    let labels = Labels {
        labels: vec!["a".into(), "b".into()],
        note: None,
    };

    let object = mapper.transform(&labels).unwrap();
    assert_eq!(
        object,
        object! {
            "labels" => vec!["A", "B"],
            "note" => Value::Null,
        }
    );

    assert_eq!(mapper.reverse_transform(&object).unwrap(), labels);
}

#[test]
fn forward_failure_names_the_field() {
    let declaration = ObjectMapping::of::<Comment>()
        .property("uuid", FieldRule::leaf())
        .property("message", FieldRule::leaf().converter(UuidToString))
        .property("createdAt", FieldRule::leaf())
        .build()
        .unwrap();
    let mapper = Mapper::<Comment>::new(declaration).unwrap();

    let err = mapper.transform(&Comment::new("hello")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to convert property `message` on entity `Comment`: cannot convert String to Uuid"
    );
}

#[test]
fn identifier_survives_converter() {
    let id = Identifier::new();
    let external = UuidToString
        .transform(reshape::ScalarField::to_value(&id))
        .unwrap();

    assert_eq!(external, Value::from(id.to_string()));
}
