use pretty_assertions::assert_eq;
use reshape::{object, Entity, Mapper, Value};
use tests::entity::Editor;
use tests::mapping;

#[test]
fn flattened_fields_are_mapped_flat() {
    let editor = Editor::new("Eva Prong", "evi");
    let mapper = Mapper::<Editor>::new(mapping::editor()).unwrap();

    let object = mapper.transform(&editor).unwrap();

    assert_eq!(
        object,
        object! {
            "uuid" => editor.author.uuid.to_string(),
            "name" => "Eva Prong",
            "initials" => Value::Null,
            "createdAt" => editor.author.created_at,
            "alias" => "evi",
        }
    );
}

#[test]
fn flattened_round_trip() {
    let editor = Editor::new("Eva Prong", "evi");
    let mapper = Mapper::<Editor>::new(mapping::editor()).unwrap();

    let object = mapper.transform(&editor).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert_eq!(back, editor);
}

#[test]
fn skipped_field_is_not_an_entity_field() {
    let mut editor = Editor::new("Eva Prong", "evi");
    editor.drafts_open = 3;

    assert_eq!(
        editor.field_names(),
        ["alias", "uuid", "_name", "_initials", "createdAt"]
    );
    assert!(editor.field("drafts_open").is_none());

    let mapper = Mapper::<Editor>::new(mapping::editor()).unwrap();
    let object = mapper.transform(&editor).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert_eq!(back.drafts_open, 0);
}
