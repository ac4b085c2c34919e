use pretty_assertions::assert_eq;
use reshape::{Mapper, MapperOptions, Value};
use tests::entity::{Author, BlogItem};
use tests::mapping;

fn blog_item() -> BlogItem {
    let mut blog_item = BlogItem::new(
        "Some title",
        "Some description",
        Author::new("Gijs Nieuwenhuis"),
    );
    blog_item.tags = vec!["entity".into(), "mapping".into(), "transformer".into()];
    blog_item
}

#[test]
fn null_values_exposed_by_default() {
    let mapper = Mapper::<BlogItem>::new(mapping::blog_item_without_comments()).unwrap();

    let object = mapper.transform(&blog_item()).unwrap();
    let author = object.get("author").and_then(Value::as_object).unwrap();

    assert_eq!(author.get("initials"), Some(&Value::Null));
}

#[test]
fn null_values_pruned_at_every_depth() {
    let blog_item = blog_item();
    let mapper = Mapper::<BlogItem>::with_options(
        mapping::blog_item_without_comments(),
        MapperOptions::default().expose_null_values(false),
    )
    .unwrap();

    let object = mapper.transform(&blog_item).unwrap();
    let author = object.get("author").and_then(Value::as_object).unwrap();

    assert_eq!(
        author.keys().collect::<Vec<_>>(),
        ["_id", "name", "createdAt"]
    );
    assert_eq!(
        object.get("tags"),
        Some(&Value::from(vec!["entity", "mapping", "transformer"]))
    );
}

#[test]
fn present_optional_values_survive_pruning() {
    let mut blog_item = blog_item();
    blog_item.author = blog_item.author.with_initials("GN");

    let mapper = Mapper::<BlogItem>::with_options(
        mapping::blog_item_without_comments(),
        MapperOptions::default().expose_null_values(false),
    )
    .unwrap();

    let object = mapper.transform(&blog_item).unwrap();
    let author = object.get("author").and_then(Value::as_object).unwrap();

    assert_eq!(author.get("initials"), Some(&Value::from("GN")));
}

#[test]
fn null_round_trips_when_exposed() {
    let blog_item = blog_item();
    let mapper = Mapper::<BlogItem>::new(mapping::blog_item_without_comments()).unwrap();

    let object = mapper.transform(&blog_item).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert_eq!(back.author.initials, None);
    assert_eq!(back, blog_item);
}

#[test]
fn pruned_key_is_missing_on_reverse() {
    let mapper = Mapper::<BlogItem>::with_options(
        mapping::blog_item_without_comments(),
        MapperOptions::default().expose_null_values(false),
    )
    .unwrap();

    let object = mapper.transform(&blog_item()).unwrap();
    let err = mapper.reverse_transform(&object).unwrap_err();

    assert!(err.is_property_not_found_in_object());
}
