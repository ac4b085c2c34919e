use pretty_assertions::assert_eq;
use reshape::{Mapper, Value};
use tests::entity::{Author, BlogItem, Comment};
use tests::mapping;

fn blog_item() -> BlogItem {
    let author = Author::new("Gijs Nieuwenhuis");
    let mut blog_item = BlogItem::new("Some title", "Some description", author);
    blog_item.tags = vec!["entity".into(), "mapping".into(), "transformer".into()];
    blog_item
}

#[test]
fn embedded_entity_becomes_nested_object() {
    let blog_item = blog_item();
    let mapper = Mapper::<BlogItem>::new(mapping::blog_item_without_comments()).unwrap();

    let object = mapper.transform(&blog_item).unwrap();

    assert_eq!(
        object.keys().collect::<Vec<_>>(),
        ["_id", "title", "description", "createdAt", "author", "tags"]
    );

    let author = object.get("author").and_then(Value::as_object).unwrap();
    assert_eq!(
        author.keys().collect::<Vec<_>>(),
        ["_id", "name", "initials", "createdAt"]
    );
    assert_eq!(
        author.get("_id"),
        Some(&Value::from(blog_item.author.uuid.to_string()))
    );
    assert_eq!(author.get("name"), Some(&Value::from("Gijs Nieuwenhuis")));

    assert_eq!(
        object.get("tags"),
        Some(&Value::from(vec!["entity", "mapping", "transformer"]))
    );
    assert!(!object.contains_key("comments"));
}

#[test]
fn nested_round_trip() {
    let blog_item = blog_item();
    let mapper = Mapper::<BlogItem>::new(mapping::blog_item_without_comments()).unwrap();

    let object = mapper.transform(&blog_item).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert_eq!(back, blog_item);
}

#[test]
fn ignored_collection_is_left_to_constructor() {
    let mut blog_item = blog_item();
    blog_item.add_comment(Comment::new("First!"));

    let mapper = Mapper::<BlogItem>::new(mapping::blog_item_without_comments()).unwrap();

    let object = mapper.transform(&blog_item).unwrap();
    let back = mapper.reverse_transform(&object).unwrap();

    assert!(back.comments.is_empty());
    assert_eq!(back.author, blog_item.author);
}

#[test]
fn shared_child_mapping() {
    let author = mapping::author();
    let declaration = reshape::ObjectMapping::of::<BlogItem>()
        .property("uuid", reshape::FieldRule::leaf())
        .property("_title", reshape::FieldRule::leaf())
        .property("_description", reshape::FieldRule::leaf())
        .property("createdAt", reshape::FieldRule::leaf())
        .property("author", author.clone())
        .property("_tags", reshape::FieldRule::leaf())
        .ignore("comments")
        .build()
        .unwrap();

    assert_eq!(std::sync::Arc::strong_count(&author), 2);

    let mapper = Mapper::<BlogItem>::new(declaration).unwrap();
    let object = mapper.transform(&blog_item()).unwrap();
    assert!(object.get("author").unwrap().is_object());
}
