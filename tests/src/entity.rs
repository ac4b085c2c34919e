use crate::Identifier;

use chrono::{DateTime, Utc};
use reshape::{Entity, Polymorphic};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Author {
    pub uuid: Identifier,

    #[entity(rename = "_name")]
    pub name: String,

    #[entity(rename = "_initials")]
    pub initials: Option<String>,

    #[entity(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(name: &str) -> Author {
        Author {
            uuid: Identifier::new(),
            name: name.to_string(),
            initials: None,
            created_at: crate::now(),
        }
    }

    pub fn with_initials(mut self, initials: &str) -> Author {
        self.initials = Some(initials.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Comment {
    pub uuid: Identifier,

    pub message: String,

    #[entity(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(message: &str) -> Comment {
        Comment {
            uuid: Identifier::new(),
            message: message.to_string(),
            created_at: crate::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct BlogItem {
    pub uuid: Identifier,

    #[entity(rename = "_title")]
    pub title: String,

    #[entity(rename = "_description")]
    pub description: String,

    #[entity(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[entity(nested)]
    pub author: Author,

    #[entity(nested)]
    pub comments: Vec<Comment>,

    #[entity(rename = "_tags")]
    pub tags: Vec<String>,
}

impl BlogItem {
    pub fn new(title: &str, description: &str, author: Author) -> BlogItem {
        BlogItem {
            uuid: Identifier::new(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: crate::now(),
            author,
            comments: vec![],
            tags: vec![],
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Color {
    pub uuid: Identifier,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Feature {
    pub uuid: Identifier,
    pub title: String,
}

/// Anything a product can be described by.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
pub enum Attribute {
    Color(Color),
    Feature(Feature),
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Product {
    pub uuid: Identifier,

    pub name: String,

    #[entity(nested, rename = "_attributes")]
    pub attributes: Vec<Attribute>,
}

impl Product {
    pub fn new(name: &str) -> Product {
        Product {
            uuid: Identifier::new(),
            name: name.to_string(),
            attributes: vec![],
        }
    }

    pub fn add_attribute(&mut self, attribute: impl Into<Attribute>) {
        self.attributes.push(attribute.into());
    }
}

/// An author with a pen name.
#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct Editor {
    #[entity(flatten)]
    pub author: Author,

    pub alias: String,

    /// Session state, never stored
    #[entity(skip)]
    pub drafts_open: u32,
}

impl Editor {
    pub fn new(name: &str, alias: &str) -> Editor {
        Editor {
            author: Author::new(name),
            alias: alias.to_string(),
            drafts_open: 0,
        }
    }
}
