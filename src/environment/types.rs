use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

// Identifiers

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

macro_rules! display_id {
    ($($name:ident),*) => {
        $(impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        })*
    };
}

display_id!(AuthorId, PostId, CommentId);

// API Types

/// A user of the backing API. Only the fields the UI shows are required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub author_id: AuthorId,
    pub title: String,
    pub body: String,
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// The payload of `POST /comments`. The server assigns the id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

// Form Types

#[derive(IntoStaticStr, EnumIter, Display, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FormField {
    Name,
    Email,
    Body,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Author Name",
            FormField::Email => "Author Email",
            FormField::Body => "Comment Text",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name Surname",
            FormField::Email => "email@test.com",
            FormField::Body => "Type comment here",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            FormField::Name => "Name is required",
            FormField::Email => "Email is required",
            FormField::Body => "Enter some text",
        }
    }
}

// Events

/// The board does not subscribe to any window events
#[derive(Clone, Debug)]
pub enum AppEvent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_foreign_key() {
        let post: Post =
            serde_json::from_str(r#"{"id": 3, "userId": 1, "title": "t", "body": "b"}"#)
                .unwrap();
        assert_eq!(post.id, PostId(3));
        assert_eq!(post.author_id, AuthorId(1));
    }

    #[test]
    fn author_ignores_unknown_fields() {
        let author: Author = serde_json::from_str(
            r#"{"id": 1, "name": "Leanne", "email": "l@x.com", "address": {"city": "Gwen"}}"#,
        )
        .unwrap();
        assert_eq!(author.name, "Leanne");
        assert_eq!(author.username, None);
    }

    #[test]
    fn new_comment_serializes_post_id() {
        let draft = NewComment {
            post_id: PostId(7),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            body: "hi".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["postId"], 7);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn field_messages() {
        assert_eq!(FormField::Name.error_message(), "Name is required");
        assert_eq!(FormField::Body.to_string(), "Body");
    }
}
