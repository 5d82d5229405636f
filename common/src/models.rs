use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post as persisted in the `posts` table.
///
/// The id is assigned by the database on insert and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub body: String,
}

/// Payload for creating a post. The store assigns the id, so a client-supplied
/// id field is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_all_fields() {
        let post = Post {
            id: 1,
            title: "T".to_string(),
            body: "B".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "title": "T", "body": "B"}));
    }

    #[test]
    fn new_post_ignores_client_supplied_id() {
        let new_post: NewPost =
            serde_json::from_str(r#"{"id": 99, "title": "T", "body": "B"}"#).unwrap();
        assert_eq!(new_post.title, "T");
        assert_eq!(new_post.body, "B");
    }
}
