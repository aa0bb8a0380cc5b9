/// A single feed entry, stored newest-first under the posts key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    /// Human readable age such as "now" or "5 mins ago".
    pub timestamp: String,
    pub content: String,
    pub emoji: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    /// Epoch milliseconds.
    pub created_at: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    // stored as sanitized plaintext, compared verbatim on login
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Fields to merge over an existing post. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub author: Option<String>,
    pub timestamp: Option<String>,
    pub content: Option<String>,
    pub emoji: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub shares: Option<u64>,
    pub created_at: Option<u64>,
}

impl PostPatch {
    pub fn apply(self, post: &mut Post) {
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(timestamp) = self.timestamp {
            post.timestamp = timestamp;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(emoji) = self.emoji {
            post.emoji = emoji;
        }
        if let Some(likes) = self.likes {
            post.likes = likes;
        }
        if let Some(comments) = self.comments {
            post.comments = comments;
        }
        if let Some(shares) = self.shares {
            post.shares = shares;
        }
        if let Some(created_at) = self.created_at {
            post.created_at = created_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "7".into(),
            author: "Ada".into(),
            timestamp: "now".into(),
            content: "hello".into(),
            emoji: "😊".into(),
            likes: 0,
            comments: 0,
            shares: 0,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn post_uses_camel_case_created_at() {
        let json = serde_json::to_string(&post()).unwrap();
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn user_without_avatar_omits_the_field() {
        let user = User {
            id: "demo@example.com".into(),
            name: "Demo User".into(),
            email: "demo@example.com".into(),
            password: "password123".into(),
            avatar: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut target = post();
        PostPatch {
            likes: Some(3),
            content: Some("edited".into()),
            ..PostPatch::default()
        }
        .apply(&mut target);

        assert_eq!(target.likes, 3);
        assert_eq!(target.content, "edited");
        assert_eq!(target.author, "Ada");
        assert_eq!(target.id, "7");
    }
}
