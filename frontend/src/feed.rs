//! The post feed: loading, submitting, and the interactions that only exist
//! as placeholders.

use std::fmt;

use log::info;
use thiserror::Error;

use crate::clock::Clock;
use crate::local_store::LocalStore;
use crate::models::{Post, User};
use crate::sanitize::{sanitize_name, sanitize_post_content};
use crate::storage::StoragePort;

pub const NEW_POST_EMOJI: &'static str = "😊";
pub const NEW_POST_TIMESTAMP: &'static str = "now";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// The caller should open the login modal.
    #[error("You need to sign in first.")]
    LoginRequired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Like,
    Comment,
    Share,
    Bold,
    Italic,
    Underline,
    UnorderedList,
    OrderedList,
    CodeBlock,
    DeleteClear,
    Attachment,
    VoiceInput,
    Camera,
}

impl Interaction {
    pub fn label(&self) -> &'static str {
        match self {
            Interaction::Like => "Like",
            Interaction::Comment => "Comment",
            Interaction::Share => "Share",
            Interaction::Bold => "Bold formatting",
            Interaction::Italic => "Italic formatting",
            Interaction::Underline => "Underline formatting",
            Interaction::UnorderedList => "Unordered list",
            Interaction::OrderedList => "Ordered list",
            Interaction::CodeBlock => "Code block",
            Interaction::DeleteClear => "Delete/Clear",
            Interaction::Attachment => "Add attachment",
            Interaction::VoiceInput => "Voice input",
            Interaction::Camera => "Camera",
        }
    }
}

/// A blocking message for the user; not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice(pub String);

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn interact(current_user: Option<&User>, action: Interaction) -> Result<Notice, FeedError> {
    if current_user.is_none() {
        return Err(FeedError::LoginRequired);
    }

    // post card notices carry no trailing period, editor tool notices do
    let notice = match action {
        Interaction::Like | Interaction::Comment | Interaction::Share => {
            format!("{} functionality is not implemented yet", action.label())
        }
        _ => format!("{} functionality is not implemented yet.", action.label()),
    };

    Ok(Notice(notice))
}

/// Posts as currently shown, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feed {
    pub posts: Vec<Post>,
}

impl Feed {
    pub fn load<S: StoragePort, C: Clock>(store: &LocalStore<S, C>) -> Self {
        Feed {
            posts: store.get_posts(),
        }
    }

    /// Publishes `raw` as `current_user`. Content that is blank once
    /// sanitized is dropped and `Ok(None)` returned.
    pub fn submit<S: StoragePort, C: Clock>(
        &mut self,
        store: &LocalStore<S, C>,
        current_user: Option<&User>,
        raw: &str,
    ) -> Result<Option<Post>, FeedError> {
        let user = current_user.ok_or(FeedError::LoginRequired)?;

        let content = sanitize_post_content(raw);
        if content.trim().is_empty() {
            return Ok(None);
        }

        let now = store.clock().now_millis();
        let post = Post {
            id: now.to_string(),
            author: sanitize_name(&user.name),
            timestamp: NEW_POST_TIMESTAMP.into(),
            content,
            emoji: NEW_POST_EMOJI.into(),
            likes: 0,
            comments: 0,
            shares: 0,
            created_at: now,
        };

        store.save_post(post.clone());
        self.posts.insert(0, post.clone());
        info!("{} posted {}", post.author, post.id);

        Ok(Some(post))
    }
}
