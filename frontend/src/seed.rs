//! Built-in data shown while storage holds nothing usable.

use crate::models::{Post, User};

pub struct SeedAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const SEED_ACCOUNTS: [SeedAccount; 2] = [
    SeedAccount {
        email: "demo@example.com",
        password: "password123",
        name: "Demo User",
    },
    SeedAccount {
        email: "test@user.com",
        password: "testpass",
        name: "Test User",
    },
];

fn seed_post(
    id: &str,
    author: &str,
    timestamp: &str,
    content: &str,
    emoji: &str,
    (likes, comments, shares): (u64, u64, u64),
    created_at: u64,
) -> Post {
    Post {
        id: id.into(),
        author: author.into(),
        timestamp: timestamp.into(),
        content: content.into(),
        emoji: emoji.into(),
        likes,
        comments,
        shares,
        created_at,
    }
}

/// Three sample posts, newest first, stamped relative to `now` (epoch ms).
pub fn default_posts(now: u64) -> Vec<Post> {
    vec![
        seed_post(
            "1",
            "Theresa Webb",
            "5 mins ago",
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            "😢",
            (12, 3, 1),
            now.saturating_sub(300_000),
        ),
        seed_post(
            "2",
            "John Doe",
            "1 hour ago",
            "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
            "👍",
            (8, 2, 0),
            now.saturating_sub(3_600_000),
        ),
        seed_post(
            "3",
            "Jane Doe",
            "2 hours ago",
            "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
            "😎",
            (15, 5, 2),
            now.saturating_sub(7_200_000),
        ),
    ]
}

/// The demo accounts; their id is their email.
pub fn default_users() -> Vec<User> {
    SEED_ACCOUNTS
        .iter()
        .map(|account| User {
            id: account.email.into(),
            name: account.name.into(),
            email: account.email.into(),
            password: account.password.into(),
            avatar: None,
        })
        .collect()
}
