//! Persistence of posts, users and the session over a [`StoragePort`].
//!
//! Reads never fail: a missing key, an empty value, a storage error or a value
//! that does not decode all fall back to the seed data (or to "no session").
//! Writes never fail either: errors are logged and swallowed, so after a failed
//! write the next read shows whatever actually landed in storage.
//!
//! Every write rewrites the whole collection. Lookups are linear scans.

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::StorageKeys;
use crate::models::{Post, PostPatch, User};
use crate::seed;
use crate::storage::StoragePort;

pub struct LocalStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    keys: StorageKeys,
}

impl<S: StoragePort> LocalStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: StoragePort, C: Clock> LocalStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        LocalStore {
            storage,
            clock,
            keys: StorageKeys::default(),
        }
    }

    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(err) => {
                debug!("reading {key} failed: {err}");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .map_err(|err| debug!("could not decode {key}: {err}"))
            .ok()
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T, what: &str) {
        let result = serde_json::to_string(value)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                self.storage
                    .set_item(key, &json)
                    .map_err(|err| err.to_string())
            });

        if let Err(err) = result {
            error!("Failed to {what}: {err}");
        }
    }

    /// Posts newest first, or the seed posts when nothing usable is stored.
    /// The seed is not written back.
    pub fn get_posts(&self) -> Vec<Post> {
        self.read(&self.keys.posts).unwrap_or_else(|| {
            debug!("no stored posts, using defaults");
            seed::default_posts(self.clock.now_millis())
        })
    }

    pub fn save_post(&self, post: Post) {
        let mut posts = self.get_posts();
        posts.insert(0, post);
        self.write(&self.keys.posts, &posts, "save post");
    }

    /// Merges `patch` over the first post with `id`. Unknown ids are ignored.
    pub fn update_post(&self, id: &str, patch: PostPatch) {
        let mut posts = self.get_posts();
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            debug!("update_post: no post with id {id}");
            return;
        };

        patch.apply(post);
        self.write(&self.keys.posts, &posts, "update post");
    }

    pub fn get_users(&self) -> Vec<User> {
        self.read(&self.keys.users).unwrap_or_else(|| {
            debug!("no stored users, using defaults");
            seed::default_users()
        })
    }

    /// Replaces the user with the same id in place, or appends.
    pub fn save_user(&self, user: User) {
        let mut users = self.get_users();
        match users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
        self.write(&self.keys.users, &users, "save user");
    }

    pub fn get_current_user(&self) -> Option<User> {
        self.read(&self.keys.current_user)
    }

    pub fn set_current_user(&self, user: Option<&User>) {
        match user {
            Some(user) => self.write(&self.keys.current_user, user, "set current user"),
            None => {
                if let Err(err) = self.storage.remove_item(&self.keys.current_user) {
                    error!("Failed to set current user: {err}");
                }
            }
        }
    }
}
