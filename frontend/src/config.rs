pub const STORAGE_PREFIX: &'static str = "foo-rum";
pub const ROOT_SELECTOR: &'static str = "#foo_rum_root";

/// The three keys the store persists under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub posts: String,
    pub users: String,
    pub current_user: String,
}

impl StorageKeys {
    pub fn namespaced(prefix: &str) -> Self {
        StorageKeys {
            posts: format!("{prefix}-posts"),
            users: format!("{prefix}-users"),
            current_user: format!("{prefix}-current-user"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::namespaced(STORAGE_PREFIX)
    }
}
