use std::collections::HashMap;
use std::sync::RwLock;

use crate::user::User;

/// The store of user records, keyed by user id and shared across all
/// connection handlers. Lookups hand out owned copies so no lock guard
/// outlives the call.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> UserStore {
        UserStore::default()
    }

    /// Adds the given user, replacing any existing record with the same id.
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .unwrap()
            .insert(user.user_id.clone(), user);
    }

    /// Looks up the user with the given id.
    pub fn find_by_id(&self, user_id: &str) -> Option<User> {
        self.users.read().unwrap().get(user_id).cloned()
    }
}
