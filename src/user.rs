use std::collections::HashMap;

/// A user record: an identity key, a credential, and optional profile
/// fields. Built from signup or login form posts.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates a record holding only credentials, as supplied by a login form.
    pub fn new(user_id: String, password: String) -> User {
        User {
            user_id,
            password,
            name: None,
            email: None,
        }
    }

    /// Creates a full record, profile fields included.
    pub fn with_profile(
        user_id: String,
        password: String,
        name: Option<String>,
        email: Option<String>,
    ) -> User {
        User {
            user_id,
            password,
            name,
            email,
        }
    }

    /// Builds a record from `userId`, `password`, `name` and `email` form
    /// parameters. Missing credential fields become empty strings; missing
    /// profile fields stay absent.
    pub fn from_params(params: &HashMap<String, String>) -> User {
        User::with_profile(
            params.get("userId").cloned().unwrap_or_default(),
            params.get("password").cloned().unwrap_or_default(),
            params.get("name").cloned(),
            params.get("email").cloned(),
        )
    }

    /// Checks whether the other record carries the same id and password.
    /// Profile fields do not participate.
    pub fn matches_credentials(&self, other: &User) -> bool {
        self.user_id == other.user_id && self.password == other.password
    }
}
