//! Static credential table backing the bearer-token gate.
//!
//! Tokens are pre-assigned shared secrets and passwords are compared in
//! plaintext; this is a toy scheme, not real authentication. The
//! `CredentialStore` trait is the seam where a hashed-password or external
//! identity backend would plug in.

/// An API user. Defined once at process start, read-only thereafter.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    password: String,
    pub is_admin: bool,
    token: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        is_admin: bool,
        token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_admin,
            token: token.into(),
        }
    }

    /// The user's static bearer credential.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Credential lookup capability. Both methods answer `None` on any failure
/// so callers cannot distinguish an unknown user from a bad secret.
pub trait CredentialStore: Send + Sync {
    /// Check a username/password pair and return the matched user.
    fn authenticate(&self, username: &str, password: &str) -> Option<User>;

    /// Look up the user owning a bearer token.
    fn resolve(&self, token: &str) -> Option<User>;
}

/// Fixed in-memory user table.
#[derive(Debug)]
pub struct StaticUserTable {
    users: Vec<User>,
}

impl StaticUserTable {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl Default for StaticUserTable {
    fn default() -> Self {
        Self::new(vec![
            User::new(
                "admin",
                "admin-secret",
                true,
                "c56b3f6a2d8e4c219f0b7a4d1e8c3f52",
            ),
            User::new(
                "johndoe",
                "secret",
                false,
                "8d4a1b9c3e7f4a6db2c5e8f1a0b3c6d9",
            ),
        ])
    }
}

impl CredentialStore for StaticUserTable {
    fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .cloned()
    }

    fn resolve(&self, token: &str) -> Option<User> {
        self.users.iter().find(|user| user.token == token).cloned()
    }
}
