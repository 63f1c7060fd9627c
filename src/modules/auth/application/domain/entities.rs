use serde::{Deserialize, Serialize};

/// The authenticated editor. Persisted to the `auth` mirror key as
/// `{"username": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
}

/// Configured admin account. The password is only kept as an Argon2 PHC
/// string.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: Option<String>,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
