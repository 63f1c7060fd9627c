pub mod password_hasher;

pub use password_hasher::{HashError, PasswordHasher};
