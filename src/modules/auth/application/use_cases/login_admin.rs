use std::sync::Arc;

use crate::modules::auth::application::{
    domain::entities::{AdminCredentials, AdminUser},
    ports::outgoing::PasswordHasher,
};

// ========================= Login Request =========================
/// Validated login form input.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequestError {
    EmptyUsername,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, LoginRequestError> {
        let username = username.into().trim().to_string();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        let password = password.into();
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidRequest(LoginRequestError),
    InvalidCredentials,
    NotConfigured,
    PasswordVerificationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidRequest(e) => write!(f, "{}", e),
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::NotConfigured => write!(f, "Admin password is not configured"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoginError {}

impl From<LoginRequestError> for LoginError {
    fn from(e: LoginRequestError) -> Self {
        LoginError::InvalidRequest(e)
    }
}

// ============================ Login Admin Use Case =============================
#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginAdminUseCase {
    pub fn new(credentials: AdminCredentials, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            credentials,
            hasher,
        }
    }

    pub fn admin_username(&self) -> &str {
        &self.credentials.username
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<AdminUser, LoginError> {
        let hash = self
            .credentials
            .password_hash
            .as_deref()
            .ok_or(LoginError::NotConfigured)?;

        if request.username() != self.credentials.username {
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .hasher
            .verify_password(request.password(), hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(AdminUser {
            username: request.username().to_string(),
        })
    }
}
