use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::modules::auth::application::{
    domain::entities::AdminUser,
    use_cases::login_admin::{LoginAdminUseCase, LoginError, LoginRequest},
};
use crate::modules::content::application::ports::outgoing::MirrorStore;
use crate::modules::content::domain::AUTH_MIRROR_KEY;

/// Gate for the editing surface. The signed-in user survives restarts
/// through the `auth` mirror entry.
pub struct AdminSession {
    login: LoginAdminUseCase,
    mirror: Arc<dyn MirrorStore>,
    user: RwLock<Option<AdminUser>>,
}

impl AdminSession {
    pub fn new(login: LoginAdminUseCase, mirror: Arc<dyn MirrorStore>) -> Self {
        Self {
            login,
            mirror,
            user: RwLock::new(None),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AdminUser, LoginError> {
        let request = LoginRequest::new(username, password)?;
        let user = match self.login.execute(request).await {
            Ok(user) => user,
            Err(e) => {
                warn!(username = %username.trim(), error = %e, "Admin login rejected");
                return Err(e);
            }
        };

        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.mirror.write(AUTH_MIRROR_KEY, &raw) {
                    warn!(error = %e, "Failed to persist admin session");
                }
            }
            Err(e) => warn!(error = %e, "Failed to encode admin session"),
        }

        info!(username = %user.username, "Admin logged in");
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    pub async fn logout(&self) {
        let previous = self.user.write().await.take();
        if let Err(e) = self.mirror.remove(AUTH_MIRROR_KEY) {
            warn!(error = %e, "Failed to clear admin session");
        }
        if let Some(user) = previous {
            info!(username = %user.username, "Admin logged out");
        }
    }

    /// Picks up a session persisted by an earlier run. Only a session for the
    /// configured admin is accepted.
    pub async fn restore(&self) -> Option<AdminUser> {
        let raw = match self.mirror.read(AUTH_MIRROR_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read admin session");
                return None;
            }
        };

        let user: AdminUser = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Ignoring undecodable admin session");
                return None;
            }
        };

        if user.username != self.login.admin_username() {
            warn!(username = %user.username, "Ignoring session for unknown user");
            return None;
        }

        *self.user.write().await = Some(user.clone());
        Some(user)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn current_user(&self) -> Option<AdminUser> {
        self.user.read().await.clone()
    }
}
