//! Authentication collaborator and start-up gate
//!
//! There is no auth backend: [`MockAuthService`] waits a fixed delay and then
//! answers with a configured outcome. Any failure sends the user to the login
//! screen; nothing is retried.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::time::Duration;

use crate::core::Config;

/// Generic message shown on any login failure
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Session>;
}

/// Fixed-delay, fixed-outcome authenticator
#[derive(Debug, Clone)]
pub struct MockAuthService {
    delay: Duration,
    succeeds: bool,
}

impl MockAuthService {
    pub fn new(delay: Duration, succeeds: bool) -> Self {
        Self { delay, succeeds }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.auth_delay_ms),
            config.mock_auth_succeeds,
        )
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn authenticate(&self, credentials: &Credentials) -> AppResult<Session> {
        tokio::time::sleep(self.delay).await;

        if !self.succeeds {
            return Err(AppError::not_authenticated(LOGIN_FAILED_MESSAGE));
        }
        Ok(Session {
            username: credentials.username.clone(),
            signed_in_at: shared::util::now(),
        })
    }
}

/// First screen after launch
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Home(Session),
}

/// Authenticate once; any error lands on the login screen
pub async fn resolve_start_route(auth: &dyn AuthService, credentials: &Credentials) -> Route {
    match auth.authenticate(credentials).await {
        Ok(session) => {
            tracing::info!(user = %session.username, "Signed in");
            Route::Home(session)
        }
        Err(e) => {
            tracing::warn!(code = %e.code, "Authentication failed, showing login: {}", e);
            Route::Login
        }
    }
}
