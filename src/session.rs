//! Per-browser authentication state kept in the server-side session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use crate::errors::AppResult;
use crate::models::User;

const AUTH_KEY: &str = "auth";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub async fn load(session: &Session) -> AppResult<SessionState> {
    Ok(session.get::<SessionState>(AUTH_KEY).await?.unwrap_or_default())
}

/// Replaces whatever identity the session held. No validation: the caller has
/// already authenticated `user`.
pub async fn set_auth(session: &Session, user: User, token: String) -> AppResult<()> {
    // new id on privilege change
    session.cycle_id().await?;
    session
        .insert(
            AUTH_KEY,
            SessionState {
                user: Some(user),
                token: Some(token),
            },
        )
        .await?;
    Ok(())
}

pub async fn logout(session: &Session) -> AppResult<()> {
    session.remove::<SessionState>(AUTH_KEY).await?;
    session.flush().await?;
    Ok(())
}

pub async fn is_authenticated(session: &Session) -> AppResult<bool> {
    Ok(load(session).await?.is_authenticated())
}

pub async fn current_user(session: &Session) -> AppResult<Option<User>> {
    Ok(load(session).await?.user)
}
