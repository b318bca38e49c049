// One-shot flash messages: written before a redirect, shown once on the next page.
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use crate::errors::AppResult;

const FLASH_KEY: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

pub async fn success(session: &Session, message: impl Into<String>) -> AppResult<()> {
    push(session, Level::Success, message.into()).await
}

pub async fn failure(session: &Session, message: impl Into<String>) -> AppResult<()> {
    push(session, Level::Failure, message.into()).await
}

async fn push(session: &Session, level: Level, message: String) -> AppResult<()> {
    session.insert(FLASH_KEY, Notice { level, message }).await?;
    Ok(())
}

/// Removes and returns the pending notice, if any.
pub async fn take(session: &Session) -> AppResult<Option<Notice>> {
    Ok(session.remove::<Notice>(FLASH_KEY).await?)
}
