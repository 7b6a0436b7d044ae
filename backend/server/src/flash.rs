//! One-shot notices, queued per session and drained on the next render.
use tower_sessions::Session;

use crate::error::AppError;

pub const FLASH_KEY: &str = "_flashes";

pub async fn push(session: &Session, message: &str) -> Result<(), AppError> {
    let mut flashes: Vec<String> = session.get(FLASH_KEY).await?.unwrap_or_default();
    flashes.push(message.to_string());
    session.insert(FLASH_KEY, flashes).await?;

    Ok(())
}

pub async fn drain(session: &Session) -> Result<Vec<String>, AppError> {
    Ok(session
        .remove::<Vec<String>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}
