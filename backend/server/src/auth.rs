//! # Auth
//!
//! Static credential table and the session side of logging in and out.
//!
//! A visitor is either anonymous (no `username` in the session) or
//! authenticated (the username they logged in with). There is no lockout,
//! retry counter, or expiry beyond the browser session.
use std::collections::HashMap;

use tower_sessions::Session;

use crate::error::AppError;

pub const USERNAME_KEY: &str = "username";

pub struct Credentials {
    users: HashMap<String, String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new([("Alice", "010128")])
    }
}

impl Credentials {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            users: entries
                .into_iter()
                .map(|(username, password)| (username.to_string(), password.to_string()))
                .collect(),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

pub async fn current_user(session: &Session) -> Result<Option<String>, AppError> {
    Ok(session.get::<String>(USERNAME_KEY).await?)
}

pub async fn sign_in(session: &Session, username: &str) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(USERNAME_KEY, username).await?;

    Ok(())
}

pub async fn sign_out(session: &Session) -> Result<(), AppError> {
    session.remove::<String>(USERNAME_KEY).await?;

    Ok(())
}
