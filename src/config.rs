// Credential loading. Both values come from the environment (optionally
// seeded from a `.env` file); nothing is prompted for and nothing has a
// default.

use secrecy::SecretString;

use crate::error::{Error, Result};

pub const USERNAME_VAR: &str = "BLUESKY_USERNAME";
pub const PASSWORD_VAR: &str = "BLUESKY_PASSWORD";

/// Handle and app password used to open a session.
#[derive(Debug)]
pub struct Credentials {
    pub identifier: String,
    pub password: SecretString,
}

impl Credentials {
    /// Read both credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Resolve credentials through `lookup`. An unset variable and an empty
    /// one are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let identifier = required(&lookup, USERNAME_VAR)?;
        let password = required(&lookup, PASSWORD_VAR)?;
        Ok(Credentials {
            identifier,
            password: SecretString::from(password),
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingEnv(name)),
    }
}

/// Process environment lookup, suitable for [`Credentials::from_lookup`]
/// and [`crate::run`].
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load `.env` from the working directory if there is one. Returns whether
/// a file was loaded.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            true
        }
        Err(err) if err.not_found() => false,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable .env");
            false
        }
    }
}
