//! Music-streaming credentials sourced from the environment.

use super::ConfigError;
use std::fmt;

/// Environment variable holding the client id.
pub const SPOTIFY_CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the client secret.
pub const SPOTIFY_CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
/// Environment variable holding the long-lived refresh token.
pub const SPOTIFY_REFRESH_TOKEN_VAR: &str = "SPOTIFY_REFRESH_TOKEN";

/// Client id/secret and refresh token used for the token exchange.
///
/// `Debug` output never includes the secret or the refresh token.
#[derive(Clone)]
pub struct SpotifyCredentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl SpotifyCredentials {
    /// Creates credentials from explicit values.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Reads credentials from `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// and `SPOTIFY_REFRESH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] for the first variable that is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: require_env(SPOTIFY_CLIENT_ID_VAR)?,
            client_secret: require_env(SPOTIFY_CLIENT_SECRET_VAR)?,
            refresh_token: require_env(SPOTIFY_REFRESH_TOKEN_VAR)?,
        })
    }

    /// Returns the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the refresh token.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

fn require_env(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv { var }),
    }
}
