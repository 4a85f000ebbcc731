//! Upstream API credential.

use crate::config::AuthScheme;

const BEARER_PREFIX: &str = "Bearer ";

/// API token read once at startup. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from the named environment variable. Blank values count
    /// as absent.
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    /// Value for the `Authorization` header under the given scheme.
    pub fn authorization(&self, scheme: AuthScheme) -> String {
        match scheme {
            AuthScheme::Raw => self.0.clone(),
            AuthScheme::Bearer if self.0.starts_with(BEARER_PREFIX) => self.0.clone(),
            AuthScheme::Bearer => format!("{}{}", BEARER_PREFIX, self.0),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
