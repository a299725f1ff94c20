//! Demo credential verification.
//!
//! The service has exactly one accepted credential pair and a fixed opaque
//! token, both supplied through configuration. This is a placeholder for a
//! real identity provider: handlers call [`verify_login`] and never touch
//! the literal values, so swapping in a real verifier is a one-function
//! change.

use serde::Deserialize;

use crate::error::ApiError;

/// The single credential pair accepted by this instance, and the token
/// issued for it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
  pub phone:    String,
  pub password: String,
  pub token:    String,
}

impl AuthConfig {
  /// The well-known demo pair used when no configuration overrides it.
  pub fn demo() -> Self {
    AuthConfig {
      phone:    "7760873976".to_owned(),
      password: "to_share@123".to_owned(),
      token:    "kpa-demo-access-token".to_owned(),
    }
  }
}

impl Default for AuthConfig {
  fn default() -> Self { Self::demo() }
}

/// Check `phone`/`password` against the configured pair; on success return
/// the token to issue.
pub fn verify_login(
  config: &AuthConfig,
  phone: &str,
  password: &str,
) -> Result<String, ApiError> {
  if phone == config.phone && password == config.password {
    Ok(config.token.clone())
  } else {
    Err(ApiError::InvalidCredentials)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn demo_pair_yields_token() {
    let config = AuthConfig::demo();
    let token =
      verify_login(&config, "7760873976", "to_share@123").unwrap();
    assert_eq!(token, config.token);
  }

  #[test]
  fn wrong_password_is_rejected() {
    let config = AuthConfig::demo();
    let err = verify_login(&config, "7760873976", "nope").unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials));
  }

  #[test]
  fn wrong_phone_is_rejected() {
    let config = AuthConfig::demo();
    assert!(verify_login(&config, "0000000000", "to_share@123").is_err());
  }
}
