// 🔑 Development Login Check
//
// NOT an authentication system. This is the placeholder credential gate
// for the development frontend: one expected username/password pair,
// exact match, nothing stored. Replace with a real credential-verification
// component before exposing the API outside a dev environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOk {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// The expected development credential pair.
///
/// Defaults to `xzp`/`xzp`; override with `FUND_ANALYSTS_USER` and
/// `FUND_ANALYSTS_PASS` so deployments never have to rely on the
/// built-in pair.
#[derive(Debug, Clone)]
pub struct DevCredentials {
    username: String,
    password: String,
}

impl Default for DevCredentials {
    fn default() -> Self {
        DevCredentials {
            username: "xzp".to_string(),
            password: "xzp".to_string(),
        }
    }
}

impl DevCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        DevCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Default pair with env overrides applied.
    pub fn from_env() -> Self {
        let mut creds = DevCredentials::default();
        if let Ok(user) = std::env::var("FUND_ANALYSTS_USER") {
            creds.username = user;
        }
        if let Ok(pass) = std::env::var("FUND_ANALYSTS_PASS") {
            creds.password = pass;
        }
        creds
    }

    /// Exact-match check against the expected pair.
    pub fn verify(&self, request: &Credentials) -> Result<LoginOk, AuthError> {
        if request.username == self.username && request.password == self.password {
            Ok(LoginOk {
                message: "Login successful".to_string(),
                username: request.username.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_logs_in() {
        let gate = DevCredentials::default();
        let ok = gate
            .verify(&Credentials {
                username: "xzp".to_string(),
                password: "xzp".to_string(),
            })
            .unwrap();

        assert_eq!(ok.username, "xzp");
        assert_eq!(ok.message, "Login successful");
    }

    #[test]
    fn test_wrong_pair_is_rejected() {
        let gate = DevCredentials::default();

        for (user, pass) in [("xzp", "wrong"), ("wrong", "xzp"), ("", "")] {
            let err = gate
                .verify(&Credentials {
                    username: user.to_string(),
                    password: pass.to_string(),
                })
                .unwrap_err();
            assert_eq!(err, AuthError::InvalidCredentials);
        }
    }

    #[test]
    fn test_custom_pair() {
        let gate = DevCredentials::new("ops", "s3cret");
        assert!(gate
            .verify(&Credentials {
                username: "ops".to_string(),
                password: "s3cret".to_string(),
            })
            .is_ok());
        assert!(gate
            .verify(&Credentials {
                username: "xzp".to_string(),
                password: "xzp".to_string(),
            })
            .is_err());
    }
}
