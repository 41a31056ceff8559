//! HS256 bearer tokens.
//!
//! [`JwtAuthenticator`] signs tokens at login and validates them on every
//! protected request. Claims are `sub` (user id), `email` and `exp`.
//!
//! ```ignore
//! let auth = JwtAuthenticator::new(secret, 8 * 3600);
//! let issued = auth.issue(&user.id, &user.email)?;
//! let who = auth.validate(&issued.token).await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: i64,
    iat: i64,
}

/// Issues and validates HS256-signed access tokens.
pub struct JwtAuthenticator {
    secret: Secret<String>,
    ttl_secs: i64,
}

impl JwtAuthenticator {
    pub fn new(secret: Secret<String>, ttl_secs: i64) -> Self {
        Self { secret, ttl_secs }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.jwt_secret.clone(), config.token_ttl_secs())
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenIssuer for JwtAuthenticator {
    fn issue(&self, user_id: &UserId, email: &str) -> Result<IssuedToken, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key())
            .map_err(|e| {
                tracing::error!(error = %e, "failed to sign access token");
                AuthError::service_unavailable("token signing failed")
            })?;

        Ok(IssuedToken {
            token,
            expires_in_secs: self.ttl_secs,
        })
    }
}

#[async_trait]
impl SessionValidator for JwtAuthenticator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key(), &Self::validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        let user_id: UserId = data.claims.sub.parse().map_err(|_| {
            tracing::warn!("Token subject is not a user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, data.claims.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> JwtAuthenticator {
        JwtAuthenticator::new(Secret::new("test-secret-that-is-long-enough!!".to_string()), 3600)
    }

    #[tokio::test]
    async fn issued_token_validates() {
        let auth = authenticator();
        let user_id = UserId::new();

        let issued = auth.issue(&user_id, "ada@example.com").unwrap();
        assert_eq!(issued.expires_in_secs, 3600);

        let user = auth.validate(&issued.token).await.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let err = authenticator().validate("not-a-jwt").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid() {
        let other = JwtAuthenticator::new(Secret::new("another-secret".to_string()), 3600);
        let issued = other.issue(&UserId::new(), "x@example.com").unwrap();

        let err = authenticator().validate(&issued.token).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn expired_token_reports_expiry() {
        // well past the default validation leeway
        let expired = JwtAuthenticator::new(
            Secret::new("test-secret-that-is-long-enough!!".to_string()),
            -3600,
        );
        let issued = expired.issue(&UserId::new(), "old@example.com").unwrap();

        let err = authenticator().validate(&issued.token).await.unwrap_err();
        assert_eq!(err, AuthError::TokenExpired);
        assert!(err.requires_reauthentication());
    }

    #[tokio::test]
    async fn non_uuid_subject_is_invalid() {
        let auth = authenticator();
        let claims = Claims {
            sub: "legacy-user".to_string(),
            email: "x@example.com".to_string(),
            exp: Utc::now().timestamp() + 60,
            iat: Utc::now().timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &auth.encoding_key()).unwrap();

        assert_eq!(auth.validate(&token).await.unwrap_err(), AuthError::InvalidToken);
    }
}
