// src/auth/jwt.rs

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates stateless HS256 bearer tokens. The username is
/// recovered from the token itself, so verification needs no store lookup.
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl JwtService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry: Duration::hours(config.token_expiry_hours),
        }
    }

    pub fn generate_token(&self, username: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::AuthError("Invalid or expired token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiry_hours: i64) -> JwtService {
        JwtService::new(&AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_expiry_hours: expiry_hours,
        })
    }

    #[test]
    fn token_round_trips_to_the_issued_username() {
        let jwt = service(24);
        let token = jwt.generate_token("alice").unwrap();
        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let jwt = service(24);
        let token = jwt.generate_token("alice").unwrap();

        // Flip a character in the payload segment.
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(jwt.validate_token(&tampered).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = service(24).generate_token("alice").unwrap();
        let other = JwtService::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            token_expiry_hours: 24,
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = service(-1);
        let token = jwt.generate_token("alice").unwrap();
        assert!(jwt.validate_token(&token).is_err());
    }
}
