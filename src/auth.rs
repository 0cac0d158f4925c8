use axum::http::{HeaderMap, header};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{AppError, AppResult};

const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 bearer tokens against the single configured
/// credential pair.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    email: String,
    password: String,
}

impl TokenIssuer {
    pub fn new(secret: &str, email: String, password: String) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            email,
            password,
        }
    }

    /// Mints a token when the credentials match exactly; a mismatch is an
    /// explicit authentication failure, never a silent fall-through.
    pub fn issue(&self, email: &str, password: &str) -> AppResult<String> {
        if email != self.email || password != self.password {
            return Err(AppError::Auth("invalid credentials".to_string()));
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims { sub: email.to_string(), iat: now, exp: now + TOKEN_TTL_SECS };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AppError::Internal(anyhow::Error::new(err)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Auth("invalid token".to_string()))
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Auth("missing bearer token".to_string()))
}
