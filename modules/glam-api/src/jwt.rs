use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("could not issue token: {0}")]
    Issue(String),
    #[error("invalid token")]
    InvalidToken,
    #[error("wrong token type")]
    WrongTokenType,
}

/// JWT claims stored in both access and refresh tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i64,
    pub token_type: String,
    pub exp: i64,
}

/// Access/refresh pair issued on login and on refresh.
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// JWT service for creating and verifying tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl JwtService {
    pub fn new(secret: &str, access_minutes: i64, refresh_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: chrono::Duration::minutes(access_minutes),
            refresh_ttl: chrono::Duration::days(refresh_days),
        }
    }

    pub fn create_token_pair(&self, user_id: i64) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.create_token(user_id, TOKEN_TYPE_ACCESS, self.access_ttl)?,
            refresh_token: self.create_token(user_id, TOKEN_TYPE_REFRESH, self.refresh_ttl)?,
        })
    }

    fn create_token(
        &self,
        user_id: i64,
        token_type: &str,
        ttl: chrono::Duration,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            token_type: token_type.to_string(),
            exp: (chrono::Utc::now() + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Issue(e.to_string()))
    }

    /// Verify and decode a token, checking that it carries the expected
    /// `token_type` claim. Expired or malformed tokens are rejected.
    pub fn verify(&self, token: &str, expected_type: &str) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.token_type != expected_type {
            return Err(AuthError::WrongTokenType);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("test-secret-key", 60, 30)
    }

    #[test]
    fn roundtrip_access_token() {
        let svc = test_service();
        let pair = svc.create_token_pair(42).unwrap();
        let claims = svc.verify(&pair.access_token, TOKEN_TYPE_ACCESS).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
    }

    #[test]
    fn roundtrip_refresh_token() {
        let svc = test_service();
        let pair = svc.create_token_pair(42).unwrap();
        let claims = svc.verify(&pair.refresh_token, TOKEN_TYPE_REFRESH).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.token_type, TOKEN_TYPE_REFRESH);
    }

    #[test]
    fn rejects_refresh_token_where_access_expected() {
        let svc = test_service();
        let pair = svc.create_token_pair(42).unwrap();
        let err = svc.verify(&pair.refresh_token, TOKEN_TYPE_ACCESS).unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenType));
    }

    #[test]
    fn rejects_access_token_where_refresh_expected() {
        let svc = test_service();
        let pair = svc.create_token_pair(42).unwrap();
        let err = svc.verify(&pair.access_token, TOKEN_TYPE_REFRESH).unwrap_err();
        assert!(matches!(err, AuthError::WrongTokenType));
    }

    #[test]
    fn rejects_invalid_token() {
        let svc = test_service();
        let err = svc.verify("garbage", TOKEN_TYPE_ACCESS).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn rejects_wrong_secret() {
        let svc1 = JwtService::new("secret-a", 60, 30);
        let svc2 = JwtService::new("secret-b", 60, 30);
        let pair = svc1.create_token_pair(1).unwrap();
        assert!(svc2.verify(&pair.access_token, TOKEN_TYPE_ACCESS).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let svc = test_service();
        // Two minutes past expiry beats the default 60s decode leeway.
        let claims = Claims {
            user_id: 1,
            token_type: TOKEN_TYPE_ACCESS.to_string(),
            exp: chrono::Utc::now().timestamp() - 120,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key".as_bytes()),
        )
        .unwrap();
        let err = svc.verify(&token, TOKEN_TYPE_ACCESS).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn token_pair_expiries_match_configured_ttls() {
        let svc = test_service();
        let before = chrono::Utc::now().timestamp();
        let pair = svc.create_token_pair(7).unwrap();
        let access = svc.verify(&pair.access_token, TOKEN_TYPE_ACCESS).unwrap();
        let refresh = svc.verify(&pair.refresh_token, TOKEN_TYPE_REFRESH).unwrap();
        assert!((access.exp - before - 60 * 60).abs() <= 5);
        assert!((refresh.exp - before - 30 * 24 * 3600).abs() <= 5);
    }
}
