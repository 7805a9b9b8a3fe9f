#[cfg(feature = "ssr")]
mod auth_impl {
    use crate::error::ApiError;
    use crate::state::AppState;
    use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
    use chrono::{DateTime, Duration, Utc};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
    use leptos::logging::log;
    use serde::{Deserialize, Serialize};
    use std::future::{ready, Ready};

    /// bcrypt is CPU bound, so hashing runs on the blocking pool.
    pub async fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
        let password = password.to_owned();
        let hash = web::block(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    pub async fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let matches = web::block(move || bcrypt::verify(password, &hash)).await??;
        Ok(matches)
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Claims {
        pub sub: String, // user id
        pub iat: i64,
        pub exp: i64,
    }

    pub struct TokenService {
        encoding: EncodingKey,
        decoding: DecodingKey,
        ttl: Duration,
    }

    impl TokenService {
        pub fn new(secret: &str, ttl: Duration) -> Self {
            TokenService {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                ttl,
            }
        }

        /// Signs a token for `user_id`, returning it with its expiry.
        pub fn issue(&self, user_id: &str) -> Result<(String, DateTime<Utc>), ApiError> {
            let now = Utc::now();
            let expires_at = now + self.ttl;
            let claims = Claims {
                sub: user_id.to_string(),
                iat: now.timestamp(),
                exp: expires_at.timestamp(),
            };
            let token = encode(&Header::default(), &claims, &self.encoding)
                .map_err(|e| ApiError::Internal(format!("failed to sign token: {}", e)))?;
            Ok((token, expires_at))
        }

        pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
            decode::<Claims>(token, &self.decoding, &Validation::default())
                .map(|data| data.claims)
                .map_err(|e| {
                    log!("[AUTH] Rejected token: {}", e);
                    ApiError::Unauthorized("Token is not valid.".to_string())
                })
        }
    }

    /// The caller identified by a valid `Authorization: Bearer` token.
    #[derive(Debug, Clone)]
    pub struct AuthUser {
        pub id: String,
    }

    impl FromRequest for AuthUser {
        type Error = ApiError;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
            ready(authenticate(req))
        }
    }

    fn authenticate(req: &HttpRequest) -> Result<AuthUser, ApiError> {
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| ApiError::Internal("application state is not registered".into()))?;

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("No token, authorization denied.".into()))?;

        let claims = state.tokens.verify(token)?;
        Ok(AuthUser { id: claims.sub })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn issued_tokens_verify() {
            let tokens = TokenService::new("test-secret", Duration::hours(1));
            let (token, expires_at) = tokens.issue("user-42").unwrap();
            let claims = tokens.verify(&token).unwrap();
            assert_eq!(claims.sub, "user-42");
            assert_eq!(claims.exp - claims.iat, 3600);
            assert_eq!(claims.exp, expires_at.timestamp());
        }

        #[test]
        fn foreign_and_expired_tokens_are_rejected() {
            let ours = TokenService::new("test-secret", Duration::hours(1));
            let theirs = TokenService::new("other-secret", Duration::hours(1));
            let (token, _) = theirs.issue("user-42").unwrap();
            assert!(matches!(ours.verify(&token), Err(ApiError::Unauthorized(_))));

            // well past the default 60s leeway
            let expired = TokenService::new("test-secret", Duration::minutes(-10));
            let (token, _) = expired.issue("user-42").unwrap();
            assert!(ours.verify(&token).is_err());
        }

        #[actix_web::test]
        async fn hashes_and_verifies_passwords() {
            let hash = hash_password("correct horse", 4).await.unwrap();
            assert_ne!(hash, "correct horse");
            assert!(verify_password("correct horse", &hash).await.unwrap());
            assert!(!verify_password("wrong horse", &hash).await.unwrap());
        }
    }
}

#[cfg(feature = "ssr")]
pub use auth_impl::{hash_password, verify_password, AuthUser, Claims, TokenService};
