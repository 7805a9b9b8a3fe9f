//! Browser persistence for the signed-in session.
//!
//! Sessions created with "remember me" go to `localStorage`, all others to
//! `sessionStorage`. Every function is a no-op while rendering on the server.
use crate::models::review::Review;
use crate::models::user::{LoginResponse, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const EXPIRATION_KEY: &str = "tokenExpiration";
pub const USER_KEY: &str = "user";
pub const USER_REVIEW_KEY: &str = "userReview";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
    pub user_review: Option<Review>,
    pub remember: bool,
}

impl Session {
    /// A session lives exactly as long as the token the server issued.
    pub fn new(response: LoginResponse, remember: bool) -> Self {
        Session {
            token: response.token,
            expires_at: response.expires_at,
            user: response.user,
            user_review: response.user_review,
            remember,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Key/value pairs as they are written to browser storage.
    pub fn to_entries(&self) -> Vec<(&'static str, String)> {
        let review = match &self.user_review {
            Some(review) => serde_json::to_string(review).unwrap_or_else(|_| "false".into()),
            None => "false".to_string(),
        };
        vec![
            (TOKEN_KEY, self.token.clone()),
            (EXPIRATION_KEY, self.expires_at.to_rfc3339()),
            (USER_KEY, serde_json::to_string(&self.user).unwrap_or_default()),
            (USER_REVIEW_KEY, review),
        ]
    }

    /// Rebuilds a session from stored values; anything missing or malformed
    /// yields `None`.
    pub fn from_entries(
        token: Option<String>,
        expiration: Option<String>,
        user: Option<String>,
        user_review: Option<String>,
        remember: bool,
    ) -> Option<Session> {
        let token = token.filter(|t| !t.is_empty())?;
        let expires_at = DateTime::parse_from_rfc3339(&expiration?)
            .ok()?
            .with_timezone(&Utc);
        let user: User = serde_json::from_str(&user?).ok()?;
        let user_review = user_review
            .filter(|raw| raw != "false")
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Some(Session {
            token,
            expires_at,
            user,
            user_review,
            remember,
        })
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use super::*;
    use leptos::logging::warn;

    pub fn storage(persistent: bool) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = if persistent {
            window.local_storage()
        } else {
            window.session_storage()
        };
        storage.ok().flatten()
    }

    pub fn save(session: &Session) {
        let Some(storage) = storage(session.remember) else {
            warn!("[STORAGE] Browser storage unavailable, session not persisted");
            return;
        };
        for (key, value) in session.to_entries() {
            if storage.set_item(key, &value).is_err() {
                warn!("[STORAGE] Failed to write {}", key);
            }
        }
    }

    pub fn load() -> Option<Session> {
        [true, false].into_iter().find_map(|persistent| {
            let storage = storage(persistent)?;
            let get = |key: &str| storage.get_item(key).ok().flatten();
            Session::from_entries(
                get(TOKEN_KEY),
                get(EXPIRATION_KEY),
                get(USER_KEY),
                get(USER_REVIEW_KEY),
                persistent,
            )
        })
    }

    pub fn load_fresh() -> Option<Session> {
        let session = load()?;
        if session.is_expired(Utc::now()) {
            clear();
            return None;
        }
        Some(session)
    }

    pub fn clear() {
        for persistent in [true, false] {
            if let Some(storage) = storage(persistent) {
                for key in [TOKEN_KEY, EXPIRATION_KEY, USER_KEY, USER_REVIEW_KEY] {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }
}

pub fn save_session(session: &Session) {
    #[cfg(not(feature = "ssr"))]
    browser::save(session);
    #[cfg(feature = "ssr")]
    let _ = session;
}

/// The stored session, discarded (and wiped) once it has expired.
pub fn load_session() -> Option<Session> {
    #[cfg(not(feature = "ssr"))]
    return browser::load_fresh();
    #[cfg(feature = "ssr")]
    return None;
}

pub fn clear_session() {
    #[cfg(not(feature = "ssr"))]
    browser::clear();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;

    fn user() -> User {
        let now = Utc::now();
        User {
            id: "u1".into(),
            first_name: "Meera".into(),
            last_name: "Sharma".into(),
            email: "meera@example.com".into(),
            mobile_number: "+919812345678".into(),
            blood_group: None,
            gender: None,
            availability: true,
            country: "India".into(),
            state: "Haryana".into(),
            district: "Karnal".into(),
            city: "Indri".into(),
            terms_accepted: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn login(token: &str, expires_at: DateTime<Utc>) -> LoginResponse {
        LoginResponse {
            token: token.into(),
            expires_at,
            user: user(),
            user_review: None,
        }
    }

    #[test]
    fn sessions_expire_with_their_token() {
        let now = Utc::now();
        let session = Session::new(login("t", now + Duration::hours(1)), true);
        assert_eq!(session.expires_at, now + Duration::hours(1));
        assert!(!session.is_expired(now + Duration::minutes(59)));
        assert!(session.is_expired(now + Duration::minutes(61)));
    }

    #[test]
    fn survives_storage_round_trip() {
        let session = Session::new(login("tok", Utc::now() + Duration::hours(1)), false);
        let entries = session.to_entries();
        let get = |key: &str| {
            entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get(USER_REVIEW_KEY).as_deref(), Some("false"));

        let restored = Session::from_entries(
            get(TOKEN_KEY),
            get(EXPIRATION_KEY),
            get(USER_KEY),
            get(USER_REVIEW_KEY),
            false,
        )
        .unwrap();
        assert_eq!(restored.token, "tok");
        assert_eq!(restored.user, session.user);
        assert_eq!(restored.user_review, None);
    }

    #[test]
    fn incomplete_storage_is_ignored() {
        assert!(Session::from_entries(Some("tok".into()), None, None, None, true).is_none());
        assert!(Session::from_entries(
            Some(String::new()),
            Some(Utc::now().to_rfc3339()),
            Some("{}".into()),
            None,
            true
        )
        .is_none());
    }
}
