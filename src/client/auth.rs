use crate::client::api::{ApiFailure, ApiResult};
use crate::client::storage::{self, Session};
use crate::models::review::Review;
use crate::models::user::{LoginResponse, User};
use leptos::logging::{log, warn};
use leptos::*;
use std::future::Future;

/// Signed-in state shared through the Leptos context.
///
/// The session is restored from browser storage in an effect, so server
/// rendering and the first hydration pass both see a logged-out, not-yet-ready
/// context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    ready: RwSignal<bool>,
}

impl AuthContext {
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_some())
    }

    pub fn user(&self) -> Option<User> {
        self.session
            .with(|session| session.as_ref().map(|s| s.user.clone()))
    }

    pub fn user_review(&self) -> Option<Review> {
        self.session
            .with(|session| session.as_ref().and_then(|s| s.user_review.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().map(|s| s.token.clone()))
    }

    pub fn login(&self, response: LoginResponse, remember: bool) {
        let session = Session::new(response, remember);
        storage::save_session(&session);
        log!("[AUTH] Logged in as {}", session.user.email);
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.session.set(None);
        log!("[AUTH] Logged out");
    }

    /// Runs an authenticated call with the current token. A rejected token
    /// ends the session, which sends protected pages back to `/login`.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T, String>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let Some(token) = self.token() else {
            return Err("Please log in to continue.".to_string());
        };
        call(token).await.map_err(|failure| self.expire_on(failure))
    }

    fn expire_on(&self, failure: ApiFailure) -> String {
        if failure.is_unauthorized() {
            warn!("[AUTH] Token rejected, signing out");
            self.logout();
        }
        failure.message
    }

    pub fn set_user(&self, user: User) {
        self.update(|session| session.user = user);
    }

    pub fn set_user_review(&self, review: Option<Review>) {
        self.update(|session| session.user_review = review);
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        self.session.update(|current| {
            if let Some(session) = current.as_mut() {
                f(session);
                storage::save_session(session);
            }
        });
    }
}

pub fn provide_auth() -> AuthContext {
    let auth = AuthContext {
        session: create_rw_signal(None),
        ready: create_rw_signal(false),
    };

    create_effect(move |_| {
        if let Some(session) = storage::load_session() {
            auth.session.set(Some(session));
        }
        auth.ready.set(true);
    });

    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

// Browser storage is only touched in the client build.
#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::client::storage::tests::login;
    use chrono::{Duration, Utc};
    use futures::executor::block_on;

    fn signed_in() -> AuthContext {
        let session = Session::new(login("tok", Utc::now() + Duration::hours(1)), false);
        AuthContext {
            session: create_rw_signal(Some(session)),
            ready: create_rw_signal(true),
        }
    }

    #[test]
    fn rejected_tokens_end_the_session() {
        let runtime = create_runtime();
        let auth = signed_in();

        let result: Result<(), String> = block_on(auth.authorized(|_| async {
            Err(ApiFailure {
                status: 401,
                message: "Token is not valid.".into(),
            })
        }));
        assert_eq!(result.unwrap_err(), "Token is not valid.");
        assert!(!auth.is_authenticated());

        let result: Result<(), String> = block_on(auth.authorized(|_| async { Ok(()) }));
        assert_eq!(result.unwrap_err(), "Please log in to continue.");
        runtime.dispose();
    }

    #[test]
    fn other_failures_keep_the_session() {
        let runtime = create_runtime();
        let auth = signed_in();

        let result: Result<(), String> = block_on(auth.authorized(|token| async move {
            assert_eq!(token, "tok");
            Err(ApiFailure {
                status: 404,
                message: "No users found with the specified details.".into(),
            })
        }));
        assert!(result.is_err());
        assert!(auth.is_authenticated());
        runtime.dispose();
    }
}
