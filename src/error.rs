#[cfg(feature = "ssr")]
mod error_impl {
    use crate::models::user::MessageResponse;
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};
    use leptos::logging;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ApiError {
        #[error("{0}")]
        BadRequest(String),

        #[error("{0}")]
        Unauthorized(String),

        #[error("{0}")]
        Forbidden(String),

        #[error("{0}")]
        NotFound(String),

        #[error("Too many requests from this IP, please try again later.")]
        TooManyRequests,

        #[error("Database error: {0}")]
        Database(#[from] rusqlite::Error),

        #[error("Password hashing error: {0}")]
        Hashing(#[from] bcrypt::BcryptError),

        #[error("Mail delivery error: {0}")]
        Mail(String),

        #[error("Internal error: {0}")]
        Internal(String),
    }

    impl ApiError {
        pub fn bad_request(msg: impl Into<String>) -> Self {
            ApiError::BadRequest(msg.into())
        }

        pub fn not_found(msg: impl Into<String>) -> Self {
            ApiError::NotFound(msg.into())
        }
    }

    impl From<actix_web::error::BlockingError> for ApiError {
        fn from(e: actix_web::error::BlockingError) -> Self {
            ApiError::Internal(e.to_string())
        }
    }

    impl ResponseError for ApiError {
        fn status_code(&self) -> StatusCode {
            match self {
                ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
                ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
                ApiError::NotFound(_) => StatusCode::NOT_FOUND,
                ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
                ApiError::Database(_)
                | ApiError::Hashing(_)
                | ApiError::Mail(_)
                | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn error_response(&self) -> HttpResponse {
            let status = self.status_code();
            let msg = if status.is_server_error() {
                logging::error!("[API] {}", self);
                "Server error.".to_string()
            } else {
                self.to_string()
            };
            HttpResponse::build(status).json(MessageResponse::new(msg))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn client_errors_expose_their_message() {
            let err = ApiError::bad_request("User already exists.");
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "User already exists.");
        }

        #[test]
        fn server_errors_map_to_500() {
            let err = ApiError::from(rusqlite::Error::QueryReturnedNoRows);
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(ApiError::TooManyRequests.status_code(), StatusCode::TOO_MANY_REQUESTS);
            assert_eq!(ApiError::Mail("smtp down".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

#[cfg(feature = "ssr")]
pub use error_impl::ApiError;
