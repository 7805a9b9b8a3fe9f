//! Typed calls to the REST API. Failures carry the HTTP status and the
//! server's `msg`.
use crate::models::review::{CreateReviewRequest, Review, UpdateReviewRequest};
use crate::models::user::{
    DonorFilter, EmailRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    ResetPasswordRequest, UpdateUserRequest, UpdateUserResponse, User, VerifyOtpRequest,
    VerifyPasswordRequest, VerifyPasswordResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16, // 0 when the request never reached the server
    pub message: String,
}

impl ApiFailure {
    fn transport(error: impl fmt::Display) -> Self {
        error!("[CLIENT] Request failed: {}", error);
        ApiFailure {
            status: 0,
            message: error.to_string(),
        }
    }

    /// The token was missing, expired or rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiFailure>;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

async fn read<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if response.ok() {
        response.json::<T>().await.map_err(ApiFailure::transport)
    } else {
        Err(ApiFailure {
            status: response.status(),
            message: error_message(&response).await,
        })
    }
}

async fn error_message(response: &Response) -> String {
    match response.json::<MessageResponse>().await {
        Ok(body) => body.msg,
        Err(_) => format!("Request failed with status {}", response.status()),
    }
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    body: &B,
) -> ApiResult<T> {
    let response = builder
        .json(body)
        .map_err(ApiFailure::transport)?
        .send()
        .await
        .map_err(ApiFailure::transport)?;
    read(response).await
}

async fn send_empty<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
    let response = builder.send().await.map_err(ApiFailure::transport)?;
    read(response).await
}

pub async fn login(request: &LoginRequest) -> ApiResult<LoginResponse> {
    send_json(Request::post(&url("/login")), request).await
}

pub async fn register(request: &RegisterRequest) -> ApiResult<MessageResponse> {
    send_json(Request::post(&url("/register")), request).await
}

pub async fn send_verification_otp(email: &str) -> ApiResult<MessageResponse> {
    let body = EmailRequest {
        email: email.to_string(),
    };
    send_json(Request::post(&url("/send-verification-otp")), &body).await
}

pub async fn verify_otp(email: &str, otp: &str) -> ApiResult<MessageResponse> {
    let body = VerifyOtpRequest {
        email: email.to_string(),
        otp: otp.to_string(),
    };
    send_json(Request::post(&url("/verify-otp")), &body).await
}

pub async fn forgot_password(email: &str) -> ApiResult<MessageResponse> {
    let body = EmailRequest {
        email: email.to_string(),
    };
    send_json(Request::post(&url("/forgot-password")), &body).await
}

pub async fn reset_password(request: &ResetPasswordRequest) -> ApiResult<MessageResponse> {
    send_json(Request::post(&url("/reset-password")), request).await
}

pub async fn verify_password(token: &str, password: &str) -> ApiResult<VerifyPasswordResponse> {
    let body = VerifyPasswordRequest {
        password: password.to_string(),
    };
    send_json(bearer(Request::post(&url("/verify-password")), token), &body).await
}

/// Donor search. An empty result is not an error for the caller.
pub async fn find_donors(token: &str, filter: &DonorFilter) -> ApiResult<Vec<User>> {
    let query = filter.to_query_string();
    let path = if query.is_empty() {
        url("/users")
    } else {
        format!("{}?{}", url("/users"), query)
    };
    let response = bearer(Request::get(&path), token)
        .send()
        .await
        .map_err(ApiFailure::transport)?;
    if response.status() == 404 {
        return Ok(Vec::new());
    }
    read(response).await
}

pub async fn update_user(
    token: &str,
    id: &str,
    update: &UpdateUserRequest,
) -> ApiResult<UpdateUserResponse> {
    send_json(bearer(Request::put(&url(&format!("/users/{}", id))), token), update).await
}

pub async fn fetch_reviews() -> ApiResult<Vec<Review>> {
    let response = Request::get(&url("/reviews"))
        .send()
        .await
        .map_err(ApiFailure::transport)?;
    if response.status() == 404 {
        return Ok(Vec::new());
    }
    read(response).await
}

pub async fn create_review(token: &str, request: &CreateReviewRequest) -> ApiResult<Review> {
    send_json(bearer(Request::post(&url("/reviews")), token), request).await
}

pub async fn update_review(
    token: &str,
    id: &str,
    request: &UpdateReviewRequest,
) -> ApiResult<Review> {
    send_json(
        bearer(Request::put(&url(&format!("/reviews/{}", id))), token),
        request,
    )
    .await
}

pub async fn delete_review(token: &str, id: &str) -> ApiResult<MessageResponse> {
    send_empty(bearer(Request::delete(&url(&format!("/reviews/{}", id))), token)).await
}
