#[cfg(feature = "ssr")]
use actix_web::{middleware::DefaultHeaders, web, HttpRequest, HttpResponse};
#[cfg(feature = "ssr")]
use crate::auth::{hash_password, verify_password as check_password, AuthUser};
#[cfg(feature = "ssr")]
use crate::db::is_unique_violation;
#[cfg(feature = "ssr")]
use crate::error::ApiError;
#[cfg(feature = "ssr")]
use crate::mailer::{password_reset_email, verification_email};
#[cfg(feature = "ssr")]
use crate::models::review::{CreateReviewRequest, Review, UpdateReviewRequest};
#[cfg(feature = "ssr")]
use crate::models::user::{
    is_valid_email, normalize_identifier, normalize_mobile, validate_password, DonorFilter,
    EmailRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest, UpdateUserRequest, UpdateUserResponse,
    VerifyOtpRequest, VerifyPasswordRequest, VerifyPasswordResponse,
};
#[cfg(feature = "ssr")]
use crate::state::AppState;
#[cfg(feature = "ssr")]
use chrono::Utc;
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use serde::Serialize;
#[cfg(feature = "ssr")]
use uuid::Uuid;

#[cfg(feature = "ssr")]
const JSON_LIMIT: usize = 10 * 1024 * 1024;

/// Browser hardening headers sent with every API response.
#[cfg(feature = "ssr")]
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            "Content-Security-Policy",
            "default-src 'self'; script-src 'self' trusted-cdn.com",
        ))
        .add(("Cross-Origin-Embedder-Policy", "require-corp"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
        .add(("Origin-Agent-Cluster", "?1"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Strict-Transport-Security", "max-age=15552000; includeSubDomains"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add(("X-Download-Options", "noopen"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-Permitted-Cross-Domain-Policies", "none"))
        .add(("X-XSS-Protection", "0"))
}

/// Registers every REST endpoint. Mount inside `web::scope("/api")`.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
    )
    .route("", web::get().to(index))
    .route("/register", web::post().to(register))
    .route("/login", web::post().to(login))
    .route("/send-verification-otp", web::post().to(send_verification_otp))
    .route("/verify-otp", web::post().to(verify_otp))
    .route("/forgot-password", web::post().to(forgot_password))
    .route("/reset-password", web::post().to(reset_password))
    .route("/verify-password", web::post().to(verify_password))
    .route("/me", web::get().to(current_user))
    .route("/users", web::get().to(filter_users))
    .route("/users/{id}", web::put().to(update_user))
    .route("/reviews", web::get().to(list_reviews))
    .route("/reviews", web::post().to(create_review))
    .route("/reviews/{id}", web::put().to(update_review))
    .route("/reviews/{id}", web::delete().to(delete_review))
    .default_service(web::route().to(not_found));
}

#[cfg(feature = "ssr")]
#[derive(Serialize)]
struct RouteNotFound {
    message: &'static str,
    status: u16,
}

#[cfg(feature = "ssr")]
async fn not_found(req: HttpRequest) -> HttpResponse {
    log!("[API] No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(RouteNotFound {
        message: "Not Found",
        status: 404,
    })
}

#[cfg(feature = "ssr")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hello! Backend server is running.")
}

#[cfg(feature = "ssr")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut request = request.into_inner();
    request.validate().map_err(ApiError::BadRequest)?;
    request.mobile_number = normalize_mobile(&request.mobile_number).map_err(ApiError::BadRequest)?;
    log!("[API] Registration request for {}", request.email);

    if state
        .db
        .user_exists(&request.email, &request.mobile_number)
        .await?
    {
        return Err(ApiError::bad_request("User already exists."));
    }

    let hash = hash_password(&request.password, state.config.bcrypt_cost).await?;
    // the UNIQUE indexes catch a registration racing the check above
    let user = state
        .db
        .insert_user(&request, &hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::bad_request("User already exists.")
            } else {
                ApiError::from(e)
            }
        })?;
    log!("[API] Registered user {}", user.id);

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully.")))
}

#[cfg(feature = "ssr")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.identifier.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request(
            "Email/mobile number and password are required.",
        ));
    }

    let identifier = normalize_identifier(&request.identifier);
    let record = state
        .db
        .find_user_by_identifier(&identifier)
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid credentials."))?;

    if !check_password(&request.password, &record.password_hash).await? {
        log!("[API] Failed login for {}", identifier);
        return Err(ApiError::bad_request("Invalid credentials."));
    }

    let (token, expires_at) = state.tokens.issue(&record.user.id)?;
    let user_review = state.db.find_review_by_user(&record.user.id).await?;
    log!("[API] User {} logged in", record.user.id);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        expires_at,
        user: record.user,
        user_review,
    }))
}

#[cfg(feature = "ssr")]
pub async fn send_verification_otp(
    state: web::Data<AppState>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, ApiError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ApiError::bad_request("Email is required."));
    }
    if !is_valid_email(email) {
        return Err(ApiError::bad_request("Invalid email address."));
    }

    let now = Utc::now();
    state.otp.purge_expired(now).await;
    let (code, expires_at) = state.otp.issue(email, now).await;
    state
        .mailer
        .send(verification_email(email, &code, expires_at))
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP sent to email.")))
}

#[cfg(feature = "ssr")]
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.email.trim().is_empty() || request.otp.trim().is_empty() {
        return Err(ApiError::bad_request("Email and OTP are required."));
    }

    if !state
        .otp
        .verify(&request.email, &request.otp, Utc::now())
        .await
    {
        return Err(ApiError::bad_request("Invalid or expired OTP."));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP verified successfully.")))
}

#[cfg(feature = "ssr")]
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<EmailRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.email.trim().is_empty() {
        return Err(ApiError::bad_request("Email is required."));
    }

    let record = state
        .db
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| ApiError::bad_request("User with this email does not exist."))?;

    let code = crate::otp::generate_code();
    let expires_at = Utc::now() + state.config.otp_ttl;
    state
        .db
        .set_reset_otp(&record.user.id, &code, expires_at)
        .await?;

    state
        .mailer
        .send(password_reset_email(
            &record.user.email,
            &record.user.first_name,
            &code,
            expires_at,
        ))
        .await?;
    log!("[API] Password reset code sent for user {}", record.user.id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP sent to email.")))
}

#[cfg(feature = "ssr")]
pub async fn reset_password(
    state: web::Data<AppState>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.email.trim().is_empty()
        || request.otp.trim().is_empty()
        || request.new_password.is_empty()
    {
        return Err(ApiError::bad_request("All fields are required."));
    }

    let record = state
        .db
        .find_user_for_reset(&request.email, &request.otp, Utc::now())
        .await?
        .ok_or_else(|| ApiError::bad_request("Invalid or expired OTP."))?;

    if check_password(&request.new_password, &record.password_hash).await? {
        return Err(ApiError::bad_request(
            "New password cannot be the same as the current password.",
        ));
    }
    validate_password(&request.new_password).map_err(ApiError::BadRequest)?;

    let hash = hash_password(&request.new_password, state.config.bcrypt_cost).await?;
    state.db.update_password(&record.user.id, &hash).await?;
    log!("[API] Password reset for user {}", record.user.id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password has been reset.")))
}

#[cfg(feature = "ssr")]
pub async fn verify_password(
    state: web::Data<AppState>,
    auth: AuthUser,
    request: web::Json<VerifyPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    if request.password.is_empty() {
        return Err(ApiError::bad_request("Password is required."));
    }

    let record = state
        .db
        .find_user_by_id(&auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let is_valid = check_password(&request.password, &record.password_hash).await?;
    Ok(HttpResponse::Ok().json(VerifyPasswordResponse { is_valid }))
}

#[cfg(feature = "ssr")]
pub async fn current_user(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let record = state
        .db
        .find_user_by_id(&auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;
    Ok(HttpResponse::Ok().json(record.user))
}

#[cfg(feature = "ssr")]
pub async fn filter_users(
    state: web::Data<AppState>,
    _auth: AuthUser,
    filter: web::Query<DonorFilter>,
) -> Result<HttpResponse, ApiError> {
    let filter = filter.into_inner().normalized();
    log!("[API] Donor search: {:?}", filter);

    let users = state.db.filter_users(&filter).await?;
    if users.is_empty() {
        return Err(ApiError::not_found(
            "No users found with the specified details.",
        ));
    }
    Ok(HttpResponse::Ok().json(users))
}

#[cfg(feature = "ssr")]
pub async fn update_user(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if id != auth.id {
        return Err(ApiError::Forbidden(
            "You can only update your own profile.".to_string(),
        ));
    }

    let mut update = request.into_inner();
    if update.is_empty() {
        return Err(ApiError::bad_request("Update fields are required."));
    }
    update.validate().map_err(ApiError::BadRequest)?;
    if update.email.is_some() || update.mobile_number.is_some() {
        let taken = state
            .db
            .find_conflicting_user(
                &id,
                update.email.as_deref(),
                update.mobile_number.as_deref(),
            )
            .await?;
        if taken {
            return Err(ApiError::bad_request(
                "Email or mobile number is already in use.",
            ));
        }
    }

    let user = state
        .db
        .update_user(&id, &update)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::bad_request("Email or mobile number is already in use.")
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    Ok(HttpResponse::Ok().json(UpdateUserResponse {
        msg: "User updated successfully.".to_string(),
        user,
    }))
}

#[cfg(feature = "ssr")]
pub async fn list_reviews(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let reviews = state.db.list_reviews().await?;
    if reviews.is_empty() {
        return Err(ApiError::not_found("No reviews found"));
    }
    Ok(HttpResponse::Ok().json(reviews))
}

#[cfg(feature = "ssr")]
pub async fn create_review(
    state: web::Data<AppState>,
    auth: AuthUser,
    request: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate().map_err(ApiError::BadRequest)?;

    let author = state
        .db
        .find_user_by_id(&auth.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    if state.db.find_review_by_user(&auth.id).await?.is_some() {
        return Err(ApiError::bad_request("You have already submitted a review."));
    }

    let now = Utc::now();
    let review = Review {
        id: Uuid::new_v4().to_string(),
        user_id: author.user.id.clone(),
        username: author.user.full_name(),
        rating: request.rating,
        comment: request.comment.trim().to_string(),
        image: request.image.filter(|image| !image.is_empty()),
        created_at: now,
        updated_at: now,
    };
    state
        .db
        .insert_review(&review)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::bad_request("You have already submitted a review.")
            } else {
                ApiError::from(e)
            }
        })?;
    log!("[API] Review {} created by {}", review.id, review.user_id);

    Ok(HttpResponse::Created().json(review))
}

#[cfg(feature = "ssr")]
async fn owned_review(state: &AppState, auth: &AuthUser, id: &str) -> Result<Review, ApiError> {
    let review = state
        .db
        .find_review(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review not found."))?;
    if review.user_id != auth.id {
        return Err(ApiError::Forbidden(
            "You can only modify your own review.".to_string(),
        ));
    }
    Ok(review)
}

#[cfg(feature = "ssr")]
pub async fn update_review(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<String>,
    request: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut review = owned_review(&state, &auth, &path).await?;
    request.validate().map_err(ApiError::BadRequest)?;

    request.apply(&mut review);
    review.updated_at = Utc::now();
    state.db.update_review(&review).await?;

    Ok(HttpResponse::Ok().json(review))
}

#[cfg(feature = "ssr")]
pub async fn delete_review(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let review = owned_review(&state, &auth, &path).await?;
    state.db.delete_review(&review.id).await?;
    log!("[API] Review {} deleted", review.id);

    Ok(HttpResponse::Ok().json(MessageResponse::new("Review deleted successfully.")))
}
