#[cfg(feature = "ssr")]
mod rate_limit_impl {
    use crate::config::RateLimitConfig;
    use crate::error::ApiError;
    use crate::state::AppState;
    use actix_web::body::MessageBody;
    use actix_web::dev::{ServiceRequest, ServiceResponse};
    use actix_web::middleware::Next;
    use actix_web::{web, HttpRequest, ResponseError};
    use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
    use leptos::logging::warn;
    use std::num::NonZeroU32;
    use std::time::Duration;

    // Forget idle clients once this many are tracked
    const RETAIN_THRESHOLD: usize = 10_000;

    /// Per-client request budget: `max_requests` per `window`, refilled evenly.
    pub struct ClientRateLimiter {
        limiter: DefaultKeyedRateLimiter<String>,
    }

    impl ClientRateLimiter {
        pub fn new(config: &RateLimitConfig) -> Self {
            let max = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
            let window = config
                .window
                .to_std()
                .unwrap_or(Duration::from_secs(15 * 60));
            let quota = Quota::with_period(window / max.get())
                .unwrap_or_else(|| Quota::per_second(max))
                .allow_burst(max);
            ClientRateLimiter {
                limiter: RateLimiter::keyed(quota),
            }
        }

        /// Spends one request from `client`'s budget, false once it is exhausted.
        pub fn check(&self, client: &str) -> bool {
            if self.limiter.len() > RETAIN_THRESHOLD {
                self.limiter.retain_recent();
            }
            self.limiter.check_key(&client.to_string()).is_ok()
        }
    }

    fn client_key(req: &HttpRequest) -> String {
        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Middleware for the `/api` scope that answers 429 once a client
    /// has spent its budget.
    pub async fn limit_requests(
        req: ServiceRequest,
        next: Next<impl MessageBody + 'static>,
    ) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
        let client = client_key(req.request());
        let allowed = req
            .app_data::<web::Data<AppState>>()
            .map_or(true, |state| state.limiter.check(&client));

        if !allowed {
            warn!("[RATE] {} exceeded its budget on {}", client, req.path());
            let response = ApiError::TooManyRequests.error_response();
            return Ok(req.into_response(response).map_into_right_body());
        }

        next.call(req).await.map(ServiceResponse::map_into_left_body)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn limiter(max_requests: u32) -> ClientRateLimiter {
            ClientRateLimiter::new(&RateLimitConfig {
                max_requests,
                window: chrono::Duration::minutes(15),
            })
        }

        #[test]
        fn budget_is_per_client() {
            let limiter = limiter(2);
            assert!(limiter.check("10.0.0.1"));
            assert!(limiter.check("10.0.0.1"));
            assert!(!limiter.check("10.0.0.1"));
            assert!(limiter.check("10.0.0.2"));
        }

        #[test]
        fn zero_budget_still_allows_one_request() {
            let limiter = limiter(0);
            assert!(limiter.check("10.0.0.1"));
            assert!(!limiter.check("10.0.0.1"));
        }
    }
}

#[cfg(feature = "ssr")]
pub use rate_limit_impl::{limit_requests, ClientRateLimiter};
