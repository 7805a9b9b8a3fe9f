#[cfg(feature = "ssr")]
mod state_impl {
    use crate::auth::TokenService;
    use crate::config::ServerConfig;
    use crate::db::Database;
    use crate::error::ApiError;
    use crate::mailer::{LogMailer, Mailer, SmtpMailer};
    use crate::otp::OtpStore;
    use crate::rate_limit::ClientRateLimiter;
    use std::sync::Arc;

    // Shared state handed to every actix worker
    pub struct AppState {
        pub db: Database,
        pub otp: OtpStore,
        pub tokens: TokenService,
        pub mailer: Arc<dyn Mailer>,
        pub limiter: ClientRateLimiter,
        pub config: ServerConfig,
    }

    impl AppState {
        pub async fn new(config: ServerConfig) -> Result<Self, ApiError> {
            let db = Database::new(&config.database_path)?;
            db.create_schema().await?;

            let mailer: Arc<dyn Mailer> = match &config.smtp {
                Some(smtp) => Arc::new(SmtpMailer::new(smtp, &config.email_from)?),
                None => Arc::new(LogMailer),
            };

            Ok(Self::with_parts(db, mailer, config))
        }

        pub fn with_parts(db: Database, mailer: Arc<dyn Mailer>, config: ServerConfig) -> Self {
            AppState {
                db,
                otp: OtpStore::new(config.otp_ttl),
                tokens: TokenService::new(&config.jwt_secret, config.jwt_ttl),
                mailer,
                limiter: ClientRateLimiter::new(&config.rate_limit),
                config,
            }
        }
    }
}

#[cfg(feature = "ssr")]
pub use state_impl::AppState;
