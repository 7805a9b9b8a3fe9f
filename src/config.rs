#[cfg(feature = "ssr")]
mod config_impl {
    use chrono::Duration;
    use leptos::logging::{log, warn};
    use std::env;
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Debug, Clone)]
    pub struct SmtpConfig {
        pub host: String,
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Clone)]
    pub struct RateLimitConfig {
        pub max_requests: u32,
        pub window: Duration,
    }

    // Application settings that live outside the Leptos site configuration
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        pub database_path: String,
        pub jwt_secret: String,
        pub jwt_ttl: Duration,
        pub bcrypt_cost: u32,
        pub otp_ttl: Duration,
        pub email_from: String,
        pub smtp: Option<SmtpConfig>,
        pub rate_limit: RateLimitConfig,
    }

    impl ServerConfig {
        pub fn load() -> Self {
            let jwt_ttl = parse_duration(&try_load("JWT_EXPIRES_IN", "1h".to_string()))
                .unwrap_or_else(|e| {
                    warn!("[CONFIG] {}, falling back to 1h", e);
                    Duration::hours(1)
                });

            let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
                warn!("[CONFIG] JWT_SECRET not set, using an insecure development secret");
                "development-secret-change-me".to_string()
            });

            let email_user = env::var("EMAIL_USER").ok();
            let email_pass = env::var("EMAIL_PASS").ok();
            let smtp = match (email_user.clone(), email_pass) {
                (Some(username), Some(password)) => Some(SmtpConfig {
                    host: try_load("SMTP_HOST", "smtp.gmail.com".to_string()),
                    username,
                    password,
                }),
                _ => {
                    warn!("[CONFIG] EMAIL_USER/EMAIL_PASS not set, emails will only be logged");
                    None
                }
            };

            let rate_limit = RateLimitConfig {
                max_requests: try_load("RATE_LIMIT_MAX", 100u32),
                window: parse_duration(&try_load("RATE_LIMIT_WINDOW", "15m".to_string()))
                    .unwrap_or_else(|e| {
                        warn!("[CONFIG] {}, falling back to 15m", e);
                        Duration::minutes(15)
                    }),
            };

            Self {
                database_path: try_load("DATABASE_PATH", "lifesavers.db".to_string()),
                jwt_secret,
                jwt_ttl,
                bcrypt_cost: try_load("BCRYPT_COST", 12u32),
                otp_ttl: Duration::minutes(try_load("OTP_TTL_MINUTES", 10i64)),
                email_from: email_user.unwrap_or_else(|| "no-reply@lifesavers.local".to_string()),
                smtp,
                rate_limit,
            }
        }
    }

    fn try_load<T>(key: &str, default: T) -> T
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        match env::var(key) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("[CONFIG] Invalid {} value {:?}: {}, using default {}", key, raw, e, default);
                default
            }),
            Err(_) => {
                log!("[CONFIG] {} not set, using default: {}", key, default);
                default
            }
        }
    }

    /// Parses lifetimes written as `90`, `90s`, `30m`, `1h` or `7d`.
    pub fn parse_duration(raw: &str) -> Result<Duration, String> {
        let raw = raw.trim();
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let (digits, unit) = raw.split_at(split);
        let amount: i64 = digits
            .parse()
            .map_err(|_| format!("Invalid duration: {:?}", raw))?;
        match unit {
            "" | "s" => Ok(Duration::seconds(amount)),
            "m" => Ok(Duration::minutes(amount)),
            "h" => Ok(Duration::hours(amount)),
            "d" => Ok(Duration::days(amount)),
            _ => Err(format!("Invalid duration unit in {:?}", raw)),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_token_lifetimes() {
            assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
            assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
            assert_eq!(parse_duration("45").unwrap(), Duration::seconds(45));
            assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
            assert!(parse_duration("h").is_err());
            assert!(parse_duration("10y").is_err());
        }

        #[test]
        fn invalid_values_fall_back_to_typed_default() {
            env::set_var("LIFESAVERS_TEST_COST", "lots");
            assert_eq!(try_load("LIFESAVERS_TEST_COST", 12u32), 12);
            env::set_var("LIFESAVERS_TEST_COST", "4");
            assert_eq!(try_load("LIFESAVERS_TEST_COST", 12u32), 4);
            assert_eq!(try_load("LIFESAVERS_TEST_UNSET", 10i64), 10);
        }
    }
}

#[cfg(feature = "ssr")]
pub use config_impl::{parse_duration, RateLimitConfig, ServerConfig, SmtpConfig};
