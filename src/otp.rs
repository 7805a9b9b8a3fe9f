#[cfg(feature = "ssr")]
mod otp_impl {
    use chrono::{DateTime, Duration, Utc};
    use leptos::logging::log;
    use rand::Rng;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    /// Six-digit numeric code in `100000..=999999`.
    pub fn generate_code() -> String {
        rand::rng().random_range(100_000..=999_999u32).to_string()
    }

    #[derive(Debug, Clone)]
    struct OtpEntry {
        code: String,
        expires_at: DateTime<Utc>,
    }

    // Email-verification codes. Process-local: lost on restart and not
    // shared between instances.
    #[derive(Debug)]
    pub struct OtpStore {
        entries: Mutex<HashMap<String, OtpEntry>>,
        ttl: Duration,
    }

    impl OtpStore {
        pub fn new(ttl: Duration) -> Self {
            OtpStore {
                entries: Mutex::new(HashMap::new()),
                ttl,
            }
        }

        /// Issues a fresh code for `email`, replacing any outstanding one.
        pub async fn issue(&self, email: &str, now: DateTime<Utc>) -> (String, DateTime<Utc>) {
            let code = generate_code();
            let expires_at = now + self.ttl;
            let mut entries = self.entries.lock().await;
            entries.insert(
                normalize(email),
                OtpEntry {
                    code: code.clone(),
                    expires_at,
                },
            );
            log!("[OTP] Issued verification code for {} (expires {})", email, expires_at);
            (code, expires_at)
        }

        /// A matching, unexpired code is consumed; anything else leaves the
        /// store untouched.
        pub async fn verify(&self, email: &str, code: &str, now: DateTime<Utc>) -> bool {
            let key = normalize(email);
            let mut entries = self.entries.lock().await;
            let valid = match entries.get(&key) {
                Some(entry) => entry.code == code.trim() && entry.expires_at >= now,
                None => false,
            };
            if valid {
                entries.remove(&key);
                log!("[OTP] Verified code for {}", email);
            }
            valid
        }

        pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
            let mut entries = self.entries.lock().await;
            let before = entries.len();
            entries.retain(|_, entry| entry.expires_at >= now);
            before - entries.len()
        }

        pub async fn len(&self) -> usize {
            self.entries.lock().await.len()
        }
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn codes_are_six_digits() {
            for _ in 0..100 {
                let code = generate_code();
                assert_eq!(code.len(), 6);
                let value: u32 = code.parse().unwrap();
                assert!((100_000..=999_999).contains(&value));
            }
        }

        #[tokio::test]
        async fn verify_consumes_matching_code() {
            let store = OtpStore::new(Duration::minutes(10));
            let now = Utc::now();
            let (code, expires_at) = store.issue("donor@example.com", now).await;
            assert_eq!(expires_at, now + Duration::minutes(10));

            assert!(!store.verify("donor@example.com", "000000", now).await);
            assert!(store.verify("Donor@Example.com", &code, now).await);
            // second use fails
            assert!(!store.verify("donor@example.com", &code, now).await);
        }

        #[tokio::test]
        async fn expired_codes_are_rejected() {
            let store = OtpStore::new(Duration::minutes(10));
            let now = Utc::now();
            let (code, _) = store.issue("late@example.com", now).await;

            let later = now + Duration::minutes(11);
            assert!(!store.verify("late@example.com", &code, later).await);
            assert_eq!(store.purge_expired(later).await, 1);
            assert_eq!(store.len().await, 0);
        }

        #[tokio::test]
        async fn reissue_replaces_previous_code() {
            let store = OtpStore::new(Duration::minutes(10));
            let now = Utc::now();
            let (first, _) = store.issue("again@example.com", now).await;
            let (second, _) = store.issue("again@example.com", now).await;
            assert_eq!(store.len().await, 1);
            if first != second {
                assert!(!store.verify("again@example.com", &first, now).await);
            }
            assert!(store.verify("again@example.com", &second, now).await);
        }
    }
}

#[cfg(feature = "ssr")]
pub use otp_impl::{generate_code, OtpStore};
