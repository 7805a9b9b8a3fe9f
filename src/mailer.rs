#[cfg(feature = "ssr")]
mod mailer_impl {
    use crate::config::SmtpConfig;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use leptos::logging::log;
    use lettre::message::header::ContentType;
    use lettre::transport::smtp::authentication::Credentials;
    use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Email {
        pub to: String,
        pub subject: String,
        pub html: String,
    }

    #[async_trait]
    pub trait Mailer: Send + Sync {
        async fn send(&self, email: Email) -> Result<(), ApiError>;
    }

    pub struct SmtpMailer {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: String,
    }

    impl SmtpMailer {
        pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, ApiError> {
            let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| ApiError::Mail(e.to_string()))?
                .credentials(Credentials::new(
                    config.username.clone(),
                    config.password.clone(),
                ))
                .build();
            Ok(SmtpMailer {
                transport,
                from: from.to_string(),
            })
        }
    }

    #[async_trait]
    impl Mailer for SmtpMailer {
        async fn send(&self, email: Email) -> Result<(), ApiError> {
            let message = Message::builder()
                .from(self.from.parse().map_err(|e| ApiError::Mail(format!("bad sender: {}", e)))?)
                .to(email.to.parse().map_err(|e| ApiError::bad_request(format!("Invalid email address: {}", e)))?)
                .subject(email.subject.clone())
                .header(ContentType::TEXT_HTML)
                .body(email.html)
                .map_err(|e| ApiError::Mail(e.to_string()))?;

            self.transport
                .send(message)
                .await
                .map_err(|e| ApiError::Mail(e.to_string()))?;
            log!("[MAIL] Sent '{}' to {}", email.subject, email.to);
            Ok(())
        }
    }

    // Development fallback used when no SMTP credentials are configured.
    pub struct LogMailer;

    #[async_trait]
    impl Mailer for LogMailer {
        async fn send(&self, email: Email) -> Result<(), ApiError> {
            log!("[MAIL] (not sent) to={} subject='{}'", email.to, email.subject);
            log!("[MAIL] {}", email.html);
            Ok(())
        }
    }

    fn format_expiry(expires_at: DateTime<Utc>) -> String {
        expires_at.format("%B %-d %Y, %-I:%M:%S %p UTC").to_string()
    }

    fn layout(heading: &str, body: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px; border: 1px solid #ddd; border-radius: 10px;">
  <h1 style="color: #d9534f; text-align: center;">Life Savers</h1>
  <div style="padding: 20px; background-color: #f9f9f9; border-radius: 10px;">
    <h2 style="color: #d9534f; text-align: center;">{heading}</h2>
    {body}
    <p>Thank you,</p>
    <p>The Life Savers Team</p>
  </div>
</div>"#
        )
    }

    fn code_block(code: &str) -> String {
        format!(
            r#"<div style="text-align: center; margin: 20px 0;"><span class="otp-code" style="font-size: 24px; color: #d9534f;">{code}</span></div>"#
        )
    }

    pub fn verification_email(to: &str, code: &str, expires_at: DateTime<Utc>) -> Email {
        let body = format!(
            "<p>Dear User,</p>\
             <p>You are receiving this code to verify your email address.</p>\
             {}\
             <p>This code is valid until {} (only for 10 minutes).</p>\
             <p>If you did not request this, please ignore this email.</p>",
            code_block(code),
            format_expiry(expires_at),
        );
        Email {
            to: to.to_string(),
            subject: "Your Email OTP".to_string(),
            html: layout("Your Email Verification OTP", &body),
        }
    }

    pub fn password_reset_email(
        to: &str,
        first_name: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Email {
        let body = format!(
            "<p>Dear {},</p>\
             <p>You are receiving this because you (or someone else) requested a password reset for your account.</p>\
             {}\
             <p>This code is valid until {} (only for 10 minutes).</p>\
             <p>If you did not request this, please ignore this email and your password will remain unchanged.</p>",
            first_name,
            code_block(code),
            format_expiry(expires_at),
        );
        Email {
            to: to.to_string(),
            subject: "Password Reset OTP".to_string(),
            html: layout("Password Reset OTP", &body),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::TimeZone;

        #[test]
        fn templates_carry_code_and_expiry() {
            let expires = Utc.with_ymd_and_hms(2026, 3, 4, 15, 7, 9).unwrap();
            let email = password_reset_email("asha@example.com", "Asha", "482913", expires);
            assert_eq!(email.subject, "Password Reset OTP");
            assert!(email.html.contains("Dear Asha"));
            assert!(email.html.contains("482913"));
            assert!(email.html.contains("March 4 2026, 3:07:09 PM UTC"));

            let email = verification_email("new@example.com", "111222", expires);
            assert_eq!(email.to, "new@example.com");
            assert!(email.html.contains("111222"));
        }
    }
}

#[cfg(feature = "ssr")]
pub use mailer_impl::{password_reset_email, verification_email, Email, LogMailer, Mailer, SmtpMailer};
