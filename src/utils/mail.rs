use crate::config::config;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;
use entity::user::Model as UserModel;
use reqwest::ClientBuilder;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Which flow a confirmation link completes. The variant name is the
/// endpoint path segment the link points at.
pub enum ConfirmIntent {
    Registration,
    EmailChange,
}

impl fmt::Display for ConfirmIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmIntent::Registration => write!(f, "confirm_registration"),
            ConfirmIntent::EmailChange => write!(f, "confirm_email"),
        }
    }
}

/// Compose a confirmation URL embedding the user id and target email.
pub fn confirmation_link(intent: &ConfirmIntent, user_id: Uuid, email: &str) -> String {
    format!(
        "{}/account/{}?user={}&email={}",
        config().public_url,
        intent,
        user_id,
        urlencoding::encode(email)
    )
}

/// Send the confirmation message for a registration or a pending email
/// change. `email` is the address the link will confirm, which for an
/// email change is the NEW address, not the stored one.
pub async fn send_confirmation_mail(
    user: &UserModel,
    email: &str,
    intent: ConfirmIntent,
) -> Result<(), AppError> {
    let link = confirmation_link(&intent, user.id, email);
    let (subject, text) = match intent {
        ConfirmIntent::Registration => (
            "Confirm your registration".to_string(),
            format!(
                "Hi {},\n\nWelcome to the shop. Follow this link to confirm your registration:\n{}",
                user.username, link
            ),
        ),
        ConfirmIntent::EmailChange => (
            "Confirm your new email address".to_string(),
            format!(
                "Hi {},\n\nFollow this link to confirm your new email address:\n{}\n\nYour account keeps its current address until you do.",
                user.username, link
            ),
        ),
    };

    send_email(SendEmail {
        from: config().mail.from.clone(),
        to: vec![email.to_string()],
        subject,
        text: Some(text),
        ..Default::default()
    })
    .await
}

pub async fn send_email(email: SendEmail) -> Result<(), AppError> {
    let mail = &config().mail;

    // Local dev / test path: nothing configured, log the message and
    // report success.
    if mail.api_key.is_empty() {
        info!(to = ?email.to, subject = %email.subject, "mail sender not configured; logging only");
        return Ok(());
    }

    let client = ClientBuilder::new()
        .user_agent("shop-account/1.0 (+reqwest)")
        .tcp_nodelay(true)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Mail(format!("build client failed: {e}")))?;

    debug!("[mail] -> POST {}", mail.endpoint);

    let t0 = Instant::now();
    let res = client
        .post(&mail.endpoint)
        .bearer_auth(&mail.api_key) // do NOT log the key
        .json(&email)
        .send()
        .await
        .map_err(|e| AppError::Mail(format!("send failed: {e}")))?;
    let dt = t0.elapsed();

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| AppError::Mail(format!("read body failed: {e}")))?;

    debug!("[mail] <- status: {status} in {} ms", dt.as_millis());

    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::Mail(format!("mail API error: HTTP {status}: {body}")))
    }
}
