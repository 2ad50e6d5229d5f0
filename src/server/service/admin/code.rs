//! One-time code for registering the first railway admin.
//!
//! On startup, when no approved railway admin exists, a random code is generated and
//! a registration link containing it is logged. Registering with role
//! `RAILWAY_ADMIN` consumes the code. It lives in memory only and expires after
//! [`ADMIN_CODE_TTL`].

use rand::{distr::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// How long a generated code stays valid.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const ADMIN_CODE_LENGTH: usize = 32;

struct PendingCode {
    value: String,
    expires_at: Instant,
}

/// Holder of the current admin registration code, shared through `AppState`.
#[derive(Clone, Default)]
pub struct AdminCodeService {
    pending: Arc<Mutex<Option<PendingCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any current code with a fresh 32 character alphanumeric one.
    pub async fn generate(&self) -> String {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ADMIN_CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.pending.lock().await = Some(PendingCode {
            value: value.clone(),
            expires_at: Instant::now() + ADMIN_CODE_TTL,
        });

        value
    }

    /// Consumes the code if `input` matches and it has not expired.
    ///
    /// An expired code is discarded. A wrong guess leaves a live code in place.
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut pending = self.pending.lock().await;

        match pending.as_ref() {
            Some(code) if Instant::now() >= code.expires_at => {
                *pending = None;
                false
            }
            Some(code) if code.value == input => {
                *pending = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    async fn has_live_code(&self) -> bool {
        self.pending
            .lock()
            .await
            .as_ref()
            .is_some_and(|code| Instant::now() < code.expires_at)
    }

    #[cfg(test)]
    async fn expire_now(&self) {
        if let Some(code) = self.pending.lock().await.as_mut() {
            code.expires_at = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: a 32 character code that is live
    #[tokio::test]
    async fn generates_live_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_live_code().await);

        let code = service.generate().await;

        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_live_code().await);
    }

    /// Tests the code works exactly once.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn code_is_single_use() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_live_code().await);
    }

    /// Tests a wrong guess does not burn the code.
    ///
    /// Expected: wrong code rejected, correct code still accepted afterwards
    #[tokio::test]
    async fn wrong_code_keeps_live_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong").await);
        assert!(service.validate_and_consume(&code).await);
    }

    /// Expected: validation fails when nothing was generated
    #[tokio::test]
    async fn rejects_without_generated_code() {
        let service = AdminCodeService::new();
        assert!(!service.validate_and_consume("").await);
    }

    /// Tests an expired code is rejected and discarded.
    ///
    /// Expected: validation fails and no live code remains
    #[tokio::test]
    async fn expired_code_is_rejected() {
        let service = AdminCodeService::new();
        let code = service.generate().await;
        service.expire_now().await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_live_code().await);
    }
}
