use std::time::{Duration, Instant};

/// Transient status line shown under the form (handler outcome, reloads).
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    pub last_error: Option<String>,
    pub last_success: Option<String>,
    pub expires_at: Option<Instant>,
}

impl MessageState {
    const ERROR_TIMEOUT_SECS: u64 = 5;
    const SUCCESS_TIMEOUT_SECS: u64 = 2;

    pub fn set_error_at(&mut self, msg: String, now: Instant) {
        self.last_error = Some(msg);
        self.last_success = None;
        self.expires_at = Some(now + Duration::from_secs(Self::ERROR_TIMEOUT_SECS));
    }

    pub fn set_success_at(&mut self, msg: String, now: Instant) {
        self.last_success = Some(msg);
        self.last_error = None;
        self.expires_at = Some(now + Duration::from_secs(Self::SUCCESS_TIMEOUT_SECS));
    }

    pub fn clear(&mut self) {
        self.last_error = None;
        self.last_success = None;
        self.expires_at = None;
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.clear();
        }
    }
}
