//! Status line messages shown in the title bar.

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLogLevel {
    Warning,
    Error,
    Info,
}

impl UiLogLevel {
    pub fn color(&self) -> Color32 {
        match self {
            UiLogLevel::Warning => Color32::YELLOW,
            UiLogLevel::Error => Color32::RED,
            UiLogLevel::Info => Color32::WHITE,
        }
    }
}

/// Sends every message to `log` and keeps the latest one on screen until
/// its deadline passes.
#[derive(Debug, Clone, Default)]
pub struct UiLogger {
    pub message: Option<(String, UiLogLevel)>,
    expires_at: Option<Instant>,
}

impl UiLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_message(&mut self, msg: String, level: UiLogLevel, timeout: Option<Duration>) {
        self.message = Some((msg, level));
        self.expires_at = Some(Instant::now() + timeout.unwrap_or(LOG_TIMEOUT));
    }

    /// `None` timeout means [`LOG_TIMEOUT`].
    pub fn warn(&mut self, msg: impl Into<String>, timeout: Option<Duration>) {
        let msg = msg.into();
        log::warn!("{}", msg);
        self.set_message(msg, UiLogLevel::Warning, timeout);
    }

    pub fn error(&mut self, msg: impl Into<String>, timeout: Option<Duration>) {
        let msg = msg.into();
        log::error!("{}", msg);
        self.set_message(msg, UiLogLevel::Error, timeout);
    }

    pub fn info(&mut self, msg: impl Into<String>, timeout: Option<Duration>) {
        let msg = msg.into();
        log::info!("{}", msg);
        self.set_message(msg, UiLogLevel::Info, timeout);
    }

    /// How long the current message stays up, if there is one.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Drop the message once its deadline has passed.
    pub fn clear_expired(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|deadline| now >= deadline) {
            self.message = None;
            self.expires_at = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_message() {
        let mut logger = UiLogger::new();
        logger.info("opened", None);
        logger.error("broken", None);
        assert_eq!(
            logger.message,
            Some(("broken".to_string(), UiLogLevel::Error))
        );
        logger.clear_expired(Instant::now());
        assert!(logger.message.is_some());
    }

    #[test]
    fn message_expires_at_its_deadline() {
        let mut logger = UiLogger::new();
        logger.warn("settings unreadable", Some(Duration::from_secs(10)));
        let start = Instant::now();

        let left = logger.time_left(start).unwrap();
        assert!(left > LOG_TIMEOUT && left <= Duration::from_secs(10));

        logger.clear_expired(start + Duration::from_secs(5));
        assert!(logger.message.is_some());
        logger.clear_expired(start + Duration::from_secs(11));
        assert!(logger.message.is_none());
        assert_eq!(logger.time_left(start), None);
    }

    #[test]
    fn zero_timeout_expires_immediately() {
        let mut logger = UiLogger::new();
        logger.warn("gone soon", Some(Duration::ZERO));
        logger.clear_expired(Instant::now());
        assert!(logger.message.is_none());
    }
}
