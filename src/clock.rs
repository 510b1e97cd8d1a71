use chrono::{DateTime, Utc};

/// # Time Source
///
/// Supplies "now" to handlers that stamp their responses. The server registers one
/// [`SystemClock`] as shared app data; tests register a mock to pin timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
