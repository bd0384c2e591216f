//! Values that silently disappear once a fixed duration has elapsed.
//!
//! Expiry is lazy: nothing is evicted in the background. Every read compares
//! the clock against the instant of the last write plus the duration, and
//! reports the value as absent once that instant has been reached.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::trace;

/// Holder whose value reads as absent after `duration` has passed since
/// the last write.
///
/// A fresh holder has no value and is already expired. The stored value is
/// kept after expiry but never returned.
///
/// Not synchronized: sharing one holder across threads is the caller's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use nonstandard::expiring::{ExpiringValue, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::default();
/// let mut token = ExpiringValue::with_clock(Duration::from_secs(3), clock.clone());
/// assert_eq!(token.get(), None);
///
/// token.set("aaabbbccc");
/// assert_eq!(token.get(), Some(&"aaabbbccc"));
///
/// clock.advance(Duration::from_secs(3));
/// assert_eq!(token.get(), None);
/// ```
#[derive(Clone, Debug)]
pub struct ExpiringValue<V, C: Clock = SystemClock> {
    value: Option<V>,
    expires_at: DateTime<Utc>,
    duration: Duration,
    clock: C,
}

impl<V> ExpiringValue<V> {
    /// Create an empty holder using the system clock.
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, SystemClock)
    }
}

impl<V, C: Clock> ExpiringValue<V, C> {
    /// Create an empty holder reading time from `clock`.
    pub fn with_clock(duration: Duration, clock: C) -> Self {
        let expires_at = clock.now();
        Self {
            value: None,
            expires_at,
            duration,
            clock,
        }
    }

    /// Current value, or `None` once `now >= expires_at`.
    pub fn get(&self) -> Option<&V> {
        if self.is_expired() {
            if self.value.is_some() {
                trace!(expires_at = %self.expires_at, "expiring_value_expired");
            }
            None
        } else {
            self.value.as_ref()
        }
    }

    /// Store `value` and restart the expiry window.
    pub fn set(&mut self, value: V) {
        self.store(Some(value));
    }

    /// Drop the stored value. The expiry window restarts as for any write.
    pub fn clear(&mut self) {
        self.store(None);
    }

    /// Whether the expiry instant has been reached.
    pub fn is_expired(&self) -> bool {
        self.clock.now() >= self.expires_at
    }

    /// Instant from which reads return `None`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Lifetime granted to each write.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn store(&mut self, value: Option<V>) {
        let window = chrono::Duration::from_std(self.duration).unwrap_or(chrono::Duration::MAX);
        self.expires_at = self
            .clock
            .now()
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.value = value;
        trace!(expires_at = %self.expires_at, "expiring_value_written");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(secs: u64) -> (ExpiringValue<String, ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let value = ExpiringValue::with_clock(Duration::from_secs(secs), clock.clone());
        (value, clock)
    }

    #[test]
    fn new_holder_is_empty_and_expired() {
        let (value, _clock) = holder(3);
        assert!(value.get().is_none());
        assert!(value.is_expired());
    }

    #[test]
    fn value_is_readable_until_duration_elapses() {
        let (mut value, clock) = holder(3);
        value.set("aaabbbccc".to_string());
        assert_eq!(value.get().map(String::as_str), Some("aaabbbccc"));

        clock.advance(Duration::from_millis(2999));
        assert_eq!(value.get().map(String::as_str), Some("aaabbbccc"));

        clock.advance(Duration::from_millis(1));
        assert!(value.get().is_none());
    }

    #[test]
    fn write_resets_expiry() {
        let (mut value, clock) = holder(3);
        value.set("first".to_string());
        clock.advance(Duration::from_secs(2));

        value.set("second".to_string());
        clock.advance(Duration::from_secs(2));

        assert_eq!(value.get().map(String::as_str), Some("second"));
    }

    #[test]
    fn zero_duration_never_yields_value() {
        let (mut value, _clock) = holder(0);
        value.set("gone".to_string());
        assert!(value.get().is_none());
    }

    #[test]
    fn clear_removes_value_before_expiry() {
        let (mut value, _clock) = holder(10);
        value.set("token".to_string());
        value.clear();
        assert!(value.get().is_none());
        assert!(!value.is_expired());
    }

    #[test]
    fn huge_duration_saturates_instead_of_overflowing() {
        let clock = ManualClock::default();
        let mut value = ExpiringValue::with_clock(Duration::MAX, clock.clone());
        value.set(1);
        assert_eq!(value.expires_at(), DateTime::<Utc>::MAX_UTC);
        assert_eq!(value.get(), Some(&1));
    }

    #[test]
    fn system_clock_value_expires() {
        let mut value = ExpiringValue::new(Duration::from_millis(20));
        value.set(42);
        assert_eq!(value.get(), Some(&42));

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(value.get(), None);
        assert_eq!(value.duration(), Duration::from_millis(20));
    }
}
