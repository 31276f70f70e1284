//! Timestamp display in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", local.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}
