//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// A preferred date as typed into the draft, shown in long Turkish form.
///
/// Valid `YYYY-MM-DD` values render as `1 Haziran 2024`; anything else is
/// shown verbatim, and a blank value as `-`.
///
/// ```rust
/// use evdekor_core::display::ScheduleDate;
///
/// assert_eq!(ScheduleDate("2024-06-01").to_string(), "1 Haziran 2024");
/// assert_eq!(ScheduleDate("").to_string(), "-");
/// ```
pub struct ScheduleDate<'a>(pub &'a str);

impl fmt::Display for ScheduleDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.trim();
        if raw.is_empty() {
            return write!(f, "-");
        }
        match raw.parse::<Date>() {
            Ok(date) => {
                let month = MONTHS[usize::from(date.month().unsigned_abs()) - 1];
                write!(f, "{} {month} {}", date.day(), date.year())
            }
            Err(_) => write!(f, "{raw}"),
        }
    }
}
