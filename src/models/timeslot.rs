//! Timeslot and day-of-week models.
//!
//! Timeslots carry wall-clock "HH:MM" boundaries on a named weekday.
//! Chronological ordering *within* a day uses the parsed start minute;
//! ordering *across* the week uses the timeslot's position in the input
//! list (the optimizer treats input order as the global week order).

use serde::{Deserialize, Serialize};

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A fixed weekly teaching slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeslot {
    /// Unique timeslot identifier.
    pub id: String,
    /// Weekday this slot falls on.
    pub day: DayOfWeek,
    /// Wall-clock start, "HH:MM".
    pub start: String,
    /// Wall-clock end, "HH:MM".
    pub end: String,
}

impl Timeslot {
    /// Creates a new timeslot.
    pub fn new(
        id: impl Into<String>,
        day: DayOfWeek,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Start time in minutes since midnight, if `start` parses as "HH:MM".
    #[inline]
    pub fn start_minute(&self) -> Option<u32> {
        parse_hhmm(&self.start)
    }

    /// End time in minutes since midnight, if `end` parses as "HH:MM".
    #[inline]
    pub fn end_minute(&self) -> Option<u32> {
        parse_hhmm(&self.end)
    }
}

/// Parses a "HH:MM" wall-clock string into minutes since midnight.
///
/// Accepts 00:00 through 23:59. Returns `None` for anything else.
pub fn parse_hhmm(text: &str) -> Option<u32> {
    let (h, m) = text.split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("09:30"), Some(570));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("9h30"), None);
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("12:34:56"), None);
    }

    #[test]
    fn test_timeslot_minutes() {
        let t = Timeslot::new("T1", DayOfWeek::Monday, "09:00", "10:00");
        assert_eq!(t.start_minute(), Some(540));
        assert_eq!(t.end_minute(), Some(600));

        let bad = Timeslot::new("T2", DayOfWeek::Friday, "late", "later");
        assert_eq!(bad.start_minute(), None);
        assert_eq!(bad.end_minute(), None);
    }

    #[test]
    fn test_day_serde_lowercase() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");
        let day: DayOfWeek = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(day, DayOfWeek::Sunday);
    }
}
