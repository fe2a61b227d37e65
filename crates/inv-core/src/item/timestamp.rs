use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter};

/// Day/month/year layout used for `created_at` and `updated_at`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Wall-clock instant of a registry write, at second resolution.
///
/// Items store timestamps as text so that older tables with hand-edited or
/// empty values still load; this type is the only place that text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Parses a stored value. Empty or foreign layouts yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .ok()
            .map(Self)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_display_uses_day_month_year() {
        assert_eq!(Timestamp::new(at(9, 5, 1)).to_string(), "07/03/2024 09:05:01");
    }

    #[test]
    fn test_parse_round_trips_display() {
        let ts = Timestamp::new(at(23, 59, 59));
        assert_eq!(Timestamp::parse(&ts.to_string()), Some(ts));
    }

    #[test]
    fn test_parse_rejects_empty_and_iso_values() {
        assert_eq!(Timestamp::parse(""), None);
        assert_eq!(Timestamp::parse("2024-03-07T09:05:01"), None);
    }
}
