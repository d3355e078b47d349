//! Time-window predicates over the ops-clock column
//!
//! Ops-clock cells are compared either by exact label or by a parsed
//! time of day. Raw string ordering is never used: `"9:00" < "10:00"` is
//! false as text but true as a time.

use chrono::{NaiveTime, Timelike};
use loadboard_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Time of day written as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parse a configured cutoff such as `12:00` or `9:30`
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        parse_token(s.trim()).ok_or_else(|| ConfigError::InvalidTime(s.to_string()))
    }

    /// Find the time of day inside an ops-clock label
    ///
    /// `"PM 12:00"`, `"09:00"` and `"9:00h"` all yield a time; labels
    /// without an `H:MM` token such as `"CARREG. AM"` yield `None`.
    /// An `AM`/`PM` marker attached to or next to the time reads it as a
    /// 12-hour clock, so `"PM 1:00"` is 13:00 and `"AM 12:30"` is 00:30.
    pub fn extract(label: &str) -> Option<Self> {
        let tokens: Vec<&str> = label.split_whitespace().collect();
        let (idx, time) = tokens
            .iter()
            .enumerate()
            .find_map(|(i, token)| parse_token(token).map(|time| (i, time)))?;

        let marker = meridiem(tokens[idx])
            .or_else(|| idx.checked_sub(1).and_then(|i| meridiem(tokens[i])))
            .or_else(|| tokens.get(idx + 1).and_then(|token| meridiem(token)));

        Some(match marker {
            Some(pm) => time.on_twelve_hour_clock(pm),
            None => time,
        })
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Hours outside 1..=12 are already 24-hour and stay as they are
    fn on_twelve_hour_clock(self, pm: bool) -> Self {
        let hour = self.0.hour();
        let adjusted = match (hour, pm) {
            (12, false) => 0,
            (1..=11, true) => hour + 12,
            _ => hour,
        };
        self.0.with_hour(adjusted).map(ClockTime).unwrap_or(self)
    }
}

/// `Some(true)` for a PM marker, `Some(false)` for AM
fn meridiem(token: &str) -> Option<bool> {
    let letters: String = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match letters.as_str() {
        "AM" => Some(false),
        "PM" => Some(true),
        _ => None,
    }
}

fn parse_token(token: &str) -> Option<ClockTime> {
    let token = token.trim_matches(|c: char| !c.is_ascii_digit());
    if !token.contains(':') {
        return None;
    }
    ["%H:%M", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(token, fmt).ok())
        .map(ClockTime)
}

impl TryFrom<String> for ClockTime {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Which ops-clock values belong to a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowSpec {
    /// Exact match against one of the labels
    Label { labels: Vec<String> },
    /// Parsed time strictly before the cutoff
    Before { cutoff: ClockTime },
    /// Parsed time at or after the cutoff
    AtOrAfter { cutoff: ClockTime },
    /// Any of the inner windows
    AnyOf { windows: Vec<WindowSpec> },
}

impl WindowSpec {
    pub fn label(label: impl Into<String>) -> Self {
        WindowSpec::Label {
            labels: vec![label.into()],
        }
    }

    pub fn contains(&self, ops_clock: &str) -> bool {
        match self {
            WindowSpec::Label { labels } => labels.iter().any(|l| l.trim() == ops_clock.trim()),
            WindowSpec::Before { cutoff } => match ClockTime::extract(ops_clock) {
                Some(t) => t < *cutoff,
                None => false,
            },
            WindowSpec::AtOrAfter { cutoff } => match ClockTime::extract(ops_clock) {
                Some(t) => t >= *cutoff,
                None => false,
            },
            WindowSpec::AnyOf { windows } => windows.iter().any(|w| w.contains(ops_clock)),
        }
    }
}

impl std::fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowSpec::Label { labels } => write!(f, "label in [{}]", labels.join(", ")),
            WindowSpec::Before { cutoff } => write!(f, "before {}", cutoff),
            WindowSpec::AtOrAfter { cutoff } => write!(f, "from {}", cutoff),
            WindowSpec::AnyOf { windows } => {
                let parts: Vec<String> = windows.iter().map(ToString::to_string).collect();
                write!(f, "any of ({})", parts.join("; "))
            }
        }
    }
}

/// A window with the name it is reported under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedWindow {
    pub name: String,
    pub window: WindowSpec,
}

impl NamedWindow {
    pub fn new(name: impl Into<String>, window: WindowSpec) -> Self {
        Self {
            name: name.into(),
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> ClockTime {
        ClockTime::new(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn test_extract_time_from_labels() {
        assert_eq!(ClockTime::extract("PM 12:00"), Some(at(12, 0)));
        assert_eq!(ClockTime::extract("09:00"), Some(at(9, 0)));
        assert_eq!(ClockTime::extract("9:00"), Some(at(9, 0)));
        assert_eq!(ClockTime::extract("9:30h"), Some(at(9, 30)));
        assert_eq!(ClockTime::extract("CARREG. AM"), None);
        assert_eq!(ClockTime::extract(""), None);
    }

    #[test]
    fn test_extract_reads_am_pm_markers() {
        assert_eq!(ClockTime::extract("PM 1:00"), Some(at(13, 0)));
        assert_eq!(ClockTime::extract("AM 12:30"), Some(at(0, 30)));
        assert_eq!(ClockTime::extract("PM 12:00"), Some(at(12, 0)));
        assert_eq!(ClockTime::extract("AM 9:15"), Some(at(9, 15)));
        assert_eq!(ClockTime::extract("1:30 pm"), Some(at(13, 30)));
        assert_eq!(ClockTime::extract("2:00PM"), Some(at(14, 0)));
        // already 24-hour
        assert_eq!(ClockTime::extract("PM 14:00"), Some(at(14, 0)));
    }

    #[test]
    fn test_afternoon_label_is_not_before_noon() {
        let am = WindowSpec::Before { cutoff: at(12, 0) };
        assert!(!am.contains("PM 1:00"));
        assert!(am.contains("AM 11:00"));
        assert!(am.contains("AM 12:30"));

        let pm = WindowSpec::AtOrAfter { cutoff: at(12, 0) };
        assert!(pm.contains("PM 1:00"));
        assert!(pm.contains("PM 12:00"));
    }

    #[test]
    fn test_any_of_combines_label_and_cutoff() {
        let window = WindowSpec::AnyOf {
            windows: vec![
                WindowSpec::Before { cutoff: at(12, 0) },
                WindowSpec::label("CARREG. AM"),
            ],
        };
        assert!(window.contains("CARREG. AM"));
        assert!(window.contains("9:00"));
        assert!(!window.contains("PM 12:00"));
        assert!(!window.contains("CARREG. PM"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ClockTime::parse("12:00").is_ok());
        assert!(ClockTime::parse("noon").is_err());
        assert!(ClockTime::parse("25:00").is_err());
    }

    #[test]
    fn test_before_compares_times_not_strings() {
        let window = WindowSpec::Before { cutoff: at(10, 0) };
        // "9:00" > "10:00" lexicographically
        assert!(window.contains("9:00"));
        assert!(window.contains("09:59"));
        assert!(!window.contains("10:00"));
        assert!(!window.contains("CARREG. AM"));
    }

    #[test]
    fn test_at_or_after_includes_cutoff() {
        let window = WindowSpec::AtOrAfter { cutoff: at(12, 0) };
        assert!(window.contains("PM 12:00"));
        assert!(window.contains("13:15"));
        assert!(!window.contains("11:59"));
    }

    #[test]
    fn test_label_is_exact() {
        let window = WindowSpec::label("PM 12:00");
        assert!(window.contains("PM 12:00"));
        assert!(!window.contains("12:00"));
        assert!(!window.contains("pm 12:00"));
    }

    #[test]
    fn test_label_ignores_surrounding_spaces() {
        let window = WindowSpec::label(" PM 12:00");
        assert!(window.contains("PM 12:00"));
        assert!(!window.contains("PM 1:00"));
    }

    #[test]
    fn test_window_from_json() {
        let window: NamedWindow = serde_json::from_str(
            r#"{"name": "AM", "window": {"kind": "before", "cutoff": "12:00"}}"#,
        )
        .unwrap();
        assert_eq!(window.window, WindowSpec::Before { cutoff: at(12, 0) });

        let bad = serde_json::from_str::<NamedWindow>(
            r#"{"name": "AM", "window": {"kind": "before", "cutoff": "midday"}}"#,
        );
        assert!(bad.is_err());

        let any: WindowSpec = serde_json::from_str(
            r#"{"kind": "any_of", "windows": [{"kind": "label", "labels": ["CARREG. AM"]}, {"kind": "before", "cutoff": "12:00"}]}"#,
        )
        .unwrap();
        assert!(any.contains("CARREG. AM"));
    }
}
