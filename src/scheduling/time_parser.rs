//! "H:MM AM/PM" parsing with a shared result cache

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)$").expect("time-of-day pattern is valid")
});

/// Parses 12-hour clock strings into minutes since midnight.
///
/// Anything that is not a valid "H:MM AM" / "HH:MM PM" string yields `0`.
/// Results are cached by exact input for the parser's lifetime.
#[derive(Debug, Default)]
pub struct TimeOfDayParser {
    cache: RwLock<HashMap<String, u32>>,
}

impl TimeOfDayParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, text: Option<&str>) -> u32 {
        let Some(text) = text else {
            return 0;
        };

        if let Some(minutes) = self
            .cache
            .read()
            .ok()
            .and_then(|cache| cache.get(text).copied())
        {
            return minutes;
        }

        let minutes = parse_minutes(text).unwrap_or(0);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(text.to_string(), minutes);
        }
        minutes
    }

    /// Number of distinct strings seen so far
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }
}

fn parse_minutes(text: &str) -> Option<u32> {
    let caps = TIME_OF_DAY.captures(text.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let pm = caps[3].eq_ignore_ascii_case("PM");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    Some(hour * 60 + minute)
}
