//! Weekday to day-number conversion.
//!
//! Every place that turns a [`Weekday`] into a persisted day number, or back,
//! goes through [`DayNumbering`].

use std::{fmt, str::FromStr};

use crate::models::Weekday;

/// Convention used to number the days of a week on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayNumbering {
    /// Monday = 1 ... Sunday = 7
    #[default]
    MondayFirst,
    /// Sunday = 1 ... Saturday = 7, for stores written with array-index + 1
    SundayFirst,
}

impl DayNumbering {
    /// Wire day number (1..=7) of the weekday.
    pub fn day_number(self, weekday: Weekday) -> u8 {
        let monday_based = weekday.index() as u8;
        match self {
            DayNumbering::MondayFirst => monday_based + 1,
            DayNumbering::SundayFirst => (monday_based + 1) % 7 + 1,
        }
    }

    /// Weekday of a wire day number, or `None` outside 1..=7.
    pub fn weekday(self, day_number: u8) -> Option<Weekday> {
        if !(1..=7).contains(&day_number) {
            return None;
        }
        let monday_based = match self {
            DayNumbering::MondayFirst => day_number - 1,
            DayNumbering::SundayFirst => (day_number + 5) % 7,
        };
        Some(Weekday::ALL[monday_based as usize])
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayNumbering::MondayFirst => "monday-first",
            DayNumbering::SundayFirst => "sunday-first",
        }
    }
}

impl FromStr for DayNumbering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday-first" | "monday" | "iso" => Ok(DayNumbering::MondayFirst),
            "sunday-first" | "sunday" => Ok(DayNumbering::SundayFirst),
            _ => Err(format!(
                "Invalid day numbering: {s} (expected monday-first or sunday-first)"
            )),
        }
    }
}

impl fmt::Display for DayNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
