//! Week model: a named, positioned set of exactly seven days.

use serde::{Deserialize, Serialize};

use super::{Day, Weekday};
use crate::ids::WeekId;

/// Exactly seven days, one per weekday, stored Monday first.
///
/// Serialized as a list of days; a list that does not contain every weekday
/// exactly once is rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Day>", into = "Vec<Day>")]
pub struct WeekDays([Day; 7]);

impl WeekDays {
    pub fn empty() -> Self {
        Self(Weekday::ALL.map(Day::new))
    }

    pub fn get(&self, weekday: Weekday) -> &Day {
        &self.0[weekday.index()]
    }

    pub fn get_mut(&mut self, weekday: Weekday) -> &mut Day {
        &mut self.0[weekday.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Day> {
        self.0.iter_mut()
    }
}

impl TryFrom<Vec<Day>> for WeekDays {
    type Error = String;

    fn try_from(days: Vec<Day>) -> Result<Self, Self::Error> {
        if days.len() != 7 {
            return Err(format!("a week needs exactly 7 days, got {}", days.len()));
        }

        let mut slots: [Option<Day>; 7] = Default::default();
        for day in days {
            let slot = &mut slots[day.weekday.index()];
            if slot.is_some() {
                return Err(format!("duplicate day: {}", day.weekday));
            }
            *slot = Some(day);
        }

        let mut result = Self::empty();
        for (target, day) in result.0.iter_mut().zip(slots) {
            // All seven slots are filled: seven days, none duplicated.
            if let Some(day) = day {
                *target = day;
            }
        }
        Ok(result)
    }
}

impl From<WeekDays> for Vec<Day> {
    fn from(days: WeekDays) -> Self {
        days.0.into()
    }
}

/// A week of the program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Week {
    pub id: WeekId,

    /// 1-based position in the program
    pub position: u32,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub days: WeekDays,

    /// Editor-only display flag
    #[serde(default)]
    pub collapsed: bool,
}

impl Week {
    /// A new week with seven empty days and the default name for its position.
    pub fn empty(id: WeekId, position: u32) -> Self {
        Self {
            id,
            position,
            name: Self::default_name(position),
            description: None,
            days: WeekDays::empty(),
            collapsed: false,
        }
    }

    pub fn default_name(position: u32) -> String {
        format!("Week {position}")
    }

    /// Whether the name is still the generated one for the current position.
    pub fn has_default_name(&self) -> bool {
        self.name == Self::default_name(self.position)
    }

    pub fn day(&self, weekday: Weekday) -> &Day {
        self.days.get(weekday)
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut Day {
        self.days.get_mut(weekday)
    }

    pub fn days(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    /// Number of authored (non-rest) items across the week.
    pub fn item_count(&self) -> usize {
        self.days().map(|day| day.authored_items().count()).sum()
    }
}
