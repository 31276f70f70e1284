//! Focus-area tag of a program.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Either one of the enumerated focus areas or a custom value kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusArea {
    Hitting,
    Pitching,
    Fielding,
    Catching,
    Baserunning,
    Strength,
    Conditioning,
    Custom(String),
}

impl FocusArea {
    /// The enumerated focus areas, in menu order.
    pub const KNOWN: [FocusArea; 7] = [
        FocusArea::Hitting,
        FocusArea::Pitching,
        FocusArea::Fielding,
        FocusArea::Catching,
        FocusArea::Baserunning,
        FocusArea::Strength,
        FocusArea::Conditioning,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FocusArea::Hitting => "hitting",
            FocusArea::Pitching => "pitching",
            FocusArea::Fielding => "fielding",
            FocusArea::Catching => "catching",
            FocusArea::Baserunning => "baserunning",
            FocusArea::Strength => "strength",
            FocusArea::Conditioning => "conditioning",
            FocusArea::Custom(value) => value,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FocusArea::Custom(_))
    }

    /// A custom value made only of whitespace does not count as chosen.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl FromStr for FocusArea {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for FocusArea {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "hitting" => FocusArea::Hitting,
            "pitching" => FocusArea::Pitching,
            "fielding" => FocusArea::Fielding,
            "catching" => FocusArea::Catching,
            "baserunning" => FocusArea::Baserunning,
            "strength" => FocusArea::Strength,
            "conditioning" => FocusArea::Conditioning,
            _ => FocusArea::Custom(value),
        }
    }
}

impl From<FocusArea> for String {
    fn from(value: FocusArea) -> Self {
        match value {
            FocusArea::Custom(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
