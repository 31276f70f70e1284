//! Identifiers and the injectable identity generators.
//!
//! Items, weeks and superset groups get string identities that are unique
//! within one document. Generation goes through [`IdSource`] so tests can use
//! [`SequentialIds`] and assert exact identities, while long-lived stores can
//! use [`UuidIds`].

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::ProgramDocument;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "schema", derive(JsonSchema))]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identity of an item, unique within a document.
    ItemId
);
string_id!(
    /// Identity of a week, unique within a document.
    WeekId
);
string_id!(
    /// Identity of a superset group within a day.
    SupersetId
);

/// Source of fresh identities for document nodes.
pub trait IdSource: Send {
    fn next_item_id(&mut self) -> ItemId;
    fn next_week_id(&mut self) -> WeekId;
    fn next_superset_id(&mut self) -> SupersetId;

    /// Advance past every identity already used in `document`.
    ///
    /// Sources whose ids cannot collide with existing ones keep this no-op.
    fn reserve_existing(&mut self, _document: &ProgramDocument) {}
}

/// Deterministic counter-based ids: `i1`, `i2`, ..., `w1`, ..., `s1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    items: u64,
    weeks: u64,
    supersets: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after the highest sequential ids already in use.
    ///
    /// Ids that do not follow the sequential format are ignored, so a
    /// document hydrated with foreign ids never collides with new ones.
    pub fn resume_after(document: &ProgramDocument) -> Self {
        let mut ids = Self::new();
        ids.reserve_existing(document);
        ids
    }

    fn suffix(id: &str, prefix: char) -> u64 {
        id.strip_prefix(prefix)
            .and_then(|rest| rest.parse().ok())
            .unwrap_or(0)
    }
}

impl IdSource for SequentialIds {
    fn next_item_id(&mut self) -> ItemId {
        self.items += 1;
        ItemId(format!("i{}", self.items))
    }

    fn next_week_id(&mut self) -> WeekId {
        self.weeks += 1;
        WeekId(format!("w{}", self.weeks))
    }

    fn next_superset_id(&mut self) -> SupersetId {
        self.supersets += 1;
        SupersetId(format!("s{}", self.supersets))
    }

    fn reserve_existing(&mut self, document: &ProgramDocument) {
        for week in document.weeks() {
            self.weeks = self.weeks.max(Self::suffix(week.id.as_str(), 'w'));
            for day in week.days() {
                for item in &day.items {
                    self.items = self.items.max(Self::suffix(item.id.as_str(), 'i'));
                    if let Some(membership) = &item.superset {
                        self.supersets = self
                            .supersets
                            .max(Self::suffix(membership.group.as_str(), 's'));
                    }
                }
            }
        }
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_item_id(&mut self) -> ItemId {
        ItemId(uuid::Uuid::new_v4().to_string())
    }

    fn next_week_id(&mut self) -> WeekId {
        WeekId(uuid::Uuid::new_v4().to_string())
    }

    fn next_superset_id(&mut self) -> SupersetId {
        SupersetId(uuid::Uuid::new_v4().to_string())
    }
}
