//! Mutation engine for program documents.
//!
//! All structural edits of a [`ProgramDocument`](crate::models::ProgramDocument) go through the methods in
//! this module. They share one contract:
//!
//! 1. **Checked first**: every precondition (week index, item id, permutation)
//!    is verified before anything is touched.
//! 2. **Atomic**: a failed call returns a `DrillbookError` and leaves the
//!    document exactly as it was. Nothing is logged and swallowed.
//! 3. **Invariant preserving**: after a successful call the document still has
//!    at least one week, `duration == weeks.len()`, and every superset group
//!    has at least two members.
//!
//! ## Submodules
//!
//! - [`week_ops`]: add, remove, duplicate, reorder and resize weeks
//! - [`item_ops`]: add, edit, delete, move and reorder items in a day
//! - [`superset`]: link/unlink items into back-to-back groups
//! - [`routine_refs`]: keep routine reference snapshots current
//!
//! # Examples
//!
//! ```rust
//! use drillbook_core::engine::DayRef;
//! use drillbook_core::ids::SequentialIds;
//! use drillbook_core::models::{ExerciseDetails, ProgramDocument, Weekday};
//!
//! let mut ids = SequentialIds::new();
//! let mut document = ProgramDocument::new(&mut ids);
//! let monday = DayRef::new(0, Weekday::Monday);
//!
//! let tee = document
//!     .add_exercise(monday, "Tee Work", ExerciseDetails::default(), &mut ids)
//!     .unwrap();
//! let bands = document
//!     .add_exercise(monday, "Band Pulls", ExerciseDetails::default(), &mut ids)
//!     .unwrap();
//! document.link(monday, &tee, &bands, &mut ids).unwrap();
//!
//! // A stale week index is reported, not panicked on.
//! assert!(document.remove_week(5).is_err());
//! ```

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use crate::{
    error::{DrillbookError, Result},
    models::Weekday,
};

pub mod item_ops;
pub mod routine_refs;
pub mod superset;
pub mod week_ops;

#[cfg(test)]
mod tests;

pub use superset::SupersetPolicy;

/// Address of one day: a 0-based week index and a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRef {
    pub week: usize,
    pub weekday: Weekday,
}

impl DayRef {
    pub fn new(week: usize, weekday: Weekday) -> Self {
        Self { week, weekday }
    }
}

impl fmt::Display for DayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {} / {}", self.week + 1, self.weekday)
    }
}

/// Map each requested key to its index in `current`.
///
/// Succeeds only when `requested` is a permutation of `current`: same length,
/// no duplicates, no unknown keys.
pub(crate) fn permutation_indices<K>(current: &[K], requested: &[K]) -> Result<Vec<usize>>
where
    K: Eq + Hash + fmt::Display,
{
    if current.len() != requested.len() {
        return Err(DrillbookError::InvalidPermutation {
            reason: format!(
                "expected {} ids, got {}",
                current.len(),
                requested.len()
            ),
        });
    }

    let positions: HashMap<&K, usize> = current.iter().enumerate().map(|(i, k)| (k, i)).collect();
    let mut seen = HashSet::with_capacity(requested.len());
    let mut indices = Vec::with_capacity(requested.len());

    for key in requested {
        let Some(&index) = positions.get(key) else {
            return Err(DrillbookError::InvalidPermutation {
                reason: format!("unknown id '{key}'"),
            });
        };
        if !seen.insert(index) {
            return Err(DrillbookError::InvalidPermutation {
                reason: format!("duplicate id '{key}'"),
            });
        }
        indices.push(index);
    }

    Ok(indices)
}

/// Rebuild `values` in the order given by `indices` (a checked permutation).
pub(crate) fn apply_permutation<T>(values: Vec<T>, indices: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
    indices
        .iter()
        .filter_map(|&index| slots[index].take())
        .collect()
}
