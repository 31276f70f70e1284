//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper renders its elements with their own `Display` impl and prints
//! a "No ... found." line when empty.

use std::{fmt, ops::Index};

use crate::models::{DraftSummary, FocusAreaCount, ProgramSummary, Routine, VideoDescriptor};

macro_rules! display_collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for entry in &self.0 {
                    write!(f, "{entry}")?;
                }
                Ok(())
            }
        }
    };
}

display_collection!(
    /// Saved program summaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use drillbook_core::{
    ///     display::ProgramSummaries,
    ///     models::{FocusArea, ProgramSummary},
    /// };
    /// use jiff::Timestamp;
    ///
    /// let summary = ProgramSummary {
    ///     id: 1,
    ///     title: "Preseason Hitting".to_string(),
    ///     description: None,
    ///     focus_area: FocusArea::Hitting,
    ///     duration: 4,
    ///     total_drills: 12,
    ///     created_at: Timestamp::now(),
    ///     updated_at: Timestamp::now(),
    /// };
    ///
    /// let output = ProgramSummaries(vec![summary]).to_string();
    /// assert!(output.contains("Preseason Hitting"));
    /// ```
    ProgramSummaries,
    ProgramSummary,
    "No programs found."
);

display_collection!(
    /// Catalog routines.
    Routines,
    Routine,
    "No routines found."
);

display_collection!(
    /// Editor draft summaries.
    Drafts,
    DraftSummary,
    "No drafts found."
);

display_collection!(
    /// Focus areas in use with their program counts.
    FocusAreas,
    FocusAreaCount,
    "No focus areas found."
);

display_collection!(
    /// Video descriptors returned by a search.
    Videos,
    VideoDescriptor,
    "No videos found."
);
