//! Routine references inside a document.

use std::collections::BTreeSet;

use log::debug;

use crate::models::{ItemKind, ProgramDocument, Routine};

impl ProgramDocument {
    /// Rewrites the name/description snapshot of every reference to
    /// `routine` and returns the number of items updated.
    ///
    /// Only the snapshot and the item title follow the routine; the routine's
    /// exercises are never copied in.
    pub fn refresh_routine_snapshot(&mut self, routine: &Routine) -> usize {
        let mut updated = 0;
        for week in &mut self.weeks {
            for day in week.days.iter_mut() {
                for item in &mut day.items {
                    let ItemKind::Routine(reference) = &mut item.kind else {
                        continue;
                    };
                    if reference.routine_id != routine.id {
                        continue;
                    }
                    reference.name = routine.name.clone();
                    reference.description = routine.description.clone();
                    item.title = routine.name.clone();
                    item.description = routine.description.clone();
                    updated += 1;
                }
            }
        }

        debug!(
            "refresh_routine_snapshot: routine {} updated {updated} references",
            routine.id
        );
        updated
    }

    /// Ids of every routine referenced anywhere in the document, ascending.
    pub fn referenced_routine_ids(&self) -> BTreeSet<u64> {
        self.weeks
            .iter()
            .flat_map(|week| week.days())
            .flat_map(|day| day.items.iter())
            .filter_map(|item| item.routine_id())
            .collect()
    }
}
