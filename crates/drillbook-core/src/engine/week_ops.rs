//! Week operations for program documents.

use std::collections::HashMap;

use log::debug;

use super::{apply_permutation, permutation_indices};
use crate::{
    error::{DrillbookError, Result},
    ids::{IdSource, SupersetId, WeekId},
    models::{ProgramDocument, SupersetMembership, Week},
};

impl ProgramDocument {
    /// Appends a week with seven empty days and returns its index.
    pub fn add_week(&mut self, ids: &mut dyn IdSource) -> usize {
        let position = self.weeks.len() as u32 + 1;
        self.weeks.push(Week::empty(ids.next_week_id(), position));
        self.resync_weeks();
        debug!("add_week: now {} weeks", self.weeks.len());
        self.weeks.len() - 1
    }

    /// Removes the week at `index` and returns it.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::WeekNotFound` - index out of range
    /// * `DrillbookError::LastWeek` - the document has a single week
    pub fn remove_week(&mut self, index: usize) -> Result<Week> {
        self.week(index)?;
        if self.weeks.len() == 1 {
            return Err(DrillbookError::LastWeek);
        }

        let removed = self.weeks.remove(index);
        self.resync_weeks();
        debug!("remove_week: removed '{}', now {} weeks", removed.name, self.weeks.len());
        Ok(removed)
    }

    /// Appends a deep copy of the week at `index` and returns the new index.
    ///
    /// Items get fresh identities and every superset group in the copy gets a
    /// fresh group id, so nothing in the copy aliases the original.
    pub fn duplicate_week(&mut self, index: usize, ids: &mut dyn IdSource) -> Result<usize> {
        let source = self.week(index)?;
        let position = self.weeks.len() as u32 + 1;

        let mut copy = source.clone();
        copy.id = ids.next_week_id();
        copy.collapsed = false;
        copy.name = if source.has_default_name() {
            Week::default_name(position)
        } else {
            format!("{} (copy)", source.name)
        };
        copy.position = position;

        for day in copy.days.iter_mut() {
            let mut groups: HashMap<SupersetId, SupersetId> = HashMap::new();
            for item in &mut day.items {
                item.id = ids.next_item_id();
                if let Some(SupersetMembership { group, .. }) = &mut item.superset {
                    let fresh = groups
                        .entry(group.clone())
                        .or_insert_with(|| ids.next_superset_id())
                        .clone();
                    *group = fresh;
                }
            }
        }

        self.weeks.push(copy);
        self.resync_weeks();
        debug!("duplicate_week: copied week {} to week {}", index + 1, position);
        Ok(self.weeks.len() - 1)
    }

    /// Resizes the program to `duration` weeks.
    ///
    /// Growing appends empty weeks; shrinking drops the trailing weeks together
    /// with all of their items.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::Validation` - duration below one week
    pub fn set_week_duration(&mut self, duration: u32, ids: &mut dyn IdSource) -> Result<()> {
        if duration < 1 {
            return Err(DrillbookError::validation("duration")
                .with_reason("Duration must be at least one week"));
        }

        let target = duration as usize;
        if target < self.weeks.len() {
            let dropped = self.weeks.len() - target;
            self.weeks.truncate(target);
            debug!("set_week_duration: dropped {dropped} trailing weeks");
        }
        while self.weeks.len() < target {
            let position = self.weeks.len() as u32 + 1;
            self.weeks.push(Week::empty(ids.next_week_id(), position));
        }

        self.resync_weeks();
        Ok(())
    }

    /// Reorders weeks to match `order`, a permutation of the current week ids.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::InvalidPermutation` - ids missing, unknown or repeated
    pub fn reorder_weeks(&mut self, order: &[WeekId]) -> Result<()> {
        let current: Vec<WeekId> = self.weeks.iter().map(|w| w.id.clone()).collect();
        let indices = permutation_indices(&current, order)?;

        let weeks = std::mem::take(&mut self.weeks);
        self.weeks = apply_permutation(weeks, &indices);
        self.resync_weeks();
        debug!("reorder_weeks: {:?}", order);
        Ok(())
    }

    /// Renames a week and optionally replaces its description.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::WeekNotFound` - index out of range
    /// * `DrillbookError::Validation` - blank name
    pub fn rename_week(
        &mut self,
        index: usize,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<()> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(
                    DrillbookError::validation("name").with_reason("Week name must not be empty")
                );
            }
        }

        let week = self.week_mut(index)?;
        if let Some(name) = name {
            week.name = name.trim().to_string();
        }
        if let Some(description) = description {
            week.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        Ok(())
    }

    /// Sets the editor-only collapsed flag of a week.
    pub fn set_week_collapsed(&mut self, index: usize, collapsed: bool) -> Result<()> {
        self.week_mut(index)?.collapsed = collapsed;
        Ok(())
    }
}
