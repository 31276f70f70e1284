//! Item operations for program documents.

use log::debug;

use super::{apply_permutation, permutation_indices, superset, DayRef, SupersetPolicy};
use crate::{
    error::{DrillbookError, Result},
    ids::{IdSource, ItemId},
    models::{
        Day, ExerciseDetails, Item, ItemKind, ItemPatch, ProgramDocument, Routine,
        VideoDescriptor,
    },
};

impl ProgramDocument {
    /// The day addressed by `at`.
    pub fn day(&self, at: DayRef) -> Result<&Day> {
        Ok(self.week(at.week)?.day(at.weekday))
    }

    pub(crate) fn day_mut(&mut self, at: DayRef) -> Result<&mut Day> {
        Ok(self.week_mut(at.week)?.day_mut(at.weekday))
    }

    /// Appends an item to the end of a day and returns its id.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::WeekNotFound` - stale week index
    /// * `DrillbookError::Validation` - duplicate id, blank title, or an item
    ///   that already carries superset membership
    pub fn add_item(&mut self, at: DayRef, item: Item) -> Result<ItemId> {
        self.day(at)?;
        if item.title.trim().is_empty() {
            return Err(DrillbookError::validation("title").with_reason("Item title is required"));
        }
        if self.contains_item(&item.id) {
            return Err(DrillbookError::validation("id")
                .with_reason(format!("Item id '{}' is already in use", item.id)));
        }
        if item.superset.is_some() {
            return Err(DrillbookError::validation("superset")
                .with_reason("New items join a superset through link"));
        }

        let id = item.id.clone();
        debug!("add_item: {} '{}' to {at}", item.kind.as_str(), item.title);
        self.day_mut(at)?.items.push(item);
        Ok(id)
    }

    /// Appends an exercise item.
    pub fn add_exercise(
        &mut self,
        at: DayRef,
        title: impl Into<String>,
        details: ExerciseDetails,
        ids: &mut dyn IdSource,
    ) -> Result<ItemId> {
        self.day(at)?;
        self.add_item(at, Item::exercise(ids.next_item_id(), title, details))
    }

    /// Appends a video item copied from the descriptor.
    pub fn add_video(
        &mut self,
        at: DayRef,
        descriptor: &VideoDescriptor,
        ids: &mut dyn IdSource,
    ) -> Result<ItemId> {
        self.day(at)?;
        self.add_item(at, Item::video(ids.next_item_id(), descriptor))
    }

    /// Appends a reference to `routine`; the routine's exercises are not copied.
    pub fn add_routine(
        &mut self,
        at: DayRef,
        routine: &Routine,
        ids: &mut dyn IdSource,
    ) -> Result<ItemId> {
        self.day(at)?;
        self.add_item(at, Item::routine_reference(ids.next_item_id(), routine))
    }

    /// Merges `patch` into the item, keeping its identity and superset
    /// membership.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::ItemNotFound` - no such item in the day
    /// * `DrillbookError::Validation` - blank title, or exercise fields on a
    ///   non-exercise item
    pub fn edit_item(&mut self, at: DayRef, id: &ItemId, patch: &ItemPatch) -> Result<()> {
        let item = self
            .day(at)?
            .item(id)
            .ok_or_else(|| item_not_found(id, at))?;

        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(
                    DrillbookError::validation("title").with_reason("Item title is required")
                );
            }
        }
        if patch.touches_exercise_fields() && !matches!(item.kind, ItemKind::Exercise(_)) {
            return Err(DrillbookError::validation("kind").with_reason(format!(
                "Sets, reps, tempo, duration and notes only apply to exercises, not {}",
                item.kind.as_str()
            )));
        }

        let item = self
            .day_mut(at)?
            .item_mut(id)
            .ok_or_else(|| item_not_found(id, at))?;

        if let Some(title) = &patch.title {
            item.title = title.clone();
        }
        if let Some(description) = &patch.description {
            item.description = Some(description.clone()).filter(|d| !d.trim().is_empty());
        }
        if let ItemKind::Exercise(details) = &mut item.kind {
            if let Some(sets) = patch.sets {
                details.sets = Some(sets);
            }
            if let Some(reps) = patch.reps {
                details.reps = Some(reps);
            }
            if let Some(tempo) = &patch.tempo {
                details.tempo = Some(tempo.clone());
            }
            if let Some(duration) = &patch.duration {
                details.duration = Some(duration.clone());
            }
            if let Some(notes) = &patch.notes {
                details.notes = Some(notes.clone());
            }
        }

        debug!("edit_item: {id} in {at}");
        Ok(())
    }

    /// Removes an item and returns it.
    ///
    /// When the item belongs to a superset, the whole group is unlinked first
    /// so no single-member group is left behind.
    pub fn delete_item(&mut self, at: DayRef, id: &ItemId) -> Result<Item> {
        let day = self.day_mut(at)?;
        let index = day.position_of(id).ok_or_else(|| item_not_found(id, at))?;

        if let Some(group) = day.items[index].superset_group().cloned() {
            superset::clear_group(day, &group);
        }
        let removed = day.items.remove(index);
        debug!("delete_item: {id} from {at}");
        Ok(removed)
    }

    /// Replaces the day's item order with `order`, a permutation of its ids.
    ///
    /// With [`SupersetPolicy::Clustered`] the members of each group are pulled
    /// together afterwards; [`SupersetPolicy::Loose`] keeps the order as given.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::InvalidPermutation` - ids missing, unknown or repeated
    pub fn reorder_items(
        &mut self,
        at: DayRef,
        order: &[ItemId],
        policy: SupersetPolicy,
    ) -> Result<()> {
        let day = self.day_mut(at)?;
        let current: Vec<ItemId> = day.items.iter().map(|item| item.id.clone()).collect();
        let indices = permutation_indices(&current, order)?;

        let items = std::mem::take(&mut day.items);
        day.items = apply_permutation(items, &indices);
        if policy == SupersetPolicy::Clustered {
            superset::cluster(day);
        }
        debug!("reorder_items: {at} -> {:?}", order);
        Ok(())
    }

    /// Moves an item to the end of another day.
    ///
    /// Superset membership does not travel: the item's group is unlinked in the
    /// source day first.
    pub fn move_item(&mut self, from: DayRef, id: &ItemId, to: DayRef) -> Result<()> {
        self.day(to)?;
        self.day(from)?
            .position_of(id)
            .ok_or_else(|| item_not_found(id, from))?;

        let item = self.delete_item(from, id)?;
        self.day_mut(to)?.items.push(item);
        debug!("move_item: {id} from {from} to {to}");
        Ok(())
    }
}

pub(crate) fn item_not_found(id: &ItemId, at: DayRef) -> DrillbookError {
    DrillbookError::ItemNotFound {
        id: id.clone(),
        location: at.to_string(),
    }
}
