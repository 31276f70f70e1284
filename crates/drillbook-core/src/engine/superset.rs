//! Superset coordination: back-to-back groups of items within one day.
//!
//! A group is identified by a [`SupersetId`] shared by its members; each
//! member also carries its 1-based position in link order. Groups only ever
//! come into existence with two members and are dissolved as a whole, so a
//! single-member group is never observable.

use std::collections::HashSet;

use log::debug;

use super::{item_ops::item_not_found, DayRef};
use crate::{
    error::{DrillbookError, Result},
    ids::{IdSource, ItemId, SupersetId},
    models::{Day, Item, ProgramDocument, SupersetMembership},
};

/// Whether superset members are kept adjacent after a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupersetPolicy {
    /// Reorders are applied verbatim; members may end up apart.
    #[default]
    Loose,
    /// After a reorder, members are gathered at the first member's position,
    /// sorted by superset order.
    Clustered,
}

impl ProgramDocument {
    /// Links two items of the same day into one superset and returns the group.
    ///
    /// If one item already belongs to a group, the other joins it with the
    /// next order. If neither does, a new group is created with `a` first and
    /// `b` second. Linking two members of the same group changes nothing.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::ItemNotFound` - either id missing from the day
    /// * `DrillbookError::Validation` - `a` and `b` are the same item, or
    ///   either is a rest marker
    /// * `DrillbookError::SupersetConflict` - the items are in different groups
    pub fn link(
        &mut self,
        at: DayRef,
        a: &ItemId,
        b: &ItemId,
        ids: &mut dyn IdSource,
    ) -> Result<SupersetId> {
        let day = self.day(at)?;
        let first = day.item(a).ok_or_else(|| item_not_found(a, at))?;
        let second = day.item(b).ok_or_else(|| item_not_found(b, at))?;

        if a == b {
            return Err(DrillbookError::validation("item")
                .with_reason("An item cannot be linked with itself"));
        }
        // Rest markers are dropped on save, which would orphan their partner.
        if first.is_rest() || second.is_rest() {
            return Err(DrillbookError::validation("item")
                .with_reason("Rest markers cannot join a superset"));
        }

        let (group, joining) = match (first.superset_group(), second.superset_group()) {
            (Some(ga), Some(gb)) if ga == gb => return Ok(ga.clone()),
            (Some(ga), Some(_)) => {
                return Err(DrillbookError::SupersetConflict {
                    item: b.clone(),
                    group: ga.clone(),
                })
            }
            (Some(ga), None) => (ga.clone(), vec![b.clone()]),
            (None, Some(gb)) => (gb.clone(), vec![a.clone()]),
            (None, None) => (ids.next_superset_id(), vec![a.clone(), b.clone()]),
        };

        let day = self.day_mut(at)?;
        let mut next = next_order(day, &group);
        for id in &joining {
            if let Some(item) = day.item_mut(id) {
                item.superset = Some(SupersetMembership {
                    group: group.clone(),
                    order: next,
                });
                next += 1;
            }
        }

        debug!("link: {a} + {b} in {at} -> group {group}");
        Ok(group)
    }

    /// Dissolves the superset the item belongs to and returns how many items
    /// were released. An item outside any superset releases nothing.
    ///
    /// # Errors
    ///
    /// * `DrillbookError::ItemNotFound` - no such item in the day
    pub fn unlink(&mut self, at: DayRef, id: &ItemId) -> Result<usize> {
        let day = self.day_mut(at)?;
        let item = day.item(id).ok_or_else(|| item_not_found(id, at))?;

        let Some(group) = item.superset_group().cloned() else {
            return Ok(0);
        };
        let cleared = clear_group(day, &group);
        debug!("unlink: group {group} in {at} released {cleared} items");
        Ok(cleared)
    }

    /// Members of `group` in the day, sorted by superset order.
    pub fn superset_members(&self, at: DayRef, group: &SupersetId) -> Result<Vec<&Item>> {
        let mut members: Vec<&Item> = self
            .day(at)?
            .items
            .iter()
            .filter(|item| item.superset_group() == Some(group))
            .collect();
        members.sort_by_key(|item| item.superset.as_ref().map(|m| m.order));
        Ok(members)
    }
}

fn next_order(day: &Day, group: &SupersetId) -> u32 {
    day.items
        .iter()
        .filter_map(|item| item.superset.as_ref())
        .filter(|m| &m.group == group)
        .map(|m| m.order)
        .max()
        .unwrap_or(0)
        + 1
}

/// Clears group id and order on every member of `group` in the day.
pub(crate) fn clear_group(day: &mut Day, group: &SupersetId) -> usize {
    let mut cleared = 0;
    for item in &mut day.items {
        if item.superset_group() == Some(group) {
            item.superset = None;
            cleared += 1;
        }
    }
    cleared
}

/// Gathers each group's members at the position of its first member.
pub(crate) fn cluster(day: &mut Day) {
    let items = std::mem::take(&mut day.items);
    let mut placed: HashSet<SupersetId> = HashSet::new();
    let mut ordered = Vec::with_capacity(items.len());

    for item in &items {
        match item.superset_group() {
            None => ordered.push(item.clone()),
            Some(group) => {
                if placed.insert(group.clone()) {
                    let mut members: Vec<&Item> = items
                        .iter()
                        .filter(|other| other.superset_group() == Some(group))
                        .collect();
                    members.sort_by_key(|m| m.superset.as_ref().map(|s| s.order));
                    ordered.extend(members.into_iter().cloned());
                }
            }
        }
    }

    day.items = ordered;
}
