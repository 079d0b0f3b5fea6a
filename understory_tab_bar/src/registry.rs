// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector storage with generational ids.

use alloc::vec::Vec;

use crate::selector::Selector;

/// Identifier for a selector in a [`TabBar`](crate::TabBar) (generational).
///
/// Ids of removed selectors never resolve again, so holding one behaves like a
/// weak reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SelectorId(pub(crate) u32, pub(crate) u32);

impl SelectorId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Every selector of a bar, coordinated or not.
///
/// Uncoordinated selectors fall back to scanning this registry when they need
/// to know whether anything is still active.
#[derive(Clone, Debug)]
pub(crate) struct Registry<K> {
    slots: Vec<Option<Selector<K>>>,
    /// last generation per slot (persists across removals)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<K> Registry<K> {
    pub(crate) fn insert(&mut self, mut selector: Selector<K>) -> SelectorId {
        let id = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            SelectorId(idx as u32, generation)
        } else {
            self.slots.push(None);
            self.generations.push(1);
            SelectorId((self.slots.len() - 1) as u32, 1)
        };
        selector.id = id;
        self.slots[id.idx()] = Some(selector);
        id
    }

    pub(crate) fn remove(&mut self, id: SelectorId) -> Option<Selector<K>> {
        if !self.is_alive(id) {
            return None;
        }
        self.free_list.push(id.idx());
        self.slots[id.idx()].take()
    }

    pub(crate) fn is_alive(&self, id: SelectorId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get(&self, id: SelectorId) -> Option<&Selector<K>> {
        self.slots
            .get(id.idx())
            .and_then(Option::as_ref)
            .filter(|s| s.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: SelectorId) -> Option<&mut Selector<K>> {
        self.slots
            .get_mut(id.idx())
            .and_then(Option::as_mut)
            .filter(|s| s.id == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Selector<K>> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Selector<K>> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// Degraded-mode check: no selector anywhere in the bar is active.
    pub(crate) fn are_all_deactivated(&self) -> bool {
        self.iter().all(|s| !s.is_active())
    }

    /// Whether any selector is still running a reported closing transition.
    pub(crate) fn has_pending_close(&self) -> bool {
        self.iter().any(Selector::is_closing)
    }
}
