// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coordinator: exclusive selection over an ordered group of selectors.
//!
//! ## Hand-off
//!
//! Selecting a new member deactivates the previous one, activates the new
//! one, and plays a highlight on the new member's background whose shape
//! depends on the [`Direction`] of travel. Direction is derived from the
//! members' positions in the group, never from on-screen geometry.

use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::error::TabBarError;
use crate::highlight;
use crate::registry::{Registry, SelectorId};
use crate::selector::{Animator, Selector};
use crate::types::Elements;

/// Identifier for a coordinator in a [`TabBar`](crate::TabBar).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CoordinatorId(pub(crate) u32);

impl CoordinatorId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Per-coordinator configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatorConfig {
    /// Whether clicking the active selector clears the selection.
    pub allow_no_active: bool,
    /// Duration of the highlight animation, in seconds.
    pub highlight_duration: f64,
    /// Scale the highlight shrinks to before a reveal and after a reset.
    pub highlight_shrink: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            allow_no_active: false,
            highlight_duration: 0.3,
            highlight_shrink: 0.8,
        }
    }
}

/// Direction of a selection hand-off, by group position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Nothing was selected before.
    Initial,
    /// The new selection sits after the previous one.
    Forward,
    /// The new selection sits before the previous one.
    Backward,
}

impl Direction {
    /// Classify a move from position `from` (if any) to position `to`.
    ///
    /// ```rust
    /// use understory_tab_bar::Direction;
    ///
    /// assert_eq!(Direction::between(None, 0), Direction::Initial);
    /// assert_eq!(Direction::between(Some(0), 2), Direction::Forward);
    /// assert_eq!(Direction::between(Some(2), 0), Direction::Backward);
    /// ```
    pub fn between(from: Option<usize>, to: usize) -> Self {
        match from {
            None => Self::Initial,
            Some(from) if to > from => Self::Forward,
            Some(_) => Self::Backward,
        }
    }

    /// `0`, `+1` or `-1`.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Initial => 0,
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Outcome of a selection request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A selector became active after a hand-off in the given direction.
    Activated(Direction),
    /// The active selector was cleared.
    Deactivated,
    /// The request was valid but changed nothing.
    Unchanged,
    /// The input was ignored because the selector is locked.
    Ignored,
}

/// Enforces that at most one of its selectors is active.
#[derive(Clone, Debug)]
pub struct Coordinator {
    id: CoordinatorId,
    config: CoordinatorConfig,
    selectors: Vec<SelectorId>,
    current: Option<SelectorId>,
    last_direction: Option<Direction>,
    initialized: bool,
    /// A member finished opening since the group last reported closing.
    content_open: bool,
}

impl Coordinator {
    pub(crate) fn new(id: CoordinatorId, config: CoordinatorConfig) -> Self {
        Self {
            id,
            config,
            selectors: Vec::new(),
            current: None,
            last_direction: None,
            initialized: false,
            content_open: false,
        }
    }

    /// Id of this coordinator.
    pub fn id(&self) -> CoordinatorId {
        self.id
    }

    /// Configuration.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Members in group order.
    pub fn selectors(&self) -> &[SelectorId] {
        &self.selectors
    }

    /// The selector this coordinator last made active, if any.
    pub fn current_active(&self) -> Option<SelectorId> {
        self.current
    }

    /// Direction of the last hand-off that activated a selector.
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Position of `id` in the group.
    pub fn position(&self, id: SelectorId) -> Option<usize> {
        self.selectors.iter().position(|s| *s == id)
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn is_content_open(&self) -> bool {
        self.content_open
    }

    pub(crate) fn set_content_open(&mut self, open: bool) {
        self.content_open = open;
    }

    pub(crate) fn push(&mut self, id: SelectorId) {
        self.selectors.push(id);
    }

    /// Drop `id` from the current selection if it is the current one.
    pub(crate) fn forget(&mut self, id: SelectorId) {
        if self.current == Some(id) {
            self.current = None;
        }
    }

    /// Whether no member is active.
    pub(crate) fn are_all_deactivated<K>(&self, registry: &Registry<K>) -> bool {
        self.members(registry).all(|s| !s.is_active())
    }

    /// Whether a member is still running a reported closing transition.
    pub(crate) fn has_pending_close<K>(&self, registry: &Registry<K>) -> bool {
        self.members(registry).any(Selector::is_closing)
    }

    fn members<'a, K>(
        &'a self,
        registry: &'a Registry<K>,
    ) -> impl Iterator<Item = &'a Selector<K>> + 'a {
        self.selectors.iter().filter_map(|id| registry.get(*id))
    }

    /// Make `id` the active member.
    pub(crate) fn set_active<K, S>(
        &mut self,
        id: SelectorId,
        registry: &mut Registry<K>,
        animator: &mut Animator<K>,
        elements: &mut S,
    ) -> Result<Selection, TabBarError>
    where
        K: Copy + PartialEq + core::fmt::Debug,
        S: Elements<K> + ?Sized,
    {
        let Some(index) = self.position(id) else {
            warn!(selector = ?id, coordinator = ?self.id, "selector is not in this group");
            return Err(TabBarError::NotInGroup {
                selector: id,
                coordinator: self.id,
            });
        };
        let Some(locked) = registry.get(id).map(Selector::is_locked) else {
            warn!(selector = ?id, "selector no longer exists");
            return Err(TabBarError::UnknownSelector(id));
        };
        let current = self.current.filter(|c| registry.is_alive(*c));

        if current == Some(id) {
            if !self.config.allow_no_active {
                return Ok(Selection::Unchanged);
            }
            if let Some(selector) = registry.get_mut(id) {
                selector.deactivate(animator);
                highlight::reset(selector, &self.config, animator, elements);
            }
            self.current = None;
            debug!(selector = ?id, coordinator = ?self.id, "selection cleared");
            return Ok(Selection::Deactivated);
        }

        if locked {
            warn!(selector = ?id, "locked selector cannot be selected");
            return Err(TabBarError::Locked(id));
        }

        let direction = Direction::between(current.and_then(|c| self.position(c)), index);
        if let Some(previous) = current.and_then(|c| registry.get_mut(c)) {
            previous.deactivate(animator);
            highlight::reset(previous, &self.config, animator, elements);
        }
        if let Some(selector) = registry.get_mut(id) {
            selector.activate(animator);
            highlight::reveal(selector, direction, &self.config, animator, elements);
        }
        self.current = Some(id);
        self.last_direction = Some(direction);
        debug!(
            selector = ?id,
            coordinator = ?self.id,
            direction = direction.sign(),
            "selection handed off"
        );
        Ok(Selection::Activated(direction))
    }

    /// Make the member at `index` active.
    pub(crate) fn set_active_by_index<K, S>(
        &mut self,
        index: usize,
        registry: &mut Registry<K>,
        animator: &mut Animator<K>,
        elements: &mut S,
    ) -> Result<Selection, TabBarError>
    where
        K: Copy + PartialEq + core::fmt::Debug,
        S: Elements<K> + ?Sized,
    {
        let Some(&id) = self.selectors.get(index) else {
            let len = self.selectors.len();
            warn!(index, len, "selector index is out of range");
            return Err(TabBarError::IndexOutOfRange { index, len });
        };
        self.set_active(id, registry, animator, elements)
    }

    /// Deactivate every member, shrink every highlight, and clear the selection.
    pub(crate) fn deactivate_all<K, S>(
        &mut self,
        registry: &mut Registry<K>,
        animator: &mut Animator<K>,
        elements: &mut S,
    ) where
        K: Copy + PartialEq + core::fmt::Debug,
        S: Elements<K> + ?Sized,
    {
        for &id in &self.selectors {
            if let Some(selector) = registry.get_mut(id) {
                selector.deactivate(animator);
                highlight::reset(selector, &self.config, animator, elements);
            }
        }
        self.current = None;
        self.initialized = true;
    }
}
