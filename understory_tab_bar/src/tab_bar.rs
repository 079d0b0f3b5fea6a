// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host that owns selectors, coordinators, the scheduler and the elements.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::coordinator::{Coordinator, CoordinatorConfig, CoordinatorId, Direction, Selection};
use crate::error::TabBarError;
use crate::highlight;
use crate::registry::{Registry, SelectorId};
use crate::selector::{Animator, Completion, Selector, SelectorConfig, Settled, TransitionPhase};
use crate::types::{Elements, SelectorParts};

/// Event raised when a transition finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabBarEvent {
    /// The selector finished opening. Raised once per completed activation.
    ContentActivated(SelectorId),
    /// A group whose content was opened finished closing: nothing in it is
    /// active and its last closing transition ended. Raised once per opening
    /// of the group. The payload is the coordinator, or `None` for the group
    /// of uncoordinated selectors.
    AllContentClosed(Option<CoordinatorId>),
}

/// A tab bar: selectors, their coordinators, and the animation state driving them.
///
/// ## Usage
///
/// - Add coordinators with [`TabBar::add_coordinator`], then selectors with
///   [`TabBar::add_selector`]. A coordinated selector joins the end of its
///   coordinator's group, so insertion order is group order.
/// - Call [`TabBar::initialize`] once the scene is set up.
/// - Feed user input to [`TabBar::click`], call [`TabBar::tick`] every frame,
///   and read [`TabBarEvent`]s with [`TabBar::drain_events`].
///
/// Operations that name a selector or coordinator by id return
/// [`TabBarError`] when the id is unknown; the bar is left unchanged.
#[derive(Debug)]
pub struct TabBar<K, S> {
    elements: S,
    animator: Animator<K>,
    registry: Registry<K>,
    coordinators: Vec<Coordinator>,
    /// Open-content marker of the uncoordinated group.
    loose_content_open: bool,
    events: Vec<TabBarEvent>,
}

impl<K, S> TabBar<K, S>
where
    K: Copy + PartialEq + Debug,
    S: Elements<K>,
{
    /// Create an empty bar over the host's elements.
    pub fn new(elements: S) -> Self {
        Self {
            elements,
            animator: Animator::new(),
            registry: Registry::default(),
            coordinators: Vec::new(),
            loose_content_open: false,
            events: Vec::new(),
        }
    }

    /// The host's elements.
    pub fn elements(&self) -> &S {
        &self.elements
    }

    /// Mutable access to the host's elements.
    pub fn elements_mut(&mut self) -> &mut S {
        &mut self.elements
    }

    /// The scheduler driving every transition of this bar.
    pub fn animator(&self) -> &Animator<K> {
        &self.animator
    }

    /// Add an empty coordinator.
    pub fn add_coordinator(&mut self, config: CoordinatorConfig) -> CoordinatorId {
        let id = CoordinatorId(self.coordinators.len() as u32);
        self.coordinators.push(Coordinator::new(id, config));
        id
    }

    /// Add a selector, optionally managed by `coordinator`.
    ///
    /// The selector is inert until [`TabBar::initialize`] runs.
    pub fn add_selector(
        &mut self,
        parts: SelectorParts<K>,
        config: SelectorConfig,
        coordinator: Option<CoordinatorId>,
    ) -> Result<SelectorId, TabBarError> {
        if let Some(c) = coordinator {
            self.coordinator_checked(c)?;
        }
        let id = self
            .registry
            .insert(Selector::new(parts, config, coordinator));
        if let Some(c) = coordinator {
            self.coordinators[c.idx()].push(id);
        }
        Ok(id)
    }

    /// Initialize every selector and coordinator that has not been initialized yet.
    ///
    /// Selectors capture their rest state and build their transitions first,
    /// coming back inactive after a [`TabBar::teardown`]. Coordinators then
    /// deactivate all of their members, so nothing starts out active.
    pub fn initialize(&mut self) {
        for selector in self.registry.iter_mut() {
            if !selector.is_initialized() {
                selector.initialize(&mut self.animator, &mut self.elements);
                if let Some(c) = selector
                    .coordinator()
                    .and_then(|c| self.coordinators.get_mut(c.idx()))
                {
                    c.forget(selector.id());
                }
            }
        }
        for coordinator in &mut self.coordinators {
            if !coordinator.is_initialized() {
                coordinator.deactivate_all(
                    &mut self.registry,
                    &mut self.animator,
                    &mut self.elements,
                );
            }
        }
    }

    /// Initialize one selector again, rebuilding its transitions.
    ///
    /// The selector comes back inactive and its coordinator forgets it as the
    /// current selection. No event is raised for the content it had open.
    pub fn initialize_selector(&mut self, id: SelectorId) -> Result<(), TabBarError> {
        let selector = Self::selector_checked(&mut self.registry, id)?;
        let group = selector.coordinator();
        selector.initialize(&mut self.animator, &mut self.elements);
        if let Some(c) = group.and_then(|c| self.coordinators.get_mut(c.idx())) {
            if c.current_active() == Some(id) {
                if let Some(selector) = self.registry.get(id) {
                    highlight::reset(selector, c.config(), &mut self.animator, &mut self.elements);
                }
            }
            c.forget(id);
        }
        self.discard_content_if_empty(group);
        Ok(())
    }

    /// Handle a click on a selector.
    ///
    /// Locked selectors ignore the click. Coordinated selectors delegate to
    /// [`TabBar::set_active`]; uncoordinated ones toggle themselves.
    pub fn click(&mut self, id: SelectorId) -> Result<Selection, TabBarError> {
        let selector = Self::selector_checked(&mut self.registry, id)?;
        if selector.is_locked() {
            debug!(selector = ?id, "click ignored: selector is locked");
            return Ok(Selection::Ignored);
        }
        if let Some(c) = selector.coordinator() {
            return self.set_active(c, id);
        }
        if selector.is_active() {
            selector.deactivate(&mut self.animator);
            Ok(Selection::Deactivated)
        } else {
            selector.activate(&mut self.animator);
            Ok(Selection::Activated(Direction::Initial))
        }
    }

    /// Make `id` the active member of `coordinator`.
    pub fn set_active(
        &mut self,
        coordinator: CoordinatorId,
        id: SelectorId,
    ) -> Result<Selection, TabBarError> {
        self.coordinator_checked(coordinator)?;
        self.coordinators[coordinator.idx()].set_active(
            id,
            &mut self.registry,
            &mut self.animator,
            &mut self.elements,
        )
    }

    /// Make the member at `index` of `coordinator` active.
    pub fn set_active_by_index(
        &mut self,
        coordinator: CoordinatorId,
        index: usize,
    ) -> Result<Selection, TabBarError> {
        self.coordinator_checked(coordinator)?;
        self.coordinators[coordinator.idx()].set_active_by_index(
            index,
            &mut self.registry,
            &mut self.animator,
            &mut self.elements,
        )
    }

    /// Deactivate every member of `coordinator` and clear its selection.
    pub fn deactivate_all(&mut self, coordinator: CoordinatorId) -> Result<(), TabBarError> {
        self.coordinator_checked(coordinator)?;
        self.coordinators[coordinator.idx()].deactivate_all(
            &mut self.registry,
            &mut self.animator,
            &mut self.elements,
        );
        Ok(())
    }

    /// Whether nothing in a group is active.
    ///
    /// `None` (or an unknown coordinator) scans every selector of the bar.
    pub fn are_all_deactivated(&self, coordinator: Option<CoordinatorId>) -> bool {
        match coordinator.and_then(|c| self.coordinators.get(c.idx())) {
            Some(c) => c.are_all_deactivated(&self.registry),
            None => self.registry.are_all_deactivated(),
        }
    }

    /// Activate a selector directly, bypassing its coordinator.
    ///
    /// Returns whether anything changed.
    pub fn activate(&mut self, id: SelectorId) -> Result<bool, TabBarError> {
        Ok(Self::selector_checked(&mut self.registry, id)?.activate(&mut self.animator))
    }

    /// Deactivate a selector directly, bypassing its coordinator.
    pub fn deactivate(&mut self, id: SelectorId) -> Result<bool, TabBarError> {
        Ok(Self::selector_checked(&mut self.registry, id)?.deactivate(&mut self.animator))
    }

    /// Deactivate a selector without reporting [`TabBarEvent::AllContentClosed`]
    /// when its closing transition ends.
    ///
    /// When this empties the group, its open content counts as closed.
    pub fn force_deactivate_silently(&mut self, id: SelectorId) -> Result<bool, TabBarError> {
        let selector = Self::selector_checked(&mut self.registry, id)?;
        let group = selector.coordinator();
        let changed = selector.force_deactivate_silently(&mut self.animator);
        if changed {
            self.discard_content_if_empty(group);
        }
        Ok(changed)
    }

    /// Lock or unlock a selector.
    pub fn set_locked(&mut self, id: SelectorId, locked: bool) -> Result<(), TabBarError> {
        Self::selector_checked(&mut self.registry, id)?.set_locked(
            locked,
            &mut self.animator,
            &mut self.elements,
        );
        Ok(())
    }

    /// Whether `id` is a live, active selector.
    pub fn is_active(&self, id: SelectorId) -> bool {
        self.registry.get(id).is_some_and(Selector::is_active)
    }

    /// Whether `id` is a live, locked selector.
    pub fn is_locked(&self, id: SelectorId) -> bool {
        self.registry.get(id).is_some_and(Selector::is_locked)
    }

    /// Transition state of `id`.
    pub fn phase(&self, id: SelectorId) -> Option<TransitionPhase> {
        self.registry.get(id).map(|s| s.phase(&self.animator))
    }

    /// Look up a selector.
    pub fn selector(&self, id: SelectorId) -> Option<&Selector<K>> {
        self.registry.get(id)
    }

    /// Every live selector, in slot order.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector<K>> + '_ {
        self.registry.iter()
    }

    /// Look up a coordinator.
    pub fn coordinator(&self, id: CoordinatorId) -> Option<&Coordinator> {
        self.coordinators.get(id.idx())
    }

    /// Advance every transition by `dt` seconds and raise events for the ones that finished.
    pub fn tick(&mut self, dt: f64) {
        for completion in self.animator.tick(dt, &mut self.elements) {
            self.route(completion);
        }
    }

    fn route(&mut self, completion: Completion) {
        let Completion {
            selector: id,
            transition,
        } = completion;
        let Some(selector) = self.registry.get_mut(id) else {
            trace!(selector = ?id, "completion for a removed selector");
            return;
        };
        let group = selector.coordinator();
        match selector.settle(transition) {
            Settled::Opened => {
                self.set_content_open(group, true);
                self.events.push(TabBarEvent::ContentActivated(id));
            }
            Settled::Closed => {
                if self.group_closed(group) {
                    self.set_content_open(group, false);
                    debug!(selector = ?id, ?group, "all content closed");
                    self.events.push(TabBarEvent::AllContentClosed(group));
                }
            }
            Settled::Stale => trace!(selector = ?id, ?transition, "stale completion"),
        }
    }

    /// The group has open content, nothing in it is active, and no member is still closing.
    fn group_closed(&self, group: Option<CoordinatorId>) -> bool {
        match group.and_then(|c| self.coordinators.get(c.idx())) {
            Some(c) => {
                c.is_content_open()
                    && c.are_all_deactivated(&self.registry)
                    && !c.has_pending_close(&self.registry)
            }
            None => {
                self.loose_content_open
                    && self.registry.are_all_deactivated()
                    && !self.registry.has_pending_close()
            }
        }
    }

    fn set_content_open(&mut self, group: Option<CoordinatorId>, open: bool) {
        match group.and_then(|c| self.coordinators.get_mut(c.idx())) {
            Some(c) => c.set_content_open(open),
            None => self.loose_content_open = open,
        }
    }

    /// Drop a group's open content without reporting it, once nothing in the group is active.
    fn discard_content_if_empty(&mut self, group: Option<CoordinatorId>) {
        if self.are_all_deactivated(group) {
            self.set_content_open(group, false);
        }
    }

    /// Take the events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<TabBarEvent> {
        core::mem::take(&mut self.events)
    }

    /// Tear down and remove a selector.
    ///
    /// Its id stops resolving, and coordinators that had it selected forget it.
    /// The id keeps its slot in its coordinator's group, so the positions of
    /// the other members do not shift.
    pub fn remove_selector(&mut self, id: SelectorId) -> Option<Selector<K>> {
        let mut selector = self.registry.remove(id)?;
        selector.teardown(&mut self.animator);
        for coordinator in &mut self.coordinators {
            coordinator.forget(id);
        }
        self.discard_content_if_empty(selector.coordinator());
        Some(selector)
    }

    /// Cancel every selector's transitions without firing completions.
    ///
    /// Idempotent. Selectors can be brought back with [`TabBar::initialize`].
    pub fn teardown(&mut self) {
        for selector in self.registry.iter_mut() {
            selector.teardown(&mut self.animator);
        }
        for coordinator in &mut self.coordinators {
            coordinator.set_content_open(false);
        }
        self.loose_content_open = false;
    }

    fn coordinator_checked(&self, id: CoordinatorId) -> Result<(), TabBarError> {
        if self.coordinators.get(id.idx()).is_none() {
            warn!(coordinator = ?id, "unknown coordinator");
            return Err(TabBarError::UnknownCoordinator(id));
        }
        Ok(())
    }

    fn selector_checked(
        registry: &mut Registry<K>,
        id: SelectorId,
    ) -> Result<&mut Selector<K>, TabBarError> {
        registry.get_mut(id).ok_or_else(|| {
            warn!(selector = ?id, "unknown selector");
            TabBarError::UnknownSelector(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FRAME, MockElements, coordinated_bar, parts, settle};
    use crate::types::{Channel, Target};

    fn loose_bar(count: u32) -> (TabBar<u32, MockElements>, Vec<SelectorId>) {
        let mut bar = TabBar::new(MockElements::default());
        let ids = (0..count)
            .map(|i| {
                bar.add_selector(parts(i * 10), SelectorConfig::default(), None)
                    .unwrap()
            })
            .collect();
        bar.initialize();
        (bar, ids)
    }

    #[test]
    fn startup_leaves_nothing_active() {
        let (mut bar, c, ids) = coordinated_bar(3, CoordinatorConfig::default());
        assert!(ids.iter().all(|id| !bar.is_active(*id)));
        assert!(bar.are_all_deactivated(Some(c)));
        assert_eq!(bar.phase(ids[0]), Some(TransitionPhase::Resting));
        assert!(settle(&mut bar).is_empty());
        // Every highlight rests at the shrink factor.
        assert_eq!(bar.elements().value(14, Channel::ScaleY), 0.8);
    }

    #[test]
    fn activate_then_deactivate_raises_nothing() {
        let (mut bar, ids) = loose_bar(1);
        assert_eq!(bar.activate(ids[0]), Ok(true));
        assert_eq!(bar.deactivate(ids[0]), Ok(true));
        assert!(!bar.is_active(ids[0]));
        assert!(settle(&mut bar).is_empty());
    }

    #[test]
    fn activate_twice_raises_one_event() {
        let (mut bar, ids) = loose_bar(1);
        assert_eq!(bar.activate(ids[0]), Ok(true));
        bar.tick(0.1);
        assert_eq!(bar.activate(ids[0]), Ok(false));
        assert_eq!(settle(&mut bar), [TabBarEvent::ContentActivated(ids[0])]);
    }

    #[test]
    fn uncoordinated_click_toggles_and_scans_every_selector() {
        let (mut bar, ids) = loose_bar(2);
        let opened = Ok(Selection::Activated(Direction::Initial));
        assert_eq!(bar.click(ids[0]), opened);
        assert_eq!(bar.click(ids[1]), opened);
        assert_eq!(
            settle(&mut bar),
            [
                TabBarEvent::ContentActivated(ids[0]),
                TabBarEvent::ContentActivated(ids[1])
            ]
        );

        assert_eq!(bar.click(ids[0]), Ok(Selection::Deactivated));
        assert!(settle(&mut bar).is_empty(), "the other selector is still open");

        assert_eq!(bar.click(ids[1]), Ok(Selection::Deactivated));
        assert_eq!(settle(&mut bar), [TabBarEvent::AllContentClosed(None)]);
    }

    #[test]
    fn simultaneous_closes_report_once() {
        let (mut bar, ids) = loose_bar(2);
        bar.click(ids[0]).unwrap();
        bar.click(ids[1]).unwrap();
        settle(&mut bar);
        bar.deactivate(ids[0]).unwrap();
        bar.deactivate(ids[1]).unwrap();
        assert_eq!(settle(&mut bar), [TabBarEvent::AllContentClosed(None)]);
    }

    #[test]
    fn locked_selector_ignores_clicks() {
        let (mut bar, c, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.set_locked(ids[0], true).unwrap();
        assert_eq!(bar.click(ids[0]), Ok(Selection::Ignored));
        assert!(!bar.is_active(ids[0]));
        assert_eq!(bar.coordinator(c).unwrap().current_active(), None);

        bar.set_locked(ids[0], false).unwrap();
        assert!(!bar.is_locked(ids[0]));
        assert_eq!(
            bar.click(ids[0]),
            Ok(Selection::Activated(Direction::Initial))
        );
    }

    #[test]
    fn lock_keeps_an_active_selector_active() {
        let (mut bar, _, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.click(ids[1]).unwrap();
        settle(&mut bar);
        bar.set_locked(ids[1], true).unwrap();
        assert!(bar.is_active(ids[1]));
        assert_eq!(bar.click(ids[1]), Ok(Selection::Ignored));
        bar.set_locked(ids[1], false).unwrap();
        assert!(bar.is_active(ids[1]));
        assert_eq!(bar.elements().interactable.get(&10), Some(&true));
    }

    #[test]
    fn silent_deactivation_does_not_close_the_group() {
        let (mut bar, c, ids) = coordinated_bar(3, CoordinatorConfig::default());
        bar.click(ids[0]).unwrap();
        settle(&mut bar);

        assert_eq!(bar.force_deactivate_silently(ids[0]), Ok(true));
        assert!(!bar.is_active(ids[0]));
        assert_eq!(bar.phase(ids[0]), Some(TransitionPhase::Deactivating));
        assert!(bar.are_all_deactivated(Some(c)));
        assert!(settle(&mut bar).is_empty());
        assert_eq!(bar.phase(ids[0]), Some(TransitionPhase::Resting));
        assert_eq!(bar.elements().value(0, Channel::FlexibleWidth), 0.1);
    }

    #[test]
    fn remove_selector_cancels_its_transitions() {
        let (mut bar, ids) = loose_bar(1);
        bar.activate(ids[0]).unwrap();
        let removed = bar.remove_selector(ids[0]).unwrap();
        assert!(!removed.is_initialized());
        assert!(bar.animator().is_empty());
        assert!(settle(&mut bar).is_empty());
        assert_eq!(bar.click(ids[0]), Err(TabBarError::UnknownSelector(ids[0])));
        assert!(bar.remove_selector(ids[0]).is_none());
    }

    #[test]
    fn teardown_is_idempotent_and_silent() {
        let (mut bar, c, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.set_active(c, ids[0]).unwrap();
        bar.teardown();
        bar.teardown();
        assert!(settle(&mut bar).is_empty());
        assert!(!bar.selector(ids[0]).unwrap().is_initialized());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut bar: TabBar<u32, MockElements> = TabBar::new(MockElements::default());
        let bogus = CoordinatorId(3);
        assert_eq!(
            bar.add_selector(parts(0), SelectorConfig::default(), Some(bogus)),
            Err(TabBarError::UnknownCoordinator(bogus))
        );
        assert_eq!(
            bar.set_active_by_index(bogus, 0),
            Err(TabBarError::UnknownCoordinator(bogus))
        );
        assert!(bar.selectors().next().is_none());
    }

    #[test]
    fn initialize_selector_rebuilds_transitions() {
        let (mut bar, ids) = loose_bar(1);
        bar.elements_mut()
            .values
            .insert(Target::new(1, Channel::PositionY), 12.0);
        bar.initialize_selector(ids[0]).unwrap();
        assert_eq!(
            bar.selector(ids[0]).unwrap().original_icon_position().y,
            12.0
        );
        assert_eq!(bar.animator().len(), 2);
        assert!(bar.drain_events().is_empty());
    }

    #[test]
    fn hand_off_then_clear_reports_the_opened_content() {
        let config = CoordinatorConfig {
            allow_no_active: true,
            ..CoordinatorConfig::default()
        };
        let (mut bar, c, ids) = coordinated_bar(3, config);
        bar.click(ids[0]).unwrap();
        assert_eq!(settle(&mut bar), [TabBarEvent::ContentActivated(ids[0])]);

        assert_eq!(
            bar.click(ids[1]),
            Ok(Selection::Activated(Direction::Forward))
        );
        bar.tick(FRAME);
        bar.tick(FRAME);
        assert!(bar.drain_events().is_empty(), "the hand-off keeps content open");

        // Cleared before its own opening completes.
        assert_eq!(bar.click(ids[1]), Ok(Selection::Deactivated));
        assert_eq!(settle(&mut bar), [TabBarEvent::AllContentClosed(Some(c))]);
        assert!(settle(&mut bar).is_empty());

        // The report consumed the open content.
        bar.click(ids[2]).unwrap();
        bar.click(ids[2]).unwrap();
        assert!(settle(&mut bar).is_empty());
    }

    #[test]
    fn silent_close_discards_the_open_content() {
        let (mut bar, ids) = loose_bar(1);
        bar.click(ids[0]).unwrap();
        settle(&mut bar);
        bar.force_deactivate_silently(ids[0]).unwrap();
        assert!(settle(&mut bar).is_empty());

        bar.activate(ids[0]).unwrap();
        bar.deactivate(ids[0]).unwrap();
        assert!(settle(&mut bar).is_empty());
    }

    #[test]
    fn unlock_fade_does_not_outlive_a_hand_off() {
        let (mut bar, _, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.click(ids[0]).unwrap();
        settle(&mut bar);
        bar.set_locked(ids[0], true).unwrap();
        settle(&mut bar);

        bar.set_locked(ids[0], false).unwrap();
        bar.click(ids[1]).unwrap();
        settle(&mut bar);
        assert!(!bar.is_active(ids[0]));
        assert_eq!(bar.elements().value(2, Channel::Opacity), 0.0);
        assert_eq!(bar.elements().value(12, Channel::Opacity), 1.0);
    }

    #[test]
    fn reinitializing_the_active_selector_clears_the_selection() {
        let (mut bar, c, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.click(ids[0]).unwrap();
        settle(&mut bar);

        bar.initialize_selector(ids[0]).unwrap();
        assert!(!bar.is_active(ids[0]));
        assert_eq!(bar.phase(ids[0]), Some(TransitionPhase::Resting));
        assert_eq!(bar.coordinator(c).unwrap().current_active(), None);
        assert!(settle(&mut bar).is_empty());
        assert_eq!(bar.elements().value(0, Channel::FlexibleWidth), 0.1);
        assert_eq!(bar.elements().value(2, Channel::Opacity), 0.0);
        assert_eq!(bar.elements().value(4, Channel::ScaleY), 0.8);

        assert_eq!(
            bar.click(ids[1]),
            Ok(Selection::Activated(Direction::Initial))
        );
        assert_eq!(settle(&mut bar), [TabBarEvent::ContentActivated(ids[1])]);
    }

    #[test]
    fn initialize_after_teardown_starts_from_nothing_selected() {
        let (mut bar, c, ids) = coordinated_bar(2, CoordinatorConfig::default());
        bar.set_active(c, ids[1]).unwrap();
        settle(&mut bar);

        bar.teardown();
        bar.initialize();
        assert!(bar.are_all_deactivated(Some(c)));
        assert_eq!(
            bar.selector(ids[1]).unwrap().original_icon_position().y,
            0.0,
            "rest position survives the raised icon"
        );
        assert_eq!(bar.elements().value(11, Channel::PositionY), 0.0);
        assert_eq!(bar.coordinator(c).unwrap().current_active(), None);
        assert_eq!(
            bar.click(ids[1]),
            Ok(Selection::Activated(Direction::Initial))
        );
        assert_eq!(settle(&mut bar), [TabBarEvent::ContentActivated(ids[1])]);
    }
}
