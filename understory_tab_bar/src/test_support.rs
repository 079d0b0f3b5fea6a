// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory elements and helpers shared by the unit tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Point;
use understory_tween::PropertyStore;

use crate::coordinator::{CoordinatorConfig, CoordinatorId};
use crate::registry::SelectorId;
use crate::selector::{Animator, Completion, SelectorConfig};
use crate::tab_bar::{TabBar, TabBarEvent};
use crate::types::{Channel, Elements, IconId, SelectorParts, Target};

/// Frame step used by the helpers.
pub(crate) const FRAME: f64 = 0.05;

#[derive(Clone, Debug, Default)]
pub(crate) struct MockElements {
    pub(crate) values: BTreeMap<Target<u32>, f64>,
    pub(crate) pivots: BTreeMap<u32, Point>,
    pub(crate) icons: BTreeMap<u32, IconId>,
    pub(crate) interactable: BTreeMap<u32, bool>,
}

impl MockElements {
    pub(crate) fn value(&self, element: u32, channel: Channel) -> f64 {
        self.get(Target::new(element, channel))
    }

    pub(crate) fn place_icon(&mut self, element: u32, position: Point) {
        self.set(Target::new(element, Channel::PositionX), position.x);
        self.set(Target::new(element, Channel::PositionY), position.y);
    }
}

impl PropertyStore<Target<u32>> for MockElements {
    fn get(&self, property: Target<u32>) -> f64 {
        self.values
            .get(&property)
            .copied()
            .unwrap_or(if property.channel.is_scale() { 1.0 } else { 0.0 })
    }

    fn set(&mut self, property: Target<u32>, value: f64) {
        self.values.insert(property, value);
    }
}

impl Elements<u32> for MockElements {
    fn set_pivot(&mut self, element: u32, pivot: Point) {
        self.pivots.insert(element, pivot);
    }

    fn icon(&self, element: u32) -> Option<IconId> {
        self.icons.get(&element).copied()
    }

    fn set_icon(&mut self, element: u32, icon: IconId) {
        self.icons.insert(element, icon);
    }

    fn set_interactable(&mut self, element: u32, interactable: bool) {
        self.interactable.insert(element, interactable);
    }
}

/// Parts for a selector whose elements are numbered from `base`:
/// root `base`, icon `base + 1`, label `base + 2`, background `base + 3`,
/// highlight `base + 4`.
pub(crate) fn parts(base: u32) -> SelectorParts<u32> {
    SelectorParts {
        root: base,
        icon: base + 1,
        label: base + 2,
        background: base + 3,
        highlight: Some(base + 4),
    }
}

/// Tick `animator` in frame steps until `seconds` have passed.
pub(crate) fn run_for(
    animator: &mut Animator<u32>,
    elements: &mut MockElements,
    seconds: f64,
) -> Vec<Completion> {
    let frames = (seconds / FRAME + 0.5) as usize;
    let mut fired = Vec::new();
    for _ in 0..frames {
        fired.extend(animator.tick(FRAME, elements));
    }
    fired
}

/// A bar with one coordinator over `count` initialized selectors.
///
/// Selector `i` uses [`parts`]`(i * 10)`. Startup events are drained.
pub(crate) fn coordinated_bar(
    count: u32,
    config: CoordinatorConfig,
) -> (TabBar<u32, MockElements>, CoordinatorId, Vec<SelectorId>) {
    let mut bar = TabBar::new(MockElements::default());
    let coordinator = bar.add_coordinator(config);
    let ids = (0..count)
        .map(|i| {
            bar.add_selector(parts(i * 10), SelectorConfig::default(), Some(coordinator))
                .unwrap()
        })
        .collect();
    bar.initialize();
    settle(&mut bar);
    (bar, coordinator, ids)
}

/// Tick until every transition has finished and return the events raised.
pub(crate) fn settle(bar: &mut TabBar<u32, MockElements>) -> Vec<TabBarEvent> {
    for _ in 0..40 {
        bar.tick(FRAME);
    }
    bar.drain_events()
}
