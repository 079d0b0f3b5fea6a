// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tab_bar --heading-base-level=0

//! Understory Tab Bar: mutually exclusive, animated selectors for bottom bars and tab strips.
//!
//! A [`TabBar`] owns two kinds of object:
//!
//! - [`Selector`]: one button. It animates between an inactive and an active
//!   look (width share, icon height, label and background opacity), can be
//!   locked so that it ignores input, and reports when it finished opening.
//! - [`Coordinator`]: an ordered group of selectors of which at most one is
//!   active. Selecting a member hands the selection off from the previous one
//!   and plays a highlight whose shape depends on the [`Direction`] of travel.
//!
//! The crate does not render anything. Hosts describe each selector's elements
//! with [`SelectorParts`], expose their element state through the [`Elements`]
//! trait, and call [`TabBar::tick`] once per frame. Animations are driven by
//! [`understory_tween`].
//!
//! ## Events
//!
//! Finished transitions raise [`TabBarEvent`]s, read with [`TabBar::drain_events`]:
//!
//! - [`TabBarEvent::ContentActivated`] once per completed opening.
//! - [`TabBarEvent::AllContentClosed`] once a group whose content was opened
//!   has closed everything: nothing in it is active and its last closing
//!   transition finished. A group that never finished opening anything has
//!   nothing to close and raises neither event.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use kurbo::Point;
//! use understory_tab_bar::{
//!     Channel, CoordinatorConfig, Direction, Elements, IconId, Selection, SelectorConfig,
//!     SelectorParts, TabBar, TabBarEvent, Target,
//! };
//! use understory_tween::PropertyStore;
//!
//! #[derive(Debug, Default)]
//! struct Scene(BTreeMap<Target<u32>, f64>);
//!
//! impl PropertyStore<Target<u32>> for Scene {
//!     fn get(&self, t: Target<u32>) -> f64 {
//!         let rest = if t.channel.is_scale() { 1.0 } else { 0.0 };
//!         self.0.get(&t).copied().unwrap_or(rest)
//!     }
//!     fn set(&mut self, t: Target<u32>, value: f64) {
//!         self.0.insert(t, value);
//!     }
//! }
//!
//! impl Elements<u32> for Scene {
//!     fn set_pivot(&mut self, _: u32, _: Point) {}
//!     fn icon(&self, _: u32) -> Option<IconId> { None }
//!     fn set_icon(&mut self, _: u32, _: IconId) {}
//!     fn set_interactable(&mut self, _: u32, _: bool) {}
//! }
//!
//! let mut bar = TabBar::new(Scene::default());
//! let group = bar.add_coordinator(CoordinatorConfig::default());
//! let tabs: Vec<_> = (0..3_u32)
//!     .map(|i| {
//!         let base = i * 10;
//!         let parts = SelectorParts {
//!             root: base,
//!             icon: base + 1,
//!             label: base + 2,
//!             background: base + 3,
//!             highlight: Some(base + 4),
//!         };
//!         bar.add_selector(parts, SelectorConfig::default(), Some(group)).unwrap()
//!     })
//!     .collect();
//! bar.initialize();
//!
//! assert_eq!(bar.click(tabs[0]), Ok(Selection::Activated(Direction::Initial)));
//! assert_eq!(bar.click(tabs[2]), Ok(Selection::Activated(Direction::Forward)));
//! for _ in 0..10 {
//!     bar.tick(0.05);
//! }
//!
//! assert!(bar.is_active(tabs[2]));
//! assert_eq!(bar.drain_events(), [TabBarEvent::ContentActivated(tabs[2])]);
//! assert_eq!(bar.elements().get(Target::new(20, Channel::FlexibleWidth)), 0.3);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` in `kurbo` and `tracing`.
//! - `libm`: `no_std` float math for `kurbo`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coordinator;
mod error;
mod highlight;
mod registry;
mod selector;
mod tab_bar;
mod types;

#[cfg(test)]
mod test_support;

pub use coordinator::{Coordinator, CoordinatorConfig, CoordinatorId, Direction, Selection};
pub use error::TabBarError;
pub use highlight::HIGHLIGHT_OVERSHOOT;
pub use registry::SelectorId;
pub use selector::{
    Animator, Completion, LOCK_FADE_DURATION, Selector, SelectorConfig, Transition,
    TransitionPhase,
};
pub use tab_bar::{TabBar, TabBarEvent};
pub use types::{Channel, Elements, IconId, SelectorParts, Target};
