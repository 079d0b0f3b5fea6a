// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tween --heading-base-level=0

//! Understory Tween: renderer-agnostic property animation for UI transitions.
//!
//! The crate provides the animation capability used by stateful widgets such
//! as the tab bar in `understory_tab_bar`:
//!
//! - [`Tween`]: drive one numeric property toward a target over a duration,
//!   through an [`Ease`] curve.
//! - [`Sequence`]: join tweens so they run together, or append them so they
//!   run one after another, and control the result as one unit.
//! - [`Scheduler`]: owns sequences, advances the playing ones on every
//!   [`Scheduler::tick`], and supports pause, restart, kill, and one
//!   replaceable completion value per sequence.
//! - [`PropertyStore`]: the seam through which tweens read and write the
//!   host's element state.
//!
//! The crate deliberately does **not** know about widgets or rendering. Host
//! frameworks choose the property key type `P` (for example an
//! `(element, channel)` pair), implement [`PropertyStore`] over their state,
//! and call [`Scheduler::tick`] once per frame.
//!
//! ## Completion values instead of closures
//!
//! A completion "callback" is a plain value of type `C` stored in the
//! sequence. [`Scheduler::tick`] returns the values of the sequences that
//! finished during that tick and the host dispatches them. Callbacks therefore
//! never run while the scheduler is borrowed, and detaching a callback is just
//! [`Scheduler::set_on_complete`] with `None`.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use understory_tween::{Ease, Scheduler, Sequence, Tween};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! enum Prop {
//!     Width,
//!     Opacity,
//! }
//!
//! let mut store = BTreeMap::new();
//! let mut scheduler: Scheduler<Prop, &str> = Scheduler::new();
//!
//! let open = scheduler.insert(
//!     Sequence::new()
//!         .join(Tween::new(Prop::Width, 0.3, 0.2).with_ease(Ease::Linear))
//!         .join(Tween::new(Prop::Opacity, 1.0, 0.2).with_ease(Ease::Linear)),
//! );
//! scheduler.set_on_complete(open, Some("opened"));
//! scheduler.restart(open);
//!
//! let mut fired = Vec::new();
//! for _ in 0..5 {
//!     fired.extend(scheduler.tick(0.05, &mut store));
//! }
//! assert_eq!(fired, ["opened"]);
//! assert_eq!(store[&Prop::Opacity], 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod easing;
mod scheduler;
mod sequence;
mod store;

pub use easing::Ease;
pub use scheduler::{Scheduler, SequenceId};
pub use sequence::{Sequence, Tween};
pub use store::PropertyStore;
