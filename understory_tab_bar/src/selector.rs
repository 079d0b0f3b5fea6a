// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selector: one animated, lockable button of a tab bar.
//!
//! ## State machine
//!
//! A selector owns two reusable sequences, one that animates it open and one
//! that animates it closed. Together with the active flag they form a four
//! state machine, reported by [`Selector::phase`]:
//!
//! ```text
//!            activate()                  completes
//!  Resting ─────────────▶ Activating ─────────────▶ Active
//!     ▲                     │    ▲                    │
//!     │ completes           │    │ activate()         │ deactivate()
//!     │                     ▼    │                    ▼
//!     └──────────────── Deactivating ◀────────────────┘
//! ```
//!
//! Entering `Activating` always pauses the closing sequence first, and
//! entering `Deactivating` always pauses the opening one, so the two never
//! drive the same properties in the same frame.

use kurbo::{Point, Vec2};
use tracing::{debug, warn};
use understory_tween::{Scheduler, Sequence, SequenceId, Tween};

use crate::coordinator::CoordinatorId;
use crate::registry::SelectorId;
use crate::types::{Channel, Elements, IconId, SelectorParts, Target, set_scale};

/// Duration of the label fade played when an active selector is locked or unlocked.
pub const LOCK_FADE_DURATION: f64 = 0.2;

/// Scheduler type that drives tab bar transitions over elements keyed by `K`.
pub type Animator<K> = Scheduler<Target<K>, Completion>;

/// Which of a selector's two transitions finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The opening transition.
    Activate,
    /// The closing transition.
    Deactivate,
}

/// Completion value attached to a selector's transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// Selector that owns the transition.
    pub selector: SelectorId,
    /// Which transition finished.
    pub transition: Transition,
}

/// Derived animation state of a [`Selector`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Inactive and at rest.
    Resting,
    /// Active, opening transition still running.
    Activating,
    /// Active and at rest.
    Active,
    /// Inactive, closing transition still running.
    Deactivating,
}

/// Per-selector configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorConfig {
    /// Flexible width share while active.
    pub active_flexible_width: f64,
    /// Flexible width share while inactive.
    pub inactive_flexible_width: f64,
    /// Icon local y position while active.
    pub active_icon_y: f64,
    /// Duration of the opening transition, in seconds.
    pub activate_duration: f64,
    /// Duration of the closing transition, in seconds.
    pub deactivate_duration: f64,
    /// Uniform icon scale while locked.
    pub locked_icon_scale: f64,
    /// Icon shown while locked. Without one, locking leaves the icon alone.
    pub locked_icon: Option<IconId>,
    /// Icon shown while unlocked. Captured from the icon element at
    /// initialization when not set.
    pub normal_icon: Option<IconId>,
    /// Whether the selector starts locked.
    pub locked: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            active_flexible_width: 0.3,
            inactive_flexible_width: 0.1,
            active_icon_y: 40.0,
            activate_duration: 0.2,
            deactivate_duration: 0.01,
            locked_icon_scale: 0.8,
            locked_icon: None,
            normal_icon: None,
            locked: false,
        }
    }
}

/// What a finished transition means for the owning bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Settled {
    /// The opening transition finished while still active.
    Opened,
    /// The closing transition finished while still inactive.
    Closed,
    /// The completion no longer matches the selector's state.
    Stale,
}

/// One button of a tab bar.
///
/// Selectors are created and owned by a [`TabBar`](crate::TabBar), which
/// exposes the mutating operations by [`SelectorId`]. This type exposes the
/// read-only view.
#[derive(Clone, Debug)]
pub struct Selector<K> {
    pub(crate) id: SelectorId,
    parts: SelectorParts<K>,
    config: SelectorConfig,
    coordinator: Option<CoordinatorId>,
    active: bool,
    locked: bool,
    /// The closing transition is running with its completion attached.
    closing: bool,
    original_icon_position: Point,
    rest_captured: bool,
    activate: Option<SequenceId>,
    deactivate: Option<SequenceId>,
    label_fade: Option<SequenceId>,
    /// Completion taken off the closing sequence by a silent deactivation.
    detached: Option<Completion>,
}

impl<K> Selector<K> {
    /// Id of this selector.
    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// Elements animated by this selector.
    pub fn parts(&self) -> &SelectorParts<K> {
        &self.parts
    }

    /// Configuration, including the normal icon captured at initialization.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Coordinator that manages this selector, if any.
    pub fn coordinator(&self) -> Option<CoordinatorId> {
        self.coordinator
    }

    /// Whether the selector is in its activated state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the selector currently ignores input.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the selector has built its transitions.
    pub fn is_initialized(&self) -> bool {
        self.activate.is_some()
    }

    /// Icon rest position captured at initialization.
    pub fn original_icon_position(&self) -> Point {
        self.original_icon_position
    }

    /// Current state of the transition state machine.
    pub fn phase(&self, animator: &Animator<K>) -> TransitionPhase {
        let running = |seq: Option<SequenceId>| seq.is_some_and(|id| animator.is_playing(id));
        match (self.active, running(self.activate), running(self.deactivate)) {
            (true, true, _) => TransitionPhase::Activating,
            (true, false, _) => TransitionPhase::Active,
            (false, _, true) => TransitionPhase::Deactivating,
            (false, _, false) => TransitionPhase::Resting,
        }
    }

    pub(crate) fn is_closing(&self) -> bool {
        self.closing
    }
}

impl<K: Copy + PartialEq + core::fmt::Debug> Selector<K> {
    /// Create an uninitialized, inactive selector.
    pub(crate) fn new(
        parts: SelectorParts<K>,
        config: SelectorConfig,
        coordinator: Option<CoordinatorId>,
    ) -> Self {
        Self {
            id: SelectorId(u32::MAX, 0),
            parts,
            locked: config.locked,
            config,
            coordinator,
            active: false,
            closing: false,
            original_icon_position: Point::ZERO,
            rest_captured: false,
            activate: None,
            deactivate: None,
            label_fade: None,
            detached: None,
        }
    }

    /// Capture the rest state, build both transitions and apply the initial visuals.
    ///
    /// Calling this again rebuilds the transitions from the current element
    /// state and leaves the selector inactive. An active selector keeps the
    /// icon rest position captured before.
    pub(crate) fn initialize<S: Elements<K> + ?Sized>(
        &mut self,
        animator: &mut Animator<K>,
        elements: &mut S,
    ) {
        if self.coordinator.is_none() {
            warn!(
                selector = ?self.id,
                "selector has no coordinator; clicks toggle it directly"
            );
        }
        // An active selector's icon sits at its raised position; keep the old rest.
        let keep_rest = self.active && self.rest_captured;
        self.teardown(animator);
        self.active = false;

        let SelectorParts {
            root,
            icon,
            label,
            background,
            ..
        } = self.parts;
        if !keep_rest {
            self.original_icon_position = Point::new(
                elements.get(Target::new(icon, Channel::PositionX)),
                elements.get(Target::new(icon, Channel::PositionY)),
            );
            self.rest_captured = true;
        }
        if self.config.normal_icon.is_none() {
            self.config.normal_icon = elements.icon(icon);
        }

        let cfg = &self.config;
        let opening = animator.insert(joined(
            self.parts,
            cfg.active_flexible_width,
            cfg.active_icon_y,
            1.0,
            cfg.activate_duration,
        ));
        let closing = animator.insert(joined(
            self.parts,
            cfg.inactive_flexible_width,
            self.original_icon_position.y,
            0.0,
            cfg.deactivate_duration,
        ));
        animator.set_on_complete(
            opening,
            Some(Completion {
                selector: self.id,
                transition: Transition::Activate,
            }),
        );
        animator.set_on_complete(
            closing,
            Some(Completion {
                selector: self.id,
                transition: Transition::Deactivate,
            }),
        );
        self.activate = Some(opening);
        self.deactivate = Some(closing);

        elements.set(
            Target::new(root, Channel::FlexibleWidth),
            self.config.inactive_flexible_width,
        );
        elements.set(Target::new(label, Channel::Opacity), 0.0);
        elements.set(Target::new(background, Channel::Opacity), 0.0);
        elements.set(
            Target::new(icon, Channel::PositionY),
            self.original_icon_position.y,
        );
        if self.locked {
            self.set_locked(true, animator, elements);
        }
        debug!(selector = ?self.id, "selector initialized");
    }

    /// Enter the active state. No-op when already active or locked.
    pub(crate) fn activate(&mut self, animator: &mut Animator<K>) -> bool {
        if self.active || self.locked {
            return false;
        }
        self.active = true;
        self.closing = false;
        self.reattach(animator);
        self.stop_label_fade(animator);
        if let Some(closing) = self.deactivate {
            animator.pause(closing);
        }
        if let Some(opening) = self.activate {
            animator.restart(opening);
        }
        true
    }

    /// Leave the active state. No-op when already inactive.
    pub(crate) fn deactivate(&mut self, animator: &mut Animator<K>) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.closing = true;
        self.reattach(animator);
        self.stop_label_fade(animator);
        if let Some(opening) = self.activate {
            animator.pause(opening);
        }
        if let Some(closing) = self.deactivate {
            animator.restart(closing);
        }
        true
    }

    /// Leave the active state without reporting the close when the transition ends.
    ///
    /// The closing completion is detached for this one run and reattached by
    /// the next activation or deactivation.
    pub(crate) fn force_deactivate_silently(&mut self, animator: &mut Animator<K>) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.closing = false;
        self.stop_label_fade(animator);
        if let Some(opening) = self.activate {
            animator.pause(opening);
        }
        if let Some(closing) = self.deactivate {
            if self.detached.is_none() {
                self.detached = animator.set_on_complete(closing, None);
            }
            animator.restart(closing);
        }
        true
    }

    fn reattach(&mut self, animator: &mut Animator<K>) {
        if let (Some(closing), Some(completion)) = (self.deactivate, self.detached.take()) {
            animator.set_on_complete(closing, Some(completion));
        }
    }

    /// The paired transitions also drive the label, so a lock fade must not outlive them.
    fn stop_label_fade(&mut self, animator: &mut Animator<K>) {
        if let Some(fade) = self.label_fade.take() {
            animator.kill(fade);
        }
    }

    /// Block or unblock input and swap the icon; never changes the active flag.
    pub(crate) fn set_locked<S: Elements<K> + ?Sized>(
        &mut self,
        locked: bool,
        animator: &mut Animator<K>,
        elements: &mut S,
    ) {
        let SelectorParts {
            root, icon, label, ..
        } = self.parts;
        elements.set_interactable(root, !locked);

        let appearance = if locked {
            self.config
                .locked_icon
                .map(|asset| (asset, self.config.locked_icon_scale))
        } else {
            self.config.normal_icon.map(|asset| (asset, 1.0))
        };
        if let Some((asset, scale)) = appearance {
            set_scale(elements, icon, Vec2::new(scale, scale));
            elements.set_icon(icon, asset);
        }

        if self.active {
            self.stop_label_fade(animator);
            let to = if locked { 0.0 } else { 1.0 };
            self.label_fade = Some(animator.play_once(Sequence::new().join(Tween::new(
                Target::new(label, Channel::Opacity),
                to,
                LOCK_FADE_DURATION,
            ))));
        }

        self.locked = locked;
        debug!(selector = ?self.id, locked, "selector lock changed");
    }

    /// Cancel every animation owned by this selector without firing completions.
    ///
    /// Idempotent; the selector can be initialized again afterwards.
    pub(crate) fn teardown(&mut self, animator: &mut Animator<K>) {
        for seq in [
            self.activate.take(),
            self.deactivate.take(),
            self.label_fade.take(),
        ]
        .into_iter()
        .flatten()
        {
            animator.kill(seq);
        }
        self.detached = None;
        self.closing = false;
    }

    /// Update state for a finished transition.
    pub(crate) fn settle(&mut self, transition: Transition) -> Settled {
        match transition {
            Transition::Activate if self.active => Settled::Opened,
            Transition::Deactivate if !self.active => {
                self.closing = false;
                Settled::Closed
            }
            _ => Settled::Stale,
        }
    }
}

/// The four joined tweens of an opening or closing transition.
fn joined<K: Copy>(
    parts: SelectorParts<K>,
    width: f64,
    icon_y: f64,
    opacity: f64,
    duration: f64,
) -> Sequence<Target<K>> {
    Sequence::new()
        .join(Tween::new(
            Target::new(parts.root, Channel::FlexibleWidth),
            width,
            duration,
        ))
        .join(Tween::new(
            Target::new(parts.icon, Channel::PositionY),
            icon_y,
            duration,
        ))
        .join(Tween::new(
            Target::new(parts.label, Channel::Opacity),
            opacity,
            duration,
        ))
        .join(Tween::new(
            Target::new(parts.background, Channel::Opacity),
            opacity,
            duration,
        ))
}
