// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-aware highlight animation on a selector's background transform.
//!
//! The highlight runs separately from the selector's own transitions: it only
//! touches the scale channels and pivot of [`SelectorParts::highlight`], and a
//! new highlight on the same element always cancels the previous one.

use kurbo::{Point, Vec2};
use tracing::warn;
use understory_tween::{Sequence, Tween};

use crate::coordinator::{CoordinatorConfig, Direction};
use crate::selector::{Animator, Selector};
use crate::types::{Channel, Elements, SelectorParts, Target, set_scale};

/// Peak scale of the reveal before it settles at `1.0`.
pub const HIGHLIGHT_OVERSHOOT: f64 = 1.05;

const BOTTOM_CENTER: Point = Point::new(0.5, 0.0);

fn highlight_of<K: core::fmt::Debug>(selector: &Selector<K>) -> Option<&K> {
    let SelectorParts { highlight, .. } = selector.parts();
    if highlight.is_none() {
        warn!(
            selector = ?selector.id(),
            "selector has no highlight element; skipping highlight animation"
        );
    }
    highlight.as_ref()
}

fn cancel<K: Copy + PartialEq>(animator: &mut Animator<K>, element: K) {
    animator.kill_where(|t| t.element == element && t.channel.is_scale());
}

/// Reveal the highlight of a newly active selector.
///
/// [`Direction::Initial`] pops up from the bottom edge; a lateral direction
/// slides in from the side the selection came from.
pub(crate) fn reveal<K, S>(
    selector: &Selector<K>,
    direction: Direction,
    config: &CoordinatorConfig,
    animator: &mut Animator<K>,
    elements: &mut S,
) where
    K: Copy + PartialEq + core::fmt::Debug,
    S: Elements<K> + ?Sized,
{
    let Some(&element) = highlight_of(selector) else {
        return;
    };
    cancel(animator, element);

    let (pivot, scale, channel) = match direction {
        Direction::Initial => (
            BOTTOM_CENTER,
            Vec2::new(1.0, config.highlight_shrink),
            Channel::ScaleY,
        ),
        Direction::Forward => (
            Point::new(1.0, 0.5),
            Vec2::new(config.highlight_shrink, 1.0),
            Channel::ScaleX,
        ),
        Direction::Backward => (
            Point::new(0.0, 0.5),
            Vec2::new(config.highlight_shrink, 1.0),
            Channel::ScaleX,
        ),
    };
    set_scale(elements, element, scale);
    elements.set_pivot(element, pivot);

    let half = config.highlight_duration / 2.0;
    let target = Target::new(element, channel);
    animator.play_once(
        Sequence::new()
            .append(Tween::new(target, HIGHLIGHT_OVERSHOOT, half))
            .append(Tween::new(target, 1.0, half)),
    );
}

/// Shrink the highlight of a selector that lost the selection.
pub(crate) fn reset<K, S>(
    selector: &Selector<K>,
    config: &CoordinatorConfig,
    animator: &mut Animator<K>,
    elements: &mut S,
) where
    K: Copy + PartialEq + core::fmt::Debug,
    S: Elements<K> + ?Sized,
{
    let Some(&element) = highlight_of(selector) else {
        return;
    };
    cancel(animator, element);
    elements.set_pivot(element, BOTTOM_CENTER);
    animator.play_once(Sequence::new().join(Tween::new(
        Target::new(element, Channel::ScaleY),
        config.highlight_shrink,
        config.highlight_duration,
    )));
}
