// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-facing types: animated channels, the host element seam, selector parts.

use kurbo::{Point, Vec2};
use understory_tween::PropertyStore;

/// A numeric property of a UI element that transitions animate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Flexible width share of a layout element within its row.
    FlexibleWidth,
    /// Local x position.
    PositionX,
    /// Local y position.
    PositionY,
    /// Horizontal scale around the element's pivot.
    ScaleX,
    /// Vertical scale around the element's pivot.
    ScaleY,
    /// Opacity in `0.0..=1.0`.
    Opacity,
}

impl Channel {
    /// Whether this is one of the scale channels.
    pub const fn is_scale(self) -> bool {
        matches!(self, Self::ScaleX | Self::ScaleY)
    }
}

/// One animatable property: a channel of a specific element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target<K> {
    /// Host key of the element.
    pub element: K,
    /// Which property of the element.
    pub channel: Channel,
}

impl<K> Target<K> {
    /// Create a target.
    pub const fn new(element: K, channel: Channel) -> Self {
        Self { element, channel }
    }
}

/// Handle to an icon asset.
///
/// The host owns the meaning of the handle (an atlas index, an interned path,
/// a texture id); selectors only store and swap it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u64);

/// The host's widget state, as seen by selectors and coordinators.
///
/// Numeric properties go through [`PropertyStore`] so that tweens can drive
/// them; the remaining methods cover the non-numeric state a tab bar touches.
/// Scale channels of elements the host has never written should read as `1.0`.
pub trait Elements<K>: PropertyStore<Target<K>> {
    /// Move the pivot used for scaling `element`, in normalized element space
    /// (`(0, 0)` bottom-left, `(1, 1)` top-right).
    fn set_pivot(&mut self, element: K, pivot: Point);
    /// The icon currently shown by `element`, if any.
    fn icon(&self, element: K) -> Option<IconId>;
    /// Show `icon` on `element`.
    fn set_icon(&mut self, element: K, icon: IconId);
    /// Enable or disable pointer input on `element`.
    fn set_interactable(&mut self, element: K, interactable: bool);
}

/// Set both scale channels of `element`.
pub(crate) fn set_scale<K: Copy, S: Elements<K> + ?Sized>(
    elements: &mut S,
    element: K,
    scale: Vec2,
) {
    elements.set(Target::new(element, Channel::ScaleX), scale.x);
    elements.set(Target::new(element, Channel::ScaleY), scale.y);
}

/// The elements one selector animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectorParts<K> {
    /// Layout element whose width share grows when active; also the input target.
    pub root: K,
    /// Icon that rises when active and swaps sprite when locked.
    pub icon: K,
    /// Label that fades in when active.
    pub label: K,
    /// Background whose opacity follows the active state.
    pub background: K,
    /// Transform scaled by the coordinator's highlight animation.
    ///
    /// When absent, the highlight animation is skipped for this selector.
    pub highlight: Option<K>,
}
