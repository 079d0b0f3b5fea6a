// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property storage seam between tweens and the host's element state.

use alloc::collections::BTreeMap;

/// Readable and writable numeric properties keyed by `P`.
///
/// Tweens read a property once when they start (to capture the start value)
/// and write it on every tick while they run. Hosts implement this over
/// whatever holds their widget state: a layout tree, a retained scene, or a
/// plain map.
pub trait PropertyStore<P> {
    /// Current value of `property`.
    fn get(&self, property: P) -> f64;
    /// Overwrite `property` with `value`.
    fn set(&mut self, property: P, value: f64);
}

/// Map-backed store. Unset properties read as `0.0`.
impl<P: Ord + Copy> PropertyStore<P> for BTreeMap<P, f64> {
    fn get(&self, property: P) -> f64 {
        BTreeMap::get(self, &property).copied().unwrap_or(0.0)
    }

    fn set(&mut self, property: P, value: f64) {
        BTreeMap::insert(self, property, value);
    }
}
