// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.

/// Easing curve applied to a tween's normalized progress.
///
/// Every curve maps `0.0` to `0.0` and `1.0` to `1.0`; inputs are clamped to
/// that range first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Accelerates from rest.
    InQuad,
    /// Decelerates to rest.
    #[default]
    OutQuad,
    /// Accelerates, then decelerates.
    InOutQuad,
    /// Decelerates to rest, more sharply than [`Ease::OutQuad`].
    OutCubic,
}

impl Ease {
    /// Map normalized progress `t` through this curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
