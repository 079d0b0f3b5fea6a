// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tweens and the sequences that group them.

use smallvec::SmallVec;

use crate::easing::Ease;
use crate::store::PropertyStore;

/// Animate one property toward a target value.
///
/// A tween has no explicit start value: it reads the property from the
/// [`PropertyStore`] the first time it is sampled after its sequence is
/// (re)started, and interpolates from there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween<P> {
    /// Property driven by this tween.
    pub property: P,
    /// Value reached at the end of the tween.
    pub to: f64,
    /// Duration in seconds. Zero or negative durations jump straight to `to`.
    pub duration: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl<P> Tween<P> {
    /// Create a tween with the default [`Ease`].
    pub fn new(property: P, to: f64, duration: f64) -> Self {
        Self {
            property,
            to,
            duration,
            ease: Ease::default(),
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

#[derive(Clone, Debug)]
struct Track<P> {
    tween: Tween<P>,
    /// Offset from the start of the sequence, in seconds.
    offset: f64,
    from: Option<f64>,
    done: bool,
}

/// A group of tweens played as one controllable unit.
///
/// Tweens are laid out on a local timeline: [`Sequence::join`] starts a tween
/// together with the previously inserted one, [`Sequence::append`] starts it
/// once everything inserted so far has finished.
///
/// ```rust
/// use understory_tween::{Sequence, Tween};
///
/// let seq = Sequence::new()
///     .join(Tween::new("width", 0.3, 0.2))
///     .join(Tween::new("opacity", 1.0, 0.2))
///     .append(Tween::new("scale", 1.0, 0.1));
/// assert_eq!(seq.len(), 3);
/// assert!((seq.duration() - 0.3).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Sequence<P> {
    tracks: SmallVec<[Track<P>; 4]>,
    last_offset: f64,
    duration: f64,
}

impl<P> Default for Sequence<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Sequence<P> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            tracks: SmallVec::new(),
            last_offset: 0.0,
            duration: 0.0,
        }
    }

    /// Start `tween` at the same time as the previously inserted tween.
    #[must_use]
    pub fn join(mut self, tween: Tween<P>) -> Self {
        let offset = self.last_offset;
        self.push(tween, offset);
        self
    }

    /// Start `tween` once every tween inserted so far has finished.
    #[must_use]
    pub fn append(mut self, tween: Tween<P>) -> Self {
        let offset = self.duration;
        self.push(tween, offset);
        self
    }

    fn push(&mut self, tween: Tween<P>, offset: f64) {
        let end = offset + tween.duration.max(0.0);
        self.duration = self.duration.max(end);
        self.last_offset = offset;
        self.tracks.push(Track {
            tween,
            offset,
            from: None,
            done: false,
        });
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of tweens.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the sequence holds no tweens.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate the properties this sequence drives.
    pub fn properties(&self) -> impl Iterator<Item = &P> + '_ {
        self.tracks.iter().map(|t| &t.tween.property)
    }

    /// Forget captured start values so the next sample recaptures them.
    pub(crate) fn rewind(&mut self) {
        for track in &mut self.tracks {
            track.from = None;
            track.done = false;
        }
    }

    /// Write every started tween's value at `elapsed` seconds into `store`.
    pub(crate) fn sample<S>(&mut self, elapsed: f64, store: &mut S)
    where
        P: Copy,
        S: PropertyStore<P> + ?Sized,
    {
        for track in &mut self.tracks {
            if track.done {
                continue;
            }
            let local = elapsed - track.offset;
            if local < 0.0 {
                continue;
            }
            let tween = track.tween;
            let from = *track.from.get_or_insert_with(|| store.get(tween.property));
            let progress = if tween.duration <= 0.0 {
                1.0
            } else {
                local / tween.duration
            };
            if progress >= 1.0 {
                track.done = true;
                store.set(tween.property, tween.to);
            } else {
                let eased = tween.ease.apply(progress);
                store.set(tween.property, from + (tween.to - from) * eased);
            }
        }
    }
}
