// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-tick scheduler that owns and advances sequences.

use alloc::vec::Vec;

use crate::sequence::Sequence;
use crate::store::PropertyStore;

/// Identifier for a sequence owned by a [`Scheduler`] (generational).
///
/// Ids of killed sequences never resolve again, even when their slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SequenceId(u32, u32);

impl SequenceId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P, C> {
    generation: u32,
    sequence: Sequence<P>,
    elapsed: f64,
    playing: bool,
    auto_kill: bool,
    on_complete: Option<C>,
}

/// Owns sequences and advances the playing ones on every [`Scheduler::tick`].
///
/// Each sequence carries one completion slot holding a value of type `C`.
/// When a playing sequence reaches its end during a tick, a clone of its
/// completion value (if any) is returned from that tick. Callers route those
/// values to whatever should react, which keeps callbacks from ever running
/// while the scheduler or the property store is borrowed.
///
/// Paused and killed sequences never complete. Restarting a sequence rewinds
/// it and replays it from the properties' current values.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use understory_tween::{Scheduler, Sequence, Tween};
///
/// let mut store = BTreeMap::new();
/// let mut scheduler: Scheduler<&str, &str> = Scheduler::new();
/// let fade = scheduler.insert(Sequence::new().join(Tween::new("alpha", 1.0, 0.2)));
/// scheduler.set_on_complete(fade, Some("faded in"));
///
/// scheduler.restart(fade);
/// assert!(scheduler.tick(0.1, &mut store).is_empty());
/// assert_eq!(scheduler.tick(0.1, &mut store), vec!["faded in"]);
/// assert_eq!(store["alpha"], 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<P, C> {
    entries: Vec<Option<Entry<P, C>>>,
    /// last generation per slot (persists across kills)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<P, C> Default for Scheduler<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> Scheduler<P, C> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    fn allocate(&mut self, entry: impl FnOnce(u32) -> Entry<P, C>) -> SequenceId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(entry(generation));
            SequenceId(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Some(entry(generation)));
            self.generations.push(generation);
            SequenceId((self.entries.len() - 1) as u32, generation)
        }
    }

    /// Add a reusable sequence in the paused state.
    ///
    /// The sequence stays owned by the scheduler after it completes, so it can
    /// be restarted any number of times until [`Scheduler::kill`] is called.
    pub fn insert(&mut self, sequence: Sequence<P>) -> SequenceId {
        self.allocate(|generation| Entry {
            generation,
            sequence,
            elapsed: 0.0,
            playing: false,
            auto_kill: false,
            on_complete: None,
        })
    }

    /// Add a sequence that starts playing immediately and is dropped once it completes.
    pub fn play_once(&mut self, sequence: Sequence<P>) -> SequenceId {
        self.allocate(|generation| Entry {
            generation,
            sequence,
            elapsed: 0.0,
            playing: true,
            auto_kill: true,
            on_complete: None,
        })
    }

    fn entry(&self, id: SequenceId) -> Option<&Entry<P, C>> {
        self.entries
            .get(id.idx())
            .and_then(Option::as_ref)
            .filter(|e| e.generation == id.1)
    }

    fn entry_mut(&mut self, id: SequenceId) -> Option<&mut Entry<P, C>> {
        self.entries
            .get_mut(id.idx())
            .and_then(Option::as_mut)
            .filter(|e| e.generation == id.1)
    }

    /// Whether `id` still refers to a sequence owned by this scheduler.
    pub fn is_alive(&self, id: SequenceId) -> bool {
        self.entry(id).is_some()
    }

    /// Whether `id` is currently advancing on ticks.
    pub fn is_playing(&self, id: SequenceId) -> bool {
        self.entry(id).is_some_and(|e| e.playing)
    }

    /// Seconds played since the last restart, if `id` is alive.
    pub fn elapsed(&self, id: SequenceId) -> Option<f64> {
        self.entry(id).map(|e| e.elapsed)
    }

    /// Rewind `id` to its start and play it.
    ///
    /// Restarting a running sequence replays it from the beginning. Start
    /// values are recaptured from the store on the next tick. Returns `false`
    /// if `id` is not alive.
    pub fn restart(&mut self, id: SequenceId) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        entry.sequence.rewind();
        entry.elapsed = 0.0;
        entry.playing = true;
        true
    }

    /// Resume `id` from where it was paused.
    ///
    /// A sequence that already ran to its end is restarted instead.
    pub fn play(&mut self, id: SequenceId) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        if entry.elapsed >= entry.sequence.duration() && entry.elapsed > 0.0 {
            entry.sequence.rewind();
            entry.elapsed = 0.0;
        }
        entry.playing = true;
        true
    }

    /// Stop advancing `id` without firing its completion.
    pub fn pause(&mut self, id: SequenceId) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        entry.playing = false;
        true
    }

    /// Remove `id` without firing its completion. Returns `false` if it was not alive.
    pub fn kill(&mut self, id: SequenceId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.entries[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    /// Remove every sequence that drives at least one property matching `pred`.
    ///
    /// Returns the number of sequences removed. None of them fire.
    pub fn kill_where(&mut self, mut pred: impl FnMut(&P) -> bool) -> usize {
        let mut killed = 0;
        for (idx, slot) in self.entries.iter_mut().enumerate() {
            if slot
                .as_ref()
                .is_some_and(|e| e.sequence.properties().any(&mut pred))
            {
                *slot = None;
                self.free_list.push(idx);
                killed += 1;
            }
        }
        killed
    }

    /// Replace the completion value of `id`, returning the previous one.
    ///
    /// Passing `None` detaches the completion; handing the returned value back
    /// later reattaches it. Does nothing and returns `None` if `id` is not alive.
    pub fn set_on_complete(&mut self, id: SequenceId, on_complete: Option<C>) -> Option<C> {
        let entry = self.entry_mut(id)?;
        core::mem::replace(&mut entry.on_complete, on_complete)
    }

    /// The completion value currently attached to `id`.
    pub fn on_complete(&self, id: SequenceId) -> Option<&C> {
        self.entry(id).and_then(|e| e.on_complete.as_ref())
    }

    /// Number of live sequences.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no sequences are alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every playing sequence by `dt` seconds and write their values into `store`.
    ///
    /// Returns the completion values of the sequences that reached their end
    /// during this tick, in slot order. A sequence completes on the first tick
    /// after a restart even when its duration is zero.
    pub fn tick<S>(&mut self, dt: f64, store: &mut S) -> Vec<C>
    where
        P: Copy,
        C: Clone,
        S: PropertyStore<P> + ?Sized,
    {
        let mut fired = Vec::new();
        for (idx, slot) in self.entries.iter_mut().enumerate() {
            let Some(entry) = slot else {
                continue;
            };
            if !entry.playing {
                continue;
            }
            entry.elapsed += dt.max(0.0);
            entry.sequence.sample(entry.elapsed, store);
            if entry.elapsed < entry.sequence.duration() {
                continue;
            }
            entry.playing = false;
            if let Some(c) = &entry.on_complete {
                fired.push(c.clone());
            }
            if entry.auto_kill {
                *slot = None;
                self.free_list.push(idx);
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ease, Tween};
    use alloc::collections::BTreeMap;
    use alloc::vec;

    fn linear(property: char, to: f64, duration: f64) -> Sequence<char> {
        Sequence::new().join(Tween::new(property, to, duration).with_ease(Ease::Linear))
    }

    #[test]
    fn inserted_sequences_start_paused() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let id = s.insert(linear('a', 1.0, 0.1));
        s.set_on_complete(id, Some(1));
        assert!(!s.is_playing(id));
        assert!(s.tick(1.0, &mut store).is_empty());
        assert!(store.is_empty(), "paused sequences must not write");
    }

    #[test]
    fn completion_fires_once_and_sequence_survives() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let id = s.insert(linear('a', 1.0, 0.1));
        s.set_on_complete(id, Some(7));
        s.restart(id);
        assert_eq!(s.tick(0.2, &mut store), vec![7]);
        assert!(s.tick(0.2, &mut store).is_empty());
        assert!(s.is_alive(id));
        assert!(!s.is_playing(id));

        // Reusable: a restart plays it again.
        s.restart(id);
        assert_eq!(s.tick(0.2, &mut store), vec![7]);
    }

    #[test]
    fn pause_prevents_completion() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let id = s.insert(linear('a', 1.0, 1.0));
        s.set_on_complete(id, Some(1));
        s.restart(id);
        assert!(s.tick(0.5, &mut store).is_empty());
        s.pause(id);
        assert!(s.tick(5.0, &mut store).is_empty());
        assert_eq!(store[&'a'], 0.5);

        s.play(id);
        assert_eq!(s.tick(0.5, &mut store), vec![1]);
        assert_eq!(store[&'a'], 1.0);
    }

    #[test]
    fn restart_mid_flight_replays_from_current_value() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, ()> = Scheduler::new();
        let id = s.insert(linear('a', 1.0, 1.0));
        s.restart(id);
        s.tick(0.5, &mut store);
        s.restart(id);
        assert_eq!(s.elapsed(id), Some(0.0));
        s.tick(0.5, &mut store);
        assert_eq!(store[&'a'], 0.75);
    }

    #[test]
    fn detached_completion_is_silent_until_reattached() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let id = s.insert(linear('a', 1.0, 0.1));
        s.set_on_complete(id, Some(3));

        let detached = s.set_on_complete(id, None);
        assert_eq!(detached, Some(3));
        s.restart(id);
        assert!(s.tick(1.0, &mut store).is_empty());

        s.set_on_complete(id, detached);
        s.restart(id);
        assert_eq!(s.tick(1.0, &mut store), vec![3]);
    }

    #[test]
    fn play_once_is_dropped_after_completion() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let id = s.play_once(linear('x', 2.0, 0.1));
        assert!(s.is_playing(id));
        s.tick(0.1, &mut store);
        assert!(!s.is_alive(id));
        assert_eq!(store[&'x'], 2.0);
    }

    #[test]
    fn kill_is_silent_and_ids_do_not_resurrect() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let a = s.insert(linear('a', 1.0, 0.1));
        s.set_on_complete(a, Some(1));
        s.restart(a);
        assert!(s.kill(a));
        assert!(!s.kill(a), "second kill is a no-op");
        assert!(s.tick(1.0, &mut store).is_empty());

        let b = s.insert(linear('b', 1.0, 0.1));
        assert_eq!(a.0, b.0, "slot is reused");
        assert!(!s.is_alive(a));
        assert!(!s.restart(a));
        assert!(s.is_alive(b));
    }

    #[test]
    fn kill_where_matches_any_driven_property() {
        let mut store = BTreeMap::new();
        let mut s: Scheduler<char, u8> = Scheduler::new();
        let both = s.play_once(
            Sequence::new()
                .join(Tween::new('x', 1.0, 1.0))
                .join(Tween::new('y', 1.0, 1.0)),
        );
        let other = s.play_once(linear('z', 1.0, 1.0));
        assert_eq!(s.kill_where(|p| *p == 'y'), 1);
        assert!(!s.is_alive(both));
        assert!(s.is_alive(other));
        s.tick(0.5, &mut store);
        assert!(!store.contains_key(&'x'));
        assert_eq!(s.len(), 1);
    }
}
