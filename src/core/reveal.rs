// One-shot reveal bookkeeping.
//
// Every candidate is registered with its element handle and gets a key. The first
// visibility report with `intersecting == true` yields [`RevealDecision::Reveal`]
// and drops the key from the watch set; any later report for that key is
// ignored, so the marker is applied at most once per element.

use fnv::FnvHashMap;

pub type RevealKey = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealDecision {
    /// Apply the revealed marker and stop observing the element.
    Reveal,
    Ignore,
}

/// Candidates still being watched, keyed by the value returned from
/// [`RevealTargets::watch`]. `T` is whatever handle identifies an element.
#[derive(Debug)]
pub struct RevealTargets<T> {
    next_key: RevealKey,
    watching: FnvHashMap<RevealKey, T>,
}

impl<T> Default for RevealTargets<T> {
    fn default() -> Self {
        Self {
            next_key: 0,
            watching: FnvHashMap::default(),
        }
    }
}

impl<T: PartialEq> RevealTargets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `target` and return its key.
    pub fn watch(&mut self, target: T) -> RevealKey {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        self.watching.insert(key, target);
        key
    }

    /// Key of a target that is still being watched.
    pub fn key_of(&self, target: &T) -> Option<RevealKey> {
        self.watching
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(k, _)| *k)
    }

    pub fn on_visibility(&mut self, key: RevealKey, intersecting: bool) -> RevealDecision {
        if !intersecting || self.watching.remove(&key).is_none() {
            return RevealDecision::Ignore;
        }
        RevealDecision::Reveal
    }

    #[inline]
    pub fn is_watching(&self, key: RevealKey) -> bool {
        self.watching.contains_key(&key)
    }

    #[inline]
    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }
}
