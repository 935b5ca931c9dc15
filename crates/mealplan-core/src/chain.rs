//! Arena-backed doubly linked sequence shared by the day and meal layers.
//!
//! Nodes live in a slot vector and refer to their neighbours by slot index,
//! never by reference. A separate key → slot map gives O(1) lookup, and a
//! free list recycles vacated slots. All link rewiring goes through
//! [`Chain::set_next`] / [`Chain::set_prev`], which treat `None` as the
//! head/tail anchor so boundary updates cannot be forgotten.

use std::collections::HashMap;
use std::hash::Hash;

use uuid::Uuid;

/// Key type usable as a chain id.
pub(crate) trait ChainKey: Copy + Eq + Hash {
    fn uuid(&self) -> Uuid;
}

impl ChainKey for mealplan_types::DayId {
    fn uuid(&self) -> Uuid {
        *self.as_uuid()
    }
}

impl ChainKey for mealplan_types::MealId {
    fn uuid(&self) -> Uuid {
        *self.as_uuid()
    }
}

/// Returned by [`Chain::push_back`] when the chain is full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Full {
    pub(crate) capacity: usize,
}

#[derive(Clone, Debug)]
pub(crate) struct Link<K, T> {
    pub(crate) key: K,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
    pub(crate) value: T,
}

#[derive(Clone, Debug)]
pub(crate) struct Chain<K, T> {
    pub(crate) slots: Vec<Option<Link<K, T>>>,
    free: Vec<usize>,
    pub(crate) index: HashMap<K, usize>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) capacity: usize,
}

impl<K: ChainKey, T> Chain<K, T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn link(&self, slot: usize) -> Option<&Link<K, T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn link_mut(&mut self, slot: usize) -> Option<&mut Link<K, T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn key_at(&self, slot: Option<usize>) -> Option<K> {
        slot.and_then(|s| self.link(s)).map(|link| link.key)
    }

    pub(crate) fn get(&self, key: &K) -> Option<&T> {
        let slot = *self.index.get(key)?;
        self.link(slot).map(|link| &link.value)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let slot = *self.index.get(key)?;
        self.link_mut(slot).map(|link| &mut link.value)
    }

    pub(crate) fn first(&self) -> Option<K> {
        self.key_at(self.head)
    }

    pub(crate) fn last(&self) -> Option<K> {
        self.key_at(self.tail)
    }

    pub(crate) fn next_of(&self, key: &K) -> Option<K> {
        let slot = *self.index.get(key)?;
        self.key_at(self.link(slot)?.next)
    }

    pub(crate) fn prev_of(&self, key: &K) -> Option<K> {
        let slot = *self.index.get(key)?;
        self.key_at(self.link(slot)?.prev)
    }

    /// Point `at.next` to `to`. `at == None` rewrites the head instead.
    fn set_next(&mut self, at: Option<usize>, to: Option<usize>) {
        match at {
            Some(slot) => {
                if let Some(link) = self.link_mut(slot) {
                    link.next = to;
                }
            }
            None => self.head = to,
        }
    }

    /// Point `at.prev` to `to`. `at == None` rewrites the tail instead.
    fn set_prev(&mut self, at: Option<usize>, to: Option<usize>) {
        match at {
            Some(slot) => {
                if let Some(link) = self.link_mut(slot) {
                    link.prev = to;
                }
            }
            None => self.tail = to,
        }
    }

    /// Append at the tail. The caller guarantees `key` is fresh.
    pub(crate) fn push_back(&mut self, key: K, value: T) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full {
                capacity: self.capacity,
            });
        }
        debug_assert!(!self.index.contains_key(&key), "duplicate chain key");

        let link = Link {
            key,
            prev: self.tail,
            next: None,
            value,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(link);
                slot
            }
            None => {
                self.slots.push(Some(link));
                self.slots.len() - 1
            }
        };

        let old_tail = self.tail;
        self.set_next(old_tail, Some(slot));
        self.tail = Some(slot);
        self.index.insert(key, slot);
        Ok(())
    }

    /// Splice `key` out and hand back its value. Unknown key: `None`.
    pub(crate) fn remove(&mut self, key: &K) -> Option<T> {
        let slot = self.index.remove(key)?;
        let link = self.slots.get_mut(slot)?.take()?;

        self.set_next(link.prev, link.next);
        self.set_prev(link.next, link.prev);
        self.free.push(slot);
        Some(link.value)
    }

    /// Exchange the positions of `a` and `b`.
    ///
    /// Returns `false` (and changes nothing) when either key is unknown or the
    /// keys are equal. Directly linked nodes take a dedicated branch: the
    /// general exchange would make each node its own neighbour.
    pub(crate) fn swap(&mut self, a: &K, b: &K) -> bool {
        if a == b {
            return false;
        }
        let (Some(&sa), Some(&sb)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let (Some(la), Some(lb)) = (self.link(sa), self.link(sb)) else {
            return false;
        };
        let (pa, na, pb, nb) = (la.prev, la.next, lb.prev, lb.next);

        if na == Some(sb) {
            self.swap_adjacent(sa, sb);
        } else if nb == Some(sa) {
            self.swap_adjacent(sb, sa);
        } else {
            if let Some(link) = self.link_mut(sa) {
                link.prev = pb;
                link.next = nb;
            }
            if let Some(link) = self.link_mut(sb) {
                link.prev = pa;
                link.next = na;
            }
            self.set_next(pa, Some(sb));
            self.set_prev(na, Some(sb));
            self.set_next(pb, Some(sa));
            self.set_prev(nb, Some(sa));
        }
        true
    }

    /// `first.next == second` on entry; `second.next == first` on exit.
    fn swap_adjacent(&mut self, first: usize, second: usize) {
        let before = self.link(first).and_then(|link| link.prev);
        let after = self.link(second).and_then(|link| link.next);

        self.set_next(before, Some(second));
        if let Some(link) = self.link_mut(second) {
            link.prev = before;
            link.next = Some(first);
        }
        if let Some(link) = self.link_mut(first) {
            link.prev = Some(second);
            link.next = after;
        }
        self.set_prev(after, Some(first));
    }

    /// Head-to-tail walk. Bounded by the slot count so a corrupted chain
    /// cannot loop forever.
    pub(crate) fn iter(&self) -> Iter<'_, K, T> {
        Iter {
            chain: self,
            cursor: self.head,
            remaining: self.slots.len(),
        }
    }
}

pub(crate) struct Iter<'a, K, T> {
    chain: &'a Chain<K, T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K: ChainKey, T> Iterator for Iter<'a, K, T> {
    type Item = (K, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.chain.link(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = link.next;
        Some((link.key, &link.value))
    }
}
