//! Index-stable entity storage
//!
//! Removal only flips a slot's live flag, so indices held during a
//! collision pass stay valid. Dead slots are dropped by `compact`, which the
//! tick calls once all passes for the frame are done.

/// Dense storage with live flags and deferred compaction
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    dead: usize,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    live: bool,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            dead: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            dead: 0,
        }
    }

    /// Add a live entry, returning its index (valid until the next `compact`)
    pub fn push(&mut self, value: T) -> usize {
        self.slots.push(Slot { value, live: true });
        self.slots.len() - 1
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.slots.len() - self.dead
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots, live or dead (upper bound for index loops)
    pub fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    pub fn is_live(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.live)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots
            .get(index)
            .filter(|s| s.live)
            .map(|s| &s.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots
            .get_mut(index)
            .filter(|s| s.live)
            .map(|s| &mut s.value)
    }

    /// Mark an entry dead. Returns false if it was already dead or missing.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.live => {
                slot.live = false;
                self.dead += 1;
                true
            }
            _ => false,
        }
    }

    /// Live entries with their indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.live)
            .map(|(i, s)| (i, &s.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.live)
            .map(|(i, s)| (i, &mut s.value))
    }

    /// Live values in slot order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, v)| v)
    }

    /// Mark dead every live entry for which `keep` returns false
    pub fn retain_live(&mut self, mut keep: impl FnMut(&T) -> bool) {
        for slot in self.slots.iter_mut().filter(|s| s.live) {
            if !keep(&slot.value) {
                slot.live = false;
                self.dead += 1;
            }
        }
    }

    /// Drop dead slots. Invalidates all indices.
    pub fn compact(&mut self) {
        if self.dead > 0 {
            self.slots.retain(|s| s.live);
            self.dead = 0;
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.dead = 0;
    }
}

impl<T> FromIterator<T> for Pool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter
                .into_iter()
                .map(|value| Slot { value, live: true })
                .collect(),
            dead: 0,
        }
    }
}
