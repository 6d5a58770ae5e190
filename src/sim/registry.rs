//! Ordered entity storage with deferred removal
//!
//! A pass over a registry never invalidates itself: entities are marked while
//! iterating and dropped afterwards by [`Registry::compact`], which keeps the
//! survivors in insertion order.

/// Ordered collection of live entities of one type
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
    /// Parallel to `items`: marked for removal at the next compaction
    doomed: Vec<bool>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            doomed: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.doomed.push(false);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mark an entity for removal; returns false if it was already marked
    /// (or the index is out of range)
    pub fn mark(&mut self, index: usize) -> bool {
        match self.doomed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.doomed.get(index).copied().unwrap_or(false)
    }

    /// Indices and entities not yet marked for removal
    pub fn live(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter(move |(i, _)| !self.is_marked(*i))
    }

    /// Drop every marked entity; returns how many were removed
    pub fn compact(&mut self) -> usize {
        let before = self.items.len();
        let mut flags = self.doomed.iter();
        self.items.retain(|_| !flags.next().copied().unwrap_or(false));
        self.doomed.clear();
        self.doomed.resize(self.items.len(), false);
        before - self.items.len()
    }

    /// Keep entities for which `keep` returns true, letting it mutate them first
    ///
    /// Any outstanding marks are applied as well.
    pub fn retain_mut(&mut self, mut keep: impl FnMut(&mut T) -> bool) -> usize {
        for (item, doomed) in self.items.iter_mut().zip(self.doomed.iter_mut()) {
            if !*doomed && !keep(item) {
                *doomed = true;
            }
        }
        self.compact()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        self.retain_mut(|item| keep(item))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.doomed.clear();
    }
}

impl<T> std::ops::Index<usize> for Registry<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let doomed = vec![false; items.len()];
        Self { items, doomed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_preserves_order() {
        let mut reg: Registry<u32> = (0..6).collect();
        assert!(reg.mark(1));
        assert!(reg.mark(4));
        assert_eq!(reg.len(), 6);

        assert_eq!(reg.compact(), 2);
        assert_eq!(reg.as_slice(), &[0, 2, 3, 5]);
        assert!(!reg.is_marked(0));
    }

    #[test]
    fn test_double_mark_is_rejected() {
        let mut reg: Registry<u32> = (0..3).collect();
        assert!(reg.mark(2));
        assert!(!reg.mark(2));
        assert!(!reg.mark(99));
        assert_eq!(reg.compact(), 1);
    }

    #[test]
    fn test_live_skips_marked() {
        let mut reg: Registry<char> = "abcd".chars().collect();
        reg.mark(0);
        reg.mark(2);
        let live: Vec<_> = reg.live().map(|(i, c)| (i, *c)).collect();
        assert_eq!(live, vec![(1, 'b'), (3, 'd')]);
    }

    #[test]
    fn test_push_during_pass_is_not_marked() {
        let mut reg: Registry<u32> = (0..2).collect();
        reg.mark(0);
        reg.push(10);
        assert!(!reg.is_marked(2));
        reg.compact();
        assert_eq!(reg.as_slice(), &[1, 10]);
    }

    #[test]
    fn test_retain_mut_applies_marks_and_predicate() {
        let mut reg: Registry<i32> = vec![1, 2, 3, 4, 5].into_iter().collect();
        reg.mark(0);
        let removed = reg.retain_mut(|v| {
            *v *= 10;
            *v != 30
        });
        assert_eq!(removed, 2);
        assert_eq!(reg.as_slice(), &[20, 40, 50]);
    }

    #[test]
    fn test_marked_items_skip_predicate() {
        let mut reg: Registry<i32> = vec![1, 2].into_iter().collect();
        reg.mark(1);
        let mut seen = Vec::new();
        reg.retain(|v| {
            seen.push(*v);
            true
        });
        assert_eq!(seen, vec![1]);
        assert_eq!(reg.as_slice(), &[1]);
    }
}
