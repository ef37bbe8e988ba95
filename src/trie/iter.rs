use super::{
    Key, Trie,
    node::Node,
    scan::{Frame, advance, key_of},
};
use std::iter::FusedIterator;

/// Borrowing iterator over the pairs of a [`Trie`] in ascending key order.
///
/// Walks the same frame stack as [`Trie::scan`], but holds node
/// references directly, so the trie cannot change underneath it.
pub struct Iter<'a, V> {
    root: Option<&'a Node<V>>,
    frames: Vec<Frame<'a, V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(trie: &'a Trie<V>) -> Self {
        Self {
            root: Some(&trie.root),
            frames: Vec::new(),
            remaining: trie.len,
        }
    }

    fn step(&mut self) -> Option<&'a Node<V>> {
        if let Some(root) = self.root.take() {
            self.frames.push(Frame::root(root));
            if root.is_terminal() {
                return Some(root);
            }
        }
        if advance(&mut self.frames) {
            self.frames.last().map(|frame| frame.node)
        } else {
            None
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.step()?.value()?;
        self.remaining -= 1;
        Some((key_of(self.frames.iter().map(|frame| &frame.mark)), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Keys of a [`Trie`] in ascending order.
pub struct Keys<'a, V>(Iter<'a, V>);

impl<V> Iterator for Keys<'_, V> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Values of a [`Trie`] in ascending key order.
pub struct Values<'a, V>(Iter<'a, V>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip building keys.
        let value = self.0.step()?.value()?;
        self.0.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> Trie<V> {
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K: Key, V> Extend<(K, V)> for Trie<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}
