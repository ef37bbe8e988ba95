use super::{
    Key, Trie,
    node::Node,
    scan::{Frame, key_of},
};
use smallvec::SmallVec;
use std::fmt;
use tracing::trace;

/// Bookmark stacks shorter than this stay off the heap.
const INLINE_DEPTH: usize = 32;

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            root: Node::default(),
            len: 0,
            nodes: 1,
            cursor: Vec::new(),
        }
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the tree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
        self.nodes = 1;
        self.cursor.clear();
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Creates one node for each byte of `key` not already on a path.
    pub fn insert<K>(&mut self, key: &K, value: V) -> Option<V>
    where
        K: Key + ?Sized,
    {
        self.reset_cursor();
        let mut node = &mut self.root;
        let mut created = 0;
        for byte in key.as_bytes() {
            let (child, new) = node.child_or_insert(byte);
            created += usize::from(new);
            node = child;
        }
        let previous = node.replace(value);

        self.nodes += created;
        if previous.is_none() {
            self.len += 1;
        }
        if created > 0 {
            trace!(created, nodes = self.nodes, "inserted key");
        }
        previous
    }

    pub fn find<K>(&self, key: &K) -> Option<&V>
    where
        K: Key + ?Sized,
    {
        self.node(key)?.value()
    }

    pub fn find_mut<K>(&mut self, key: &K) -> Option<&mut V>
    where
        K: Key + ?Sized,
    {
        key.as_bytes()
            .into_iter()
            .try_fold(&mut self.root, |node, byte| node.child_mut(byte))?
            .value_mut()
    }

    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: Key + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes `key`, returning whether it was stored.
    pub fn delete<K>(&mut self, key: &K) -> bool
    where
        K: Key + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Removes `key` and returns its value, pruning every node that no
    /// longer leads to a stored key. The root is never pruned.
    pub fn remove<K>(&mut self, key: &K) -> Option<V>
    where
        K: Key + ?Sized,
    {
        let mut path: SmallVec<[Frame<'_, V>; INLINE_DEPTH]> = SmallVec::new();
        path.push(Frame::root(&self.root));
        for byte in key.as_bytes() {
            let parent = path[path.len() - 1].node;
            let child = parent.child(byte)?;
            path.push(Frame::child(child, byte));
        }

        let depth = path.len() - 1;
        let target = path[depth].node;
        if !target.is_terminal() {
            return None;
        }

        // Walk the bookmarks back towards the root. Each parent that is a
        // path node with no other child goes down with its child.
        let mut cut = None;
        if depth > 0 && !target.has_children() {
            let mut top = depth;
            while top > 1 {
                let parent = path[top - 1].node;
                if parent.is_terminal() || parent.child_count() > 1 {
                    break;
                }
                top -= 1;
            }
            cut = Some(top);
        }
        let bytes = key_of(path.iter().map(|frame| &frame.mark));
        drop(path);

        self.reset_cursor();
        let value = self.node_mut(&bytes)?.take();
        if let Some(top) = cut {
            let pruned = self
                .node_mut(&bytes[..top - 1])
                .and_then(|parent| parent.unlink(bytes[top - 1]))
                .map_or(0, |node| node.subtree_size());
            self.nodes -= pruned;
            trace!(pruned, nodes = self.nodes, "pruned path");
        }
        self.len -= 1;
        value
    }

    fn node<K>(&self, key: &K) -> Option<&Node<V>>
    where
        K: Key + ?Sized,
    {
        key.as_bytes()
            .into_iter()
            .try_fold(&self.root, |node, byte| node.child(byte))
    }

    fn node_mut(&mut self, bytes: &[u8]) -> Option<&mut Node<V>> {
        bytes
            .iter()
            .try_fold(&mut self.root, |node, &byte| node.child_mut(byte))
    }
}

impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (String::from_utf8_lossy(&key).into_owned(), value)),
            )
            .finish()
    }
}
