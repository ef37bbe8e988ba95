pub mod iter;
mod keys;
mod map;
mod node;
mod scan;
#[cfg(test)]
mod proptests;

use node::Node;
use scan::Bookmark;

/// Anything that can be walked as a sequence of bytes.
pub trait Key {
    fn as_bytes(&self) -> impl IntoIterator<Item = u8> + '_;
}

const CHILDREN: usize = u8::MAX as usize + 1;

/// A 256-way prefix tree mapping byte strings to values.
///
/// The root node stands for the empty key and is never pruned.
///
/// Alongside the tree, the trie holds the state of an in-progress
/// [`scan`](Trie::scan). Any mutation (`insert`, `delete`, `remove`,
/// `clear`) resets that state, so a scan interrupted by a mutation starts
/// over from the first key on its next call.
///
/// The trie has no internal synchronisation. Sharing it between threads
/// requires an external lock.
#[derive(Clone)]
pub struct Trie<V> {
    root: Node<V>,
    len: usize,
    nodes: usize,
    cursor: Vec<Bookmark>,
}
