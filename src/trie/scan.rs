use super::{Node, Trie};
use tracing::trace;

/// Traversal progress at one level of the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Bookmark {
    /// Byte followed from the parent. `None` only for the root.
    pub byte: Option<u8>,
    /// Next child slot to examine, `256` once every slot has been seen.
    pub next: u16,
}

impl Bookmark {
    pub const ROOT: Bookmark = Bookmark {
        byte: None,
        next: 0,
    };

    pub fn child(byte: u8) -> Self {
        Bookmark {
            byte: Some(byte),
            next: 0,
        }
    }
}

/// A bookmark together with the node it refers to.
pub(super) struct Frame<'a, V> {
    pub node: &'a Node<V>,
    pub mark: Bookmark,
}

impl<V> Clone for Frame<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Frame<'_, V> {}

impl<'a, V> Frame<'a, V> {
    pub fn root(node: &'a Node<V>) -> Self {
        Frame {
            node,
            mark: Bookmark::ROOT,
        }
    }

    pub fn child(node: &'a Node<V>, byte: u8) -> Self {
        Frame {
            node,
            mark: Bookmark::child(byte),
        }
    }
}

/// Concatenates the selecting bytes of a bookmark path.
pub(super) fn key_of<'m>(marks: impl IntoIterator<Item = &'m Bookmark>) -> Vec<u8> {
    marks.into_iter().filter_map(|mark| mark.byte).collect()
}

/// Moves a depth-first frame stack on to the next terminal node.
///
/// On success the top frame is that node and every frame below it has
/// `next` set one past the byte leading up. Returns false once the stack
/// has been emptied.
pub(super) fn advance<V>(frames: &mut Vec<Frame<'_, V>>) -> bool {
    while let Some(top) = frames.last_mut() {
        let node = top.node;
        match node.next_child(top.mark.next) {
            Some((byte, child)) => {
                top.mark.next = u16::from(byte) + 1;
                frames.push(Frame::child(child, byte));
                if child.is_terminal() {
                    return true;
                }
            }
            None => {
                frames.pop();
            }
        }
    }
    false
}

/// Rebuilds the frame stack for a saved cursor by walking down from `root`.
fn resolve<'a, V>(root: &'a Node<V>, marks: &[Bookmark]) -> Vec<Frame<'a, V>> {
    let mut frames = Vec::with_capacity(marks.len() + 1);
    let Some((&first, rest)) = marks.split_first() else {
        return frames;
    };
    frames.push(Frame {
        node: root,
        mark: first,
    });
    for &mark in rest {
        let Some(node) = frames
            .last()
            .zip(mark.byte)
            .and_then(|(top, byte)| top.node.child(byte))
        else {
            break;
        };
        frames.push(Frame { node, mark });
    }
    frames
}

impl<V> Trie<V> {
    /// Advances the built-in cursor to the next key in ascending byte order.
    ///
    /// Returns false once every key has been visited; the call after that
    /// starts again from the smallest key. Each call only does the work
    /// needed to reach the next stored key.
    ///
    /// ```
    /// let mut trie = bytetrie::Trie::new();
    /// trie.insert("b", 2);
    /// trie.insert("a", 1);
    ///
    /// assert!(trie.scan());
    /// assert_eq!(trie.current_pair(), Some((b"a".to_vec(), &1)));
    /// assert!(trie.scan());
    /// assert_eq!(trie.current_key(), Some(b"b".to_vec()));
    /// assert!(!trie.scan());
    /// ```
    pub fn scan(&mut self) -> bool {
        if self.cursor.is_empty() {
            self.cursor.push(Bookmark::ROOT);
            if self.root.is_terminal() {
                return true;
            }
        }

        let mut frames = resolve(&self.root, &self.cursor);
        let found = advance(&mut frames);
        self.cursor.clear();
        self.cursor.extend(frames.iter().map(|frame| frame.mark));
        if !found {
            trace!("scan exhausted");
        }
        found
    }

    /// The key under the cursor, if the last [`scan`](Trie::scan) found one.
    pub fn current_key(&self) -> Option<Vec<u8>> {
        self.current().map(|_| key_of(&self.cursor))
    }

    /// The key and value under the cursor, if the last
    /// [`scan`](Trie::scan) found one.
    pub fn current_pair(&self) -> Option<(Vec<u8>, &V)> {
        let value = self.current()?.value()?;
        Some((key_of(&self.cursor), value))
    }

    /// Abandons an in-progress scan. The next call to
    /// [`scan`](Trie::scan) starts from the smallest key.
    pub fn reset_cursor(&mut self) {
        if !self.cursor.is_empty() {
            trace!(depth = self.cursor.len(), "scan cursor reset");
            self.cursor.clear();
        }
    }

    fn current(&self) -> Option<&Node<V>> {
        let (_, rest) = self.cursor.split_first()?;
        let node = rest.iter().try_fold(&self.root, |node, mark| {
            mark.byte.and_then(|byte| node.child(byte))
        })?;
        node.is_terminal().then_some(node)
    }
}
