use super::{CHILDREN, scan::Bookmark};

/// A branching point of the trie.
///
/// A node holds a value only when the byte path leading to it is a stored
/// key. Nodes without a value are path nodes kept alive by a longer key.
pub(super) struct Node<V> {
    children: [Option<Box<Node<V>>>; CHILDREN],
    value: Option<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Node {
            children: std::array::from_fn(|_| None),
            value: None,
        }
    }
}

impl<V> Node<V> {
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    pub fn replace(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub fn take(&mut self) -> Option<V> {
        self.value.take()
    }

    pub fn child(&self, byte: u8) -> Option<&Node<V>> {
        self.children[byte as usize].as_deref()
    }

    pub fn child_mut(&mut self, byte: u8) -> Option<&mut Node<V>> {
        self.children[byte as usize].as_deref_mut()
    }

    /// Returns the child at `byte`, creating an empty one if absent.
    /// The flag is true when a node was created.
    pub fn child_or_insert(&mut self, byte: u8) -> (&mut Node<V>, bool) {
        let slot = &mut self.children[byte as usize];
        let created = slot.is_none();
        (&mut **slot.get_or_insert_with(Box::default), created)
    }

    pub fn unlink(&mut self, byte: u8) -> Option<Box<Node<V>>> {
        self.children[byte as usize].take()
    }

    /// The first child whose selecting byte is at least `from`.
    pub fn next_child(&self, from: u16) -> Option<(u8, &Node<V>)> {
        self.children
            .iter()
            .enumerate()
            .skip(from as usize)
            .find_map(|(byte, child)| child.as_deref().map(|child| (byte as u8, child)))
    }

    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Number of nodes in the subtree rooted here, this one included.
    pub fn subtree_size(&self) -> usize {
        let mut stack = vec![self];
        let mut size = 0;
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.children.iter().flatten().map(|child| &**child));
        }
        size
    }
}

impl<V: Clone> Node<V> {
    /// Copies the value but none of the children.
    fn detached(&self) -> Self {
        Node {
            children: std::array::from_fn(|_| None),
            value: self.value.clone(),
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        // Each entry is a source node, its copy so far, and where the copy
        // hangs off its parent.
        let mut stack = vec![(self, self.detached(), Bookmark::ROOT)];
        loop {
            let top = stack.len() - 1;
            let (source, _, mark) = &mut stack[top];
            let source = *source;
            if let Some((byte, child)) = source.next_child(mark.next) {
                mark.next = u16::from(byte) + 1;
                stack.push((child, child.detached(), Bookmark::child(byte)));
                continue;
            }

            let (_, copy, done) = stack.swap_remove(top);
            match (stack.last_mut(), done.byte) {
                (Some((_, parent, _)), Some(byte)) => {
                    parent.children[byte as usize] = Some(Box::new(copy));
                }
                _ => return copy,
            }
        }
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value {
                return false;
            }
            for pair in left.children.iter().zip(&right.children) {
                match pair {
                    (Some(left), Some(right)) => stack.push((&**left, &**right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<V: Eq> Eq for Node<V> {}

// Tear down iteratively so long keys cannot exhaust the stack.
impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<V>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
