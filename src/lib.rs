//! A prefix tree over byte strings with one level per key byte.
//!
//! ```
//! use bytetrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("rubens", 1);
//! trie.insert("ruber", 2);
//! trie.insert("romane", 3);
//!
//! assert_eq!(trie.find("ruber"), Some(&2));
//! assert!(trie.delete("romane"));
//!
//! let mut keys = Vec::new();
//! while trie.scan() {
//!     keys.push(trie.current_key().unwrap());
//! }
//! assert_eq!(keys, [b"rubens".to_vec(), b"ruber".to_vec()]);
//! ```

mod trie;

pub use trie::{Key, Trie, iter};
