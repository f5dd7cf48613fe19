//! Trie dictionary shared by encoder and decoder.
//!
//! Maps byte sequences to monotonically assigned integer codes. The
//! encoder walks the trie downwards for longest-prefix matching; the
//! decoder walks parent links upwards to expand a code back into bytes.
//! Both sides grow their dictionary with the same call order of
//! [`Dictionary::reserve_width`] and [`Dictionary::update_node`] relative
//! to code emission/consumption, which keeps the two independently built
//! dictionaries in lock-step without any side channel.

use std::collections::HashMap;

use trielz_core::arena::{Arena, Handle};

use crate::error::Result;

/// Width of the first code of every stream, in bits.
pub(crate) const MIN_CODE_WIDTH: u8 = 8;
/// Widest code the format allows.
pub(crate) const MAX_CODE_WIDTH: u8 = 16;
/// Width increment applied at each growth threshold.
pub(crate) const WIDTH_STEP: u8 = 1;
/// Total number of assignable codes; growth stops here permanently.
pub(crate) const MAX_CODES: u32 = 1 << MAX_CODE_WIDTH;

/// Handle to a trie node. Valid for the lifetime of its dictionary.
pub(crate) type NodeId = Handle;

/// One dictionary entry: the byte sequence formed by its parent chain.
///
/// Immutable once created; child edges live in the dictionary's sparse
/// edge map rather than in the node itself.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Unique code, assigned in creation order.
    pub code: u32,
    /// Number of bytes in the represented sequence.
    pub length: usize,
    /// Byte appended relative to the parent.
    pub value: u8,
    /// Node for the sequence with the last byte removed; `None` for roots.
    pub parent: Option<NodeId>,
}

/// Growing trie over all byte sequences seen so far in one pass.
#[derive(Debug)]
pub(crate) struct Dictionary {
    arena: Arena<TrieNode>,
    /// Sparse child edges: (parent, next byte) -> child.
    children: HashMap<(NodeId, u8), NodeId>,
    /// Length-1 nodes for all 256 byte values, codes 0-255.
    roots: Vec<NodeId>,
    code_width: u8,
    next_code: u32,
}

impl Dictionary {
    /// Create a dictionary pre-seeded with the 256 single-byte entries.
    pub fn new() -> Result<Self> {
        let mut dict = Self {
            arena: Arena::new(),
            children: HashMap::new(),
            roots: Vec::with_capacity(256),
            code_width: MIN_CODE_WIDTH,
            next_code: 0,
        };

        for byte in 0..=255u8 {
            let root = dict.new_node(None, byte)?;
            dict.roots.push(root);
        }

        Ok(dict)
    }

    /// The length-1 node for `byte`. Always present.
    pub fn lookup_root(&self, byte: u8) -> NodeId {
        self.roots[byte as usize]
    }

    /// The child of `node` for `byte`, if one has been created.
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        self.children.get(&(node, byte)).copied()
    }

    /// Borrow the entry behind a handle.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        self.arena.get(id)
    }

    /// Number of bits used to transmit a code right now.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }

    /// Next code value to be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// True while the dictionary may still gain entries.
    pub fn allow_growth(&self) -> bool {
        self.next_code < MAX_CODES
    }

    /// Widen the code width by one step once `next_code` no longer fits.
    ///
    /// Encoder and decoder must call this at the identical logical point of
    /// their loops so the width schedules never diverge.
    pub fn reserve_width(&mut self) {
        if self.next_code >= 1 << self.code_width && self.allow_growth() {
            self.code_width += WIDTH_STEP;
        }
    }

    /// Create the child of `parent` for `byte` and assign it the next code.
    ///
    /// Callers check [`Dictionary::allow_growth`] first.
    pub fn update_node(&mut self, parent: NodeId, byte: u8) -> Result<NodeId> {
        debug_assert!(self.allow_growth());

        let child = self.new_node(Some(parent), byte)?;
        self.children.insert((parent, byte), child);
        Ok(child)
    }

    /// Append the byte sequence represented by `node` to `out`.
    ///
    /// Walks parent links from `node` up to its root, writing bytes in
    /// reverse into space reserved up front from the node's length.
    pub fn expand_into(&self, node: NodeId, out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + self.node(node).length, 0);

        let mut slot = out.len();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let entry = self.node(id);
            slot -= 1;
            out[slot] = entry.value;
            cursor = entry.parent;
        }
        debug_assert_eq!(slot, start);
    }

    fn new_node(&mut self, parent: Option<NodeId>, value: u8) -> Result<NodeId> {
        let length = match parent {
            Some(p) => self.node(p).length + 1,
            None => 1,
        };

        let id = self.arena.alloc(TrieNode {
            code: self.next_code,
            length,
            value,
            parent,
        })?;
        self.next_code += 1;
        Ok(id)
    }
}
