//! codebook/encode.rs
//! Sequence → code dictionary used by the compressor.
//!
//! Design notes:
//! - Prefix tree. Node 0 is the empty sequence; nodes 1..=256 are the seeded
//!   single bytes, so the first step from the root needs no lookup.
//! - Deeper edges live in one `HashMap<(NodeId, u8), NodeId>`.
//! - A node may exist without a code. After a reset the compressor inserts
//!   its pending match into a fresh tree, and the proper prefixes of that
//!   match become pass-through nodes.

use std::collections::HashMap;

use crate::constants::{ALPHABET_SIZE, EOF_CODE};
use crate::types::{Code, CodebookError};

/// Index of a node in the prefix tree.
pub type NodeId = u32;

/// The empty sequence.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub struct EncoderCodebook {
    /// Code carried by each node.
    codes: Vec<Option<Code>>,
    /// Edges below the seeded single-byte nodes.
    edges: HashMap<(NodeId, u8), NodeId>,
    /// Node holding each assigned code, indexed by code.
    owners: Vec<Option<NodeId>>,
    entries: usize,
}

impl Default for EncoderCodebook {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderCodebook {
    /// Codebook seeded with every single-byte sequence at its byte value.
    pub fn new() -> Self {
        let mut book = Self {
            codes: Vec::new(),
            edges: HashMap::new(),
            owners: Vec::new(),
            entries: 0,
        };
        book.seed();
        book
    }

    fn seed(&mut self) {
        self.codes.push(None);
        for byte in 0..ALPHABET_SIZE {
            self.codes.push(Some(byte as Code));
            self.owners.push(Some(Self::seeded_node(byte as u8)));
        }
        // EOF slot
        self.owners.push(None);
        self.entries = ALPHABET_SIZE;
    }

    /// Back to the seeded state, keeping allocations.
    pub fn reset(&mut self) {
        self.codes.clear();
        self.edges.clear();
        self.owners.clear();
        self.seed();
    }

    #[inline]
    fn seeded_node(byte: u8) -> NodeId {
        byte as NodeId + 1
    }

    /// Node for a single byte. Always present.
    #[inline]
    pub fn root_child(&self, byte: u8) -> NodeId {
        Self::seeded_node(byte)
    }

    /// Node for `node`'s sequence extended by `byte`, if the tree has one.
    /// The node may still lack a code; check with `code_of`.
    #[inline]
    pub fn step(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        if node == ROOT {
            return Some(Self::seeded_node(byte));
        }
        self.edges.get(&(node, byte)).copied()
    }

    #[inline]
    pub fn code_of(&self, node: NodeId) -> Option<Code> {
        self.codes.get(node as usize).copied().flatten()
    }

    /// Extension of `node` by `byte` only if that extension has a code.
    #[inline]
    pub fn extend(&self, node: NodeId, byte: u8) -> Option<(NodeId, Code)> {
        let child = self.step(node, byte)?;
        self.code_of(child).map(|code| (child, code))
    }

    pub fn lookup(&self, sequence: &[u8]) -> Option<Code> {
        if sequence.is_empty() {
            return None;
        }
        let mut node = ROOT;
        for &byte in sequence {
            node = self.step(node, byte)?;
        }
        self.code_of(node)
    }

    pub fn contains(&self, sequence: &[u8]) -> bool {
        self.lookup(sequence).is_some()
    }

    /// Number of sequences holding a code (256 when freshly seeded).
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn code_in_use(&self, code: Code) -> bool {
        code == EOF_CODE || matches!(self.owners.get(code as usize), Some(Some(_)))
    }

    /// Assign `code` to `sequence`, creating pass-through nodes for any
    /// missing prefixes.
    pub fn insert(&mut self, sequence: &[u8], code: Code) -> Result<NodeId, CodebookError> {
        if sequence.is_empty() {
            return Err(CodebookError::EmptySequence);
        }
        if self.code_in_use(code) {
            return Err(CodebookError::CodeInUse { code });
        }
        let mut node = ROOT;
        for &byte in sequence {
            node = match self.step(node, byte) {
                Some(next) => next,
                None => self.push_node(node, byte),
            };
        }
        if let Some(existing) = self.code_of(node) {
            return Err(CodebookError::duplicate(sequence, existing));
        }
        self.assign(node, code);
        Ok(node)
    }

    /// Assign `code` to `node`'s sequence extended by `byte`.
    pub fn insert_child(&mut self, node: NodeId, byte: u8, code: Code) -> Result<NodeId, CodebookError> {
        if self.code_in_use(code) {
            return Err(CodebookError::CodeInUse { code });
        }
        let child = match self.step(node, byte) {
            Some(child) => {
                if let Some(existing) = self.code_of(child) {
                    return Err(CodebookError::DuplicateSequence {
                        sequence: format!("node {node} + 0x{byte:02x}"),
                        code: existing,
                    });
                }
                child
            }
            None => self.push_node(node, byte),
        };
        self.assign(child, code);
        Ok(child)
    }

    fn push_node(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let id = self.codes.len() as NodeId;
        self.codes.push(None);
        self.edges.insert((parent, byte), id);
        id
    }

    fn assign(&mut self, node: NodeId, code: Code) {
        self.codes[node as usize] = Some(code);
        let slot = code as usize;
        if self.owners.len() <= slot {
            self.owners.resize(slot + 1, None);
        }
        self.owners[slot] = Some(node);
        self.entries += 1;
    }
}
