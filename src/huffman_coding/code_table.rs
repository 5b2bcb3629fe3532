//! Turns a `CodeTree` into the forward (symbol → code) and inverse (code → symbol) tables
//! used by the packer and the unpacker.

use std::fmt::{Display, Formatter};

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{CodeTree, NodeData, NodeId};
use crate::error::{HuffError, Result};

/// Longest code a `Code` can hold.
pub const MAX_CODE_LEN: u8 = 64;

/// A bit string of `len` bits. The first bit to be emitted is the most significant of
/// the `len` low bits of `bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// This code with `bit` appended.
    pub fn push(self, bit: bool) -> Code {
        Code {
            bits: (self.bits << 1) | bit as u64,
            len: self.len + 1,
        }
    }

    /// Iterate over the bits, first emitted first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(move |i| (self.bits >> i) & 1 == 1)
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other.bits.checked_shr((other.len - self.len) as u32).unwrap_or(0) == self.bits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

pub type ForwardTable = FxHashMap<u8, Code>;
pub type InverseTable = FxHashMap<Code, u8>;

/// Both code tables of one encode/decode session.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    pub forward: ForwardTable,
    pub inverse: InverseTable,
}

impl CodeTables {
    /// Walk the tree and record every leaf in both tables. Left edges append 0, right
    /// edges append 1. A tree whose root is a leaf gets the one-bit code `0`.
    pub fn from_tree(tree: &CodeTree) -> Result<CodeTables> {
        let root = tree.root().ok_or(HuffError::EmptyTree)?;

        let mut leaves = vec![];
        return_leaves(tree, root, Code::default(), &mut leaves);

        let mut tables = CodeTables::default();
        for (sym, mut code) in leaves {
            if code.len == 0 {
                debug!("Assigning fallback code 0 to lone symbol {}", sym);
                code = Code { bits: 0, len: 1 };
            }
            trace!("{:>3} -> {}", sym, code);
            tables.forward.insert(sym, code);
            tables.inverse.insert(code, sym);
        }
        debug!(
            "Generated {} codes, longest is {} bits.",
            tables.forward.len(),
            tables.max_len()
        );
        Ok(tables)
    }

    /// Length of the longest code, 0 for empty tables.
    pub fn max_len(&self) -> u8 {
        max_len(&self.inverse)
    }
}

/// Length of the longest code in an inverse table.
pub fn max_len(inverse: &InverseTable) -> u8 {
    inverse.keys().map(|c| c.len).max().unwrap_or(0)
}

/// Recursively walk the tree and push each leaf symbol with the path that reached it.
fn return_leaves(tree: &CodeTree, id: NodeId, code: Code, leaves: &mut Vec<(u8, Code)>) {
    match tree.node(id).node_data {
        NodeData::Kids(left, right) => {
            // Depth is bounded by the 32 bit stream header: the weights needed for a
            // 64 level tree would overflow it long before.
            debug_assert!(code.len < MAX_CODE_LEN);
            return_leaves(tree, left, code.push(false), leaves);
            return_leaves(tree, right, code.push(true), leaves);
        }
        NodeData::Leaf(sym) => leaves.push((sym, code)),
    }
}
