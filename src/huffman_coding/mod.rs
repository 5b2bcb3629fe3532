//! The huffman module builds the prefix code for one input.
//!
//! - huffman: the code tree, built by repeatedly merging the two lightest nodes.
//! - code_table: the forward (symbol → code) and inverse (code → symbol) tables derived
//!   from the tree.
//!
//! The code is static: it is computed once from the counts of the whole input and never
//! adapted. The tree is dropped as soon as the tables exist.
//!

pub mod code_table;
pub mod huffman;
