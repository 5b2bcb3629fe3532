//! The compression module holds the encode and decode passes and their verification.
//!
//! Encoding happens in the following steps:
//! - Frequency count: how often each byte value occurs in the input.
//! - Tree build: merge the two lightest nodes until one root remains.
//! - Code generation: each root-to-leaf path becomes that symbol's code.
//! - Packing: every input byte is replaced by its code, MSB-first.
//!
//! Decoding reads the packed bits one at a time and emits a symbol as soon as the
//! accumulated bits match a code of the session's inverse table.
//!
//! Tables belong to a single session. Nothing is shared between sessions, so independent
//! images can be processed on separate threads.
//!

pub mod compress;
pub mod decompress;
pub mod integrity;
