//! Helpers around the codec.
//!
//! The tools are:
//! - bitmap: reads pixels out of, and back into, an uncompressed bitmap.
//! - cli: Command line interface.
//! - freq_count: Frequency count of the input bytes.
//! - report: Verbosity gated console output.
//!
pub mod bitmap;
pub mod cli;
pub mod freq_count;
pub mod report;
