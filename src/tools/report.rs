use super::cli::{HuffOpts, Verbosity};

/// Reports app progress as per Verbosity setting.
/// Accepts both &str and String message.
pub fn report<S: AsRef<str> + std::fmt::Display>(o: &HuffOpts, this_v: Verbosity, msg: S) {
    if o.verbose >= this_v {
        println!("{}", msg)
    }
}

/// One line showing the start of a bitstream, e.g. "Encoded bit stream (first 100 bits): 0110...".
pub fn bit_sample(label: &str, bits: &str, limit: usize) -> String {
    format!("{} bit stream (first {} bits): {}...", label, limit, bits)
}
