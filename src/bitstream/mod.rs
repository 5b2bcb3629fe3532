//! The bitstream module forms the I/O subsystem of the codec.
//!
//! - bitpacker: packs huffman codes MSB-first into bytes.
//! - bitreader: reads bits back MSB-first from any `Read` source.
//! - packed_stream: the packed data plus its bit count, and the wire layout
//!   (u32 little-endian bit count, then `ceil(bit_count / 8)` bytes).
//! - bitwriter: persists a packed stream.
//!
pub mod bitpacker;
pub mod bitreader;
pub mod bitwriter;
pub mod packed_stream;
