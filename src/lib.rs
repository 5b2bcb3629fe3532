//! Lossless Huffman coding of raw bitmap pixels.
//!
//! The pixel bytes of an uncompressed bitmap are counted, a Huffman code is built from
//! those counts, and every byte is replaced by its code. The packed stream is a 32 bit
//! little-endian bit count followed by the code bits, MSB-first, zero padded to a byte.
//! Decoding uses the same session's tables and is verified byte for byte, together with
//! the mean squared error (always 0) and the bits per pixel achieved.
//!
//! Basic usage:
//!
//! `$> huffbmp lenna.bmp -e encoded.bin -o lenna_r.bmp`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
