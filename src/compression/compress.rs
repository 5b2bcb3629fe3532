use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::packed_stream::PackedStream;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{CodeTables, ForwardTable};
use crate::huffman_coding::huffman::CodeTree;
use crate::tools::freq_count::{freqs, FrequencyTable};

/// Everything one encode session produces. The tables are needed to decode `packed`.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub freqs: FrequencyTable,
    pub tables: CodeTables,
    pub packed: PackedStream,
}

/// Huffman encode `data` with a code built from its own symbol frequencies.
pub fn encode(data: &[u8]) -> Result<Encoded> {
    if data.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let freqs = freqs(data);
    info!(
        "Found {} distinct symbols in {} bytes.",
        freqs.len(),
        freqs.total()
    );

    // The tree only lives long enough to derive the tables.
    let tables = {
        let tree = CodeTree::build(&freqs);
        CodeTables::from_tree(&tree)?
    };

    let packed = pack(data, &tables.forward)?;
    info!(
        "Packed {} bytes into {} bits ({} bytes).",
        data.len(),
        packed.bit_count,
        packed.bytes.len()
    );
    Ok(Encoded {
        freqs,
        tables,
        packed,
    })
}

/// Concatenate the code of every symbol of `data`, in order, into a packed stream.
pub fn pack(data: &[u8], forward: &ForwardTable) -> Result<PackedStream> {
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for (index, &symbol) in data.iter().enumerate() {
        let code = forward
            .get(&symbol)
            .ok_or(HuffError::UnknownSymbol { symbol, index })?;
        bp.out_code(*code);
    }
    bp.flush();
    debug!(
        "Packer finished at {}, {} bits in the last byte.",
        bp.loc(),
        bp.last_bits
    );

    Ok(PackedStream {
        bit_count: header_bit_count(bp.bit_count())?,
        bytes: bp.output,
    })
}

/// The bit count as stored in the 32 bit stream header.
fn header_bit_count(bits: u64) -> Result<u32> {
    u32::try_from(bits).map_err(|_| HuffError::StreamTooLong { bits })
}

#[cfg(test)]
mod test {
    use super::{encode, header_bit_count, pack};
    use crate::compression::decompress::decode;
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::Code;
    use rustc_hash::FxHashMap;

    #[test]
    fn scenario_bit_accounting_test() {
        let data = [0, 0, 0, 0, 1, 1, 2];
        let enc = encode(&data).unwrap();
        let expected: u64 = data
            .iter()
            .map(|s| enc.tables.forward[s].len as u64)
            .sum();
        assert_eq!(enc.packed.bit_count as u64, expected);
        assert_eq!(enc.packed.bit_count, 10);
        assert_eq!(enc.packed.bytes.len(), 2);
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(encode(&[]), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn single_symbol_test() {
        let enc = encode(&[5, 5, 5, 5, 5]).unwrap();
        assert_eq!(enc.packed.bit_count, 5);
        assert_eq!(enc.packed.bytes, vec![0]);
    }

    #[test]
    fn independent_sessions_test() {
        let handles = (0..4_u8)
            .map(|t| {
                std::thread::spawn(move || {
                    let data = (0..500_u32)
                        .map(|i| (i % (t as u32 + 2)) as u8 + t)
                        .collect::<Vec<u8>>();
                    let enc = encode(&data).unwrap();
                    (data, enc)
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let (data, enc) = handle.join().unwrap();
            let back = decode(&enc.packed, &enc.tables.inverse).unwrap();
            assert_eq!(back, data);
        }
    }

    #[test]
    fn header_bit_count_limit_test() {
        assert_eq!(header_bit_count(u32::MAX as u64).unwrap(), u32::MAX);
        assert!(matches!(
            header_bit_count(1 << 32),
            Err(HuffError::StreamTooLong { bits: 4294967296 })
        ));
    }

    #[test]
    fn unknown_symbol_test() {
        let mut forward = FxHashMap::default();
        forward.insert(1_u8, Code { bits: 0, len: 1 });
        assert!(matches!(
            pack(&[1, 1, 9], &forward),
            Err(HuffError::UnknownSymbol {
                symbol: 9,
                index: 2
            })
        ));
    }

    #[test]
    fn pack_layout_test() {
        let mut forward = FxHashMap::default();
        forward.insert(b'a', Code { bits: 0b0, len: 1 });
        forward.insert(b'b', Code { bits: 0b10, len: 2 });
        forward.insert(b'c', Code { bits: 0b11, len: 2 });
        let ps = pack(b"abcab", &forward).unwrap();
        // 0 10 11 0 10 -> 01011010 (pad to 8)
        assert_eq!(ps.bit_count, 8);
        assert_eq!(ps.bytes, vec![0b0101_1010]);
    }
}
