use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::packed_stream::PackedStream;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{max_len, Code, InverseTable};

/// Rebuild the symbol sequence from a packed stream and the inverse table of the
/// session that produced it. Exactly `bit_count` bits are read; the pad bits of the last
/// byte are ignored. Bytes beyond `ceil(bit_count / 8)` are rejected.
pub fn decode(packed: &PackedStream, inverse: &InverseTable) -> Result<Vec<u8>> {
    if packed.bytes.len() > packed.payload_len() {
        return Err(HuffError::TrailingBytes {
            expected: packed.payload_len(),
            actual: packed.bytes.len(),
        });
    }
    let declared = packed.bit_count as u64;
    let available = packed.bytes.len() as u64 * 8;
    let longest = max_len(inverse);

    let mut br = BitReader::new(packed.bytes.as_slice());
    let mut out = Vec::with_capacity(packed.bytes.len() * 2);
    let mut pending = Code::default();

    while br.bits_read() < declared {
        let bit = match br.bool_bit() {
            Some(bit) => bit,
            None => {
                if let Some(e) = br.take_error() {
                    return Err(HuffError::Io(e));
                }
                debug!(
                    "Stream ends after {} of {} declared bits.",
                    br.bits_read(),
                    declared
                );
                return Err(HuffError::TruncatedStream {
                    declared,
                    available,
                });
            }
        };
        pending = pending.push(bit);
        if let Some(&sym) = inverse.get(&pending) {
            out.push(sym);
            pending = Code::default();
        } else if pending.len >= longest {
            // Codes are prefix free, so no longer code can match either.
            return Err(HuffError::InvalidCode {
                offset: br.bits_read() - pending.len as u64,
                pending: pending.len,
            });
        }
    }

    if pending.len > 0 {
        return Err(HuffError::InvalidCode {
            offset: declared - pending.len as u64,
            pending: pending.len,
        });
    }
    debug!("Decoder stopped at {}.", br.loc());
    info!("Decoded {} bits into {} bytes.", declared, out.len());
    Ok(out)
}

/// Read a persisted packed stream back from disk.
pub fn read_packed(path: &str) -> Result<PackedStream> {
    let data = std::fs::read(path).map_err(|e| HuffError::InputUnavailable {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    PackedStream::from_bytes(&data)
}
