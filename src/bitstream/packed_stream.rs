use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};

/// Bytes taken by the little-endian bit count that leads every packed stream.
pub const HEADER_LEN: usize = 4;

/// Huffman coded data: the exact number of meaningful bits, then those bits packed
/// MSB-first with the final byte zero padded.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PackedStream {
    pub bit_count: u32,
    pub bytes: Vec<u8>,
}

impl PackedStream {
    /// Serialize as `bit_count` (u32 LE) followed by the packed bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.bytes.len());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.bytes);
        out
    }

    /// Split a serialized stream into header and payload. The payload is not checked
    /// against the header here; the decoder reports a short payload as truncation.
    pub fn from_bytes(data: &[u8]) -> Result<PackedStream> {
        if data.len() < HEADER_LEN {
            return Err(HuffError::TruncatedStream {
                declared: (HEADER_LEN * 8) as u64,
                available: (data.len() * 8) as u64,
            });
        }
        let mut header = [0_u8; HEADER_LEN];
        header.copy_from_slice(&data[..HEADER_LEN]);
        Ok(PackedStream {
            bit_count: u32::from_le_bytes(header),
            bytes: data[HEADER_LEN..].to_vec(),
        })
    }

    /// Size on the wire, header included.
    pub fn wire_len(&self) -> usize {
        HEADER_LEN + self.bytes.len()
    }

    /// Number of payload bytes `bit_count` calls for.
    pub fn payload_len(&self) -> usize {
        (self.bit_count as usize).div_ceil(8)
    }

    /// The first `limit` meaningful bits as a string of 0s and 1s.
    pub fn bit_string(&self, limit: usize) -> String {
        let mut br = BitReader::new(self.bytes.as_slice());
        let take = limit.min(self.bit_count as usize);
        let mut out = String::with_capacity(take);
        while out.len() < take {
            match br.bit() {
                Some(1) => out.push('1'),
                Some(_) => out.push('0'),
                None => break,
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::PackedStream;
    use crate::error::HuffError;

    #[test]
    fn wire_format_test() {
        let ps = PackedStream {
            bit_count: 10,
            bytes: vec![0b1100_1010, 0b0100_0000],
        };
        assert_eq!(ps.to_bytes(), vec![10, 0, 0, 0, 0b1100_1010, 0b0100_0000]);
        assert_eq!(ps.wire_len(), 6);
        assert_eq!(ps.payload_len(), 2);
        assert_eq!(PackedStream::from_bytes(&ps.to_bytes()).unwrap(), ps);
    }

    #[test]
    fn header_is_little_endian_test() {
        let ps = PackedStream::from_bytes(&[0x01, 0x02, 0x00, 0x00]).unwrap();
        assert_eq!(ps.bit_count, 0x0201);
        assert!(ps.bytes.is_empty());
    }

    #[test]
    fn short_header_test() {
        let result = PackedStream::from_bytes(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(HuffError::TruncatedStream {
                declared: 32,
                available: 24
            })
        ));
    }

    #[test]
    fn bit_string_ignores_padding_test() {
        let ps = PackedStream {
            bit_count: 10,
            bytes: vec![0b1100_1010, 0b0111_1111],
        };
        assert_eq!(ps.bit_string(100), "1100101001");
        assert_eq!(ps.bit_string(4), "1100");
    }
}
