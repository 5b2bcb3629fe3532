use log::error;

use crate::huffman_coding::code_table::Code;

/// Packs variable length codes MSB-first into bytes.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Meaningful bits in the final byte after flush() (0 means the byte is full).
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
    bit_count: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to
    /// move the remaining queued bits into the buffer before reading it.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Move every full byte from the queue to the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the `len` low bits of `bits`, most significant first.
    pub fn out_bits(&mut self, bits: u64, mut len: u8) {
        // At most 7 bits wait in the queue, so 32 more always fit.
        while len > 0 {
            let take = len.min(32);
            len -= take;
            let chunk = (bits >> len) & (u64::MAX >> (64 - take));
            self.queue <<= take;
            self.queue |= chunk;
            self.q_bits += take;
            self.bit_count += take as u64;
            self.write_stream();
        }
    }

    /// Puts a huffman code on the stream.
    pub fn out_code(&mut self, code: Code) {
        self.out_bits(code.bits, code.len);
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of meaningful bits written so far (padding excluded).
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!(
            "[{}.{}]",
            ((self.output.len() * 8) + self.q_bits as usize) / 8,
            ((self.output.len() * 8) + self.q_bits as usize) % 8
        )
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::huffman_coding::code_table::Code;

    #[test]
    fn out_bits_byte_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(0b00100001, 8);
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
        assert_eq!(bp.last_bits, 0);
        assert_eq!(bp.bit_count(), 8);
    }

    #[test]
    fn padding_test() {
        let mut bp = BitPacker::new(100);
        bp.out_code(Code { bits: 0b101, len: 3 });
        bp.out_code(Code { bits: 0b11, len: 2 });
        assert_eq!("[0.5]", &bp.loc());
        bp.flush();
        assert_eq!(bp.output, vec![0b1011_1000]);
        assert_eq!(bp.last_bits, 5);
        assert_eq!(bp.bit_count(), 5);
        assert_eq!("[1.0]", &bp.loc());
    }

    #[test]
    fn codes_span_bytes_test() {
        let mut bp = BitPacker::new(100);
        for _ in 0..3 {
            bp.out_code(Code { bits: 0b110, len: 3 });
        }
        bp.flush();
        // 110 110 110 -> 11011011 0(pad)
        assert_eq!(bp.output, vec![0b1101_1011, 0b0000_0000]);
        assert_eq!(bp.bit_count(), 9);
    }

    #[test]
    fn long_code_test() {
        let mut bp = BitPacker::new(100);
        bp.out_bits(1, 1);
        bp.out_bits(u64::MAX, 64);
        bp.flush();
        assert_eq!(bp.bit_count(), 65);
        assert_eq!(bp.output.len(), 9);
        assert!(bp.output[..8].iter().all(|&b| b == 0xff));
        assert_eq!(bp.output[8], 0b1000_0000);
    }
}
