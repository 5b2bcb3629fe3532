use std::io::Write;

use log::debug;

use super::packed_stream::PackedStream;

/// Writes a packed stream for output: the bit count header followed by the packed bytes.
pub struct BitWriter {
    /// Handle to the output stream
    writer: Box<dyn std::io::Write + std::marker::Sync + std::marker::Send>,
}

impl BitWriter {
    /// Create a new BitWriter that writes to the file at `filepath`.
    pub fn new(filepath: &str) -> Result<Self, std::io::Error> {
        let file = std::fs::File::create(filepath)?;
        Ok(Self::with_writer(file))
    }

    /// Create a new BitWriter on any output device.
    pub fn with_writer<W: Write + Sync + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Write a whole packed stream and flush it. Returns the number of bytes written.
    pub fn add_stream(&mut self, stream: &PackedStream) -> Result<usize, std::io::Error> {
        let output = stream.to_bytes();
        self.writer.write_all(&output)?;
        self.writer.flush()?;
        debug!("Wrote {} bytes ({} bits of data).", output.len(), stream.bit_count);
        Ok(output.len())
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;
    use crate::bitstream::packed_stream::PackedStream;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// In-memory sink that stays readable after the writer takes ownership of a clone.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn with_writer_round_trip_test() {
        let sink = SharedBuf::default();
        let stream = PackedStream {
            bit_count: 13,
            bytes: vec![0b1010_1010, 0b1111_1000],
        };
        let mut bw = BitWriter::with_writer(sink.clone());
        assert_eq!(bw.add_stream(&stream).unwrap(), stream.wire_len());
        let written = sink.0.lock().unwrap().clone();
        assert_eq!(written, stream.to_bytes());
        assert_eq!(PackedStream::from_bytes(&written).unwrap(), stream);
    }

    #[test]
    fn add_stream_test() {
        let path = std::env::temp_dir()
            .join(format!("huffbmp_bitwriter_{}.bin", std::process::id()));
        let stream = PackedStream {
            bit_count: 9,
            bytes: vec![0xff, 0x80],
        };
        {
            let mut bw = BitWriter::new(path.to_str().unwrap()).unwrap();
            assert_eq!(bw.add_stream(&stream).unwrap(), 6);
        }
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, vec![9, 0, 0, 0, 0xff, 0x80]);
    }

    #[test]
    fn bad_path_test() {
        assert!(BitWriter::new("/nonexistent-dir/for/huffbmp/out.bin").is_err());
    }
}
