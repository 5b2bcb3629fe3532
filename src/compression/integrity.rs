//! Round trip verification: exact equality, distortion (MSE) and compression metrics.

use log::info;

use crate::bitstream::packed_stream::PackedStream;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// Metrics of a verified round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrityReport {
    /// Mean squared error between original and reconstruction. Always 0 in a report.
    pub mse: f64,
    /// Meaningful packed bits per input symbol.
    pub bits_per_symbol: f64,
    /// Shannon entropy of the input, the lower bound for `bits_per_symbol`.
    pub entropy: f64,
}

/// Fail on the first difference in length or content.
pub fn verify(original: &[u8], reconstructed: &[u8]) -> Result<()> {
    if original.len() != reconstructed.len() {
        return Err(HuffError::SizeMismatch {
            original: original.len(),
            reconstructed: reconstructed.len(),
        });
    }
    match original
        .iter()
        .zip(reconstructed)
        .position(|(a, b)| a != b)
    {
        Some(index) => Err(HuffError::Mismatch {
            index,
            original: original[index],
            reconstructed: reconstructed[index],
        }),
        None => Ok(()),
    }
}

/// Mean of the squared per position differences. Two empty sequences have an MSE of 0.
pub fn mse(original: &[u8], reconstructed: &[u8]) -> Result<f64> {
    if original.len() != reconstructed.len() {
        return Err(HuffError::SizeMismatch {
            original: original.len(),
            reconstructed: reconstructed.len(),
        });
    }
    if original.is_empty() {
        return Ok(0.0);
    }
    let sum: u64 = original
        .iter()
        .zip(reconstructed)
        .map(|(&a, &b)| {
            let diff = a as i64 - b as i64;
            (diff * diff) as u64
        })
        .sum();
    Ok(sum as f64 / original.len() as f64)
}

/// Packed bits per input symbol; 0 when there are no symbols.
pub fn bits_per_symbol(bit_count: u64, symbols: usize) -> f64 {
    if symbols == 0 {
        return 0.0;
    }
    bit_count as f64 / symbols as f64
}

/// Shannon entropy of the distribution in bits per symbol.
pub fn entropy(freqs: &FrequencyTable) -> f64 {
    let total = freqs.total() as f64;
    freqs
        .iter()
        .map(|(_, n)| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Run every check on a round trip. Distortion is an error, never just a number.
pub fn check(
    original: &[u8],
    reconstructed: &[u8],
    packed: &PackedStream,
    freqs: &FrequencyTable,
) -> Result<IntegrityReport> {
    verify(original, reconstructed)?;
    let mse = mse(original, reconstructed)?;
    if mse != 0.0 {
        return Err(HuffError::Lossy { mse });
    }
    let report = IntegrityReport {
        mse,
        bits_per_symbol: bits_per_symbol(packed.bit_count as u64, original.len()),
        entropy: entropy(freqs),
    };
    info!(
        "Round trip verified: {:.4} bits/symbol, entropy bound {:.4}.",
        report.bits_per_symbol, report.entropy
    );
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::{bits_per_symbol, check, entropy, mse, verify};
    use crate::compression::compress::encode;
    use crate::compression::decompress::decode;
    use crate::error::HuffError;
    use crate::tools::freq_count::freqs;

    #[test]
    fn verify_equal_test() {
        assert!(verify(&[1, 2, 3], &[1, 2, 3]).is_ok());
        assert!(verify(&[], &[]).is_ok());
    }

    #[test]
    fn verify_mismatch_test() {
        assert!(matches!(
            verify(&[1, 2, 3], &[1, 9, 3]),
            Err(HuffError::Mismatch {
                index: 1,
                original: 2,
                reconstructed: 9
            })
        ));
    }

    #[test]
    fn verify_size_test() {
        assert!(matches!(
            verify(&[1, 2, 3], &[1, 2]),
            Err(HuffError::SizeMismatch {
                original: 3,
                reconstructed: 2
            })
        ));
    }

    #[test]
    fn mse_test() {
        assert_eq!(mse(&[1, 2, 3], &[1, 2, 3]).unwrap(), 0.0);
        // (0 + 4 + 16 + 255²) / 4
        assert_eq!(mse(&[0, 2, 0, 255], &[0, 0, 4, 0]).unwrap(), 65045.0 / 4.0);
        assert_eq!(mse(&[], &[]).unwrap(), 0.0);
        assert!(matches!(mse(&[1], &[]), Err(HuffError::SizeMismatch { .. })));
    }

    #[test]
    fn entropy_test() {
        assert_eq!(entropy(&freqs(&[7, 7, 7])), 0.0);
        assert!((entropy(&freqs(&[0, 1, 2, 3])) - 2.0).abs() < 1e-12);
        assert!((entropy(&freqs(&[0, 1])) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bits_per_symbol_test() {
        assert_eq!(bits_per_symbol(10, 7), 10.0 / 7.0);
        assert_eq!(bits_per_symbol(0, 0), 0.0);
    }

    #[test]
    fn skewed_distribution_test() {
        // 90% symbol 0, the rest spread over three others.
        let mut data = vec![0_u8; 900];
        data.extend(std::iter::repeat(1).take(40));
        data.extend(std::iter::repeat(2).take(35));
        data.extend(std::iter::repeat(3).take(25));
        let enc = encode(&data).unwrap();
        let back = decode(&enc.packed, &enc.tables.inverse).unwrap();
        let report = check(&data, &back, &enc.packed, &enc.freqs).unwrap();
        assert_eq!(report.mse, 0.0);
        assert!(report.bits_per_symbol < 8.0);
        assert!(report.bits_per_symbol >= report.entropy);
        // Huffman is within one bit of the entropy.
        assert!(report.bits_per_symbol < report.entropy + 1.0);
    }

    #[test]
    fn check_rejects_corruption_test() {
        let data = [0, 0, 0, 0, 1, 1, 2];
        let enc = encode(&data).unwrap();
        let mut back = decode(&enc.packed, &enc.tables.inverse).unwrap();
        back[6] = 1;
        assert!(matches!(
            check(&data, &back, &enc.packed, &enc.freqs),
            Err(HuffError::Mismatch { index: 6, .. })
        ));
    }
}
