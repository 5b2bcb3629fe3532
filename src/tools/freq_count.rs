/// Symbol counts for a single input sequence. Only symbols that occur are visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
    total: u64,
}

impl FrequencyTable {
    /// Count of `symbol`, or None if it never occurs.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        match self.counts[symbol as usize] {
            0 => None,
            n => Some(n),
        }
    }

    /// Present symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, n)| **n > 0)
            .map(|(sym, &n)| (sym as u8, n))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of symbols counted.
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> FrequencyTable {
    let mut counts = [0_u64; 256];
    data.iter().for_each(|&el| counts[el as usize] += 1);
    FrequencyTable {
        counts,
        total: data.len() as u64,
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn scenario_counts_test() {
        let f = freqs(&[0, 0, 0, 0, 1, 1, 2]);
        assert_eq!(f.iter().collect::<Vec<_>>(), vec![(0, 4), (1, 2), (2, 1)]);
        assert_eq!(f.len(), 3);
        assert_eq!(f.total(), 7);
        assert_eq!(f.get(3), None);
    }

    #[test]
    fn empty_test() {
        let f = freqs(&[]);
        assert!(f.is_empty());
        assert_eq!(f.len(), 0);
        assert_eq!(f.iter().count(), 0);
    }

    #[test]
    fn full_alphabet_test() {
        let data = (0..=255).collect::<Vec<u8>>();
        let f = freqs(&data);
        assert_eq!(f.len(), 256);
        assert!(f.iter().all(|(_, n)| n == 1));
    }
}
