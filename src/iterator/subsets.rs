use log::{debug, warn};

use super::constants::MAX_DICE;

/// Lazily yields every non-empty subset of a dice slice.
///
/// Subsets are produced for masks `1..2^N` in increasing order, where bit `j`
/// selects die `j`. Values keep their original order inside each subset and
/// dice are told apart by position, so equal values are still separate items.
///
/// Only the first [`MAX_DICE`] dice take part; any beyond that are dropped
/// with a warning.
#[derive(Debug, Clone)]
pub struct Subsets<'a> {
    values: &'a [i64],
    mask: u64,
    end: u64,
}

impl<'a> Subsets<'a> {
    pub fn new(values: &'a [i64]) -> Self {
        let len = values.len().min(MAX_DICE);
        if len < values.len() {
            warn!(
                "Dropping {} dice beyond the limit of {}",
                values.len() - len,
                MAX_DICE
            );
        }
        let end = 1_u64 << len;
        debug!("Enumerating {} subsets of {} dice", end - 1, len);

        Self {
            values: &values[..len],
            mask: 1,
            end,
        }
    }

    fn select(&self, mask: u64) -> Vec<i64> {
        self.values
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1_u64 << index) != 0)
            .map(|(_, &value)| value)
            .collect()
    }
}

impl Iterator for Subsets<'_> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.end {
            return None;
        }
        let subset = self.select(self.mask);
        self.mask += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.mask);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

pub fn subsets(values: &[i64]) -> Subsets<'_> {
    Subsets::new(values)
}
