/// Every ordering of a sequence, generated with Heap's algorithm.
///
/// Orderings are told apart by position, so a sequence with repeated values
/// still yields exactly `M!` items. The iterator is `Clone`, which makes a
/// fresh copy restartable from wherever it was cloned.
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<i64>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl Permutations {
    pub fn new(items: Vec<i64>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            index: 1,
            started: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }

        while self.index < self.items.len() {
            let i = self.index;
            let count = self.counters.get(i).copied().unwrap_or(i);
            if count < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(count, i);
                }
                if let Some(counter) = self.counters.get_mut(i) {
                    *counter += 1;
                }
                self.index = 1;
                return Some(self.items.clone());
            }

            if let Some(counter) = self.counters.get_mut(i) {
                *counter = 0;
            }
            self.index += 1;
        }

        None
    }
}

pub fn permutations(items: &[i64]) -> Permutations {
    Permutations::new(items.to_vec())
}
