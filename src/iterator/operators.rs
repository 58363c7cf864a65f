use crate::expression::Operator;

/// Every operator sequence of a fixed length, `4^K` in all.
///
/// Sequences come out in lexicographic order over `+ - * /`, with the first
/// position most significant. A length of zero yields a single empty sequence.
#[derive(Debug, Clone)]
pub struct OperatorSequences {
    digits: Vec<usize>,
    exhausted: bool,
}

impl OperatorSequences {
    pub fn new(length: usize) -> Self {
        Self {
            digits: vec![0; length],
            exhausted: false,
        }
    }

    fn current(&self) -> Vec<Operator> {
        self.digits
            .iter()
            .filter_map(|&digit| Operator::ALL.get(digit).copied())
            .collect()
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < Operator::ALL.len() {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for OperatorSequences {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let sequence = self.current();
        self.advance();
        Some(sequence)
    }
}

pub fn operator_sequences(length: usize) -> OperatorSequences {
    OperatorSequences::new(length)
}
