use std::fmt;

use crate::expression::ast::{Evaluation, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.rendering, self.value)
    }
}

/// Incrementally built text for a left-to-right evaluation
#[derive(Debug, Clone)]
pub(crate) struct Rendering {
    text: String,
}

impl Rendering {
    pub(crate) fn new(first: i64) -> Self {
        Self {
            text: first.to_string(),
        }
    }

    /// Appends `operator operand`, parenthesizing everything so far when an
    /// additive step is followed by a multiplicative one
    pub(crate) fn push(&mut self, previous: Operator, operator: Operator, operand: i64) {
        if previous.is_additive() && operator.is_multiplicative() {
            self.text = format!("({}) {} {}", self.text, operator, operand);
        } else {
            self.text = format!("{} {} {}", self.text, operator, operand);
        }
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }
}
