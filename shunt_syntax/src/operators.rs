use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy)]
pub struct Operator {
    pub symbol: char,
    pub precedence: u8,
    pub left_associative: bool,
    pub apply: fn(f64, f64) -> f64,
}

impl Operator {
    fn new(symbol: char, precedence: u8, apply: fn(f64, f64) -> f64) -> Self {
        Operator {
            symbol,
            precedence,
            left_associative: true,
            apply,
        }
    }

    // Equal precedence pops for left-associative operators. A right-associative
    // operator (exponentiation, say) only pops strictly weaker ones.
    pub fn has_higher_or_equal_precedence(&self, other: &Operator) -> bool {
        if self.left_associative {
            self.precedence >= other.precedence
        } else {
            self.precedence > other.precedence
        }
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Operator {}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self.symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

lazy_static! {
    static ref OPERATORS: HashMap<char, Operator> = [
        Operator::new('+', 1, |a, b| a + b),
        Operator::new('-', 1, |a, b| a - b),
        Operator::new('*', 2, |a, b| a * b),
        Operator::new('/', 2, |a, b| a / b),
    ]
    .into_iter()
    .map(|op| (op.symbol, op))
    .collect();
}

pub fn lookup(symbol: char) -> Option<&'static Operator> {
    OPERATORS.get(&symbol)
}

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains_key(&c)
}
