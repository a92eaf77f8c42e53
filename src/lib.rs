mod error;
pub mod eval;

pub use error::Error;
pub use shunt_syntax::{operators, parse, token, token::Token, tokenizer, ParseError};

/// Evaluates an infix expression such as `2 * (3 + 4.5)`.
///
/// Each call owns all of its intermediate state, so this is safe to call from
/// any number of threads at once.
pub fn calculate(input: &str) -> Result<f64, Error> {
    let tokens = tokenizer::tokenize(input);
    let postfix = shunt_syntax::postfix::to_postfix(tokens)?;
    eval::evaluate_postfix(&postfix)
}
