pub mod operators;
pub mod postfix;
pub mod token;
pub mod tokenizer;

pub use postfix::ParseError;
use token::Token;

pub fn parse(input: &str) -> Result<Vec<Token>, ParseError> {
    let tokens = tokenizer::tokenize(input);
    postfix::to_postfix(tokens)
}
