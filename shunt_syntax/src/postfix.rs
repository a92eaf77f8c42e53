use crate::token::Token;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    MismatchedParentheses,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MismatchedParentheses => write!(f, "mismatched parentheses"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Shunting Yard: reorders infix tokens into postfix (reverse Polish) order.
///
/// Only parenthesization is checked here. Literals pass through untouched and
/// operand counts are left for the evaluator to complain about.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = vec![];

    for token in tokens {
        match token {
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if !top.has_higher_or_equal_precedence(op) {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(Token::Operator(op));
            }
            Token::OpenParen => stack.push(Token::OpenParen),
            Token::CloseParen => loop {
                match stack.pop() {
                    None => return Err(ParseError::MismatchedParentheses),
                    Some(Token::OpenParen) => break,
                    Some(token) => output.push(token),
                }
            },
            Token::NumericLiteral(_) => output.push(token),
        }
    }

    while let Some(token) = stack.pop() {
        match token {
            Token::OpenParen | Token::CloseParen => {
                return Err(ParseError::MismatchedParentheses)
            }
            _ => output.push(token),
        }
    }

    Ok(output)
}
