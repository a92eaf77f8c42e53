use crate::operators::Operator;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Token {
    // Not validated: whatever isn't whitespace, an operator or a paren ends up here.
    NumericLiteral(String),
    Operator(&'static Operator),
    OpenParen,
    CloseParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::NumericLiteral(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
