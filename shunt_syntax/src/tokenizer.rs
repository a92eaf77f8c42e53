// The tokenizer never fails. Anything that isn't whitespace, a parenthesis or
// an operator symbol is glued into a numeric literal, and it's up to the
// evaluator to reject literals that don't parse as numbers.

use crate::operators;
use crate::token::Token;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{anychar, char},
    combinator::{eof, map, map_opt, value},
    multi::many0,
    sequence::{preceded, terminated, tuple},
    IResult,
};

fn is_literal_char(c: char) -> bool {
    !(c.is_whitespace() || c == '(' || c == ')' || operators::is_operator(c))
}

fn space(i: &str) -> IResult<&str, ()> {
    value((), take_while(char::is_whitespace))(i)
}

fn numeric_literal(i: &str) -> IResult<&str, Token> {
    map(take_while1(is_literal_char), |literal: &str| {
        Token::NumericLiteral(literal.to_string())
    })(i)
}

fn operator(i: &str) -> IResult<&str, Token> {
    map_opt(anychar, |c| operators::lookup(c).map(Token::Operator))(i)
}

fn token(i: &str) -> IResult<&str, Token> {
    alt((
        operator,
        value(Token::OpenParen, char('(')),
        value(Token::CloseParen, char(')')),
        numeric_literal,
    ))(i)
}

fn tokens(i: &str) -> IResult<&str, Vec<Token>> {
    terminated(many0(preceded(space, token)), tuple((space, eof)))(i)
}

pub fn tokenize(input: &str) -> Vec<Token> {
    // every character is whitespace or starts one of the token kinds above
    let (_, tokens) = tokens(input).expect("tokenizer did not consume its whole input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::render;

    fn test(input: &str) -> String {
        render(&tokenize(input))
    }

    #[test]
    fn numbers_and_operators() {
        k9::snapshot!(test("3+5"), "3 + 5");
        k9::snapshot!(test("12.5*4/2-1"), "12.5 * 4 / 2 - 1");
        k9::snapshot!(test("(1+2)*(3+2)"), "( 1 + 2 ) * ( 3 + 2 )");
    }

    #[test]
    fn whitespace() {
        k9::snapshot!(test("  5 +   3  "), "5 + 3");
        k9::snapshot!(test("\t5\n*\r\n3"), "5 * 3");
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn whitespace_separates_literals() {
        k9::assert_equal!(
            tokenize("12 34"),
            vec![
                Token::NumericLiteral("12".to_string()),
                Token::NumericLiteral("34".to_string()),
            ]
        );
    }

    #[test]
    fn token_kinds() {
        k9::assert_equal!(
            tokenize("(2.5-x)"),
            vec![
                Token::OpenParen,
                Token::NumericLiteral("2.5".to_string()),
                Token::Operator(operators::lookup('-').unwrap()),
                Token::NumericLiteral("x".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn unrecognized_characters_are_absorbed_into_literals() {
        k9::snapshot!(test("1.2.3 + abc"), "1.2.3 + abc");
        k9::snapshot!(test("2^3"), "2^3");
        k9::snapshot!(test("4%+1"), "4% + 1");
    }
}
