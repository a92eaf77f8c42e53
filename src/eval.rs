use super::Error;
use shunt_syntax::token::Token;

fn parse_literal(literal: &str) -> Result<f64, Error> {
    literal
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(literal.to_string()))
}

/// Runs a postfix token sequence against an operand stack.
///
/// The operand on top of the stack is the right-hand side, so `7 2 -` is 5.
/// Division by zero is not an error; it produces whatever IEEE 754 says.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(op) => {
                let (b, a) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(Error::InsufficientOperands(op.symbol)),
                };
                stack.push((op.apply)(a, b));
            }
            Token::NumericLiteral(literal) => stack.push(parse_literal(literal)?),
            // to_postfix never lets these through
            Token::OpenParen | Token::CloseParen => return Err(Error::MalformedExpression),
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(Error::MalformedExpression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunt_syntax::operators;

    fn num(literal: &str) -> Token {
        Token::NumericLiteral(literal.to_string())
    }

    fn op(symbol: char) -> Token {
        Token::Operator(operators::lookup(symbol).unwrap())
    }

    #[test]
    fn top_of_stack_is_right_operand() {
        k9::assert_equal!(evaluate_postfix(&[num("7"), num("2"), op('-')]), Ok(5.0));
        k9::assert_equal!(evaluate_postfix(&[num("7"), num("2"), op('/')]), Ok(3.5));
    }

    #[test]
    fn chained_operators() {
        // 2 * (3 + 4 * 5) - 6
        let postfix = [
            num("2"),
            num("3"),
            num("4"),
            num("5"),
            op('*'),
            op('+'),
            op('*'),
            num("6"),
            op('-'),
        ];
        k9::assert_equal!(evaluate_postfix(&postfix), Ok(40.0));
    }

    #[test]
    fn single_literal() {
        k9::assert_equal!(evaluate_postfix(&[num("3.25")]), Ok(3.25));
    }

    #[test]
    fn insufficient_operands() {
        k9::assert_equal!(
            evaluate_postfix(&[op('+'), num("3")]),
            Err(Error::InsufficientOperands('+'))
        );
        k9::assert_equal!(
            evaluate_postfix(&[num("3"), op('*')]),
            Err(Error::InsufficientOperands('*'))
        );
    }

    #[test]
    fn invalid_number() {
        k9::assert_equal!(
            evaluate_postfix(&[num("1.2.3")]),
            Err(Error::InvalidNumber("1.2.3".to_string()))
        );
        k9::assert_equal!(
            evaluate_postfix(&[num("2"), num("abc"), op('+')]),
            Err(Error::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn malformed_expression() {
        k9::assert_equal!(evaluate_postfix(&[]), Err(Error::MalformedExpression));
        k9::assert_equal!(
            evaluate_postfix(&[num("1"), num("2")]),
            Err(Error::MalformedExpression)
        );
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let result = evaluate_postfix(&[num("1"), num("0"), op('/')]);
        assert!(matches!(result, Ok(x) if x.is_infinite() && x > 0.0));
        let result = evaluate_postfix(&[num("0"), num("0"), op('/')]);
        assert!(matches!(result, Ok(x) if x.is_nan()));
    }
}
