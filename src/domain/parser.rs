//! Expression engine for formula cells.
//!
//! Formulas are integer arithmetic over `+ - * /` with no parentheses and
//! no whitespace. Evaluation runs in two passes over a flat token stream:
//!
//! 1. **Tokenize**: split the expression on the operator characters,
//!    keeping each operator as its own token and each run of other
//!    characters as an operand token. A `+` or `-` where an operand must
//!    start (expression start, or directly after an operator) is the sign
//!    of the following operand, so `-7/2` and `3*-2` stay single operands.
//! 2. **Infix to postfix**: classic operator-priority conversion with an
//!    operator stack. An incoming operator first pops every stacked
//!    operator of greater or equal priority (equal priority popping gives
//!    left-associativity), then pushes itself; the stack drains to the
//!    output once the tokens are exhausted.
//! 3. **Evaluate postfix**: a value stack of `i64`. Operands push, each
//!    operator pops its right then left argument and pushes the result.
//!    Exactly one value must remain.
//!
//! Malformed input (a non-numeric operand, adjacent operators like `+*`,
//! a trailing operator) surfaces as a stack underflow or an unparseable
//! operand during the postfix pass and is reported as
//! [`CellError::Expression`], as are division by zero and overflow.

use super::errors::{CellError, EvalResult};

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Higher priority binds tighter; all four are left-associative.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Applies the operator with checked arithmetic. Division truncates
    /// toward zero; division by zero and overflow are expression errors.
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let result = match self {
            Operator::Plus => left.checked_add(right),
            Operator::Minus => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
        };

        result.ok_or_else(|| {
            CellError::Expression(format!(
                "cannot apply {} {} {}",
                left,
                self.symbol(),
                right
            ))
        })
    }
}

/// A token in an expression: an operand substring or an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Operand(String),
    Op(Operator),
}

/// Splits an expression into operand and operator tokens, left to right.
///
/// Never fails: junk characters stay inside operand tokens and are caught
/// when the postfix pass tries to parse them as integers.
pub fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut operand = String::new();

    for ch in expr.chars() {
        match Operator::from_char(ch) {
            Some(op) => {
                let operand_start = operand.is_empty()
                    && matches!(tokens.last(), None | Some(Token::Op(_)));

                if operand_start && matches!(op, Operator::Plus | Operator::Minus) {
                    // Sign of the operand that follows, not an operator.
                    operand.push(ch);
                } else {
                    if !operand.is_empty() {
                        tokens.push(Token::Operand(std::mem::take(&mut operand)));
                    }
                    tokens.push(Token::Op(op));
                }
            }
            None => operand.push(ch),
        }
    }

    if !operand.is_empty() {
        tokens.push(Token::Operand(operand));
    }

    tokens
}

/// Reorders an infix token stream into reverse-Polish (postfix) order.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Operator> = Vec::new();

    for token in tokens {
        match token {
            Token::Op(op) => {
                while let Some(&top) = stack.last() {
                    if top.priority() < op.priority() {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Op(top));
                }
                stack.push(op);
            }
            operand => output.push(operand),
        }
    }

    while let Some(op) = stack.pop() {
        output.push(Token::Op(op));
    }

    output
}

/// Evaluates a postfix token sequence on an integer stack.
pub fn eval_postfix(postfix: &[Token]) -> EvalResult<i64> {
    let mut stack: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand(text) => {
                let value = text
                    .parse::<i64>()
                    .map_err(|_| CellError::Expression(format!("invalid operand: {}", text)))?;
                stack.push(value);
            }
            Token::Op(op) => {
                let right = stack
                    .pop()
                    .ok_or_else(|| CellError::Expression(format!("{} is missing an operand", op.symbol())))?;
                let left = stack
                    .pop()
                    .ok_or_else(|| CellError::Expression(format!("{} is missing an operand", op.symbol())))?;
                stack.push(op.apply(left, right)?);
            }
        }
    }

    let result = stack
        .pop()
        .ok_or_else(|| CellError::Expression("empty expression".to_string()))?;

    if !stack.is_empty() {
        return Err(CellError::Expression(
            "expression left unconsumed operands".to_string(),
        ));
    }

    Ok(result)
}

/// Full pipeline: tokenize, convert to postfix, evaluate.
pub fn evaluate_expression(expr: &str) -> EvalResult<i64> {
    let postfix = to_postfix(tokenize(expr));
    eval_postfix(&postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operand(text: &str) -> Token {
        Token::Operand(text.to_string())
    }

    #[test]
    fn test_tokenize_interleaves_operands_and_operators() {
        assert_eq!(
            tokenize("2+3*4"),
            vec![
                operand("2"),
                Token::Op(Operator::Plus),
                operand("3"),
                Token::Op(Operator::Mul),
                operand("4"),
            ]
        );
    }

    #[test]
    fn test_tokenize_signed_operands() {
        // Leading sign belongs to the first operand.
        assert_eq!(
            tokenize("-7/2"),
            vec![operand("-7"), Token::Op(Operator::Div), operand("2")]
        );
        // A sign directly after an operator belongs to the next operand.
        assert_eq!(
            tokenize("3*-2"),
            vec![operand("3"), Token::Op(Operator::Mul), operand("-2")]
        );
        assert_eq!(
            tokenize("5--2"),
            vec![operand("5"), Token::Op(Operator::Minus), operand("-2")]
        );
    }

    #[test]
    fn test_tokenize_keeps_junk_in_operands() {
        assert_eq!(
            tokenize("ab+1"),
            vec![operand("ab"), Token::Op(Operator::Plus), operand("1")]
        );
    }

    #[test]
    fn test_postfix_priority_ordering() {
        // 2+3*4 -> 2 3 4 * +
        assert_eq!(
            to_postfix(tokenize("2+3*4")),
            vec![
                operand("2"),
                operand("3"),
                operand("4"),
                Token::Op(Operator::Mul),
                Token::Op(Operator::Plus),
            ]
        );
    }

    #[test]
    fn test_postfix_left_associativity() {
        // 10-2-3 -> 10 2 - 3 -
        assert_eq!(
            to_postfix(tokenize("10-2-3")),
            vec![
                operand("10"),
                operand("2"),
                Token::Op(Operator::Minus),
                operand("3"),
                Token::Op(Operator::Minus),
            ]
        );
    }

    #[test]
    fn test_evaluate_precedence_and_associativity() {
        assert_eq!(evaluate_expression("2+3*4"), Ok(14));
        assert_eq!(evaluate_expression("10-2-3"), Ok(5));
        assert_eq!(evaluate_expression("2*3+4*5"), Ok(26));
        assert_eq!(evaluate_expression("100/10/5"), Ok(2));
    }

    #[test]
    fn test_evaluate_single_operand() {
        assert_eq!(evaluate_expression("42"), Ok(42));
        assert_eq!(evaluate_expression("-42"), Ok(-42));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(evaluate_expression("-7/2"), Ok(-3));
        assert_eq!(evaluate_expression("7/-2"), Ok(-3));
        assert_eq!(evaluate_expression("-7/-2"), Ok(3));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert!(evaluate_expression("8/0").is_err());
        assert!(evaluate_expression("1+2/0").is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(evaluate_expression("9223372036854775807+1").is_err());
        assert!(evaluate_expression("-9223372036854775808/-1").is_err());
    }

    #[test]
    fn test_non_numeric_operand_is_an_error() {
        assert!(evaluate_expression("abc").is_err());
        assert!(evaluate_expression("1+x").is_err());
        assert!(evaluate_expression("12a+3").is_err());
    }

    #[test]
    fn test_malformed_operator_sequences_are_errors() {
        // '*' cannot start an operand, so these underflow the stack.
        assert!(evaluate_expression("+*2").is_err());
        assert!(evaluate_expression("1+*2").is_err());
        assert!(evaluate_expression("*2").is_err());
        // Trailing operator has no right operand.
        assert!(evaluate_expression("5+").is_err());
        // A bare sign is not an integer.
        assert!(evaluate_expression("1--").is_err());
    }

    #[test]
    fn test_empty_expression_is_an_error() {
        assert!(evaluate_expression("").is_err());
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for ch in ['+', '-', '*', '/'] {
            let op = Operator::from_char(ch).unwrap();
            assert_eq!(op.symbol(), ch);
        }
        assert_eq!(Operator::from_char('%'), None);
    }
}
