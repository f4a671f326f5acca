//! Boolean condition expressions for container guards.
//!
//! Containers gate execution on small comparison expressions evaluated
//! against already-substituted text, e.g. `1 = 1`, `${i} lt 5` (after
//! substitution: `3 lt 5`), or a bare `true`/`false` literal.
//!
//! # Grammar
//!
//! ```text
//! condition := 'true' | 'false' | operand op operand
//! op        := '=' | '==' | '!=' | '<' | '<=' | '>' | '>='
//!            | 'lt' | 'lt=' | 'gt' | 'gt='
//! ```
//!
//! Operands are compared numerically when both parse as numbers, and
//! lexically otherwise. Ordering operators require numeric operands;
//! applying them to text is an error rather than a silent lexical
//! comparison.

use crate::error::RigError;

/// A comparison operator inside a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "=" | "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" | "lt" => Some(Self::Lt),
            "<=" | "lt=" => Some(Self::Le),
            ">" | "gt" => Some(Self::Gt),
            ">=" | "gt=" => Some(Self::Ge),
            _ => None,
        }
    }

    const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }
}

/// Evaluate a condition string to a boolean.
///
/// The input must already have had variables substituted; this function
/// never consults a context.
pub fn evaluate(expression: &str) -> Result<bool, RigError> {
    let trimmed = expression.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Ok(false);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let &[lhs, op_token, rhs] = tokens.as_slice() else {
        return Err(invalid(
            expression,
            "expected '<lhs> <op> <rhs>' or a boolean literal",
        ));
    };

    let Some(op) = Op::parse(op_token) else {
        return Err(invalid(
            expression,
            format!("unknown operator '{op_token}'"),
        ));
    };

    let numbers = lhs.parse::<f64>().ok().zip(rhs.parse::<f64>().ok());

    match (op, numbers) {
        (Op::Eq, Some((l, r))) => Ok((l - r).abs() < f64::EPSILON),
        (Op::Ne, Some((l, r))) => Ok((l - r).abs() >= f64::EPSILON),
        (Op::Eq, None) => Ok(lhs == rhs),
        (Op::Ne, None) => Ok(lhs != rhs),
        (Op::Lt, Some((l, r))) => Ok(l < r),
        (Op::Le, Some((l, r))) => Ok(l <= r),
        (Op::Gt, Some((l, r))) => Ok(l > r),
        (Op::Ge, Some((l, r))) => Ok(l >= r),
        (_, None) => Err(invalid(
            expression,
            "ordering operators require numeric operands",
        )),
    }
}

fn invalid(expression: &str, message: impl Into<String>) -> RigError {
    RigError::Expression {
        expression: expression.into(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert!(evaluate("true").unwrap());
        assert!(evaluate(" TRUE ").unwrap());
        assert!(!evaluate("false").unwrap());
    }

    #[test]
    fn test_numeric_equality() {
        assert!(evaluate("1 = 1").unwrap());
        assert!(!evaluate("1 = 0").unwrap());
        assert!(evaluate("1.5 = 1.50").unwrap());
        assert!(evaluate("2 != 3").unwrap());
    }

    #[test]
    fn test_string_equality() {
        assert!(evaluate("abc = abc").unwrap());
        assert!(!evaluate("abc = abd").unwrap());
        assert!(evaluate("abc != abd").unwrap());
    }

    #[test]
    fn test_ordering() {
        assert!(evaluate("3 lt 5").unwrap());
        assert!(evaluate("5 lt= 5").unwrap());
        assert!(evaluate("9 gt 5").unwrap());
        assert!(evaluate("5 gt= 5").unwrap());
        assert!(evaluate("3 < 5").unwrap());
        assert!(!evaluate("5 >= 6").unwrap());
    }

    #[test]
    fn test_ordering_requires_numbers() {
        let err = evaluate("abc lt def").unwrap_err();
        assert!(matches!(err, RigError::Expression { .. }));
    }

    #[test]
    fn test_malformed() {
        assert!(evaluate("").is_err());
        assert!(evaluate("1 =").is_err());
        assert!(evaluate("1 ~ 2").is_err());
        assert!(evaluate("1 = 2 = 3").is_err());
    }
}
