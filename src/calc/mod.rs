//! Safe arithmetic evaluator
//!
//! Input is first checked against a character whitelist, then parsed with a
//! closed grammar of decimal literals, `+ - * /`, unary signs and
//! parentheses. Nothing in the grammar names a variable or function, so no
//! input can reach anything but arithmetic.

mod parser;

use crate::error::{AssistantError, AssistantResult};

/// Characters an expression may contain
pub const ALLOWED_CHARS: &str = "0123456789+-*/(). ";

/// Deepest parenthesis nesting or sign chain accepted
pub const MAX_NESTING: usize = 256;

/// Evaluate an arithmetic expression
///
/// # Errors
///
/// `DivisionByZero` when a divisor evaluates to zero, `InvalidExpression`
/// for anything outside the grammar or a result that is not finite.
pub fn evaluate(expression: &str) -> AssistantResult<f64> {
    check_characters(expression)?;

    if expression.trim().is_empty() {
        return Err(AssistantError::InvalidExpression(
            "expression is empty".into(),
        ));
    }

    check_nesting(expression)?;

    let value = parser::parse_and_evaluate(expression)?;
    if !value.is_finite() {
        return Err(AssistantError::InvalidExpression(
            "result is too large to represent".into(),
        ));
    }

    Ok(value)
}

/// Render a result, dropping the fraction when it is zero
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn check_characters(expression: &str) -> AssistantResult<()> {
    match expression.chars().find(|c| !ALLOWED_CHARS.contains(*c)) {
        Some(c) => Err(AssistantError::InvalidExpression(format!(
            "character '{}' is not allowed; use digits, '.', spaces, + - * / and parentheses",
            c
        ))),
        None => Ok(()),
    }
}

fn check_nesting(expression: &str) -> AssistantResult<()> {
    let mut depth = 0usize;
    let mut signs = 0usize;

    for c in expression.chars().filter(|c| *c != ' ') {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c == '+' || c == '-' {
            signs += 1;
        } else {
            signs = 0;
        }

        if depth > MAX_NESTING || signs > MAX_NESTING {
            return Err(AssistantError::InvalidExpression(format!(
                "expression nests deeper than {} levels",
                MAX_NESTING
            )));
        }
    }

    Ok(())
}
