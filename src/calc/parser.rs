//! Grammar-driven evaluation of a whitelisted expression

use pest::error::{Error, InputLocation};
use pest::iterators::Pairs;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use pest_derive::Parser;

use crate::error::{AssistantError, AssistantResult};

#[derive(Parser)]
#[grammar = "calc/grammar.pest"]
struct ExpressionParser;

fn pratt() -> PrattParser<Rule> {
    PrattParser::new()
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::sub, Assoc::Left))
        .op(Op::infix(Rule::mul, Assoc::Left) | Op::infix(Rule::div, Assoc::Left))
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::pos))
}

/// Parse and evaluate `input`, which must already be whitelisted
pub(super) fn parse_and_evaluate(input: &str) -> AssistantResult<f64> {
    let mut pairs = ExpressionParser::parse(Rule::calculation, input).map_err(syntax_error)?;

    let expr = pairs
        .next()
        .ok_or_else(|| AssistantError::InvalidExpression("expression is empty".into()))?;

    eval(expr.into_inner(), &pratt())
}

fn eval(pairs: Pairs<'_, Rule>, pratt: &PrattParser<Rule>) -> AssistantResult<f64> {
    pratt
        .map_primary(|primary| match primary.as_rule() {
            Rule::number => primary.as_str().parse::<f64>().map_err(|_| {
                AssistantError::InvalidExpression(format!(
                    "'{}' is not a valid number",
                    primary.as_str()
                ))
            }),
            Rule::expr => eval(primary.into_inner(), pratt),
            rule => Err(unexpected(rule)),
        })
        .map_prefix(|op, operand| {
            let value = operand?;
            match op.as_rule() {
                Rule::neg => Ok(-value),
                Rule::pos => Ok(value),
                rule => Err(unexpected(rule)),
            }
        })
        .map_infix(|lhs, op, rhs| {
            let (lhs, rhs) = (lhs?, rhs?);
            match op.as_rule() {
                Rule::add => Ok(lhs + rhs),
                Rule::sub => Ok(lhs - rhs),
                Rule::mul => Ok(lhs * rhs),
                Rule::div if rhs == 0.0 => Err(AssistantError::DivisionByZero),
                Rule::div => Ok(lhs / rhs),
                rule => Err(unexpected(rule)),
            }
        })
        .parse(pairs)
}

fn unexpected(rule: Rule) -> AssistantError {
    AssistantError::InvalidExpression(format!("unexpected {:?}", rule))
}

fn syntax_error(err: Error<Rule>) -> AssistantError {
    let position = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };

    let err = err.renamed_rules(|rule| {
        match rule {
            Rule::number => "a number",
            Rule::add | Rule::sub | Rule::mul | Rule::div => "an operator",
            Rule::neg | Rule::pos => "a sign",
            Rule::EOI => "end of input",
            _ => "an operand",
        }
        .to_string()
    });

    AssistantError::InvalidExpression(format!(
        "{} at position {}",
        err.variant.message(),
        position + 1
    ))
}
