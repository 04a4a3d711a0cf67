//! Calculator command

use crate::calc::{evaluate, format_result};
use crate::error::AssistantResult;

/// Evaluate the words of an expression joined by spaces
pub fn handle_calc_command(expression: &[String]) -> AssistantResult<()> {
    let value = evaluate(&expression.join(" "))?;
    println!("{}", format_result(value));
    Ok(())
}
