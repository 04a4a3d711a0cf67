//! Display formatting for terminal output
//!
//! Plain-text tables and detail views for each record kind.

pub mod contact;
pub mod finance;
pub mod note;
pub mod task;

pub use contact::{format_contact_details, format_contact_list};
pub use finance::{format_finance_details, format_finance_list, format_finance_report};
pub use note::{format_note_details, format_note_list};
pub use task::{format_task_details, format_task_list};

use crate::models::FieldRejection;

/// Shorten text to `max_len` characters, ending in "..." when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Width of the widest value, never narrower than the header
pub(crate) fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}

/// Signed amount with two decimals and an optional currency symbol
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency_symbol, -amount)
    } else {
        format!("{}{:.2}", currency_symbol, amount)
    }
}

/// One line per field that kept its old value or fell back to a default
pub fn format_rejections(heading: &str, rejections: &[FieldRejection]) -> String {
    let mut output = String::new();
    if rejections.is_empty() {
        return output;
    }

    output.push_str(heading);
    output.push('\n');
    for rejection in rejections {
        output.push_str(&format!("  - {}\n", rejection));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Купить молоко", 8), "Купит...");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0, ""), "100.00");
        assert_eq!(format_amount(-40.5, "$"), "-$40.50");
    }

    #[test]
    fn test_format_rejections() {
        assert_eq!(format_rejections("Kept:", &[]), "");

        let text = format_rejections(
            "Kept previous values:",
            &[FieldRejection::new("priority", "unknown priority 'Urgent'")],
        );
        assert_eq!(
            text,
            "Kept previous values:\n  - priority: unknown priority 'Urgent'\n"
        );
    }
}
