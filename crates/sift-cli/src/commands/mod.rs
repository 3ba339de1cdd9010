//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Statement analysis and report rendering
//! - `core` - Layout/header commands and shared utilities (load_layout)

pub mod analyze;
pub mod core;

// Re-export command functions for main.rs
pub use analyze::*;
pub use self::core::*;

use rust_decimal::Decimal;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount as rupees with thousands separators: ₹1,234.50
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, frac)
}
