//! Display formatting for money values, fixed to the en-US conventions the
//! summary views use.

/// Formats a value as US dollars with grouped thousands and two decimals.
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(whole), fraction)
}

/// Rounded percent label, e.g. `13% saved`.
pub fn percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
