/// Group the digits of a whole number with `separator` every three places
fn group_thousands(whole: u64, separator: char) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents (e.g., $1,234,568)
pub fn format_currency_short(value: f64) -> String {
    let grouped = group_thousands(value.abs().round() as u64, ',');
    if value >= 0.0 {
        format!("${}", grouped)
    } else {
        format!("-${}", grouped)
    }
}

/// Format a fraction as a percentage (0.8 -> "80.00%")
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a value in millions with dot grouping, as used on the peso axis (e.g., "1.235 M")
pub fn format_millions(value: f64) -> String {
    let millions = value / 1_000_000.0;
    let grouped = group_thousands(millions.abs().round() as u64, '.');
    if millions < 0.0 && millions.round() != 0.0 {
        format!("-{} M", grouped)
    } else {
        format!("{} M", grouped)
    }
}

/// Format a GDP figure already expressed in billions (e.g., "4,082B")
pub fn format_billions(billions: f64) -> String {
    format!("{}B", group_thousands(billions.abs().round() as u64, ','))
}

/// Format a growth multiple (e.g., "1.85x"), or "n/a" when unavailable
pub fn format_growth(growth: Option<f64>) -> String {
    match growth {
        Some(multiple) => format!("{:.2}x", multiple),
        None => "n/a".to_string(),
    }
}
